use circuit_svg::render::{convert_to_3d_svg, convert_to_pcb_svg, convert_to_schematic_svg};
use circuit_svg::{
    CircuitJson, LoadOptions, PcbSvgOptions, SvgRenderOptions, TopdownSvgOptions,
};
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};

fn fixtures() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "schematic_basic",
            include_str!("../../../fixtures/circuits/schematic_basic.json"),
        ),
        (
            "board_basic",
            include_str!("../../../fixtures/circuits/board_basic.json"),
        ),
    ]
}

fn bench_load_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_only");
    for (name, input) in fixtures() {
        group.bench_function(name, |b| {
            b.iter(|| {
                let _ = CircuitJson::from_json_str(input, LoadOptions::default()).unwrap();
            });
        });
    }
    group.finish();
}

fn bench_render_views(c: &mut Criterion) {
    let schematic = SvgRenderOptions::default();
    let pcb = PcbSvgOptions::default();
    let topdown = TopdownSvgOptions::default();

    let mut group = c.benchmark_group("render_views");
    for (name, input) in fixtures() {
        let circuit = CircuitJson::from_json_str(input, LoadOptions::default()).unwrap();
        group.bench_function(format!("{name}/schematic"), |b| {
            b.iter(|| convert_to_schematic_svg(circuit.elements(), &schematic).unwrap());
        });
        group.bench_function(format!("{name}/pcb"), |b| {
            b.iter(|| convert_to_pcb_svg(circuit.elements(), &pcb).unwrap());
        });
        group.bench_function(format!("{name}/topdown"), |b| {
            b.iter(|| convert_to_3d_svg(circuit.elements(), &topdown).unwrap());
        });
    }
    group.finish();
}

fn bench_end_to_end(c: &mut Criterion) {
    let options = SvgRenderOptions::default();

    let mut group = c.benchmark_group("json_to_schematic_svg");
    for (name, input) in fixtures() {
        group.bench_function(name, |b| {
            b.iter_batched(
                || input,
                |text| {
                    let _svg =
                        circuit_svg::convert_circuit_json_to_schematic_svg(text, &options).unwrap();
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_load_only,
    bench_render_views,
    bench_end_to_end
);
criterion_main!(benches);
