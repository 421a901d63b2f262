mod config;
mod element;
