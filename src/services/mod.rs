pub mod demo_page;
pub mod generator;
pub mod loader;
pub mod module_assembler;
pub mod renderer;
pub mod sanitizer;
pub mod submodule;
pub mod svg_parser;
