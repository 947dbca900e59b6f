mod console;
mod json;

pub use console::generate as generate_console;
pub use json::generate as generate_json;
