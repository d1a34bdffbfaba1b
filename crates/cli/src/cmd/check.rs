use easy_templates_core::config::types::ResolvedConfig;
use std::path::Path;

use super::{inspect, output};
use crate::logging;

pub fn run(cfg: &ResolvedConfig, file: &Path) {
    let engine = inspect("check", cfg, file);

    if let Some(err) = engine.error() {
        println!("FAIL etpl check");
        output::print_template_error(file, err);
        logging::flush();
        std::process::exit(1);
    }

    let count = engine.variables().len();
    println!("OK   etpl check");
    println!("{}: {count} variable{}", file.display(), if count == 1 { "" } else { "s" });
}
