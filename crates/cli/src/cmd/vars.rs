use easy_templates_core::config::types::ResolvedConfig;
use std::path::Path;

use super::{fail, inspect, output};

pub fn run(cfg: &ResolvedConfig, file: &Path, json: bool) {
    let engine = inspect("vars", cfg, file);

    if let Some(err) = engine.error() {
        fail("vars", output::format_template_error(file, err));
    }

    if json {
        output::print_json(engine.variables());
    } else {
        output::print_variables_table(engine.variables());
    }
}
