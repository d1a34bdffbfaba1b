use easy_templates_core::config::types::ResolvedConfig;
use easy_templates_core::template::TemplateEngine;
use tracing::debug;

use super::{fail, open_store, output, read_template};
use crate::prompt::{fill_missing, PromptOptions};
use crate::RenderArgs;

pub fn run(cfg: &ResolvedConfig, args: &RenderArgs) {
    let template = read_template("render", &args.file);
    let store = open_store("render", cfg);
    let mut engine = TemplateEngine::new(store, template).unwrap_or_else(|e| fail("render", e));

    if let Some(err) = engine.error() {
        if args.json {
            output::print_json(&output::RenderOutput {
                output: engine.output(),
                variables: engine.variables(),
                error: Some(err.report()),
            });
            crate::logging::flush();
            std::process::exit(1);
        }
        fail("render", output::format_template_error(&args.file, err));
    }

    for (name, value) in &args.vars {
        match engine.set_value(name, value.as_str()) {
            Ok(true) => debug!("Set {name} from --var"),
            Ok(false) => eprintln!("warning: template has no variable '{name}'"),
            Err(e) => fail("render", e),
        }
    }

    let options = PromptOptions { batch_mode: args.batch };
    match fill_missing(&mut engine, &options) {
        Ok(prompted) => debug!("Prompted for: {:?}", prompted),
        Err(e) => fail("render", e),
    }

    if args.json {
        output::print_json(&output::RenderOutput {
            output: engine.output(),
            variables: engine.variables(),
            error: None,
        });
    } else {
        print!("{}", engine.output());
    }
}
