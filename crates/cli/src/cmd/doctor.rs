use easy_templates_core::config::loader::default_config_path;
use easy_templates_core::config::types::ResolvedConfig;

pub fn run(cfg: &ResolvedConfig) {
    println!("OK   etpl doctor");
    println!("version: {}", easy_templates_core::version());
    match &cfg.source {
        Some(p) => println!("config: {}", p.display()),
        None => println!("config: (defaults, {} not found)", default_config_path().display()),
    }
    println!("store: {}", cfg.store_path.display());
    println!("namespace: {}", cfg.namespace);
    println!("logging.level: {}", cfg.logging.level);
    if let Some(ref file) = cfg.logging.file {
        println!("logging.file: {}", file.display());
    }
}
