mod cmd;
mod logging;
mod prompt;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "etpl", version, about = "Fill and render {{name|type}} templates")]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/easy-templates/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Variable store file, overriding the config
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the resolved configuration
    Doctor,

    /// Validate a template file
    Check(TemplateArgs),

    /// List the variables declared by a template
    Vars(VarsArgs),

    /// Fill in variables and print the rendered template
    Render(RenderArgs),
}

#[derive(Debug, Args)]
pub struct TemplateArgs {
    /// Template file to read
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct VarsArgs {
    /// Template file to read
    pub file: PathBuf,

    /// Print as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Template file to read
    pub file: PathBuf,

    /// Set a variable value (repeatable)
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = prompt::parse_var_arg)]
    pub vars: Vec<(String, String)>,

    /// Never prompt; missing values stay empty
    #[arg(long)]
    pub batch: bool,

    /// Print output, variables and error as JSON
    #[arg(long)]
    pub json: bool,
}

fn main() {
    let cli = Cli::parse();

    let cfg = cmd::load_config(cli.config.as_deref(), cli.store.as_deref());
    logging::init(&cfg);

    match cli.command {
        Commands::Doctor => cmd::doctor::run(&cfg),
        Commands::Check(args) => cmd::check::run(&cfg, &args.file),
        Commands::Vars(args) => cmd::vars::run(&cfg, &args.file, args.json),
        Commands::Render(args) => cmd::render::run(&cfg, &args),
    }

    logging::flush();
}
