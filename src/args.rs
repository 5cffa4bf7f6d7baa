use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;

/// Render a form definition through the polymorphic input component
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// INI form definition to render, one section per field. Without it a
    /// built-in sample form is shown
    #[arg(long)]
    pub form: Option<PathBuf>,

    /// Render every field disabled
    #[arg(long)]
    pub disabled: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, short)]
    pub verbose: bool,
}

static ARGS: OnceLock<Args> = OnceLock::new();

pub fn get_args() -> &'static Args {
    ARGS.get_or_init(Args::parse)
}
