//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// Creates components out of thin air
#[derive(Parser, Debug)]
#[command(name = "create-component")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name of the component
    #[arg(short, long)]
    pub name: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Start root resolution here instead of the current directory
    #[arg(short = 'C', long, value_hint = ValueHint::DirPath)]
    pub project_dir: Option<PathBuf>,
}
