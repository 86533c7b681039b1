use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quizdeck")]
#[command(about = "Command-line record manager for students, quiz questions and notes", long_about = None)]
pub struct Cli {
    /// Path to the JSON data file (defaults to the user data directory)
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Run a single command line and exit instead of starting the prompt
    #[arg(short, long)]
    pub command: Option<String>,
}
