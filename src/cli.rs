use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "flick",
    about = "Ask a movie catalog questions in plain English",
    version
)]
pub struct Cli {
    /// Answer a single query and exit instead of starting the interactive loop
    #[arg(short, long)]
    pub query: Option<String>,

    /// JSON catalog file to use instead of the built-in database
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// List the supported question forms
    #[arg(short, long)]
    pub list_queries: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
