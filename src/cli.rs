//! CLI argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Find natural-language text in script and markup sources
#[derive(Parser, Debug)]
#[command(name = "textsift")]
#[command(about = "Extracts human-readable text from .js/.ts/.jsx/.tsx/.vue/.html sources")]
#[command(version)]
pub struct Cli {
    /// File or directory to scan
    pub path: PathBuf,

    /// Write the full JSON report to FILE
    #[arg(long, value_name = "FILE")]
    pub output_json: Option<PathBuf>,

    /// Write the plain-text listing to FILE
    #[arg(long, value_name = "FILE")]
    pub output_text: Option<PathBuf>,

    /// Number of sample texts shown in the console summary
    #[arg(long, default_value_t = 10, value_name = "N")]
    pub samples: usize,

    /// Show debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Default tracing directive for this invocation; `RUST_LOG` is layered on top
    pub fn log_directive(&self) -> &'static str {
        if self.verbose {
            "textsift=debug"
        } else {
            "textsift=warn"
        }
    }
}
