pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mimetable",
    version,
    about = "Look up MIME types, extensions, charsets and Content-Type headers"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Load the MIME database from a JSON file instead of the bundled one
    #[arg(long, global = true, env = "MIMETABLE_DB")]
    pub db: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Suppress all output; only the exit status reports the result
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// MIME type for file paths or extensions
    Lookup {
        /// File paths, names, or bare extensions
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Every MIME type that shares the extension of each path
    All {
        /// File paths, names, or bare extensions
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Preferred extension for MIME types
    Extension {
        /// MIME types, parameters allowed
        #[arg(required = true)]
        types: Vec<String>,
    },
    /// Default charset for MIME types
    Charset {
        /// MIME types, parameters allowed
        #[arg(required = true)]
        types: Vec<String>,
    },
    /// Full Content-Type header value for MIME types or extensions
    ContentType {
        /// MIME types or extensions
        #[arg(required = true)]
        inputs: Vec<String>,
    },
    /// Summary counts for the loaded database
    Stats,
    /// Answer JSON queries read line by line from stdin
    ///
    /// Each line is an object like {"query": "mime", "input": "page.html"};
    /// each answer is written as one JSON value per line.
    Batch,
}
