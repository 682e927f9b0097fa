use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "xbrlld",
    about = "Convert XBRL taxonomies and instance documents to RDF",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress warnings and logs
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert an XBRL document to RDF
    Convert {
        #[command(subcommand)]
        target: ConvertTarget,
    },
}

#[derive(Subcommand)]
pub enum ConvertTarget {
    /// Convert a taxonomy schema or linkbase
    Taxonomy {
        /// Taxonomy URL or path
        url: String,

        /// Output file
        #[arg(long, short = 'o', default_value = "taxonomy.trig")]
        output: PathBuf,

        /// Also write a JSON-LD context to this file
        #[arg(long)]
        context: Option<PathBuf>,

        /// Output format: trig, nquads (default: from config, then output extension)
        #[arg(long)]
        format: Option<String>,
    },

    /// Convert an instance document's facts
    Instance {
        /// Instance document path or URL
        file: String,

        /// Also convert every taxonomy schema the instance references
        #[arg(long, short = 't')]
        with_taxonomy: bool,

        /// Output file
        #[arg(long, short = 'o', default_value = "facts.trig")]
        output: PathBuf,

        /// Also write a JSON-LD context to this file
        #[arg(long)]
        context: Option<PathBuf>,

        /// Output format: trig, nquads (default: from config, then output extension)
        #[arg(long)]
        format: Option<String>,
    },
}
