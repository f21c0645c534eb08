use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::document::DocId;

#[derive(Parser)]
#[command(name = "sonnet-search")]
#[command(about = "Find the sonnets containing all of the given words", long_about = None)]
pub struct Cli {
    /// Settings file (defaults to ./sonnet-search.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Corpus JSON file, overriding the settings
    #[arg(long, global = true)]
    pub corpus: Option<PathBuf>,

    /// Heading label before each document number, overriding the settings
    #[arg(long, global = true)]
    pub label: Option<String>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the documents containing every word
    Search {
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Read queries from stdin until `exit`
    Interactive,
    /// Print one document
    Show { id: DocId },
    /// Print the stems a query is reduced to
    Stems {
        #[arg(num_args = 0..)]
        words: Vec<String>,
    },
    /// Print corpus and index sizes
    Stats,
}
