// Command-line interface

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "normalizer")]
#[command(about = "Normalize recipe documents and search queries into tokens", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Normalize a JSON file of recipes
    Process {
        /// Input JSON array of recipes
        #[arg(short, long, env = "INPUT_PATH")]
        input: Option<PathBuf>,

        /// Output JSON file
        #[arg(short, long, env = "OUTPUT_PATH")]
        output: Option<PathBuf>,

        /// Stopword file, one word per line
        #[arg(short, long, env = "STOPWORDS_PATH")]
        stopwords: Option<PathBuf>,

        /// Stemmer language
        #[arg(long)]
        language: Option<String>,

        /// YAML file overriding the document pipeline rules
        #[arg(long)]
        rules: Option<PathBuf>,
    },

    /// Normalize a search query and print it as JSON
    Query {
        /// Raw query text
        query: String,

        /// Stopword file, whitespace separated
        #[arg(short, long)]
        stopwords: Option<PathBuf>,

        /// Keep stopwords
        #[arg(long)]
        no_stopwords: bool,

        /// Skip stemming
        #[arg(long)]
        no_stemming: bool,

        /// Stemmer language
        #[arg(long)]
        language: Option<String>,

        /// YAML file overriding the query pipeline rules
        #[arg(long)]
        rules: Option<PathBuf>,
    },
}
