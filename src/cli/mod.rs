//! Command-line surface over [`lexica::engine::SearchEngine`].
//!
//! `lexica` ships no HTTP server — the endpoints, request validation, and
//! RFC 7807 error envelopes that would front this library in production are
//! a separate collaborator's job. This binary exists to exercise the core
//! end to end: load documents, build an engine, run queries, print results.

pub mod display;
pub mod load;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "lexica",
    about = "In-memory full-text search engine core",
    long_about = "In-memory full-text search engine core.\n\n\
        This binary has no HTTP surface of its own; run `lexica env` to see \
        the variables the HTTP collaborator that would sit in front of this \
        library reads (PORT, HOST, METRICS_ENABLED) as this process \
        currently observes them.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Index a directory or JSON file of documents and report summary stats.
    Index {
        /// Directory of `{id, text, metadata?}` JSON files, or a single
        /// JSON array of the same shape.
        #[arg(long)]
        input: PathBuf,
        /// Optional path to write the JSON summary to, instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Build the engine from `input` and run a single query against it.
    Search {
        /// Same input shape as `index`.
        input: PathBuf,
        /// Raw query text.
        query: String,
        #[arg(long, default_value_t = 10)]
        limit: usize,
        /// "fulltext" disables prefix completion; "prefix" enables it.
        #[arg(long, default_value = "prefix")]
        mode: String,
        #[arg(long)]
        cursor: Option<String>,
        #[arg(long)]
        candidate_limit: Option<usize>,
    },
    /// Build the engine from `input` and print `IndexStats`.
    Stats {
        input: PathBuf,
    },
    /// Print the HTTP collaborator's environment variables as this process
    /// currently observes them. This binary never reads them itself.
    Env,
}
