mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{display, load, Cli, Command};
use lexica::config::HttpCollaboratorEnv;
use lexica::{SearchEngine, SearchOptions};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Index { input, output } => run_index(&input, output.as_deref()),
        Command::Search {
            input,
            query,
            limit,
            mode,
            cursor,
            candidate_limit,
        } => run_search(&input, &query, limit, &mode, cursor, candidate_limit),
        Command::Stats { input } => run_stats(&input),
        Command::Env => run_env(),
    }
}

fn build_engine(input: &std::path::Path) -> anyhow::Result<SearchEngine> {
    let (documents, failures) = load::load_documents(input)
        .with_context(|| format!("failed to load documents from {}", input.display()))?;

    for failure in &failures {
        tracing::warn!(
            index = failure.index,
            id = %failure.id,
            message = %failure.message,
            "skipped invalid document"
        );
    }

    let mut engine = SearchEngine::new();
    engine.upsert_documents(&documents);
    Ok(engine)
}

fn run_index(input: &std::path::Path, output: Option<&std::path::Path>) -> anyhow::Result<()> {
    let engine = build_engine(input)?;
    let stats = engine.stats();
    let summary = serde_json::json!({
        "doc_count": stats.doc_count,
        "term_count": engine.term_count(),
    });

    match output {
        Some(path) => {
            std::fs::write(path, serde_json::to_string_pretty(&summary)?)
                .with_context(|| format!("failed to write summary to {}", path.display()))?;
        }
        None => display::print_index_summary(stats.doc_count, engine.term_count()),
    }
    Ok(())
}

fn run_search(
    input: &std::path::Path,
    query: &str,
    limit: usize,
    mode: &str,
    cursor: Option<String>,
    candidate_limit: Option<usize>,
) -> anyhow::Result<()> {
    let engine = build_engine(input)?;
    let enable_prefix = match mode {
        "prefix" => true,
        "fulltext" => false,
        other => anyhow::bail!("unknown mode {other:?}, expected \"fulltext\" or \"prefix\""),
    };

    let options = SearchOptions {
        limit,
        cursor,
        enable_prefix,
        prefix_limit: 5,
        candidate_limit,
    };
    let page = engine.search(query, &options);
    display::print_search_results(&page);
    Ok(())
}

fn run_stats(input: &std::path::Path) -> anyhow::Result<()> {
    let engine = build_engine(input)?;
    display::print_stats(&engine.stats());
    Ok(())
}

fn run_env() -> anyhow::Result<()> {
    display::print_collaborator_env(&HttpCollaboratorEnv::from_env());
    Ok(())
}
