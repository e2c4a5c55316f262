//! Minimal result formatting. No terminal theming, no ANSI color detection —
//! just fixed-width columns, legible in any terminal or log pipe.

use lexica::config::HttpCollaboratorEnv;
use lexica::types::{IndexStats, SearchHit, SearchPage};

pub fn print_search_results(page: &SearchPage) {
    if page.hits.is_empty() {
        println!("(no results)");
        return;
    }

    println!("{:>4}  {:>10}  {}", "rank", "score", "doc id");
    for (rank, hit) in page.hits.iter().enumerate() {
        print_hit(rank + 1, hit);
    }

    match &page.next_cursor {
        Some(cursor) => println!("\nnext cursor: {cursor}"),
        None => println!("\n(end of results)"),
    }
}

fn print_hit(rank: usize, hit: &SearchHit) {
    println!("{:>4}  {:>10.4}  {}", rank, hit.score, hit.doc_id);
}

pub fn print_stats(stats: &IndexStats) {
    println!("doc_count: {}", stats.doc_count);
}

pub fn print_index_summary(doc_count: usize, term_count: usize) {
    println!("{{\"doc_count\": {doc_count}, \"term_count\": {term_count}}}");
}

/// Prints the HTTP collaborator's environment as this process currently
/// observes it. This binary never acts on these values itself.
pub fn print_collaborator_env(env: &HttpCollaboratorEnv) {
    println!("host: {}", env.host);
    println!("port: {}", env.port);
    println!("metrics_enabled: {}", env.metrics_enabled);
}
