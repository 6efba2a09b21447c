//! Listing and searching the merged corpus.

use anyhow::Result;
use colored::Colorize;

use crate::{
    assemble::{ResolvedPost, merged_corpus},
    data::store::ContentStore,
    search::search,
};

/// Tags shown per card; the rest are elided.
const CARD_TAG_LIMIT: usize = 3;

/// `quill list`: the merged corpus, bundled posts first, then yours.
pub fn list(store: &ContentStore) -> Result<()> {
    let corpus = merged_corpus(store);
    let (bundled, authored): (Vec<_>, Vec<_>) =
        corpus.iter().partition(|post| post.is_seed());

    println!("{}", "Recent posts".bold());
    for post in &bundled {
        print_card(post);
    }

    if !authored.is_empty() {
        println!();
        println!("{}", "Your posts".bold());
        for post in &authored {
            print_card(post);
        }
    }
    Ok(())
}

/// `quill search [query]`.
///
/// Searches the merged corpus by default; `--mine` narrows it to the
/// store's own posts.
pub fn run_search(query: Option<&str>, mine: bool, store: &ContentStore) -> Result<()> {
    let Some(query) = query else {
        println!("{}", "Start searching".bold());
        println!("Search for posts by title, content, or tags: `quill search <query>`");
        return Ok(());
    };

    // The store applies the same engine to its own posts, so the `--mine`
    // corpus arrives pre-filtered; the merged corpus is filtered here.
    let corpus: Vec<ResolvedPost> = if mine {
        store
            .search_posts(query)
            .into_iter()
            .map(ResolvedPost::Authored)
            .collect()
    } else {
        merged_corpus(store)
    };
    let results: Vec<&ResolvedPost> = if mine {
        corpus.iter().collect()
    } else {
        search(query, &corpus)
    };

    let noun = if results.len() == 1 { "result" } else { "results" };
    println!(
        "{}",
        format!("{} {noun} found for \"{query}\"", results.len()).bold()
    );

    if results.is_empty() {
        println!("No results found. Try different keywords, or browse everything with `quill list`.");
        return Ok(());
    }

    for post in results {
        print_card(post);
    }
    Ok(())
}

/// One list-view card: title, byline, capped tags, excerpt.
fn print_card(post: &ResolvedPost) {
    println!();
    println!(
        "{}  {}",
        post.title().bold(),
        format!("#{}", post.id()).dimmed()
    );
    println!(
        "{}",
        format!("{} • {} • {}", post.author(), post.date(), post.read_time()).dimmed()
    );

    let tags = post.tag_list();
    if !tags.is_empty() {
        let shown: Vec<_> = tags
            .iter()
            .take(CARD_TAG_LIMIT)
            .map(|tag| format!("[{tag}]"))
            .collect();
        println!("{}", shown.join(" ").cyan());
    }

    println!("{}", post.excerpt());
}
