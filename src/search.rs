//! Text search over post corpora.
//!
//! A single case-insensitive substring rule shared by every listing that
//! filters posts: the store's own search and the merged-corpus search of
//! the `search` command. No tokenization, no stemming, no ranking; just a
//! stable filter that keeps the corpus order.

/// Fields a record must expose to be searchable.
///
/// Implemented by authored posts, seed posts and resolved posts so one
/// engine serves both halves of the corpus.
pub trait Searchable {
    fn title(&self) -> &str;
    fn excerpt(&self) -> &str;
    fn tags(&self) -> Vec<&str>;
}

/// Filter `corpus` down to records matching `query`.
///
/// A record matches when the lower-cased query is a substring of its
/// lower-cased title, excerpt, or any tag. The empty query matches
/// everything. The query is compared as one unit and is *not* trimmed:
/// a whitespace-only query only matches records containing that literal
/// whitespace.
pub fn search<'a, T: Searchable>(query: &str, corpus: &'a [T]) -> Vec<&'a T> {
    if query.is_empty() {
        return corpus.iter().collect();
    }

    let needle = query.to_lowercase();
    corpus
        .iter()
        .filter(|record| matches_record(&needle, *record))
        .collect()
}

fn matches_record<T: Searchable>(needle: &str, record: &T) -> bool {
    record.title().to_lowercase().contains(needle)
        || record.excerpt().to_lowercase().contains(needle)
        || record
            .tags()
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}
