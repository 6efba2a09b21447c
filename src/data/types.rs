//! Post data types and publish-time derivations.
//!
//! These types are serialized to JSON for the local store file. Field names
//! follow the wire format (`camelCase`), which is also what older store
//! files on disk already use.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::search::Searchable;

/// Excerpt length in characters, before the ellipsis.
pub const EXCERPT_LEN: usize = 150;

/// Reading speed used for the `readTime` derivation.
const WORDS_PER_MINUTE: usize = 200;

/// Creation date display format (e.g. "Apr 20, 2025").
const DATE_FORMAT: &str = "%b %-d, %Y";

/// Errors rejected at publish time. The store is never touched when
/// validation fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PublishError {
    #[error("missing title: add a title to your post")]
    EmptyTitle,

    #[error("missing content: add some content to your post")]
    EmptyContent,
}

/// An author-created post.
///
/// `excerpt` and `readTime` are always derived from `content` at creation;
/// they are stored redundantly so list views never re-scan bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique within the merged corpus. Authored posts use the creation
    /// instant in Unix milliseconds, which cannot collide with the small
    /// literal ids of the seed corpus.
    pub id: String,

    pub title: String,

    /// First [`EXCERPT_LEN`] characters of the content, `...`-terminated
    /// when truncated.
    pub excerpt: String,

    /// Display name from the session that published the post.
    pub author: String,

    /// Human-readable creation date, fixed at creation.
    pub date: String,

    /// Derived "<n> min read" label.
    pub read_time: String,

    /// Optional cover image URL.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub cover_image: Option<String>,

    /// Ordered, trimmed, non-empty tag strings.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,

    /// Full raw body text.
    pub content: String,

    /// Per-view counter. Never persisted; always 0 when a post is loaded.
    #[serde(skip)]
    pub likes: u32,
}

impl Searchable for Post {
    fn title(&self) -> &str {
        &self.title
    }
    fn excerpt(&self) -> &str {
        &self.excerpt
    }
    fn tags(&self) -> Vec<&str> {
        self.tags.iter().map(String::as_str).collect()
    }
}

/// Raw publish input, before validation and derivation.
#[derive(Debug, Clone, Default)]
pub struct Draft {
    pub title: String,
    pub content: String,
    /// Cover image URL; blank input counts as absent.
    pub cover_image: Option<String>,
    /// Comma-separated tag list as typed by the author.
    pub tags: String,
}

impl Draft {
    /// Validate the draft and derive a [`Post`] from it.
    ///
    /// `created` fixes the id and the display date; passing it in keeps
    /// the derivations deterministic under test.
    pub fn publish(self, author: &str, created: DateTime<Utc>) -> Result<Post, PublishError> {
        if self.title.trim().is_empty() {
            return Err(PublishError::EmptyTitle);
        }
        if self.content.trim().is_empty() {
            return Err(PublishError::EmptyContent);
        }

        let excerpt = excerpt_of(&self.content);
        let read_time = read_time_of(&self.content);

        Ok(Post {
            id: created.timestamp_millis().to_string(),
            title: self.title,
            excerpt,
            author: author.to_owned(),
            date: created.format(DATE_FORMAT).to_string(),
            read_time,
            cover_image: self.cover_image.filter(|url| !url.trim().is_empty()),
            tags: parse_tags(&self.tags),
            content: self.content,
            likes: 0,
        })
    }
}

/// Derive a list-view excerpt from a post body.
///
/// The first [`EXCERPT_LEN`] characters, with a trailing `...` only when
/// the body was actually truncated. Counts characters, not bytes, so
/// multibyte content never splits mid-character.
pub fn excerpt_of(content: &str) -> String {
    match content.char_indices().nth(EXCERPT_LEN) {
        Some((boundary, _)) => format!("{}...", &content[..boundary]),
        None => content.to_owned(),
    }
}

/// Derive the "<n> min read" label from a post body.
///
/// Whole minutes, rounded up, never below 1.
pub fn read_time_of(content: &str) -> String {
    let words = content.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{minutes} min read")
}

/// Split a comma-separated tag string into trimmed, non-empty tags.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_owned)
        .collect()
}
