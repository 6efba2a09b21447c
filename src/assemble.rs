//! Post assembly: id resolution and the merged corpus.
//!
//! The reading path never talks to one corpus half directly. Resolution
//! checks the seed corpus first, then the content store, and hands back a
//! [`ResolvedPost`] that normalizes the two sources. Because the store is
//! read at call time, a post published earlier in the same process resolves
//! without any reload.

use crate::{
    data::{
        seed::{SEED_POSTS, SeedPost, find_seed},
        store::ContentStore,
        types::Post,
    },
    search::Searchable,
};

/// A post resolved from either half of the merged corpus.
///
/// Each source keeps its long-form body in its own field (`fullContent`
/// for seed posts, `content` for authored ones); [`ResolvedPost::body`]
/// is the only way callers read it, so no caller ever picks a field name.
#[derive(Debug)]
pub enum ResolvedPost {
    Seed(&'static SeedPost),
    Authored(Post),
}

impl ResolvedPost {
    pub fn id(&self) -> &str {
        match self {
            Self::Seed(post) => post.id,
            Self::Authored(post) => &post.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Seed(post) => post.title,
            Self::Authored(post) => &post.title,
        }
    }

    pub fn excerpt(&self) -> &str {
        match self {
            Self::Seed(post) => post.excerpt,
            Self::Authored(post) => &post.excerpt,
        }
    }

    pub fn author(&self) -> &str {
        match self {
            Self::Seed(post) => post.author,
            Self::Authored(post) => &post.author,
        }
    }

    pub fn date(&self) -> &str {
        match self {
            Self::Seed(post) => post.date,
            Self::Authored(post) => &post.date,
        }
    }

    pub fn read_time(&self) -> &str {
        match self {
            Self::Seed(post) => post.read_time,
            Self::Authored(post) => &post.read_time,
        }
    }

    pub fn cover_image(&self) -> Option<&str> {
        match self {
            Self::Seed(post) => post.cover_image,
            Self::Authored(post) => post.cover_image.as_deref(),
        }
    }

    pub fn tag_list(&self) -> Vec<&str> {
        match self {
            Self::Seed(post) => post.tags.to_vec(),
            Self::Authored(post) => post.tags.iter().map(String::as_str).collect(),
        }
    }

    /// The long-form body of whichever source this post came from.
    pub fn body(&self) -> &str {
        match self {
            Self::Seed(post) => post.full_content,
            Self::Authored(post) => &post.content,
        }
    }

    pub const fn is_seed(&self) -> bool {
        matches!(self, Self::Seed(_))
    }
}

impl Searchable for ResolvedPost {
    fn title(&self) -> &str {
        self.title()
    }
    fn excerpt(&self) -> &str {
        self.excerpt()
    }
    fn tags(&self) -> Vec<&str> {
        self.tag_list()
    }
}

/// Resolve a post id against the merged corpus.
///
/// Seed corpus first, then the store's current sequence, exact id equality
/// in both. `None` means the id exists nowhere; callers branch, nothing
/// is thrown.
pub fn resolve(id: &str, store: &ContentStore) -> Option<ResolvedPost> {
    if let Some(seed) = find_seed(id) {
        return Some(ResolvedPost::Seed(seed));
    }

    store
        .snapshot()
        .into_iter()
        .find(|post| post.id == id)
        .map(ResolvedPost::Authored)
}

/// Build the merged corpus: every seed post in its fixed order, then the
/// authored posts in insertion order.
///
/// An authored post whose id collides with a seed id is dropped; the seed
/// corpus wins, matching what resolution would return for that id.
pub fn merged_corpus(store: &ContentStore) -> Vec<ResolvedPost> {
    let mut corpus: Vec<ResolvedPost> = SEED_POSTS.iter().map(ResolvedPost::Seed).collect();

    for post in store.snapshot() {
        if find_seed(&post.id).is_none() {
            corpus.push(ResolvedPost::Authored(post));
        }
    }

    corpus
}
