//! Compiled-in seed posts.
//!
//! The read-only half of the merged corpus: always present, never
//! persisted, never created through the publish path. Bodies are embedded
//! at compile time from `src/embed/posts/`.

use crate::search::Searchable;

/// An immutable, bundled post.
///
/// Same display fields as an authored [`Post`](super::types::Post), but the
/// long-form body lives in `full_content`. Callers never read either body
/// field directly; resolution wraps both sources behind
/// [`ResolvedPost::body`](crate::assemble::ResolvedPost::body).
#[derive(Debug)]
pub struct SeedPost {
    pub id: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub author: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub cover_image: Option<&'static str>,
    pub tags: &'static [&'static str],
    /// Long-form body.
    pub full_content: &'static str,
}

impl Searchable for SeedPost {
    fn title(&self) -> &str {
        self.title
    }
    fn excerpt(&self) -> &str {
        self.excerpt
    }
    fn tags(&self) -> Vec<&str> {
        self.tags.to_vec()
    }
}

/// The seed corpus, in its fixed display order.
pub const SEED_POSTS: &[SeedPost] = &[
    SeedPost {
        id: "1",
        title: "The Art of Creative Writing: Finding Your Unique Voice",
        excerpt: "Discover how to develop your unique writing style and create content that resonates with your audience.",
        author: "Jane Austen",
        date: "Apr 20, 2025",
        read_time: "5 min read",
        cover_image: Some("https://images.unsplash.com/photo-1455390582262-044cdead277a?auto=format&fit=crop&w=1000&q=80"),
        tags: &["Writing", "Creativity", "Self-Improvement"],
        full_content: include_str!("../embed/posts/creative-writing-voice.md"),
    },
    SeedPost {
        id: "2",
        title: "10 Essential Tips for Blog Writing Success",
        excerpt: "Learn the fundamental practices that can elevate your blog writing from amateur to professional.",
        author: "Ernest Hemingway",
        date: "Apr 18, 2025",
        read_time: "4 min read",
        cover_image: Some("https://images.unsplash.com/photo-1499750310107-5fef28a66643?auto=format&fit=crop&w=1000&q=80"),
        tags: &["Blogging", "Tips", "Writing"],
        full_content: include_str!("../embed/posts/blog-writing-tips.md"),
    },
    SeedPost {
        id: "3",
        title: "Writing for Digital Platforms: What You Need to Know",
        excerpt: "The digital landscape has transformed how we create and consume written content. Here's what writers should focus on.",
        author: "Virginia Woolf",
        date: "Apr 15, 2025",
        read_time: "6 min read",
        cover_image: Some("https://images.unsplash.com/photo-1486312338219-ce68d2c6f44d?auto=format&fit=crop&w=1000&q=80"),
        tags: &["Digital", "Content Strategy", "SEO"],
        full_content: include_str!("../embed/posts/digital-platforms.md"),
    },
    SeedPost {
        id: "4",
        title: "The Psychology of Storytelling in Modern Media",
        excerpt: "Understanding how narratives work can help you create more engaging and impactful content.",
        author: "George Orwell",
        date: "Apr 12, 2025",
        read_time: "8 min read",
        cover_image: Some("https://images.unsplash.com/photo-1516414447565-b14be0adf13e?auto=format&fit=crop&w=1000&q=80"),
        tags: &["Psychology", "Storytelling", "Writing"],
        full_content: include_str!("../embed/posts/storytelling-psychology.md"),
    },
];

/// Look up a seed post by exact id.
pub fn find_seed(id: &str) -> Option<&'static SeedPost> {
    SEED_POSTS.iter().find(|post| post.id == id)
}
