//! Reading a single post in the terminal.
//!
//! Resolution and rendering stay in their own modules; this one only turns
//! their plain data into ANSI lines.

use anyhow::Result;
use colored::Colorize;

use crate::{
    assemble::{ResolvedPost, resolve},
    data::store::ContentStore,
    render::{Block, render},
};

/// `quill show <id>`.
///
/// An unknown id is an outcome, not an error: the not-found page is
/// printed and the command exits cleanly.
pub fn show(id: &str, store: &ContentStore) -> Result<()> {
    let Some(post) = resolve(id, store) else {
        println!("{}", "Blog post not found".bold());
        println!("The blog post you're looking for doesn't exist or has been removed.");
        println!("Browse available posts with `quill list`.");
        return Ok(());
    };

    print!("{}", format_post(&post));
    Ok(())
}

/// Render a resolved post to a terminal-ready string.
fn format_post(post: &ResolvedPost) -> String {
    let mut out = String::new();

    let tags = post.tag_list();
    if !tags.is_empty() {
        let line: Vec<_> = tags.iter().map(|tag| format!("[{tag}]")).collect();
        out.push_str(&format!("{}\n", line.join(" ").cyan()));
    }

    out.push_str(&format!("{}\n", post.title().bold().underline()));
    out.push_str(&format!(
        "{}\n",
        format!("{} • {} • {}", post.author(), post.date(), post.read_time()).dimmed()
    ));
    if let Some(url) = post.cover_image() {
        out.push_str(&format!("{}\n", format!("cover: {url}").dimmed()));
    }
    out.push('\n');

    out.push_str(&format_blocks(&render(post.body())));
    out
}

/// Lay blocks out as terminal lines.
///
/// Ordered items are re-numbered per run here; the blocks themselves carry
/// no numbering.
fn format_blocks(blocks: &[Block]) -> String {
    let mut out = String::new();
    let mut ordinal = 0usize;

    for block in blocks {
        if !matches!(block, Block::OrderedItem(_)) {
            ordinal = 0;
        }

        match block {
            Block::Paragraph(text) => out.push_str(&format!("{text}\n")),
            Block::Heading { level: 2, text } => {
                out.push_str(&format!("{}\n", text.as_str().bold().bright_white()));
            }
            Block::Heading { text, .. } => out.push_str(&format!("{}\n", text.as_str().bold())),
            Block::OrderedItem(text) => {
                ordinal += 1;
                out.push_str(&format!("  {ordinal}. {text}\n"));
            }
            Block::UnorderedItem(text) => out.push_str(&format!("  • {text}\n")),
            Block::LineBreak => out.push('\n'),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_items_are_renumbered_per_run() {
        let blocks = render("1. one\n2. two\n\n1. restart");
        let out = format_blocks(&blocks);
        assert!(out.contains("  1. one"));
        assert!(out.contains("  2. two"));
        // The second run starts over at 1.
        assert!(out.contains("  1. restart"));
        assert!(!out.contains("  3."));
    }

    #[test]
    fn test_unordered_items_get_bullets() {
        let out = format_blocks(&render("- a\n* b"));
        assert!(out.contains("  • a"));
        assert!(out.contains("  • b"));
    }

    #[test]
    fn test_line_breaks_become_blank_lines() {
        let out = format_blocks(&render("a\n\nb"));
        assert!(out.contains("a\n\nb"));
    }
}
