//! Markdown-like text renderer.
//!
//! Turns a raw post body into an ordered sequence of [`Block`]s. Lines are
//! classified independently by their prefix; there is no cross-line state,
//! no nesting and no inline emphasis parsing. Blocks carry no styling,
//! since presentation is entirely the consumer's business (see the `read`
//! module for the terminal renderer).

/// Ordered-list markers recognized at the start of a line.
///
/// Deliberately restricted to the literal digits 1-4 rather than a general
/// numeric rule. Longer lists fall through to paragraphs.
const ORDERED_MARKERS: [&str; 4] = ["1. ", "2. ", "3. ", "4. "];

/// One unit of renderer output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Plain text line.
    Paragraph(String),

    /// Section heading. Only levels 2 and 3 are produced.
    Heading { level: u8, text: String },

    /// Item of a numbered list. The marker is stripped; numbering is
    /// reconstructed by the presentation layer.
    OrderedItem(String),

    /// Item of a bulleted list (`- ` or `* `).
    UnorderedItem(String),

    /// Empty or whitespace-only line.
    LineBreak,
}

/// Render raw text into blocks.
///
/// Pure and total: every input produces a block per line, unrecognized
/// lines fall through to [`Block::Paragraph`].
pub fn render(text: &str) -> Vec<Block> {
    text.split('\n').map(classify_line).collect()
}

/// Classify a single line. Check order matters: blank lines first, then
/// headings and list markers, paragraph as the fallback.
fn classify_line(line: &str) -> Block {
    if line.trim().is_empty() {
        return Block::LineBreak;
    }

    if let Some(text) = line.strip_prefix("## ") {
        return Block::Heading {
            level: 2,
            text: text.to_owned(),
        };
    }
    if let Some(text) = line.strip_prefix("### ") {
        return Block::Heading {
            level: 3,
            text: text.to_owned(),
        };
    }

    if let Some(marker) = ORDERED_MARKERS.iter().find(|m| line.starts_with(*m)) {
        return Block::OrderedItem(line[marker.len()..].to_owned());
    }

    if let Some(text) = line
        .strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
    {
        return Block::UnorderedItem(text.to_owned());
    }

    Block::Paragraph(line.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_is_deterministic() {
        let input = "## Title\n\nSome paragraph\n- item";
        assert_eq!(render(input), render(input));
    }

    #[test]
    fn test_heading_level_two() {
        assert_eq!(
            render("## Hi"),
            vec![Block::Heading {
                level: 2,
                text: "Hi".to_owned()
            }]
        );
    }

    #[test]
    fn test_heading_level_three() {
        assert_eq!(
            render("### Deep dive"),
            vec![Block::Heading {
                level: 3,
                text: "Deep dive".to_owned()
            }]
        );
    }

    #[test]
    fn test_heading_without_space_is_paragraph() {
        assert_eq!(
            render("##NoSpace"),
            vec![Block::Paragraph("##NoSpace".to_owned())]
        );
    }

    #[test]
    fn test_unordered_items_keep_order() {
        assert_eq!(
            render("- a\n- b"),
            vec![
                Block::UnorderedItem("a".to_owned()),
                Block::UnorderedItem("b".to_owned()),
            ]
        );
    }

    #[test]
    fn test_star_marker_is_unordered() {
        assert_eq!(
            render("* starred"),
            vec![Block::UnorderedItem("starred".to_owned())]
        );
    }

    #[test]
    fn test_ordered_item_strips_marker() {
        assert_eq!(
            render("1. first thing"),
            vec![Block::OrderedItem("first thing".to_owned())]
        );
        assert_eq!(
            render("4. last covered digit"),
            vec![Block::OrderedItem("last covered digit".to_owned())]
        );
    }

    #[test]
    fn test_ordered_marker_beyond_four_is_paragraph() {
        // The digit set is literal, not a general numeric rule.
        assert_eq!(
            render("5. not a list"),
            vec![Block::Paragraph("5. not a list".to_owned())]
        );
    }

    #[test]
    fn test_empty_input_is_single_break() {
        assert_eq!(render(""), vec![Block::LineBreak]);
    }

    #[test]
    fn test_whitespace_line_is_break() {
        assert_eq!(render("   \t"), vec![Block::LineBreak]);
    }

    #[test]
    fn test_indented_heading_is_paragraph() {
        // Prefix checks are literal; leading whitespace defeats them.
        assert_eq!(
            render("  ## Hi"),
            vec![Block::Paragraph("  ## Hi".to_owned())]
        );
    }

    #[test]
    fn test_inline_markup_passes_through() {
        assert_eq!(
            render("1. **Connect with readers**"),
            vec![Block::OrderedItem("**Connect with readers**".to_owned())]
        );
    }

    #[test]
    fn test_mixed_document() {
        let doc = "## Intro\n\nFirst paragraph.\n1. one\n2. two\n- bullet";
        assert_eq!(
            render(doc),
            vec![
                Block::Heading {
                    level: 2,
                    text: "Intro".to_owned()
                },
                Block::LineBreak,
                Block::Paragraph("First paragraph.".to_owned()),
                Block::OrderedItem("one".to_owned()),
                Block::OrderedItem("two".to_owned()),
                Block::UnorderedItem("bullet".to_owned()),
            ]
        );
    }
}
