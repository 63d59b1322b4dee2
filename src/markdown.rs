//! # Markdown to Directive Markup
//!
//! Rewrites a Markdown document as directive markup so it can be printed
//! with the layout engine. Only the structure a dot-matrix page can show
//! survives:
//!
//! | Markdown | Markup |
//! |----------|--------|
//! | `# H1` | `[box:on:thickness:2]…[box:off]` |
//! | `## H2` | `[underline:on]…[underline:off]` |
//! | `### H3` and deeper | `[bold:on]…[bold:off]` |
//! | `**strong**` | `[bold:on]…[bold:off]` |
//! | `_emphasis_` | `[italic:on]…[italic:off]` |
//! | `` `code` `` | plain text |
//! | list item | own line, `* ` or `N. ` prefix |
//!
//! Blocks are separated by one blank line. A box holds plain text only,
//! so inline styles inside a `# H1` are dropped. The markup has no escape
//! for `[`, so square brackets in text and code print as parentheses.
//!
//! ```
//! let markup = escpwp::markdown::convert("# Hello\n\nVery **bold**.");
//! assert_eq!(
//!     markup,
//!     "[pragma:escp-wp][soft-wrap:on]\n\
//!      [box:on:thickness:2]Hello[box:off]\n\nVery [bold:on]bold[bold:off]."
//! );
//! ```

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

/// First line of every converted document.
pub const PREAMBLE: &str = "[pragma:escp-wp][soft-wrap:on]\n";

/// Box-drawing characters in a thematic break.
const RULE_CHARS: usize = 40;

/// Convert Markdown to directive markup.
pub fn convert(markdown: &str) -> String {
    let mut state = ParserState::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Start(tag) => state.handle_start_tag(tag),
            Event::End(tag_end) => state.handle_end_tag(tag_end),
            Event::Text(text) | Event::Code(text) => state.handle_text(&text),
            Event::SoftBreak => state.block.push(' '),
            Event::HardBreak => state.block.push('\n'),
            Event::Rule => {
                state.block.push_str(&"\u{2500}".repeat(RULE_CHARS));
                state.finish_block();
            }
            _ => {}
        }
    }
    state.finish_block();

    tracing::debug!(blocks = state.blocks.len(), "converted markdown");
    format!("{PREAMBLE}{}", state.blocks.join("\n\n"))
}

/// Internal state for tracking nesting while walking parser events.
struct ParserState {
    /// Finished blocks, in document order.
    blocks: Vec<String>,
    /// Block being built.
    block: String,
    list_depth: usize,
    /// Next number per open list; `None` for bullet lists.
    list_counters: Vec<Option<u64>>,
    heading_level: Option<HeadingLevel>,
}

impl ParserState {
    fn new() -> Self {
        Self {
            blocks: Vec::new(),
            block: String::new(),
            list_depth: 0,
            list_counters: Vec::new(),
            heading_level: None,
        }
    }

    fn handle_start_tag(&mut self, tag: Tag) {
        match tag {
            Tag::Heading { level, .. } => {
                self.heading_level = Some(level);
                self.block.push_str(heading_markers(level).0);
            }
            Tag::Strong if !self.in_box() => self.block.push_str("[bold:on]"),
            Tag::Emphasis if !self.in_box() => self.block.push_str("[italic:on]"),
            Tag::List(start) => {
                if self.list_depth > 0 {
                    self.start_line();
                }
                self.list_depth += 1;
                self.list_counters.push(start);
            }
            Tag::Item => {
                self.start_line();
                let indent = "  ".repeat(self.list_depth.saturating_sub(1));
                let prefix = match self.list_counters.last_mut() {
                    Some(Some(counter)) => {
                        let prefix = format!("{counter}. ");
                        *counter += 1;
                        prefix
                    }
                    _ => "* ".to_string(),
                };
                self.block.push_str(&indent);
                self.block.push_str(&prefix);
            }
            _ => {}
        }
    }

    fn handle_end_tag(&mut self, tag_end: TagEnd) {
        match tag_end {
            TagEnd::Paragraph => {
                if self.list_depth == 0 {
                    self.finish_block();
                }
            }
            TagEnd::Heading(level) => {
                self.block.push_str(heading_markers(level).1);
                self.heading_level = None;
                self.finish_block();
            }
            TagEnd::Strong if !self.in_box() => self.block.push_str("[bold:off]"),
            TagEnd::Emphasis if !self.in_box() => self.block.push_str("[italic:off]"),
            TagEnd::List(_) => {
                self.list_counters.pop();
                self.list_depth = self.list_depth.saturating_sub(1);
                if self.list_depth == 0 {
                    self.finish_block();
                }
            }
            TagEnd::CodeBlock => {
                if self.list_depth == 0 {
                    self.finish_block();
                }
            }
            _ => {}
        }
    }

    fn handle_text(&mut self, text: &str) {
        if text.contains('[') {
            tracing::debug!(text, "printing square brackets as parentheses");
        }
        let text = text.replace('[', "(").replace(']', ")");
        if self.in_box() {
            // A box row cannot break, keep the title on one line.
            self.block.push_str(&text.replace('\n', " "));
        } else {
            self.block.push_str(&text);
        }
    }

    /// Inside a `# H1`, which becomes a box.
    fn in_box(&self) -> bool {
        self.heading_level == Some(HeadingLevel::H1)
    }

    /// Make sure the next text starts on a fresh line of the current block.
    fn start_line(&mut self) {
        if !self.block.is_empty() && !self.block.ends_with('\n') {
            self.block.push('\n');
        }
    }

    fn finish_block(&mut self) {
        let block = std::mem::take(&mut self.block);
        let block = block.trim_end_matches('\n');
        if !block.is_empty() {
            self.blocks.push(block.to_string());
        }
    }
}

/// Opening and closing markup for a heading level.
fn heading_markers(level: HeadingLevel) -> (&'static str, &'static str) {
    match level {
        HeadingLevel::H1 => ("[box:on:thickness:2]", "[box:off]"),
        HeadingLevel::H2 => ("[underline:on]", "[underline:off]"),
        _ => ("[bold:on]", "[bold:off]"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn body(markdown: &str) -> String {
        convert(markdown)
            .strip_prefix(PREAMBLE)
            .map(str::to_string)
            .unwrap()
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(convert(""), PREAMBLE);
    }

    #[test]
    fn test_headings() {
        assert_eq!(
            body("# One\n\n## Two\n\n### Three"),
            "[box:on:thickness:2]One[box:off]\n\n\
             [underline:on]Two[underline:off]\n\n\
             [bold:on]Three[bold:off]"
        );
    }

    #[test]
    fn test_inline_styles() {
        assert_eq!(
            body("Very short with _italic text_ and **even bold**."),
            "Very short with [italic:on]italic text[italic:off] and [bold:on]even bold[bold:off]."
        );
    }

    #[test]
    fn test_inline_code_is_plain() {
        assert_eq!(body("run `make` now"), "run make now");
    }

    #[test]
    fn test_soft_and_hard_breaks() {
        assert_eq!(body("one\ntwo"), "one two");
        assert_eq!(body("one  \ntwo"), "one\ntwo");
    }

    #[test]
    fn test_bullet_list() {
        assert_eq!(body("- apples\n- pears"), "* apples\n* pears");
    }

    #[test]
    fn test_ordered_list_and_paragraph() {
        assert_eq!(
            body("Steps:\n\n3. first\n4. second\n\nDone."),
            "Steps:\n\n3. first\n4. second\n\nDone."
        );
    }

    #[test]
    fn test_nested_list() {
        assert_eq!(
            body("- fruit\n  - apple\n- nuts"),
            "* fruit\n  * apple\n* nuts"
        );
    }

    #[test]
    fn test_code_block_lines_verbatim() {
        assert_eq!(
            body("```\nfn main() {}\nlet x = 1;\n```"),
            "fn main() {}\nlet x = 1;"
        );
    }

    #[test]
    fn test_styles_dropped_inside_title_box() {
        assert_eq!(
            body("# Hello **World** and _you_

body **bold**"),
            "[box:on:thickness:2]Hello World and you[box:off]\n\nbody [bold:on]bold[bold:off]"
        );
    }

    #[test]
    fn test_square_brackets_become_parentheses() {
        assert_eq!(body("Use `arr[0]` here"), "Use arr(0) here");
        assert_eq!(body("see [1] and [x]"), "see (1) and (x)");
        assert_eq!(body("```\nv[i] = 1;\n```"), "v(i) = 1;");
    }

    #[test]
    fn test_rule() {
        assert_eq!(body("---"), "\u{2500}".repeat(RULE_CHARS));
    }
}
