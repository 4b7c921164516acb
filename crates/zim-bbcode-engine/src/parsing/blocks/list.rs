use std::sync::LazyLock;

use log::warn;
use regex::{Captures, Regex};

use crate::parsing::bbcode::Tag;
use crate::parsing::rule::{Rule, RuleOutput};

static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^(?P<indent>\t*)(?P<prefix>\d+\.|\*|\[ \]|\[\*\])[ \t]+(?P<item>[^\n]*)(?P<eol>\n?)",
    )
    .expect("list item pattern is valid")
});

/// Whether a list is numbered or bulleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ordered,
    Unordered,
}

impl ListKind {
    /// `1.` style prefixes are ordered; bullets and checkboxes are not.
    pub fn from_prefix(prefix: &str) -> Self {
        if prefix.ends_with('.') {
            ListKind::Ordered
        } else {
            ListKind::Unordered
        }
    }

    fn tag(self) -> Tag<'static> {
        match self {
            ListKind::Ordered => Tag::OrderedList,
            ListKind::Unordered => Tag::UnorderedList,
        }
    }
}

/// One matched list line.
#[derive(Debug, Clone)]
struct ListLine {
    start: usize,
    end: usize,
    indent: usize,
    kind: ListKind,
    text: String,
    has_eol: bool,
}

impl ListLine {
    fn from_captures(caps: &Captures) -> Self {
        let full = caps.get(0).map_or(0..0, |m| m.range());
        Self {
            start: full.start,
            end: full.end,
            indent: caps["indent"].len(),
            kind: ListKind::from_prefix(&caps["prefix"]),
            text: caps["item"].trim().to_string(),
            has_eol: !caps["eol"].is_empty(),
        }
    }
}

/// The list currently receiving items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenList {
    indent: usize,
    kind: ListKind,
}

/// Converts tab-indented list lines into nested `[ol]`/`[ul]` blocks.
///
/// Each line is `<tabs><prefix> <text>` where the prefix is `1.`, `*`,
/// `[ ]` or `[*]`. The tab count is the nesting depth. Lines are processed in
/// order; what is emitted after a line depends on the line that follows it:
///
/// - same depth: a newline separator, the list continues
/// - deeper: the current list stays open and its closing tag is stacked
/// - shallower: the current list closes, plus one stacked ancestor per level
///   climbed
/// - nothing adjacent: the current list and every stacked ancestor close
///
/// A line whose depth differs from the open list always opens a new list.
#[derive(Debug, Default)]
pub struct ListRule {
    open_tags: Vec<ListKind>,
    current: Option<OpenList>,
}

impl ListRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ancestor lists waiting to be closed.
    pub fn pending_closes(&self) -> usize {
        self.open_tags.len()
    }

    fn reset(&mut self) {
        self.open_tags.clear();
        self.current = None;
    }

    fn render(&mut self, line: &ListLine, next: Option<&ListLine>, out: &mut String) {
        let open = match self.current {
            Some(open) if open.indent == line.indent => open,
            _ => {
                out.push_str(&line.kind.tag().open());
                OpenList {
                    indent: line.indent,
                    kind: line.kind,
                }
            }
        };
        out.push_str(&line.text);
        self.current = Some(open);

        match next {
            None => {
                out.push_str(&open.kind.tag().close());
                self.close_all(out);
                if line.has_eol {
                    out.push('\n');
                }
            }
            Some(next) if next.indent == open.indent => out.push('\n'),
            Some(next) if next.indent > open.indent => self.open_tags.push(open.kind),
            Some(next) => {
                out.push_str(&open.kind.tag().close());
                self.close_levels(open.indent - next.indent, out);
                self.current = None;
            }
        }
    }

    fn close_levels(&mut self, levels: usize, out: &mut String) {
        if levels > self.open_tags.len() {
            warn!(
                "list climbs {levels} levels but only {} are open, closing what is open",
                self.open_tags.len()
            );
        }
        for _ in 0..levels {
            let Some(kind) = self.open_tags.pop() else {
                break;
            };
            out.push_str(&kind.tag().close());
        }
    }

    fn close_all(&mut self, out: &mut String) {
        while let Some(kind) = self.open_tags.pop() {
            out.push_str(&kind.tag().close());
        }
        self.current = None;
    }
}

impl Rule for ListRule {
    fn name(&self) -> &'static str {
        "list"
    }

    fn apply(&mut self, text: &str) -> RuleOutput {
        self.reset();

        let lines: Vec<ListLine> = LIST_ITEM
            .captures_iter(text)
            .map(|caps| ListLine::from_captures(&caps))
            .collect();

        let mut out = String::with_capacity(text.len());
        let mut copied_to = 0;
        for (i, line) in lines.iter().enumerate() {
            out.push_str(&text[copied_to..line.start]);
            let next = lines.get(i + 1).filter(|next| next.start == line.end);
            self.render(line, next, &mut out);
            copied_to = line.end;
        }
        out.push_str(&text[copied_to..]);

        RuleOutput::text(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn apply(text: &str) -> String {
        ListRule::new().apply(text).text
    }

    fn assert_balanced(out: &str) {
        for tag in [Tag::OrderedList, Tag::UnorderedList] {
            assert_eq!(
                out.matches(&tag.open()).count(),
                out.matches(&tag.close()).count(),
                "unbalanced {} in {out:?}",
                tag.open()
            );
        }
        let mut depth = 0i32;
        for (i, _) in out.match_indices('[') {
            if out[i..].starts_with("[ul]") || out[i..].starts_with("[ol]") {
                depth += 1;
            } else if out[i..].starts_with("[/ul]") || out[i..].starts_with("[/ol]") {
                depth -= 1;
            }
            assert!(depth >= 0, "close before open in {out:?}");
        }
        assert_eq!(depth, 0);
    }

    #[test]
    fn flat_bullets() {
        assert_eq!(apply("* a\n* b\n"), "[ul]a\nb[/ul]\n");
    }

    #[test]
    fn numbered_items_are_ordered() {
        assert_eq!(apply("1. one\n2. two"), "[ol]one\ntwo[/ol]");
    }

    #[test]
    fn checkboxes_are_unordered() {
        assert_eq!(apply("[ ] todo\n[*] done\n"), "[ul]todo\ndone[/ul]\n");
    }

    #[test]
    fn nested_item_closes_back_to_top_level() {
        let out = apply("* a\n* b\n\t* c\n* d\n");
        assert_eq!(out, "[ul]a\nb[ul]c[/ul][/ul][ul]d[/ul]\n");
        assert_balanced(&out);
    }

    #[test]
    fn list_ending_while_nested_closes_every_level() {
        let out = apply("* a\n\t1. b\n\t\t* c\nafter");
        assert_eq!(out, "[ul]a[ol]b[ul]c[/ul][/ol][/ul]\nafter");
        assert_balanced(&out);
    }

    #[test]
    fn climbing_two_levels_pops_two_ancestors() {
        let out = apply("* a\n\t* b\n\t\t* c\n* d");
        assert_eq!(out, "[ul]a[ul]b[ul]c[/ul][/ul][/ul][ul]d[/ul]");
        assert_balanced(&out);
    }

    #[test]
    fn skipped_levels_are_clamped() {
        let out = apply("* a\n\t\t* b\n* c");
        assert_eq!(out, "[ul]a[ul]b[/ul][/ul][ul]c[/ul]");
        assert_balanced(&out);

        let out = apply("\t* a\n* b");
        assert_eq!(out, "[ul]a[/ul][ul]b[/ul]");
        assert_balanced(&out);
    }

    #[test]
    fn gap_ends_the_list() {
        let out = apply("* a\n\n* b\n");
        assert_eq!(out, "[ul]a[/ul]\n\n[ul]b[/ul]\n");
        assert_balanced(&out);
    }

    #[test]
    fn surrounding_text_is_kept() {
        assert_eq!(
            apply("Intro\n* a\n* b\nOutro"),
            "Intro\n[ul]a\nb[/ul]\nOutro"
        );
    }

    #[test]
    fn bold_at_line_start_is_not_a_bullet() {
        assert_eq!(apply("**bold** text"), "**bold** text");
    }

    #[test]
    fn state_is_reset_between_applies() {
        let mut rule = ListRule::new();
        let first = rule.apply("* a\n\t* b").text;
        assert_eq!(first, "[ul]a[ul]b[/ul][/ul]");
        assert_eq!(rule.pending_closes(), 0);
        assert_eq!(rule.apply("* c").text, "[ul]c[/ul]");
    }
}
