use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::parsing::rule::{Rule, RuleOutput};

use super::kinds::InlineKind;

static RENDERED_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(?P<open>\[url=(?P<target>[^\]]*)\])(?P<display>.*?)(?P<close>\[/url\])")
        .expect("rendered link pattern is valid")
});

static LINK_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("\u{E000}(?P<idx>\\d+)\u{E001}").expect("link placeholder pattern is valid")
});

/// A stateless global substitution of one [`InlineKind`].
///
/// Link targets are already `[url=..]` tags by the time inline styles run.
/// They are swapped for placeholders while the style pattern is applied, so
/// delimiters inside a URL (`//`, `__`, `~~`) never open a span. Display text
/// equal to its target is an unaliased URL and is hidden the same way; aliased
/// display text stays visible and is styled normally.
#[derive(Debug, Clone)]
pub struct InlineRule {
    kind: InlineKind,
    replacement: String,
}

impl InlineRule {
    pub fn new(kind: InlineKind) -> Self {
        Self {
            kind,
            replacement: kind.replacement(),
        }
    }
}

/// Replaces rendered link targets with `\u{E000}N\u{E001}` tokens.
fn hide_link_targets(text: &str) -> (String, Vec<String>) {
    let mut hidden = Vec::new();
    let mut placeholder = |piece: &str| {
        let token = format!("\u{E000}{}\u{E001}", hidden.len());
        hidden.push(piece.to_string());
        token
    };

    let masked = RENDERED_LINK.replace_all(text, |caps: &Captures| {
        if caps["display"] == caps["target"] {
            placeholder(&caps[0])
        } else {
            format!("{}{}{}", placeholder(&caps["open"]), &caps["display"], &caps["close"])
        }
    });
    (masked.into_owned(), hidden)
}

fn restore_link_targets(text: &str, hidden: &[String]) -> String {
    LINK_PLACEHOLDER
        .replace_all(text, |caps: &Captures| {
            caps["idx"]
                .parse::<usize>()
                .ok()
                .and_then(|idx| hidden.get(idx))
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

impl Rule for InlineRule {
    fn name(&self) -> &'static str {
        self.kind.name()
    }

    fn apply(&mut self, text: &str) -> RuleOutput {
        let (masked, hidden) = hide_link_targets(text);
        let styled = self
            .kind
            .pattern()
            .replace_all(&masked, self.replacement.as_str());
        if hidden.is_empty() {
            return RuleOutput::text(styled);
        }
        RuleOutput::text(restore_link_targets(&styled, &hidden))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn apply(kind: InlineKind, text: &str) -> String {
        InlineRule::new(kind).apply(text).text
    }

    #[rstest]
    #[case::bold(InlineKind::Bold, "a**x**b", "a[b]x[/b]b")]
    #[case::italic(InlineKind::Italic, "a//x//b", "a[i]x[/i]b")]
    #[case::strikethrough(InlineKind::Strikethrough, "a~~x~~b", "a[s]x[/s]b")]
    #[case::verbatim(InlineKind::Verbatim, "a''x''b", "a[code]x[/code]b")]
    #[case::marked(InlineKind::Marked, "a__x__b", "a[bgcolor=#ffff0066]x[/bgcolor]b")]
    #[case::subscript(InlineKind::Subscript, "a_{x}b", "a[font_size=12]x[/font_size]b")]
    #[case::superscript(InlineKind::Superscript, "a^{x}b", "a[font_size=12]x[/font_size]b")]
    fn wraps_enclosed_text(#[case] kind: InlineKind, #[case] input: &str, #[case] expected: &str) {
        assert_eq!(apply(kind, input), expected);
    }

    #[test]
    fn first_closing_delimiter_wins() {
        assert_eq!(
            apply(InlineKind::Bold, "**a** and **b**"),
            "[b]a[/b] and [b]b[/b]"
        );
    }

    #[test]
    fn italic_at_start_of_text() {
        assert_eq!(apply(InlineKind::Italic, "//x// y"), "[i]x[/i] y");
    }

    #[test]
    fn italic_ignores_url_schemes() {
        assert_eq!(
            apply(InlineKind::Italic, "see http://a.org and https://b.org"),
            "see http://a.org and https://b.org"
        );
        assert_eq!(
            apply(InlineKind::Italic, "[url=http://a]x[/url] //it//"),
            "[url=http://a]x[/url] [i]it[/i]"
        );
    }

    #[test]
    fn delimiters_inside_link_targets_are_not_styled() {
        assert_eq!(
            apply(InlineKind::Italic, "[url=https://x.org//a]https://x.org//a[/url] and //it//"),
            "[url=https://x.org//a]https://x.org//a[/url] and [i]it[/i]"
        );
        assert_eq!(
            apply(InlineKind::Marked, "[url=a__b__c]docs[/url]"),
            "[url=a__b__c]docs[/url]"
        );
    }

    #[test]
    fn aliased_link_text_is_still_styled() {
        assert_eq!(
            apply(InlineKind::Bold, "[url=x**y]**see**[/url]"),
            "[url=x**y][b]see[/b][/url]"
        );
    }

    #[test]
    fn spans_may_enclose_a_link() {
        assert_eq!(
            apply(InlineKind::Bold, "**go [url=a]b[/url] now**"),
            "[b]go [url=a]b[/url] now[/b]"
        );
    }

    #[test]
    fn unclosed_delimiter_is_left_alone() {
        assert_eq!(apply(InlineKind::Strikethrough, "~~open"), "~~open");
    }

    #[test]
    fn spans_may_cross_lines() {
        assert_eq!(apply(InlineKind::Bold, "**a\nb**"), "[b]a\nb[/b]");
    }
}
