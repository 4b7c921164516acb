use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::bbcode::{HIGHLIGHT_COLOR, SMALL_FONT_SIZE, Tag};

/// A delimiter-enclosed inline span with a fixed output wrapper.
///
/// Per the knowledge ownership principle, delimiters live here and nowhere
/// else; the rule code asks the kind for its pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineKind {
    Bold,
    Italic,
    Strikethrough,
    Verbatim,
    Marked,
    Subscript,
    Superscript,
}

static PATTERNS: LazyLock<[Regex; 7]> = LazyLock::new(|| InlineKind::ALL.map(InlineKind::compile));

impl InlineKind {
    pub const ALL: [InlineKind; 7] = [
        InlineKind::Bold,
        InlineKind::Italic,
        InlineKind::Strikethrough,
        InlineKind::Verbatim,
        InlineKind::Marked,
        InlineKind::Subscript,
        InlineKind::Superscript,
    ];

    pub fn name(self) -> &'static str {
        match self {
            InlineKind::Bold => "bold",
            InlineKind::Italic => "italic",
            InlineKind::Strikethrough => "strikethrough",
            InlineKind::Verbatim => "verbatim",
            InlineKind::Marked => "marked",
            InlineKind::Subscript => "subscript",
            InlineKind::Superscript => "superscript",
        }
    }

    /// Opening and closing delimiter as written in a page.
    pub fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            InlineKind::Bold => ("**", "**"),
            InlineKind::Italic => ("//", "//"),
            InlineKind::Strikethrough => ("~~", "~~"),
            InlineKind::Verbatim => ("''", "''"),
            InlineKind::Marked => ("__", "__"),
            InlineKind::Subscript => ("_{", "}"),
            InlineKind::Superscript => ("^{", "}"),
        }
    }

    /// The wrapper emitted around the enclosed text.
    ///
    /// The renderer has no real superscript, so it shares the reduced font
    /// size of subscript.
    pub fn tag(self) -> Tag<'static> {
        match self {
            InlineKind::Bold => Tag::Bold,
            InlineKind::Italic => Tag::Italic,
            InlineKind::Strikethrough => Tag::Strikethrough,
            InlineKind::Verbatim => Tag::Code,
            InlineKind::Marked => Tag::BgColor(HIGHLIGHT_COLOR),
            InlineKind::Subscript | InlineKind::Superscript => Tag::FontSize(SMALL_FONT_SIZE),
        }
    }

    pub fn pattern(self) -> &'static Regex {
        &PATTERNS[self as usize]
    }

    /// Replacement template with a `${item}` back-reference.
    pub fn replacement(self) -> String {
        let tag = self.tag();
        format!("{}{}${{item}}{}", self.lead_ref(), tag.open(), tag.close())
    }

    // `//` right after a `:` belongs to a URL scheme, not to italics. The
    // regex crate has no look-behind, so the preceding character is captured
    // as `lead` and written back.
    fn lead_pattern(self) -> &'static str {
        match self {
            InlineKind::Italic => "(?P<lead>^|[^:])",
            _ => "",
        }
    }

    fn lead_ref(self) -> &'static str {
        match self {
            InlineKind::Italic => "${lead}",
            _ => "",
        }
    }

    fn compile(self) -> Regex {
        let (open, close) = self.delimiters();
        let pattern = format!(
            "(?s){}{}(?P<item>.*?){}",
            self.lead_pattern(),
            regex::escape(open),
            regex::escape(close)
        );
        Regex::new(&pattern).expect("inline delimiter pattern is valid")
    }
}
