use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::parsing::bbcode::Tag;
use crate::parsing::rule::{Rule, RuleOutput};

// The regex crate has no back-references, so both `=` runs are captured and
// compared in the callback instead.
static HEADING_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(?P<open>=+)(?P<item>[^\n]*?)(?P<close>=+)[ \t]*$")
        .expect("heading pattern is valid")
});

/// Converts `== Title ==` lines into font-size spans.
///
/// The level is the number of `=` on each side; both sides must agree or the
/// line is left as written.
#[derive(Debug, Default)]
pub struct HeadingRule;

impl HeadingRule {
    pub const BASE_SIZE: u32 = 20;
    pub const STEP: u32 = 2;

    /// Font size for a heading framed by `level` `=` characters.
    pub fn font_size(level: usize) -> u32 {
        let level = u32::try_from(level).unwrap_or(u32::MAX / Self::STEP);
        Self::BASE_SIZE.saturating_add(level.saturating_mul(Self::STEP))
    }

    fn render(caps: &Captures) -> String {
        let level = caps["open"].len();
        let title = caps["item"].trim();
        if level != caps["close"].len() || title.is_empty() {
            return caps[0].to_string();
        }
        Tag::FontSize(Self::font_size(level)).wrap(title)
    }
}

impl Rule for HeadingRule {
    fn name(&self) -> &'static str {
        "heading"
    }

    fn apply(&mut self, text: &str) -> RuleOutput {
        RuleOutput::text(HEADING_LINE.replace_all(text, Self::render))
    }
}
