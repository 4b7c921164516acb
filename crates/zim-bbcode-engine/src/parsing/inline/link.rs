use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::parsing::bbcode::Tag;
use crate::parsing::rule::{Rule, RuleOutput};

static WIKILINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\[\[(?P<item>.+?)\]\]").expect("wiki link pattern is valid")
});

/// Converts `[[target]]` and `[[target|display]]` into `[url]` spans.
#[derive(Debug, Default)]
pub struct LinkRule;

impl LinkRule {
    pub const ALIAS: char = '|';

    fn render(caps: &Captures) -> String {
        let item = &caps["item"];
        let (target, display) = item.split_once(Self::ALIAS).unwrap_or((item, item));
        Tag::Url(target).wrap(display)
    }
}

impl Rule for LinkRule {
    fn name(&self) -> &'static str {
        "link"
    }

    fn apply(&mut self, text: &str) -> RuleOutput {
        RuleOutput::text(WIKILINK.replace_all(text, Self::render))
    }
}
