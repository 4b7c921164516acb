use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::parsing::bbcode::Tag;
use crate::parsing::rule::{ParseContext, Rule, RuleOutput};

static EMBED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\{\{(?P<item>.*?)\}\}").expect("image embed pattern is valid")
});

/// Converts `{{..\path\to.png}}` embeds into `[img]` spans.
///
/// Exported pages reference attachments relative to the parent folder. That
/// marker is replaced by the root path of the current conversion, separators
/// are normalised to `/` and a leading `res://` scheme is dropped.
#[derive(Debug)]
pub struct ImageRule {
    root_path: String,
}

impl ImageRule {
    /// Parent-relative marker in either separator style.
    pub const PARENT_MARKERS: [&'static str; 2] = ["..\\", "../"];
    /// Current-folder marker in either separator style.
    pub const CURRENT_MARKERS: [&'static str; 2] = [".\\", "./"];
    pub const RESOURCE_SCHEME: &'static str = "res://";

    pub fn new(ctx: &ParseContext<'_>) -> Self {
        Self {
            root_path: ctx.root_path.to_string(),
        }
    }

    /// Resolves an embed reference against the root path.
    pub fn resolve(&self, reference: &str) -> String {
        let relative = Self::PARENT_MARKERS
            .iter()
            .chain(Self::CURRENT_MARKERS.iter())
            .find_map(|marker| reference.strip_prefix(marker))
            .unwrap_or(reference);

        let needs_separator = !self.root_path.is_empty()
            && !self.root_path.ends_with(['/', '\\'])
            && !relative.starts_with(['/', '\\']);
        let mut joined = self.root_path.clone();
        if needs_separator {
            joined.push('/');
        }
        joined.push_str(relative);

        let normalized = joined.replace('\\', "/");
        normalized
            .strip_prefix(Self::RESOURCE_SCHEME)
            .map(str::to_string)
            .unwrap_or(normalized)
    }

    fn render(&self, caps: &Captures) -> String {
        Tag::Img.wrap(&self.resolve(&caps["item"]))
    }
}

impl Rule for ImageRule {
    fn name(&self) -> &'static str {
        "image"
    }

    fn apply(&mut self, text: &str) -> RuleOutput {
        RuleOutput::text(EMBED.replace_all(text, |caps: &Captures| self.render(caps)))
    }
}
