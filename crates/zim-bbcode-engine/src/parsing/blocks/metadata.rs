use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::parsing::rule::{Metadata, Rule, RuleOutput};

static HEADER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    let keys = MetadataRemover::HEADER_KEYS
        .iter()
        .map(|key| regex::escape(key))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?mi)^(?P<key>{keys}):(?P<value>[^\n]*)\n?"))
        .expect("header line pattern is valid")
});

/// Removes page header lines and captures them as metadata.
///
/// Zim pages start with a short header:
///
/// ```text
/// Content-Type: text/x-zim-wiki
/// Wiki-Format: zim 0.6
/// Creation-Date: 2024-01-01T10:00:00+01:00
/// ```
///
/// Keys match case-insensitively and are stored in their canonical spelling.
/// The remaining text is trimmed.
#[derive(Debug, Default)]
pub struct MetadataRemover;

impl MetadataRemover {
    pub const HEADER_KEYS: [&'static str; 3] = ["Content-Type", "Wiki-Format", "Creation-Date"];

    fn canonical_key(key: &str) -> &str {
        Self::HEADER_KEYS
            .iter()
            .copied()
            .find(|known| known.eq_ignore_ascii_case(key))
            .unwrap_or(key)
    }
}

impl Rule for MetadataRemover {
    fn name(&self) -> &'static str {
        "metadata"
    }

    fn apply(&mut self, text: &str) -> RuleOutput {
        let mut extracted = Metadata::new();
        let stripped = HEADER_LINE.replace_all(text, |caps: &Captures| {
            let key = Self::canonical_key(&caps["key"]);
            extracted.insert(key.to_string(), caps["value"].trim().to_string());
            ""
        });
        RuleOutput::with_extracted(stripped.trim(), extracted)
    }
}
