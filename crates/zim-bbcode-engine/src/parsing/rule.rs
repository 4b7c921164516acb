use std::collections::BTreeMap;

/// Key/value pairs harvested from page header lines.
pub type Metadata = BTreeMap<String, String>;

/// Result of running one rule over the working text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleOutput {
    /// The rewritten text, input to the next rule.
    pub text: String,
    /// Side-channel data; empty for every rule except the metadata remover.
    pub extracted: Metadata,
}

impl RuleOutput {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            extracted: Metadata::new(),
        }
    }

    pub fn with_extracted(text: impl Into<String>, extracted: Metadata) -> Self {
        Self {
            text: text.into(),
            extracted,
        }
    }
}

/// Per-parse values shared by every rule instance of one conversion.
#[derive(Debug, Clone, Copy)]
pub struct ParseContext<'a> {
    /// Base path prepended to embedded image references.
    pub root_path: &'a str,
}

/// One markup transformation.
///
/// A rule instance is created for a single conversion and dropped afterwards.
/// Stateful rules still clear their state at the top of [`Rule::apply`], so a
/// reused instance never carries state from one text into the next.
pub trait Rule {
    /// Short identifier used in log output.
    fn name(&self) -> &'static str;

    /// Rewrites every match of this rule in `text`.
    fn apply(&mut self, text: &str) -> RuleOutput;
}
