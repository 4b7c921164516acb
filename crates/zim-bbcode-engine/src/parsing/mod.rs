//! # Zim Wiki to BBCode
//!
//! An ordered pipeline of rewrite rules turning Zim wiki markup into the
//! BBCode understood by Godot's `RichTextLabel`.
//!
//! ## Architecture
//!
//! Every [`Rule`] scans the *current* working text for its pattern and
//! rewrites the matches; its output is the next rule's input. The order is
//! fixed in [`RuleKind::ORDER`]:
//!
//! 1. metadata remover (header lines must go before anything else sees them)
//! 2. block rules: heading, list, table
//! 3. inline rules: image, link, bold, italic, strikethrough, verbatim,
//!    marked, subscript, superscript
//!
//! Links run before italics so that `//` inside a URL is already part of a
//! `[url]` tag when the italic rule looks at it. Inline rules hide those link
//! targets while they substitute.
//!
//! ## Modules
//!
//! - **`rule`**: the `Rule` trait, `RuleOutput` and `ParseContext`
//! - **`bbcode`**: the emitted tag vocabulary
//! - **`blocks`**: line-anchored rules (metadata, heading, list, table)
//! - **`inline`**: span rules (delimited styles, links, images)
//!
//! ## Rule Lifetime
//!
//! [`ZimParser`] instantiates every rule afresh for each conversion, so the
//! state of the list and table rules never leaks from one page into another.

pub mod bbcode;
pub mod blocks;
pub mod inline;
pub mod rule;

use log::{debug, trace};

use blocks::{HeadingRule, ListRule, MetadataRemover, TableRule};
use inline::{ImageRule, InlineKind, InlineRule, LinkRule};
pub use rule::{Metadata, ParseContext, Rule, RuleOutput};

/// Every rule of the pipeline, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Metadata,
    Heading,
    List,
    Table,
    Image,
    Link,
    Inline(InlineKind),
}

impl RuleKind {
    pub const ORDER: [RuleKind; 13] = [
        RuleKind::Metadata,
        RuleKind::Heading,
        RuleKind::List,
        RuleKind::Table,
        RuleKind::Image,
        RuleKind::Link,
        RuleKind::Inline(InlineKind::Bold),
        RuleKind::Inline(InlineKind::Italic),
        RuleKind::Inline(InlineKind::Strikethrough),
        RuleKind::Inline(InlineKind::Verbatim),
        RuleKind::Inline(InlineKind::Marked),
        RuleKind::Inline(InlineKind::Subscript),
        RuleKind::Inline(InlineKind::Superscript),
    ];

    /// Creates a fresh rule instance for one conversion.
    pub fn instantiate(self, ctx: &ParseContext<'_>) -> Box<dyn Rule> {
        match self {
            RuleKind::Metadata => Box::new(MetadataRemover),
            RuleKind::Heading => Box::new(HeadingRule),
            RuleKind::List => Box::new(ListRule::new()),
            RuleKind::Table => Box::new(TableRule::new()),
            RuleKind::Image => Box::new(ImageRule::new(ctx)),
            RuleKind::Link => Box::new(LinkRule),
            RuleKind::Inline(kind) => Box::new(InlineRule::new(kind)),
        }
    }
}

/// Result of converting one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPage {
    pub bbcode: String,
    pub metadata: Metadata,
}

/// Converts Zim wiki text to BBCode and keeps the metadata of the last page.
#[derive(Debug, Default)]
pub struct ZimParser {
    extracted: Metadata,
}

impl ZimParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the whole rule pipeline over `wiki_text`.
    ///
    /// `root_path` is prepended to embedded image references. Metadata found
    /// in the page header is available from [`ZimParser::extracted_data`]
    /// until the next call.
    pub fn parse_text_to_bbcode(&mut self, wiki_text: &str, root_path: &str) -> String {
        let ctx = ParseContext { root_path };
        self.extracted.clear();
        debug!(
            "converting {} bytes of wiki text (root path {root_path:?})",
            wiki_text.len()
        );

        let mut text = wiki_text.replace("\r\n", "\n");
        for kind in RuleKind::ORDER {
            let mut rule = kind.instantiate(&ctx);
            let RuleOutput { text: rewritten, extracted } = rule.apply(&text);
            trace!(
                "rule {} produced {} bytes, {} metadata keys",
                rule.name(),
                rewritten.len(),
                extracted.len()
            );
            self.extracted.extend(extracted);
            text = rewritten;
        }
        text
    }

    /// Header metadata of the most recent conversion.
    pub fn extracted_data(&self) -> &Metadata {
        &self.extracted
    }
}

/// Converts one page with a throwaway parser.
pub fn parse(wiki_text: &str, root_path: &str) -> ParsedPage {
    let mut parser = ZimParser::new();
    let bbcode = parser.parse_text_to_bbcode(wiki_text, root_path);
    ParsedPage {
        bbcode,
        metadata: parser.extracted,
    }
}
