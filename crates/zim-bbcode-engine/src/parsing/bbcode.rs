//! Tag vocabulary of the Godot `RichTextLabel` BBCode dialect.
//!
//! Every tag the converter emits is spelled here once. Rules never hardcode
//! `[b]` or `[/table]`; they go through [`Tag`] so the output vocabulary stays
//! reviewable in one place.

/// Background colour used by the `__marked__` highlight.
pub const HIGHLIGHT_COLOR: &str = "#ffff0066";

/// Font size for subscript and superscript spans.
pub const SMALL_FONT_SIZE: u32 = 12;

/// Font size for table header cells.
pub const TABLE_HEADER_FONT_SIZE: u32 = 18;

/// A BBCode tag, optionally carrying a `=value` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag<'a> {
    Bold,
    Italic,
    Strikethrough,
    Code,
    BgColor(&'a str),
    FontSize(u32),
    Url(&'a str),
    Img,
    Table(usize),
    Cell,
    Center,
    OrderedList,
    UnorderedList,
}

impl Tag<'_> {
    fn name(&self) -> &'static str {
        match self {
            Tag::Bold => "b",
            Tag::Italic => "i",
            Tag::Strikethrough => "s",
            Tag::Code => "code",
            Tag::BgColor(_) => "bgcolor",
            Tag::FontSize(_) => "font_size",
            Tag::Url(_) => "url",
            Tag::Img => "img",
            Tag::Table(_) => "table",
            Tag::Cell => "cell",
            Tag::Center => "center",
            Tag::OrderedList => "ol",
            Tag::UnorderedList => "ul",
        }
    }

    /// Opening form, e.g. `[font_size=24]`.
    pub fn open(&self) -> String {
        match self {
            Tag::BgColor(color) => format!("[{}={color}]", self.name()),
            Tag::FontSize(size) => format!("[{}={size}]", self.name()),
            Tag::Url(target) => format!("[{}={target}]", self.name()),
            Tag::Table(columns) => format!("[{}={columns}]", self.name()),
            _ => format!("[{}]", self.name()),
        }
    }

    /// Closing form, e.g. `[/font_size]`.
    pub fn close(&self) -> String {
        format!("[/{}]", self.name())
    }

    /// Wraps `inner` in this tag.
    pub fn wrap(&self, inner: &str) -> String {
        format!("{}{inner}{}", self.open(), self.close())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_tags_have_no_parameter() {
        assert_eq!(Tag::Bold.wrap("x"), "[b]x[/b]");
        assert_eq!(Tag::UnorderedList.open(), "[ul]");
        assert_eq!(Tag::OrderedList.close(), "[/ol]");
    }

    #[test]
    fn parameter_goes_on_opening_tag_only() {
        assert_eq!(Tag::FontSize(24).wrap("Title"), "[font_size=24]Title[/font_size]");
        assert_eq!(Tag::Url("http://x").open(), "[url=http://x]");
        assert_eq!(Tag::Table(3).close(), "[/table]");
        assert_eq!(
            Tag::BgColor(HIGHLIGHT_COLOR).wrap("hi"),
            "[bgcolor=#ffff0066]hi[/bgcolor]"
        );
    }
}
