use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::parsing::bbcode::{TABLE_HEADER_FONT_SIZE, Tag};
use crate::parsing::rule::{Rule, RuleOutput};

static TABLE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(?P<line>\|[^\n]*)(?P<eol>\n?)").expect("table line pattern is valid")
});

pub const CELL_SEPARATOR: char = '|';

/// What a `|`-prefixed line turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
enum RowKind {
    /// Not closed by `|`, e.g. a caption. Emitted as written.
    PassThrough,
    /// `|:---|:---:|` alignment row marking the row above as a header.
    Separator,
    Cells(Vec<String>),
}

#[derive(Debug, Clone)]
struct TableLine {
    start: usize,
    end: usize,
    line: String,
    kind: RowKind,
    has_eol: bool,
}

impl TableLine {
    fn from_captures(caps: &Captures) -> Self {
        let full = caps.get(0).map_or(0..0, |m| m.range());
        let line = caps["line"].trim().to_string();
        Self {
            start: full.start,
            end: full.end,
            kind: classify(&line),
            line,
            has_eol: !caps["eol"].is_empty(),
        }
    }
}

fn classify(line: &str) -> RowKind {
    let inner = match line
        .strip_prefix(CELL_SEPARATOR)
        .and_then(|rest| rest.strip_suffix(CELL_SEPARATOR))
    {
        Some(inner) => inner,
        None => return RowKind::PassThrough,
    };

    let cells: Vec<String> = inner
        .split(CELL_SEPARATOR)
        .map(|cell| cell.trim().to_string())
        .collect();
    if cells.iter().all(|cell| is_alignment_marker(cell)) {
        RowKind::Separator
    } else {
        RowKind::Cells(cells)
    }
}

/// `---`, `:---`, `---:` or `:---:`.
fn is_alignment_marker(cell: &str) -> bool {
    let dashes = cell.strip_prefix(':').unwrap_or(cell);
    let dashes = dashes.strip_suffix(':').unwrap_or(dashes);
    !dashes.is_empty() && dashes.chars().all(|c| c == '-')
}

/// Converts pipe tables into `[table]`/`[cell]` blocks.
///
/// ```text
/// |Name |Value|
/// |:----|:---:|
/// |a    |1    |
/// ```
///
/// A row followed directly by an alignment row is a header row. The
/// alignment row itself produces no output. The table closes after the last
/// adjacent row, or before a `|` line that is not a proper row.
#[derive(Debug, Default)]
pub struct TableRule {
    table_open: bool,
}

impl TableRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_table_open(&self) -> bool {
        self.table_open
    }

    fn render(&mut self, line: &TableLine, next: Option<&TableLine>, out: &mut String) {
        match &line.kind {
            RowKind::PassThrough => {
                if self.close(out) {
                    out.push('\n');
                }
                out.push_str(&line.line);
                if line.has_eol {
                    out.push('\n');
                }
                return;
            }
            RowKind::Separator => {}
            RowKind::Cells(cells) => {
                if !self.table_open {
                    out.push_str(&Tag::Table(cells.len()).open());
                    self.table_open = true;
                }
                let header = next.is_some_and(|next| next.kind == RowKind::Separator);
                for cell in cells {
                    out.push_str(&render_cell(cell, header));
                }
            }
        }

        if next.is_none() {
            self.close(out);
            if line.has_eol {
                out.push('\n');
            }
        }
    }

    /// Returns whether a `[/table]` was written.
    fn close(&mut self, out: &mut String) -> bool {
        let was_open = self.table_open;
        if was_open {
            out.push_str(&Tag::Table(0).close());
            self.table_open = false;
        }
        was_open
    }
}

fn render_cell(cell: &str, header: bool) -> String {
    let content = if header {
        Tag::Bold.wrap(&Tag::FontSize(TABLE_HEADER_FONT_SIZE).wrap(cell))
    } else {
        cell.to_string()
    };
    Tag::Cell.wrap(&Tag::Center.wrap(&content))
}

impl Rule for TableRule {
    fn name(&self) -> &'static str {
        "table"
    }

    fn apply(&mut self, text: &str) -> RuleOutput {
        self.table_open = false;

        let lines: Vec<TableLine> = TABLE_LINE
            .captures_iter(text)
            .map(|caps| TableLine::from_captures(&caps))
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
