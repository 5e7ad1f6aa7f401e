//! ScoreTable: lays player snapshots out as a fixed-width score sheet.
//!
//! This module is pure (no I/O). Each line is a list of spans tagged with
//! what they show, so the renderer can style strikes, spares and
//! provisional totals without re-parsing text.

use crate::core::{FrameSnapshot, PlayerSnapshot};
use crate::types::{FrameKind, ThrowSymbol, FRAMES_PER_GAME};

/// Width of the name column, names are padded or truncated to fit.
pub const NAME_COLUMN_WIDTH: usize = 12;

/// Width of the total column.
pub const TOTAL_COLUMN_WIDTH: usize = 9;

/// Width of a frame column: `[a,b]` or `[a,b,c]`.
pub fn frame_column_width(kind: FrameKind) -> usize {
    2 + kind.capacity() * 2 - 1
}

/// Full width of a table line.
pub fn table_width() -> usize {
    let frames: usize = (0..FRAMES_PER_GAME)
        .map(|i| frame_column_width(FrameKind::for_index(i)) + 1)
        .sum();
    1 + NAME_COLUMN_WIDTH + 1 + frames + TOTAL_COLUMN_WIDTH + 1
}

/// What a span of text shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Border,
    Header,
    Name,
    Symbol(ThrowSymbol),
    /// A running total; `resolved` is false while a bonus is still pending.
    Score { resolved: bool },
    Total { finished: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub kind: SpanKind,
}

impl Span {
    fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

pub type Line = Vec<Span>;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScoreTable {
    lines: Vec<Line>,
}

impl ScoreTable {
    pub fn from_snapshots(players: &[PlayerSnapshot]) -> Self {
        let width = table_width();
        let mut lines = vec![
            vec![Span::new(centered("Current=Scores", width, '='), SpanKind::Header)],
            column_header(),
        ];
        for player in players {
            lines.push(vec![Span::new("-".repeat(width), SpanKind::Border)]);
            lines.push(symbol_row(player));
            lines.push(score_row(player));
        }
        Self { lines }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Lines without styling information.
    pub fn to_plain_lines(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| line.iter().map(|span| span.text.as_str()).collect())
            .collect()
    }
}

fn column_header() -> Line {
    let mut line = vec![
        border(),
        Span::new(centered("Name", NAME_COLUMN_WIDTH, ' '), SpanKind::Header),
        border(),
    ];
    for i in 0..FRAMES_PER_GAME {
        let width = frame_column_width(FrameKind::for_index(i));
        line.push(Span::new(centered(&(i + 1).to_string(), width, ' '), SpanKind::Header));
        line.push(border());
    }
    line.push(Span::new(centered("Total", TOTAL_COLUMN_WIDTH, ' '), SpanKind::Header));
    line.push(border());
    line
}

fn symbol_row(player: &PlayerSnapshot) -> Line {
    let mut line = vec![
        border(),
        Span::new(fit(&player.name, NAME_COLUMN_WIDTH), SpanKind::Name),
        border(),
    ];
    for frame in &player.frames {
        line.push(border_text("["));
        for (i, &symbol) in frame.symbols.iter().enumerate() {
            if i > 0 {
                line.push(border_text(","));
            }
            line.push(Span::new(symbol.to_string(), SpanKind::Symbol(symbol)));
        }
        line.push(border_text("]"));
        line.push(border());
    }
    line.push(Span::new(" ".repeat(TOTAL_COLUMN_WIDTH), SpanKind::Border));
    line.push(border());
    line
}

fn score_row(player: &PlayerSnapshot) -> Line {
    let mut line = vec![
        border(),
        Span::new(" ".repeat(NAME_COLUMN_WIDTH), SpanKind::Border),
        border(),
    ];
    for frame in &player.frames {
        let width = frame_column_width(frame.kind);
        line.push(Span::new(
            fit(&score_text(frame), width),
            SpanKind::Score {
                resolved: frame.resolved,
            },
        ));
        line.push(border());
    }
    line.push(Span::new(
        fit(&player.total.to_string(), TOTAL_COLUMN_WIDTH),
        SpanKind::Total {
            finished: player.finished,
        },
    ));
    line.push(border());
    line
}

/// Frames nobody has bowled yet show no total.
fn score_text(frame: &FrameSnapshot) -> String {
    if frame.symbols.first().is_some_and(|s| s.is_thrown()) {
        frame.score.to_string()
    } else {
        String::new()
    }
}

fn border() -> Span {
    border_text("|")
}

fn border_text(text: &str) -> Span {
    Span::new(text, SpanKind::Border)
}

/// Pad with trailing spaces or truncate to exactly `width` characters.
fn fit(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat(' ').take(width - len));
    out
}

fn centered(text: &str, width: usize, fill: char) -> String {
    let len = text.chars().count().min(width);
    let left = (width - len + 1) / 2;
    let right = width - len - left;
    let mut out = String::with_capacity(width);
    out.extend(std::iter::repeat(fill).take(left));
    out.extend(text.chars().take(len));
    out.extend(std::iter::repeat(fill).take(right));
    out
}
