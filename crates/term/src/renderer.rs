//! TableRenderer: writes a score table to a terminal (or any writer).
//!
//! Output is built into a byte buffer with crossterm commands and flushed in
//! one write. In plain mode no escape sequences are emitted.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::table::{ScoreTable, SpanKind};
use crate::types::ThrowSymbol;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-span styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanStyle {
    pub fg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl SpanStyle {
    const fn plain(fg: Rgb) -> Self {
        Self {
            fg,
            bold: false,
            dim: false,
        }
    }
}

impl Default for SpanStyle {
    fn default() -> Self {
        Self::plain(Rgb::new(220, 220, 220))
    }
}

/// Style for a span of the given kind.
pub fn style_for(kind: SpanKind) -> SpanStyle {
    match kind {
        SpanKind::Border => SpanStyle::plain(Rgb::new(120, 120, 130)),
        SpanKind::Header => SpanStyle {
            bold: true,
            ..SpanStyle::default()
        },
        SpanKind::Name => SpanStyle {
            fg: Rgb::new(240, 240, 160),
            bold: true,
            dim: false,
        },
        SpanKind::Symbol(ThrowSymbol::Strike) => SpanStyle {
            fg: Rgb::new(230, 80, 80),
            bold: true,
            dim: false,
        },
        SpanKind::Symbol(ThrowSymbol::Spare) => SpanStyle {
            fg: Rgb::new(80, 160, 230),
            bold: true,
            dim: false,
        },
        SpanKind::Symbol(ThrowSymbol::Gutter) => SpanStyle::plain(Rgb::new(140, 140, 140)),
        SpanKind::Symbol(_) => SpanStyle::default(),
        SpanKind::Score { resolved } => SpanStyle {
            dim: !resolved,
            ..SpanStyle::default()
        },
        SpanKind::Total { finished } => SpanStyle {
            fg: Rgb::new(120, 220, 120),
            bold: finished,
            dim: false,
        },
    }
}

pub struct TableRenderer<W: Write> {
    out: W,
    buf: Vec<u8>,
    styled: bool,
}

impl TableRenderer<io::Stdout> {
    pub fn stdout(styled: bool) -> Self {
        Self::new(io::stdout(), styled)
    }
}

impl<W: Write> TableRenderer<W> {
    pub fn new(out: W, styled: bool) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(4 * 1024),
            styled,
        }
    }

    pub fn draw(&mut self, table: &ScoreTable) -> Result<()> {
        self.buf.clear();
        if self.styled {
            encode_table_into(table, &mut self.buf)?;
        } else {
            encode_plain_into(table, &mut self.buf)?;
        }
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Encode a styled table into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_table_into(table: &ScoreTable, out: &mut Vec<u8>) -> Result<()> {
    let mut current_style: Option<SpanStyle> = None;
    for line in table.lines() {
        for span in line {
            let style = style_for(span.kind);
            if current_style != Some(style) {
                apply_style_into(out, style)?;
                current_style = Some(style);
            }
            out.queue(Print(&span.text))?;
        }
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(Print('\n'))?;
        current_style = None;
    }
    Ok(())
}

/// Encode the table as plain text lines into `out`.
pub fn encode_plain_into(table: &ScoreTable, out: &mut Vec<u8>) -> Result<()> {
    for line in table.to_plain_lines() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: SpanStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
