//! Terminal score sheet.
//!
//! - [`table`]: pure layout of player snapshots into a fixed-width table
//! - [`renderer`]: flushes a table to stdout (or any writer) with crossterm styling
//!
//! Column widths live here, not in `core`; the engine only exposes symbols and
//! totals.

pub mod renderer;
pub mod table;

pub use tui_bowling_core as core;
pub use tui_bowling_types as types;

pub use renderer::{encode_plain_into, encode_table_into, style_for, Rgb, SpanStyle, TableRenderer};
pub use table::{ScoreTable, Span, SpanKind};
