//! Line-based prompts over any reader/writer pair.

use std::io::{BufRead, Write};

use anyhow::{bail, Result};
use tracing::warn;

use crate::pin_state::{parse_pin_state, parse_player_count};

/// Asks questions on `writer` and reads answers from `reader`, re-asking
/// until the answer is well formed.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    line: String,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            line: String::new(),
        }
    }

    pub fn read_player_count(&mut self) -> Result<usize> {
        loop {
            let answer = parse_player_count(self.ask("enter the number of players: ")?);
            match answer {
                Ok(count) => return Ok(count),
                Err(err) => self.reject(&err)?,
            }
        }
    }

    /// Read the name of player `number` (1-based). A blank answer gets a
    /// default name.
    pub fn read_player_name(&mut self, number: usize) -> Result<String> {
        let prompt = format!("enter the name of player {number}: ");
        let name = self.ask(&prompt)?;
        if name.is_empty() {
            Ok(format!("Player {number}"))
        } else {
            Ok(name.to_string())
        }
    }

    /// Read a pin-state reading for `player` and return the pins left standing.
    pub fn read_standing_count(&mut self, player: &str) -> Result<u8> {
        let prompt = format!("enter pin state for {player}: ");
        loop {
            let answer = parse_pin_state(self.ask(&prompt)?);
            match answer {
                Ok(standing) => return Ok(standing),
                Err(err) => self.reject(&err)?,
            }
        }
    }

    /// Tell the user why an answer was refused.
    pub fn reject(&mut self, reason: &dyn std::fmt::Display) -> Result<()> {
        warn!(%reason, "input rejected");
        writeln!(self.writer, "invalid input: {reason}")?;
        Ok(())
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn ask(&mut self, prompt: &str) -> Result<&str> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            bail!("input closed");
        }
        Ok(self.line.trim())
    }
}
