//! Source — a line/token cursor over one animation file.
//!
//! Directives are whitespace-delimited tokens, but frame images are physical
//! lines, so the loader needs both views over the same input. `next_token`
//! scans across line boundaries; `next_line` abandons whatever is left of
//! the line the tokenizer stopped in and yields the next full line.

use std::io::BufRead;

use anyhow::Result;

#[derive(Debug)]
pub struct Source {
    lines: Vec<String>,
    /// Line the tokenizer is currently in.
    line: usize,
    /// Byte offset of the tokenizer within that line.
    col: usize,
}

impl Source {
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            lines,
            line: 0,
            col: 0,
        })
    }

    pub fn from_str(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_owned).collect(),
            line: 0,
            col: 0,
        }
    }

    /// Next whitespace-delimited token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<&str> {
        while self.line < self.lines.len() {
            let rest = &self.lines[self.line][self.col..];
            match rest.find(|c: char| !c.is_whitespace()) {
                None => {
                    self.line += 1;
                    self.col = 0;
                }
                Some(offset) => {
                    let start = self.col + offset;
                    let line = &self.lines[self.line];
                    let end = line[start..]
                        .find(char::is_whitespace)
                        .map_or(line.len(), |e| start + e);
                    self.col = end;
                    return Some(&self.lines[self.line][start..end]);
                }
            }
        }
        None
    }

    /// Next full physical line, or `None` at end of input.
    ///
    /// If the tokenizer has consumed part of the current line, the remainder
    /// of that line is discarded first: an image body always starts on the
    /// line after its header.
    pub fn next_line(&mut self) -> Option<&str> {
        if self.col > 0 {
            self.line += 1;
            self.col = 0;
        }
        if self.line < self.lines.len() {
            let line = &self.lines[self.line];
            self.line += 1;
            Some(line)
        } else {
            None
        }
    }
}
