//! Line-prefixed console writer
//!
//! Every line is `[TAG] message`. Lines are written in call order and
//! flushed on `finish`.

use std::io::{self, Write};

/// Writes tagged report lines to any writer.
pub struct Console<W: Write> {
    out: W,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes one `[TAG] message` line.
    pub fn line(&mut self, tag: &str, message: &str) -> io::Result<()> {
        writeln!(self.out, "[{}] {}", tag, message)
    }

    pub fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
