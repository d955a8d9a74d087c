//! JSON output: value model and pretty encoder.

mod value;

pub use value::Value;

use crate::error::Error;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::Write;

/// Indentation unit of the output, one space per nesting level.
const INDENT: &[u8] = b" ";

/// Writes values as indented JSON texts, one after the other.
///
/// Every value is followed by a newline; values are not wrapped in an
/// enclosing array.
pub struct Encoder<W: Write> {
    writer: W,
    count: usize,
}

impl<W: Write> Encoder<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, count: 0 }
    }

    pub fn encode(&mut self, value: &Value) -> Result<(), Error> {
        let mut ser =
            Serializer::with_formatter(&mut self.writer, PrettyFormatter::with_indent(INDENT));
        value.serialize(&mut ser)?;
        self.writer.write_all(b"\n").map_err(Error::Write)?;
        self.count += 1;
        Ok(())
    }

    /// Number of values encoded so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Flush buffered output and give back the writer.
    pub fn finish(mut self) -> Result<W, Error> {
        self.writer.flush().map_err(Error::Write)?;
        Ok(self.writer)
    }
}
