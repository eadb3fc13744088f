//! Generic tree codec: JSON text to and from `serde_json` trees.
//!
//! Encoding uses [`CalendarFormatter`], which lays documents out the way the
//! seasonal calendar viewer's import tooling expects:
//!
//! ```text
//! {
//!   "name" : "Larrakia",
//!   "tags" : [ "a", "b" ],
//!   "empty" : { }
//! }
//! ```
//!
//! Objects put one entry per line, indented two spaces per object level,
//! with ` : ` between key and value. Arrays stay inline and do not add an
//! indentation level.

use std::io::{self, BufReader, Read, Write};

use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::{Map, Value};

use crate::error::CalendarError;

const INDENT: &[u8] = b"  ";

/// `serde_json` formatter producing the calendar pretty-print layout.
#[derive(Debug, Clone, Default)]
pub struct CalendarFormatter {
    depth: usize,
    has_value: bool,
}

impl CalendarFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    fn newline<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b"\n")?;
        for _ in 0..self.depth {
            writer.write_all(INDENT)?;
        }
        Ok(())
    }
}

impl Formatter for CalendarFormatter {
    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.has_value = false;
        writer.write_all(b"[")
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        // Inline arrays close the same way whether empty or not: `[ ]`, `[ 1 ]`.
        writer.write_all(b" ]")
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let sep: &[u8] = if first { b" " } else { b", " };
        writer.write_all(sep)
    }

    fn end_array_value<W>(&mut self, _writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.has_value = true;
        Ok(())
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.depth += 1;
        self.has_value = false;
        writer.write_all(b"{")
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.depth -= 1;
        if self.has_value {
            self.newline(writer)?;
        } else {
            writer.write_all(b" ")?;
        }
        writer.write_all(b"}")
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if !first {
            writer.write_all(b",")?;
        }
        self.newline(writer)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b" : ")
    }

    fn end_object_value<W>(&mut self, _writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.has_value = true;
        Ok(())
    }
}

/// Encode `value` as pretty-printed UTF-8 JSON into `output`.
///
/// The stream is flushed but not closed; callers keep ownership of it.
pub fn write<T, W>(value: &T, mut output: W) -> Result<(), CalendarError>
where
    T: ?Sized + Serialize,
    W: Write,
{
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut output, CalendarFormatter::new());
    value
        .serialize(&mut serializer)
        .map_err(CalendarError::from_json_write)?;
    output.flush()?;
    Ok(())
}

/// Encode `value` into an owned byte buffer.
pub fn to_vec_pretty<T>(value: &T) -> Result<Vec<u8>, CalendarError>
where
    T: ?Sized + Serialize,
{
    let mut buf = Vec::with_capacity(256);
    write(value, &mut buf)?;
    Ok(buf)
}

/// Decode UTF-8 JSON text whose top level must be an object.
pub fn read<R: Read>(input: R) -> Result<Map<String, Value>, CalendarError> {
    let value: Value =
        serde_json::from_reader(BufReader::new(input)).map_err(CalendarError::from_json)?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(CalendarError::Schema {
            found: kind_name(&other),
        }),
    }
}

pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
