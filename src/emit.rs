//! JSON output
//!
//! Callers parse stdout byte for byte, so the text format is fixed: `", "` and
//! `": "` separators and ASCII-only strings with `\uXXXX` escapes.

use crate::error::{ExtractError, Result};
use serde::Serialize;
use serde_json::ser::Formatter;
use std::io::{self, Write};

/// Spaced separators and escaped non-ASCII text
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiFormatter;

impl Formatter for AsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if (' '..='~').contains(&c) {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + c.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Serialize a value as one line of JSON, without the newline
pub fn to_json_line<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, AsciiFormatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| ExtractError::Unexpected(e.to_string()))
}

/// Write a value as a single JSON line
///
/// The line is fully serialized before anything is written.
pub fn emit<T: Serialize, W: Write>(out: &mut W, value: &T) -> Result<()> {
    let line = to_json_line(value)?;
    writeln!(out, "{}", line)?;
    out.flush()?;
    Ok(())
}
