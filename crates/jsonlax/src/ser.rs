//! Compact JSON rendering.

use alloc::string::{String, ToString};
use core::fmt::{self, Write};

use crate::value::Value;

/// Renders `value` as compact JSON text.
///
/// The output is a single normalized line: members joined by `", "` with no
/// space after `:`, strings double-quoted, numbers in their shortest
/// round-trippable decimal form. Only `\b`, `\f`, `\n`, `\r`, `\t`, and `\"`
/// are escaped in strings; every other character, control or not, passes
/// through verbatim. Rendering never fails for a well-formed tree.
///
/// # Examples
///
/// ```
/// use jsonlax::{parse, stringify};
///
/// let value = parse("[1, 2, {ok: true}, ]").unwrap();
/// assert_eq!(stringify(&value), r#"[1, 2, {"ok":true}]"#);
/// ```
#[must_use]
pub fn stringify(value: &Value) -> String {
    value.to_string()
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(self, f)
    }
}

fn write_value<W: Write>(value: &Value, out: &mut W) -> fmt::Result {
    match value {
        Value::Null => out.write_str("null"),
        Value::Bool(b) => out.write_str(if *b { "true" } else { "false" }),
        Value::Number(n) => write!(out, "{n}"),
        Value::String(s) => write_quoted(s, out),
        Value::Array(entries) => {
            out.write_char('[')?;
            let mut first = true;
            for (_, element) in entries {
                if !first {
                    out.write_str(", ")?;
                }
                first = false;
                write_value(element, out)?;
            }
            out.write_char(']')
        }
        Value::Object(entries) => {
            out.write_char('{')?;
            let mut first = true;
            for (key, member) in entries {
                if !first {
                    out.write_str(", ")?;
                }
                first = false;
                write_quoted(key.unwrap_or(""), out)?;
                out.write_char(':')?;
                write_value(member, out)?;
            }
            out.write_char('}')
        }
    }
}

fn write_quoted<W: Write>(text: &str, out: &mut W) -> fmt::Result {
    out.write_char('"')?;
    for c in text.chars() {
        match c {
            '\x08' => out.write_str("\\b")?,
            '\x0C' => out.write_str("\\f")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            '"' => out.write_str("\\\"")?,
            _ => out.write_char(c)?,
        }
    }
    out.write_char('"')
}
