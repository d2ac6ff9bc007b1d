//! Properties text format
//!
//! Parses the classic `key=value` properties format used by companion
//! resources:
//!
//! - input bytes are decoded as UTF-8 when valid, otherwise as Latin-1
//! - lines end with `\n`, `\r` or `\r\n`
//! - a line whose first non-blank character is `#` or `!` is a comment
//! - a line ending in an odd number of backslashes continues on the next line,
//!   whose leading blanks are dropped
//! - the key ends at the first unescaped `=`, `:` or blank; blanks around the
//!   separator are skipped and at most one `=`/`:` is consumed
//! - escapes: `\t`, `\n`, `\r`, `\f`, `\uXXXX`; any other escaped character
//!   stands for itself
//!
//! Keys keep the position of their first occurrence; a repeated key takes the
//! last value.

use indexmap::IndexMap;
use std::borrow::Cow;
use thiserror::Error;

/// Properties parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertiesError {
    #[error("Malformed \\uxxxx encoding on line {line}")]
    MalformedUnicodeEscape { line: usize },
}

/// Ordered key/value property set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: IndexMap<String, String>,
}

impl Properties {
    /// Create an empty property set
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse properties from raw bytes
    pub fn parse(bytes: &[u8]) -> Result<Self, PropertiesError> {
        Self::parse_str(&decode(bytes))
    }

    /// Parse properties from text
    pub fn parse_str(input: &str) -> Result<Self, PropertiesError> {
        let mut properties = Properties::new();
        for (line, logical) in logical_lines(input) {
            let (key, value) = split_key_value(&logical);
            let key = unescape(key, line)?;
            let value = unescape(value, line)?;
            properties.insert(key, value);
        }
        Ok(properties)
    }

    /// Get a property value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether a key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Set a property, returning the previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Remove a property, preserving the order of the others
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.shift_remove(key)
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut properties = Properties::new();
        for (k, v) in iter {
            properties.insert(k, v);
        }
        properties
    }
}

fn decode(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(s) => Cow::Borrowed(s),
        Err(_) => Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect()),
    }
}

#[inline]
fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\x0c'
}

fn natural_lines(input: &str) -> Vec<&str> {
    let bytes = input.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&input[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&input[start..i]);
                i += 1;
                if i < bytes.len() && bytes[i] == b'\n' {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        lines.push(&input[start..]);
    }
    lines
}

fn ends_with_odd_backslashes(line: &str) -> bool {
    line.bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
}

/// Join continuation lines and drop blanks and comments
///
/// Each logical line is paired with the 1-based number of its first natural
/// line.
fn logical_lines(input: &str) -> Vec<(usize, String)> {
    let naturals = natural_lines(input);
    let mut logical_lines = Vec::new();
    let mut i = 0;
    while i < naturals.len() {
        let line_number = i + 1;
        let first = naturals[i].trim_start_matches(is_blank);
        i += 1;
        if first.is_empty() || first.starts_with('#') || first.starts_with('!') {
            continue;
        }

        let mut logical = String::new();
        let mut current = first;
        loop {
            if !ends_with_odd_backslashes(current) {
                logical.push_str(current);
                break;
            }
            logical.push_str(&current[..current.len() - 1]);
            match naturals.get(i) {
                Some(next) => {
                    current = next.trim_start_matches(is_blank);
                    i += 1;
                }
                None => break,
            }
        }
        logical_lines.push((line_number, logical));
    }
    logical_lines
}

/// Split a logical line into its raw (still escaped) key and value
fn split_key_value(line: &str) -> (&str, &str) {
    let mut key_end = line.len();
    let mut value_start = line.len();
    let mut has_separator = false;
    let mut preceding_backslash = false;

    for (pos, c) in line.char_indices() {
        if !preceding_backslash && (c == '=' || c == ':') {
            key_end = pos;
            value_start = pos + 1;
            has_separator = true;
            break;
        }
        if !preceding_backslash && is_blank(c) {
            key_end = pos;
            value_start = pos + c.len_utf8();
            break;
        }
        preceding_backslash = c == '\\' && !preceding_backslash;
    }

    let rest = &line[value_start..];
    let mut skipped = 0;
    for c in rest.chars() {
        if is_blank(c) {
            skipped += c.len_utf8();
        } else if !has_separator && (c == '=' || c == ':') {
            has_separator = true;
            skipped += 1;
        } else {
            break;
        }
    }

    (&line[..key_end], &rest[skipped..])
}

/// Resolve escape sequences
///
/// Consecutive `\uXXXX` escapes are decoded as UTF-16 so surrogate pairs form
/// a single character; unpaired surrogates become U+FFFD.
fn unescape(raw: &str, line: usize) -> Result<String, PropertiesError> {
    let mut out = String::with_capacity(raw.len());
    let mut units: Vec<u16> = Vec::new();
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            flush_units(&mut units, &mut out);
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('u') => {
                let mut code: u32 = 0;
                for _ in 0..4 {
                    let digit = chars
                        .next()
                        .and_then(|h| h.to_digit(16))
                        .ok_or(PropertiesError::MalformedUnicodeEscape { line })?;
                    code = (code << 4) | digit;
                }
                units.push(code as u16);
            }
            Some(escaped) => {
                flush_units(&mut units, &mut out);
                out.push(match escaped {
                    't' => '\t',
                    'n' => '\n',
                    'r' => '\r',
                    'f' => '\x0c',
                    other => other,
                });
            }
            None => {}
        }
    }
    flush_units(&mut units, &mut out);
    Ok(out)
}

fn flush_units(units: &mut Vec<u16>, out: &mut String) {
    if units.is_empty() {
        return;
    }
    out.extend(
        char::decode_utf16(units.drain(..)).map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER)),
    );
}
