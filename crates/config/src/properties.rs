//! Properties text format.
//!
//! Responsibilities:
//! - Parse `key = value` sources into an ordered `Properties` map.
//! - Provide the merge primitive (`overlay`) used to stack layers.
//!
//! Does NOT handle:
//! - Locating sources (see `resource.rs` and the resolver's file layer).
//! - Precedence between layers (see `resolver/engine.rs`).
//!
//! Invariants:
//! - Sources must be UTF-8; anything else is a `PropertiesError::InvalidUtf8`.
//! - Lines end at `\n`, `\r`, or `\r\n`.
//! - `#` and `!` start comment lines; blank lines are skipped.
//! - The first unescaped `=` or `:` separates key from value; both are trimmed.
//!   Whitespace alone is not a separator: `key value` has no pair.
//! - Lines without a separator are ignored, not rejected.
//! - A line ending in an odd number of backslashes continues on the next line.
//! - Later duplicates overwrite earlier ones.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::Serialize;
use thiserror::Error;

/// Errors raised while parsing a properties source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PropertiesError {
    #[error("source is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },

    #[error("malformed \\uXXXX escape on line {line}")]
    InvalidUnicodeEscape { line: usize },
}

/// An ordered set of string key/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Properties {
    entries: BTreeMap<String, String>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a properties source.
    ///
    /// A leading UTF-8 byte order mark is ignored.
    pub fn parse(bytes: &[u8]) -> Result<Self, PropertiesError> {
        let text = std::str::from_utf8(bytes).map_err(|e| PropertiesError::InvalidUtf8 {
            valid_up_to: e.valid_up_to(),
        })?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        let mut properties = Self::new();
        let mut lines = split_lines(text).enumerate();

        while let Some((index, raw)) = lines.next() {
            let line_no = index + 1;
            let trimmed = raw.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                continue;
            }

            let mut logical = trimmed.to_string();
            while trailing_backslashes(&logical) % 2 == 1 {
                logical.pop();
                match lines.next() {
                    Some((_, next)) => logical.push_str(next.trim_start()),
                    None => break,
                }
            }

            let Some((key, value)) = split_pair(&logical) else {
                tracing::trace!(line = line_no, "ignoring properties line without separator");
                continue;
            };

            let key = unescape(trim_unescaped(key), line_no)?;
            let value = unescape(trim_unescaped(value), line_no)?;
            properties.insert(key, value);
        }

        Ok(properties)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Insert a pair, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Stack `upper` on top of `self`: overlapping keys take `upper`'s value.
    pub fn overlay(&mut self, upper: Properties) {
        self.entries.extend(upper.entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Properties {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Split on `\n`, `\r`, or `\r\n`. A trailing terminator yields no empty line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        let current = rest;
        if current.is_empty() {
            return None;
        }
        let Some(end) = current.find(['\n', '\r']) else {
            rest = "";
            return Some(current);
        };
        let terminator = if current[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &current[end + terminator..];
        Some(&current[..end])
    })
}

fn trailing_backslashes(s: &str) -> usize {
    s.bytes().rev().take_while(|b| *b == b'\\').count()
}

/// Split at the first unescaped `=` or `:`.
fn split_pair(line: &str) -> Option<(&str, &str)> {
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => return Some((&line[..i], &line[i + 1..])),
            _ => {}
        }
    }
    None
}

/// Trim surrounding whitespace, keeping a trailing whitespace character that
/// is itself escaped (`\ `).
fn trim_unescaped(s: &str) -> &str {
    let s = s.trim_start();
    let trimmed = s.trim_end();
    if trimmed.len() < s.len() && trailing_backslashes(trimmed) % 2 == 1 {
        let kept = s[trimmed.len()..].chars().next().map_or(0, char::len_utf8);
        &s[..trimmed.len() + kept]
    } else {
        trimmed
    }
}

fn unescape(s: &str, line: usize) -> Result<String, PropertiesError> {
    if !s.contains('\\') {
        return Ok(s.to_string());
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some('u') => {
                let unit = read_code_unit(&mut chars, line)?;
                let decoded = if (0xD800..0xDC00).contains(&unit) {
                    // High surrogate: the low half must follow as another \u escape.
                    if chars.next() != Some('\\') || chars.next() != Some('u') {
                        return Err(PropertiesError::InvalidUnicodeEscape { line });
                    }
                    let low = read_code_unit(&mut chars, line)?;
                    if !(0xDC00..0xE000).contains(&low) {
                        return Err(PropertiesError::InvalidUnicodeEscape { line });
                    }
                    0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00)
                } else {
                    unit
                };
                let ch = char::from_u32(decoded)
                    .ok_or(PropertiesError::InvalidUnicodeEscape { line })?;
                out.push(ch);
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    Ok(out)
}

fn read_code_unit(chars: &mut std::str::Chars<'_>, line: usize) -> Result<u32, PropertiesError> {
    let hex: String = chars.by_ref().take(4).collect();
    if hex.len() != 4 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(PropertiesError::InvalidUnicodeEscape { line });
    }
    u32::from_str_radix(&hex, 16).map_err(|_| PropertiesError::InvalidUnicodeEscape { line })
}
