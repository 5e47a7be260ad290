//! Reading `local.properties` from the hybris config directory.
//!
//! A missing directory, a missing file and an unreadable file all mean the
//! same thing to callers: there are no local overrides.

use crate::constants::LOCAL_PROPERTIES;
use camino::Utf8Path;
use indexmap::IndexMap;
use std::fs::File;
use std::io::Read;

/// Key/value overrides from `local.properties`, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalProperties {
    entries: IndexMap<String, String>,
}

impl LocalProperties {
    /// Load `<config_directory>/local.properties`.
    ///
    /// Returns `None` when the directory is absent or empty, when the file
    /// does not exist, or when it cannot be read. Read failures are logged at
    /// info level and otherwise swallowed.
    pub fn load(config_directory: Option<&Utf8Path>) -> Option<Self> {
        let config_directory = config_directory.filter(|dir| !dir.as_str().is_empty())?;
        let path = config_directory.join(LOCAL_PROPERTIES);

        if !path.is_file() {
            tracing::debug!("No {} found at {}", LOCAL_PROPERTIES, path);
            return None;
        }

        let mut bytes = Vec::new();
        let read = File::open(&path).and_then(|mut file| file.read_to_end(&mut bytes));
        if let Err(e) = read {
            tracing::info!("Failed to read {}: {}", path, e);
            return None;
        }

        let properties = Self::parse(&String::from_utf8_lossy(&bytes));
        tracing::debug!("Loaded {} entries from {}", properties.len(), path);
        Some(properties)
    }

    /// Parse properties-file text.
    ///
    /// Supports `#`/`!` comment lines, `=`, `:` or whitespace separators,
    /// backslash line continuations and the usual escapes including `\uXXXX`.
    /// Later duplicates override earlier ones.
    pub fn parse(text: &str) -> Self {
        let mut entries = IndexMap::new();
        for line in logical_lines(text) {
            let (key, value) = split_entry(&line);
            entries.insert(key, value);
        }
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Value for `key`, or `default` when the key is absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocalProperties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0C')
}

/// Join continued physical lines and drop blank and comment lines.
fn logical_lines(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut lines = physical_lines(text).into_iter();

    while let Some(line) = lines.next() {
        let first = line.trim_start_matches(is_blank);
        if first.is_empty() || first.starts_with(['#', '!']) {
            continue;
        }

        let mut logical = String::new();
        let mut current = first;
        loop {
            if !ends_with_unescaped_backslash(current) {
                logical.push_str(current);
                break;
            }
            logical.push_str(&current[..current.len() - 1]);
            match lines.next() {
                Some(next) => current = next.trim_start_matches(is_blank),
                None => break,
            }
        }
        out.push(logical);
    }

    out
}

/// Split on `\n`, `\r\n` or a lone `\r`.
fn physical_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let Some(end) = rest.find(['\n', '\r']) else {
            lines.push(rest);
            break;
        };
        lines.push(&rest[..end]);
        let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + terminator..];
    }

    lines
}

fn ends_with_unescaped_backslash(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

fn split_entry(line: &str) -> (String, String) {
    let chars: Vec<char> = line.chars().collect();

    let mut key_end = chars.len();
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            '=' | ':' => {
                key_end = i;
                break;
            }
            c if is_blank(c) => {
                key_end = i;
                break;
            }
            _ => i += 1,
        }
    }

    let mut value_start = key_end;
    while value_start < chars.len() && is_blank(chars[value_start]) {
        value_start += 1;
    }
    if value_start < chars.len() && matches!(chars[value_start], '=' | ':') {
        value_start += 1;
    }
    while value_start < chars.len() && is_blank(chars[value_start]) {
        value_start += 1;
    }

    (
        unescape(&chars[..key_end]),
        unescape(&chars[value_start..]),
    )
}

fn unescape(chars: &[char]) -> String {
    let mut out = String::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c != '\\' {
            out.push(c);
            i += 1;
            continue;
        }

        i += 1;
        let Some(&escaped) = chars.get(i) else {
            break;
        };
        match escaped {
            't' => out.push('\t'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            'f' => out.push('\x0C'),
            'u' => {
                if let Some(ch) = chars.get(i + 1..i + 5).and_then(decode_unicode) {
                    out.push(ch);
                    i += 5;
                    continue;
                }
                out.push('u');
            }
            other => out.push(other),
        }
        i += 1;
    }

    out
}

fn decode_unicode(hex: &[char]) -> Option<char> {
    let hex: String = hex.iter().collect();
    u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32)
}
