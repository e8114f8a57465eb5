//! Lexical path normalization. Nothing here touches the filesystem.

use std::path::MAIN_SEPARATOR;

/// How two stored paths are compared for equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMode {
    Sensitive,
    Insensitive,
}

impl CaseMode {
    /// Platforms that separate paths with a backslash are treated as
    /// case-insensitive; everything else compares bytes exactly.
    pub fn platform() -> Self {
        if MAIN_SEPARATOR == '\\' {
            CaseMode::Insensitive
        } else {
            CaseMode::Sensitive
        }
    }

    /// Comparison key for an already normalized path.
    pub fn key(self, normalized: &str) -> String {
        match self {
            CaseMode::Sensitive => normalized.to_string(),
            CaseMode::Insensitive => normalized.to_lowercase(),
        }
    }
}

/// Trims and lexically cleans `raw`. Returns `None` when nothing is left
/// after trimming.
pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(clean(trimmed, MAIN_SEPARATOR))
}

/// Collapses repeated separators and resolves `.` and `..` segments.
/// A `..` that would climb above the root is dropped; leading `..`
/// segments of a relative path are kept.
fn clean(path: &str, sep: char) -> String {
    let path = if sep == '\\' {
        path.replace('/', "\\")
    } else {
        path.to_string()
    };

    let (prefix, rest) = split_prefix(&path, sep);
    let rooted = rest.starts_with(sep);

    let mut parts: Vec<&str> = Vec::new();
    for part in rest.split(sep) {
        match part {
            "" | "." => {}
            ".." => match parts.last() {
                Some(last) if *last != ".." => {
                    parts.pop();
                }
                _ if rooted => {}
                _ => parts.push(".."),
            },
            other => parts.push(other),
        }
    }

    let mut out = String::from(prefix);
    if rooted {
        out.push(sep);
    }
    out.push_str(&parts.join(&sep.to_string()));
    if out.is_empty() {
        out.push('.');
    }
    out
}

/// Splits a Windows volume (`C:` or a UNC `\\server\share`) off the front.
/// `..` never climbs out of the volume.
fn split_prefix(path: &str, sep: char) -> (&str, &str) {
    if sep != '\\' {
        return ("", path);
    }
    let bytes = path.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        return path.split_at(2);
    }
    if let Some(tail) = path.strip_prefix("\\\\") {
        let mut parts = tail.splitn(3, '\\');
        if let (Some(server), Some(share)) = (parts.next(), parts.next()) {
            if !server.is_empty() && !share.is_empty() {
                return path.split_at(2 + server.len() + 1 + share.len());
            }
        }
        return path.split_at(1);
    }
    ("", path)
}
