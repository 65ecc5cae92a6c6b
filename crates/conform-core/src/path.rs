//! # Instance Paths
//!
//! Structured paths into a candidate JSON document, built segment by
//! segment during the validation walk and rendered as RFC 6901 JSON
//! Pointers (`/collection/0/currency`).
//!
//! The root path renders as the empty string, matching the pointer
//! grammar; human-facing output layers (violation display, CLI) decide
//! how to present it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// One segment of an [`InstancePath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// An object member key.
    Key(String),
    /// An array element index.
    Index(usize),
}

/// A path into a candidate document, from the root to one value.
///
/// Paths are immutable; [`InstancePath::child_key`] and
/// [`InstancePath::child_index`] return extended copies, which keeps the
/// validation walk free of push/pop bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct InstancePath {
    segments: Vec<PathSegment>,
}

impl InstancePath {
    /// The path of the document root.
    pub fn root() -> Self {
        Self::default()
    }

    /// True if this path points at the document root.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// The segments from root to the addressed value.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Extend the path with an object member key.
    pub fn child_key(&self, key: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Key(key.to_string()));
        Self { segments }
    }

    /// Extend the path with an array element index.
    pub fn child_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// Render the path as an RFC 6901 JSON Pointer.
    ///
    /// The root path renders as `""`; keys containing `~` or `/` are
    /// escaped as `~0` and `~1`.
    pub fn pointer(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                PathSegment::Key(key) => {
                    for c in key.chars() {
                        match c {
                            '~' => out.push_str("~0"),
                            '/' => out.push_str("~1"),
                            _ => out.push(c),
                        }
                    }
                }
                PathSegment::Index(index) => {
                    out.push_str(&index.to_string());
                }
            }
        }
        out
    }
}

impl fmt::Display for InstancePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pointer())
    }
}

/// Error parsing a JSON Pointer into an [`InstancePath`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathParseError {
    /// A non-empty pointer must start with `/`.
    #[error("pointer must be empty or start with '/': {0:?}")]
    MissingLeadingSlash(String),

    /// `~` may only be followed by `0` or `1`.
    #[error("invalid escape '~{0}' in pointer segment")]
    InvalidEscape(char),

    /// A segment ended in a bare `~`.
    #[error("dangling '~' at end of pointer segment")]
    DanglingTilde,
}

impl FromStr for InstancePath {
    type Err = PathParseError;

    /// Parse an RFC 6901 pointer. All-digit segments are taken to be
    /// array indexes; there is no way to distinguish them from numeric
    /// object keys in pointer syntax, and the corpus does not use
    /// numeric keys.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::root());
        }
        let rest = s
            .strip_prefix('/')
            .ok_or_else(|| PathParseError::MissingLeadingSlash(s.to_string()))?;

        let mut segments = Vec::new();
        for raw in rest.split('/') {
            let token = unescape(raw)?;
            if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
                if let Ok(index) = token.parse::<usize>() {
                    segments.push(PathSegment::Index(index));
                    continue;
                }
            }
            segments.push(PathSegment::Key(token));
        }
        Ok(Self { segments })
    }
}

fn unescape(raw: &str) -> Result<String, PathParseError> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '~' {
            match chars.next() {
                Some('0') => out.push('~'),
                Some('1') => out.push('/'),
                Some(other) => return Err(PathParseError::InvalidEscape(other)),
                None => return Err(PathParseError::DanglingTilde),
            }
        } else {
            out.push(c);
        }
    }
    Ok(out)
}

impl Serialize for InstancePath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.pointer())
    }
}

impl<'de> Deserialize<'de> for InstancePath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_renders_empty() {
        assert_eq!(InstancePath::root().pointer(), "");
        assert!(InstancePath::root().is_root());
    }

    #[test]
    fn child_segments_render_as_pointer() {
        let path = InstancePath::root()
            .child_key("collection")
            .child_index(0)
            .child_key("currency");
        assert_eq!(path.pointer(), "/collection/0/currency");
        assert!(!path.is_root());
    }

    #[test]
    fn keys_are_escaped() {
        let path = InstancePath::root().child_key("a/b").child_key("c~d");
        assert_eq!(path.pointer(), "/a~1b/c~0d");
    }

    #[test]
    fn parse_round_trips() {
        for pointer in ["", "/collection/0/currency", "/a~1b/c~0d", "/emailNotifications/3"] {
            let parsed: InstancePath = pointer.parse().unwrap();
            assert_eq!(parsed.pointer(), pointer);
        }
    }

    #[test]
    fn parse_distinguishes_indexes() {
        let parsed: InstancePath = "/collection/12".parse().unwrap();
        assert_eq!(
            parsed.segments(),
            &[
                PathSegment::Key("collection".to_string()),
                PathSegment::Index(12)
            ]
        );
    }

    #[test]
    fn parse_rejects_missing_slash() {
        let err = "collection".parse::<InstancePath>().unwrap_err();
        assert!(matches!(err, PathParseError::MissingLeadingSlash(_)));
    }

    #[test]
    fn parse_rejects_bad_escapes() {
        assert!(matches!(
            "/a~2b".parse::<InstancePath>().unwrap_err(),
            PathParseError::InvalidEscape('2')
        ));
        assert!(matches!(
            "/a~".parse::<InstancePath>().unwrap_err(),
            PathParseError::DanglingTilde
        ));
    }

    #[test]
    fn serde_round_trip() {
        let path = InstancePath::root().child_key("self");
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "\"/self\"");
        let back: InstancePath = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
    }
}
