//! Absolute folder paths.
//!
//! Every path is anchored at the synthetic root. The leading `"root"`
//! segment is implied when a caller leaves it out, so `root/Posters`,
//! `/Posters` and `Posters` all name the same folder.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ROOT_FOLDER;

/// A normalised path from the synthetic root to a folder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct MediaPath {
    /// Always non-empty; `segments[0] == "root"`.
    segments: Vec<String>,
}

impl MediaPath {
    /// The path of the synthetic root itself.
    pub fn root() -> Self {
        Self {
            segments: vec![ROOT_FOLDER.to_string()],
        }
    }

    /// Build a path from folder names. A leading `"root"` is dropped before
    /// the root is re-anchored; every other segment is kept byte for byte,
    /// since folder names are matched exactly against the tree.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut path = Self::root();
        let mut segments = segments.into_iter().map(Into::<String>::into).peekable();
        if segments.peek().is_some_and(|first| first == ROOT_FOLDER) {
            segments.next();
        }
        path.segments.extend(segments);
        path
    }

    /// Parse a typed `/`-separated path. Segments are trimmed and empty
    /// ones skipped, so `" / Posters/ "` is `root/Posters`.
    pub fn parse(path: &str) -> Self {
        Self::from_segments(
            path.split('/')
                .map(str::trim)
                .filter(|segment| !segment.is_empty()),
        )
    }

    /// All segments, starting with `"root"`.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Folder names below the root.
    pub fn folders(&self) -> &[String] {
        &self.segments[1..]
    }

    /// Whether this is the root path.
    pub fn is_root(&self) -> bool {
        self.segments.len() == 1
    }

    /// Number of folders below the root.
    pub fn depth(&self) -> usize {
        self.segments.len() - 1
    }

    /// Final segment (`"root"` for the root path).
    pub fn last(&self) -> &str {
        self.segments
            .last()
            .map(String::as_str)
            .unwrap_or(ROOT_FOLDER)
    }

    /// The enclosing folder's path, `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        let mut segments = self.segments.clone();
        segments.pop();
        Some(Self { segments })
    }

    /// A child path.
    pub fn join(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.into());
        Self { segments }
    }
}

impl Default for MediaPath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for MediaPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

impl FromStr for MediaPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for MediaPath {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<Vec<String>> for MediaPath {
    fn from(segments: Vec<String>) -> Self {
        Self::from_segments(segments)
    }
}

impl From<&[&str]> for MediaPath {
    fn from(segments: &[&str]) -> Self {
        Self::from_segments(segments.iter().copied())
    }
}

impl From<MediaPath> for Vec<String> {
    fn from(path: MediaPath) -> Self {
        path.segments
    }
}
