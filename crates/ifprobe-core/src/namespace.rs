//! Hierarchical metric namespace model.
//!
//! A namespace is an ordered path of segments identifying a metric,
//! analogous to a filesystem path: `intel/procfs/iface/eth0/bytes_recv`.
//! The interface position may hold a dynamic wildcard segment that is
//! expanded to every known interface at collection time. Modeling the
//! wildcard as an explicit variant keeps expansion logic in the collector
//! instead of leaning on string conventions.

use serde::{Serialize, Serializer};
use std::fmt;

/// Marker for the dynamic interface segment in textual requests.
pub const WILDCARD: &str = "*";

/// One element of a metric namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Fixed path element.
    Literal(String),
    /// Dynamic element resolved to concrete values at collection time.
    Wildcard {
        /// Human-readable description of the values this element takes.
        description: String,
    },
}

impl Segment {
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    pub fn wildcard(description: impl Into<String>) -> Self {
        Self::Wildcard {
            description: description.into(),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard { .. })
    }

    /// Literal value, or the wildcard marker.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(value) => value,
            Self::Wildcard { .. } => WILDCARD,
        }
    }
}

/// Ordered path of segments identifying a metric.
///
/// A resolvable leaf metric has exactly five segments:
/// `vendor / class / type / interface-or-wildcard / counter`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    segments: Vec<Segment>,
}

impl Namespace {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Builds a namespace of literal segments.
    pub fn from_literals<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: parts.into_iter().map(Segment::literal).collect(),
        }
    }

    /// Parses a `/`-separated path. A `*` element becomes a wildcard;
    /// a leading slash is tolerated.
    pub fn parse(path: &str) -> Self {
        let segments = path
            .split('/')
            .filter(|p| !p.is_empty())
            .map(|p| {
                if p == WILDCARD {
                    Segment::wildcard("")
                } else {
                    Segment::literal(p)
                }
            })
            .collect();
        Self { segments }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segment(&self, idx: usize) -> Option<&Segment> {
        self.segments.get(idx)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Path elements as plain strings; wildcards render as `*`.
    pub fn parts(&self) -> Vec<&str> {
        self.segments.iter().map(Segment::as_str).collect()
    }

    /// Copy of this namespace with the segment at `idx` replaced by a
    /// literal value. Used when expanding the wildcard interface segment.
    pub fn with_literal_at(&self, idx: usize, value: &str) -> Self {
        let mut segments = self.segments.clone();
        if idx < segments.len() {
            segments[idx] = Segment::literal(value);
        }
        Self { segments }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.parts().join("/"))
    }
}

impl Serialize for Namespace {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
