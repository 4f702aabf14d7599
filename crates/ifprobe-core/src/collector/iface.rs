//! Network-interface metrics collector.
//!
//! Responds to the two host-framework operations: metric discovery
//! ([`IfaceCollector::list_metrics`]) and metric collection
//! ([`IfaceCollector::collect_metrics`]). Each call performs one full
//! refresh of the interface statistics tree from `<proc_path>/1/net/dev`,
//! then projects namespaces against it.
//!
//! The collector is synchronous and single-threaded; the statistics tree is
//! owned by the instance and rebuilt on every call. Callers must serialize
//! invocations externally — the instance supports at most one in-flight
//! call.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::collector::procfs::parser::{self, ParseError};
use crate::collector::sysfs::SysfsMetaReader;
use crate::collector::traits::FileSystem;
use crate::config::CollectorConfig;
use crate::namespace::{Namespace, Segment, WILDCARD};
use crate::stats::StatNode;

/// First three namespace segments of every metric this collector serves.
pub const VENDOR: &str = "intel";
pub const CLASS: &str = "procfs";
pub const PLUGIN: &str = "iface";

/// Description attached to the dynamic interface segment.
const INTERFACE_DESCRIPTION: &str = "name of interface";

/// Minimum segments in a resolvable metric request.
const MIN_NAMESPACE_LEN: usize = 5;

/// Statistics source below `proc_path`. PID 1's view of `net/dev` reflects
/// the root network namespace, so the collector observes host interfaces
/// even when running inside a restricted container.
const SOURCE_SUFFIX: &str = "1/net/dev";

/// Tag keys attached to wildcard-expanded metrics.
const TAG_HARDWARE_ADDR: &str = "hardware_addr";
const TAG_MTU: &str = "mtu";

/// Error type for collection failures.
#[derive(Debug)]
pub enum CollectError {
    /// Statistics source unreadable.
    Io(std::io::Error),
    /// Header or line shape violates the table grammar.
    Parse(ParseError),
    /// Requested namespace has fewer segments than a leaf metric.
    MalformedNamespace(usize),
    /// Sysfs metadata lookup failed during wildcard expansion.
    Metadata {
        interface: String,
        source: std::io::Error,
    },
}

impl std::fmt::Display for CollectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectError::Io(e) => write!(f, "I/O error: {}", e),
            CollectError::Parse(e) => write!(f, "parse error: {}", e),
            CollectError::MalformedNamespace(len) => {
                write!(
                    f,
                    "namespace length is too short: expected at least {MIN_NAMESPACE_LEN}, got {len}"
                )
            }
            CollectError::Metadata { interface, source } => {
                write!(f, "metadata lookup failed for {interface}: {source}")
            }
        }
    }
}

impl std::error::Error for CollectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CollectError::Io(e) => Some(e),
            CollectError::Parse(e) => Some(e),
            CollectError::MalformedNamespace(_) => None,
            CollectError::Metadata { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for CollectError {
    fn from(e: std::io::Error) -> Self {
        CollectError::Io(e)
    }
}

impl From<ParseError> for CollectError {
    fn from(e: ParseError) -> Self {
        CollectError::Parse(e)
    }
}

/// One collected metric: namespace, value, timestamp and optional tags.
///
/// `value` is `None` when the requested interface or counter is currently
/// absent; callers must treat that as "unavailable", not as an error.
#[derive(Debug, Clone, Serialize)]
pub struct Metric {
    pub namespace: Namespace,
    pub value: Option<i64>,
    pub timestamp: DateTime<Utc>,
    /// Interface tags (hardware address, MTU); attached only when the
    /// metric came out of a wildcard expansion.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,
}

/// Collector for per-interface network counters.
pub struct IfaceCollector<F: FileSystem + Clone> {
    fs: F,
    /// Resolved statistics source, fixed at construction.
    source: PathBuf,
    meta: SysfsMetaReader<F>,
    /// Statistics tree from the most recent refresh.
    stats: StatNode,
}

impl<F: FileSystem + Clone> IfaceCollector<F> {
    /// Creates a collector reading through `fs`.
    ///
    /// The statistics source path is resolved from `config` once, here;
    /// nothing else reads the configuration afterwards.
    pub fn new(fs: F, config: &CollectorConfig) -> Self {
        let source = PathBuf::from(config.proc_path()).join(SOURCE_SUFFIX);
        Self {
            fs: fs.clone(),
            source,
            meta: SysfsMetaReader::new(fs),
            stats: StatNode::empty(),
        }
    }

    /// Rebuilds the statistics tree from the source table.
    ///
    /// The previous cycle's tree is discarded wholesale; there is no
    /// incremental update.
    fn refresh(&mut self) -> Result<(), CollectError> {
        let content = self.fs.read_to_string(&self.source)?;
        let interfaces = parser::parse_table(&content)?;
        debug!(
            source = %self.source.display(),
            interfaces = interfaces.len(),
            "refreshed interface statistics"
        );
        self.stats = StatNode::from_interfaces(&interfaces);
        Ok(())
    }

    /// Discovery: emits one namespace per distinct counter name observed
    /// across all interfaces, with a wildcard interface segment.
    ///
    /// Discovery advertises that a counter family exists for some
    /// interface; per-interface expansion happens at collection time, so
    /// interfaces are deliberately not enumerated here.
    pub fn list_metrics(&mut self) -> Result<Vec<Namespace>, CollectError> {
        self.refresh()?;

        let mut counters: BTreeSet<&String> = BTreeSet::new();
        if let Some(interfaces) = self.stats.children() {
            for record in interfaces.values() {
                if let Some(children) = record.children() {
                    counters.extend(children.keys());
                }
            }
        }

        Ok(counters
            .into_iter()
            .map(|counter| {
                Namespace::new(vec![
                    Segment::literal(VENDOR),
                    Segment::literal(CLASS),
                    Segment::literal(PLUGIN),
                    Segment::wildcard(INTERFACE_DESCRIPTION),
                    Segment::literal(counter.as_str()),
                ])
            })
            .collect())
    }

    /// Collection: resolves each requested namespace against a fresh tree.
    ///
    /// A request whose 4th segment is the wildcard marker expands to one
    /// metric per interface exposing the counter, tagged with that
    /// interface's hardware address and MTU. A literal request resolves by
    /// walking the tree; absence yields a `None`-valued metric.
    pub fn collect_metrics(&mut self, requested: &[Namespace]) -> Result<Vec<Metric>, CollectError> {
        self.refresh()?;

        let mut metrics = Vec::new();
        for namespace in requested {
            if namespace.len() < MIN_NAMESPACE_LEN {
                return Err(CollectError::MalformedNamespace(namespace.len()));
            }

            let parts = namespace.parts();
            if parts[3] == WILDCARD {
                self.expand_wildcard(namespace, &parts, &mut metrics)?;
            } else {
                let value = self.stats.walk(&parts[3..]);
                metrics.push(Metric {
                    namespace: namespace.clone(),
                    value,
                    timestamp: Utc::now(),
                    tags: BTreeMap::new(),
                });
            }
        }
        Ok(metrics)
    }

    /// Expands a wildcard request over every interface in the tree.
    ///
    /// Interfaces lacking the requested counter are skipped silently — an
    /// optional counter being absent is expected. A failed metadata lookup
    /// aborts the collection call.
    fn expand_wildcard(
        &self,
        namespace: &Namespace,
        parts: &[&str],
        out: &mut Vec<Metric>,
    ) -> Result<(), CollectError> {
        let Some(interfaces) = self.stats.children() else {
            return Ok(());
        };

        for (interface, record) in interfaces {
            let Some(value) = record.walk(&parts[4..]) else {
                continue;
            };

            let meta = self
                .meta
                .lookup(interface)
                .map_err(|source| CollectError::Metadata {
                    interface: interface.clone(),
                    source,
                })?;

            let mut tags = BTreeMap::new();
            tags.insert(TAG_HARDWARE_ADDR.to_string(), meta.hardware_addr);
            tags.insert(TAG_MTU.to_string(), meta.mtu.to_string());

            out.push(Metric {
                namespace: namespace.with_literal_at(3, interface),
                value: Some(value),
                timestamp: Utc::now(),
                tags,
            });
        }
        Ok(())
    }
}
