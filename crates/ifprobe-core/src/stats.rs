//! Per-cycle interface statistics tree.
//!
//! One refresh of the `/proc/net/dev` table produces a two-level mapping:
//! interface name → counter name → value. Metric resolution walks that
//! mapping by namespace path, so the mapping is modeled as an explicit tree
//! of `Leaf`/`Node` variants rather than nested dynamic maps. Absence and
//! type mismatches along a walk yield `None`, never an error — a counter
//! that is not there is expected (e.g. an interface that disappeared
//! between discovery and collection).

use std::collections::BTreeMap;

/// Counter name → value for one interface.
pub type StatRecord = BTreeMap<String, i64>;

/// Interface name → counter record, rebuilt in full on every refresh.
pub type InterfaceStats = BTreeMap<String, StatRecord>;

/// Node of the statistics tree: a counter value or a nested mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatNode {
    Leaf(i64),
    Node(BTreeMap<String, StatNode>),
}

impl Default for StatNode {
    fn default() -> Self {
        Self::Node(BTreeMap::new())
    }
}

impl StatNode {
    /// Empty tree, the state before the first refresh.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the two-level tree from parsed interface records.
    pub fn from_interfaces(interfaces: &InterfaceStats) -> Self {
        let mut root = BTreeMap::new();
        for (name, record) in interfaces {
            let counters = record
                .iter()
                .map(|(counter, value)| (counter.clone(), StatNode::Leaf(*value)))
                .collect();
            root.insert(name.clone(), StatNode::Node(counters));
        }
        Self::Node(root)
    }

    /// Leaf value, or `None` for a nested mapping.
    pub fn value(&self) -> Option<i64> {
        match self {
            Self::Leaf(v) => Some(*v),
            Self::Node(_) => None,
        }
    }

    /// Child mapping, or `None` for a leaf.
    pub fn children(&self) -> Option<&BTreeMap<String, StatNode>> {
        match self {
            Self::Leaf(_) => None,
            Self::Node(children) => Some(children),
        }
    }

    /// Walks `path` down the tree and returns the leaf value it ends on.
    ///
    /// Returns `None` if any path element is missing, if the path ends on a
    /// nested mapping, or if it tries to descend through a leaf.
    pub fn walk(&self, path: &[&str]) -> Option<i64> {
        let (first, rest) = path.split_first()?;
        let child = self.children()?.get(*first)?;
        if rest.is_empty() {
            child.value()
        } else {
            child.walk(rest)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> StatNode {
        let mut interfaces = InterfaceStats::new();
        let mut lo = StatRecord::new();
        lo.insert("bytes_recv".to_string(), 12345678);
        lo.insert("packets_recv".to_string(), 9876);
        interfaces.insert("lo".to_string(), lo);
        let mut eth0 = StatRecord::new();
        eth0.insert("bytes_recv".to_string(), 987654321);
        interfaces.insert("eth0".to_string(), eth0);
        StatNode::from_interfaces(&interfaces)
    }

    #[test]
    fn test_walk_finds_leaf() {
        let tree = sample_tree();
        assert_eq!(tree.walk(&["lo", "bytes_recv"]), Some(12345678));
        assert_eq!(tree.walk(&["eth0", "bytes_recv"]), Some(987654321));
    }

    #[test]
    fn test_walk_missing_interface() {
        let tree = sample_tree();
        assert_eq!(tree.walk(&["wlan0", "bytes_recv"]), None);
    }

    #[test]
    fn test_walk_missing_counter() {
        let tree = sample_tree();
        assert_eq!(tree.walk(&["eth0", "packets_recv"]), None);
    }

    #[test]
    fn test_walk_stops_on_inner_node() {
        // Path ending on a mapping is not a metric.
        let tree = sample_tree();
        assert_eq!(tree.walk(&["lo"]), None);
    }

    #[test]
    fn test_walk_through_leaf_is_mismatch() {
        let tree = sample_tree();
        assert_eq!(tree.walk(&["lo", "bytes_recv", "deeper"]), None);
    }

    #[test]
    fn test_walk_empty_path() {
        let tree = sample_tree();
        assert_eq!(tree.walk(&[]), None);
    }

    #[test]
    fn test_empty_tree() {
        let tree = StatNode::empty();
        assert_eq!(tree.walk(&["lo", "bytes_recv"]), None);
        assert!(tree.children().unwrap().is_empty());
    }
}
