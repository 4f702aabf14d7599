//! Network-interface metrics collection from the `/proc` filesystem.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     IfaceCollector                       │
//! │  ┌───────────────────┐      ┌─────────────────────────┐  │
//! │  │   procfs parser   │      │    SysfsMetaReader      │  │
//! │  │ <proc>/1/net/dev  │      │ /sys/class/net/<iface>  │  │
//! │  └─────────┬─────────┘      └────────────┬────────────┘  │
//! │            └──────────────┬──────────────┘               │
//! │                           │                              │
//! │                    ┌──────▼──────┐                       │
//! │                    │  FileSystem │ (trait)               │
//! │                    └──────┬──────┘                       │
//! └───────────────────────────┼──────────────────────────────┘
//!                             │
//!                    ┌────────┴────────┐
//!             ┌──────▼──────┐   ┌──────▼──────┐
//!             │   RealFs    │   │   MockFs    │
//!             │ (Linux)     │   │ (Testing)   │
//!             └─────────────┘   └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use ifprobe_core::collector::{IfaceCollector, MockFs};
//! use ifprobe_core::config::CollectorConfig;
//!
//! let fs = MockFs::netdev_host();
//! let mut collector = IfaceCollector::new(fs, &CollectorConfig::default());
//! let namespaces = collector.list_metrics().unwrap();
//! assert!(!namespaces.is_empty());
//! ```

mod iface;
pub mod mock;
pub mod procfs;
pub mod sysfs;
pub mod traits;

pub use iface::{CLASS, CollectError, IfaceCollector, Metric, PLUGIN, VENDOR};
pub use mock::MockFs;
pub use procfs::ParseError;
pub use sysfs::{InterfaceMeta, SysfsMetaReader};
pub use traits::{FileSystem, RealFs};
