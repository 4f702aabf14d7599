//! Interface metadata lookups via `/sys/class/net`.
//!
//! Wildcard expansion tags each emitted metric with the interface's
//! hardware address and MTU. Both attributes are exposed by sysfs as
//! one-line files under `/sys/class/net/<iface>/`.

use std::io;
use std::path::PathBuf;

use crate::collector::traits::FileSystem;

/// Base directory for per-interface sysfs attributes.
const SYS_CLASS_NET: &str = "/sys/class/net";

/// Hardware description of a network interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceMeta {
    /// Hardware (MAC) address, as sysfs reports it.
    pub hardware_addr: String,
    /// Maximum transmission unit in bytes.
    pub mtu: i64,
}

/// Reads interface metadata from sysfs.
pub struct SysfsMetaReader<F: FileSystem> {
    fs: F,
    base: PathBuf,
}

impl<F: FileSystem> SysfsMetaReader<F> {
    /// Creates a reader over the standard sysfs location.
    pub fn new(fs: F) -> Self {
        Self {
            fs,
            base: PathBuf::from(SYS_CLASS_NET),
        }
    }

    /// Looks up hardware address and MTU for the named interface.
    ///
    /// Any unreadable or malformed attribute is an error; callers treat a
    /// failed lookup as fatal for the request being resolved.
    pub fn lookup(&self, name: &str) -> io::Result<InterfaceMeta> {
        let dir = self.base.join(name);

        let address = self.fs.read_to_string(&dir.join("address"))?;
        let mtu_raw = self.fs.read_to_string(&dir.join("mtu"))?;
        let mtu = mtu_raw.trim().parse::<i64>().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("bad mtu for {name}: {e}"),
            )
        })?;

        Ok(InterfaceMeta {
            hardware_addr: address.trim().to_string(),
            mtu,
        })
    }
}
