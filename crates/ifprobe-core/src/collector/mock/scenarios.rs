//! Pre-built mock filesystem scenarios for testing.
//!
//! These scenarios provide realistic procfs/sysfs states for exercising
//! the collector end to end.

use super::filesystem::MockFs;

#[allow(dead_code)]
impl MockFs {
    /// A host with two interfaces, `p3p1` and `lo`.
    ///
    /// Counter values mirror a real capture of `/proc/net/dev` on a
    /// two-interface machine; sysfs carries the matching hardware
    /// addresses and MTUs.
    pub fn netdev_host() -> Self {
        let mut fs = Self::new();

        fs.add_file(
            "/proc/1/net/dev",
            "\
Inter-|   Receive                                                |  Transmit
 face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed
  p3p1: 1412848320 12238775    0    0    0     0          0     49808 1284714456 17015516    0    0    0     0       0          0
    lo: 982396974 12238775    0    0    0     0          0         0 982396974 12238775    0    0    0     0       0          0
",
        );

        fs.add_file("/sys/class/net/p3p1/address", "a0:36:9f:0f:8a:28\n");
        fs.add_file("/sys/class/net/p3p1/mtu", "1500\n");
        fs.add_file("/sys/class/net/lo/address", "00:00:00:00:00:00\n");
        fs.add_file("/sys/class/net/lo/mtu", "65536\n");

        fs
    }

    /// Same host, but one counter of `p3p1` is not a number.
    ///
    /// Mirrors a glitched kernel counter observed on some interface types;
    /// the parser must degrade that single value to the sentinel.
    pub fn netdev_host_glitched() -> Self {
        let mut fs = Self::netdev_host();
        fs.add_file(
            "/proc/1/net/dev",
            "\
Inter-|   Receive                                                |  Transmit
 face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed
  p3p1: 1412848320 18446744073709551616x    0    0    0     0          0     49808 1284714456 17015516    0    0    0     0       0          0
    lo: 982396974 12238775    0    0    0     0          0         0 982396974 12238775    0    0    0     0       0          0
",
        );
        fs
    }

    /// A source whose header does not match the expected table grammar.
    pub fn netdev_host_bad_header() -> Self {
        let mut fs = Self::new();
        fs.add_file(
            "/proc/1/net/dev",
            "\
Inter-: Receive and Transmit
 face bytes packets
    lo: 982396974 12238775    0    0    0     0          0         0 982396974 12238775    0    0    0     0       0          0
",
        );
        fs
    }
}
