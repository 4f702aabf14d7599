//! Parser for the `/proc/net/dev` statistics table.
//!
//! These are pure functions that parse table text into per-interface
//! counter records. They are designed to be easily testable with string
//! inputs.
//!
//! The table format is fixed: a title line, a header line of `|`-delimited
//! segments whose middle segment carries the whitespace-separated column
//! base-names, then one `"<iface>: <values>"` line per interface:
//!
//! ```text
//! Inter-|   Receive                                                |  Transmit
//!  face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed
//!     lo: 1234567     1234    0    0    0     0          0         0  1234567     1234    0    0    0     0       0          0
//! ```
//!
//! Header or line shape violations mean the whole source cannot be trusted
//! and fail the parse. A single unparseable counter value does not: it is
//! logged and replaced with the `UNPARSABLE` sentinel so one glitched
//! counter cannot blind the collector to every other interface.

use tracing::warn;

use crate::stats::{InterfaceStats, StatRecord};

/// Sentinel stored in place of a counter value that failed to parse.
///
/// Kept at `-1` even though it is indistinguishable from a legitimate
/// negative reading; downstream consumers depend on this value.
pub const UNPARSABLE: i64 = -1;

/// Suffix for receive-side column names.
const RECV_SUFFIX: &str = "_recv";
/// Suffix for transmit-side column names.
const SENT_SUFFIX: &str = "_sent";

/// Minimum `|`-delimited segments in the header line.
const MIN_HEADER_SEGMENTS: usize = 3;
/// Minimum column base-names in the header's middle segment.
const MIN_HEADER_COLUMNS: usize = 8;

/// Error type for table-shape violations. Fatal for the refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Table is too short to contain a header line.
    MissingHeader,
    /// Header line does not contain the expected `|`-delimited segments.
    WrongHeaderFormat(String),
    /// Header middle segment holds fewer column names than expected.
    WrongHeaderLength(usize),
    /// Data line does not split into interface name and value blob.
    WrongLineFormat(String),
    /// Value blob field count differs from the header column count.
    WrongFieldCount {
        interface: String,
        expected: usize,
        got: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::MissingHeader => write!(f, "table has no header line"),
            ParseError::WrongHeaderFormat(line) => {
                write!(f, "wrong header format: {{{line}}}")
            }
            ParseError::WrongHeaderLength(got) => {
                write!(
                    f,
                    "wrong header length: expected at least {MIN_HEADER_COLUMNS}, got {got}"
                )
            }
            ParseError::WrongLineFormat(line) => {
                write!(f, "wrong interface line format: {{{line}}}")
            }
            ParseError::WrongFieldCount {
                interface,
                expected,
                got,
            } => {
                write!(
                    f,
                    "wrong data length for {interface}: expected {expected}, got {got}"
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Builds the ordered column-name list from the header line.
///
/// The middle `|`-segment holds the receive-side base names; the same names
/// describe the transmit side. The result is the receive half suffixed
/// `_recv` followed by the transmit half suffixed `_sent` — 16 columns for
/// the canonical 8-name header.
pub fn parse_header(line: &str) -> Result<Vec<String>, ParseError> {
    let segments: Vec<&str> = line.split('|').collect();
    if segments.len() < MIN_HEADER_SEGMENTS {
        return Err(ParseError::WrongHeaderFormat(line.to_string()));
    }

    let base: Vec<&str> = segments[1].split_whitespace().collect();
    if base.len() < MIN_HEADER_COLUMNS {
        return Err(ParseError::WrongHeaderLength(base.len()));
    }

    let mut columns = Vec::with_capacity(base.len() * 2);
    columns.extend(base.iter().map(|name| format!("{name}{RECV_SUFFIX}")));
    columns.extend(base.iter().map(|name| format!("{name}{SENT_SUFFIX}")));
    Ok(columns)
}

/// Parses the full table into per-interface counter records.
///
/// Line 0 is the title (ignored), line 1 the header, the rest data lines;
/// blank lines are skipped. Each data line must carry exactly one value per
/// header column. An individual value that fails to parse as `i64` is
/// logged and stored as [`UNPARSABLE`]; the rest of the table still parses.
pub fn parse_table(content: &str) -> Result<InterfaceStats, ParseError> {
    let lines: Vec<&str> = content.lines().collect();
    if lines.len() < 2 {
        return Err(ParseError::MissingHeader);
    }

    let columns = parse_header(lines[1])?;

    let mut interfaces = InterfaceStats::new();
    for line in &lines[2..] {
        if line.trim().is_empty() {
            continue;
        }

        let Some((name, blob)) = line.split_once(':') else {
            return Err(ParseError::WrongLineFormat((*line).to_string()));
        };
        let name = name.trim();

        let fields: Vec<&str> = blob.split_whitespace().collect();
        if fields.len() != columns.len() {
            return Err(ParseError::WrongFieldCount {
                interface: name.to_string(),
                expected: columns.len(),
                got: fields.len(),
            });
        }

        let mut record = StatRecord::new();
        for (column, raw) in columns.iter().zip(&fields) {
            let value = match raw.parse::<i64>() {
                Ok(v) => v,
                Err(_) => {
                    warn!(
                        interface = name,
                        column = column.as_str(),
                        raw = *raw,
                        "unparsable counter value, storing sentinel"
                    );
                    UNPARSABLE
                }
            };
            record.insert(column.clone(), value);
        }

        interfaces.insert(name.to_string(), record);
    }

    Ok(interfaces)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = " face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed";

    fn table(data_lines: &[&str]) -> String {
        let mut content = String::from(
            "Inter-|   Receive                                                |  Transmit\n",
        );
        content.push_str(HEADER);
        content.push('\n');
        for line in data_lines {
            content.push_str(line);
            content.push('\n');
        }
        content
    }

    #[test]
    fn test_parse_header_builds_both_halves() {
        let columns = parse_header(HEADER).unwrap();
        assert_eq!(columns.len(), 16);
        assert_eq!(columns[0], "bytes_recv");
        assert_eq!(columns[7], "multicast_recv");
        assert_eq!(columns[8], "bytes_sent");
        assert_eq!(columns[15], "multicast_sent");
    }

    #[test]
    fn test_parse_header_too_few_segments() {
        let err = parse_header("bytes packets errs").unwrap_err();
        assert!(matches!(err, ParseError::WrongHeaderFormat(_)));
    }

    #[test]
    fn test_parse_header_too_few_columns() {
        let err = parse_header(" face |bytes packets errs|bytes packets errs").unwrap_err();
        assert_eq!(err, ParseError::WrongHeaderLength(3));
    }

    #[test]
    fn test_parse_table_two_interfaces() {
        let content = table(&[
            "    lo: 12345678     9876    0    0    0     0          0         0 12345678     9876    0    0    0     0       0          0",
            "  eth0: 987654321   654321    5   10    0     0          0       100 123456789   456789    2    5    0     0       0          0",
        ]);
        let interfaces = parse_table(&content).unwrap();

        assert_eq!(interfaces.len(), 2);
        let lo = &interfaces["lo"];
        assert_eq!(lo.len(), 16);
        assert_eq!(lo["bytes_recv"], 12345678);
        assert_eq!(lo["packets_sent"], 9876);

        let eth0 = &interfaces["eth0"];
        assert_eq!(eth0.len(), 16);
        assert_eq!(eth0["errs_recv"], 5);
        assert_eq!(eth0["drop_sent"], 5);
        assert_eq!(eth0["multicast_recv"], 100);
    }

    #[test]
    fn test_parse_table_trims_interface_name() {
        let content = table(&[
            "    lo: 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16",
        ]);
        let interfaces = parse_table(&content).unwrap();
        assert!(interfaces.contains_key("lo"));
    }

    #[test]
    fn test_parse_table_skips_blank_lines() {
        let content = table(&[
            "    lo: 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16",
            "",
        ]);
        let interfaces = parse_table(&content).unwrap();
        assert_eq!(interfaces.len(), 1);
    }

    #[test]
    fn test_parse_table_line_without_colon() {
        let content = table(&["garbage line with no delimiter"]);
        let err = parse_table(&content).unwrap_err();
        assert!(matches!(err, ParseError::WrongLineFormat(_)));
    }

    #[test]
    fn test_parse_table_wrong_field_count() {
        let content = table(&["    lo: 1 2 3 4 5"]);
        let err = parse_table(&content).unwrap_err();
        assert_eq!(
            err,
            ParseError::WrongFieldCount {
                interface: "lo".to_string(),
                expected: 16,
                got: 5,
            }
        );
    }

    #[test]
    fn test_parse_table_bad_header_adds_no_interfaces() {
        let content = "title\nbad header\n    lo: 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16\n";
        let err = parse_table(content).unwrap_err();
        assert!(matches!(err, ParseError::WrongHeaderFormat(_)));
    }

    #[test]
    fn test_parse_table_missing_header() {
        assert_eq!(parse_table("title only\n").unwrap_err(), ParseError::MissingHeader);
        assert_eq!(parse_table("").unwrap_err(), ParseError::MissingHeader);
    }

    #[test]
    fn test_unparsable_field_becomes_sentinel() {
        let content = table(&[
            "    lo: 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16",
            "  eth0: 100 oops 3 4 5 6 7 8 9 10 11 12 13 14 15 16",
        ]);
        let interfaces = parse_table(&content).unwrap();

        // only the glitched counter carries the sentinel
        let eth0 = &interfaces["eth0"];
        assert_eq!(eth0["packets_recv"], UNPARSABLE);
        assert_eq!(eth0["bytes_recv"], 100);
        assert_eq!(eth0["multicast_sent"], 16);

        // other interfaces are untouched
        assert_eq!(interfaces["lo"]["bytes_recv"], 1);
    }

    #[test]
    fn test_parse_table_replaces_duplicate_interface() {
        let content = table(&[
            "    lo: 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16",
            "    lo: 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36",
        ]);
        let interfaces = parse_table(&content).unwrap();
        assert_eq!(interfaces.len(), 1);
        assert_eq!(interfaces["lo"]["bytes_recv"], 21);
    }
}
