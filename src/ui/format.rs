//! Human-readable sizes

use sharetree::config::SizeUnits;
use sharetree::domain::size::SizeEntry;

const DECIMAL: [&str; 6] = ["B", "kB", "MB", "GB", "TB", "PB"];
const BINARY: [&str; 6] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB"];

/// Format an aggregated size; estimates get a `~` prefix.
pub fn format_size(size: SizeEntry, units: SizeUnits) -> String {
    let text = format_bytes(size.bytes(), units);
    if size.is_exact() {
        text
    } else {
        format!("~{}", text)
    }
}

pub fn format_bytes(bytes: u64, units: SizeUnits) -> String {
    let (base, suffixes) = match units {
        SizeUnits::Decimal => (1000u64, &DECIMAL),
        SizeUnits::Binary => (1024u64, &BINARY),
    };

    if bytes < base {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= base as f64 && unit < suffixes.len() - 1 {
        value /= base as f64;
        unit += 1;
    }
    format!("{:.1} {}", value, suffixes[unit])
}
