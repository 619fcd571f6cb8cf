/// Size formatting utilities — human-readable byte counts.
///
/// All internal sizes are `u64` bytes. Floating point is only used
/// at the display-formatting boundary.

const KB: f64 = 1024.0;
const MB: f64 = KB * 1024.0;
const GB: f64 = MB * 1024.0;

/// Format a byte count into a human-readable string with appropriate unit.
///
/// Uses binary units (KiB = 1024) labelled with the common short forms.
/// Used in log output where the magnitude varies.
pub fn format_size(bytes: u64) -> String {
    let b = bytes as f64;
    if b < KB {
        format!("{bytes} B")
    } else if b < MB {
        format!("{:.1} KB", b / KB)
    } else if b < GB {
        format!("{:.1} MB", b / MB)
    } else {
        format!("{:.2} GB", b / GB)
    }
}

/// Format a byte count as mebibytes with two decimals, e.g. `"12.34 MB"`.
///
/// The archive report always uses this unit, even for tiny archives.
pub fn format_mib(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / MB)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
    }

    #[test]
    fn test_format_size_kb_mb_gb() {
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1_048_576), "1.0 MB");
        assert_eq!(format_size(1_073_741_824), "1.00 GB");
    }

    #[test]
    fn test_format_mib() {
        assert_eq!(format_mib(0), "0.00 MB");
        assert_eq!(format_mib(1_048_576), "1.00 MB");
        assert_eq!(format_mib(5 * 1_048_576 + 524_288), "5.50 MB");
        // Small archives still report in MB.
        assert_eq!(format_mib(1024), "0.00 MB");
    }
}
