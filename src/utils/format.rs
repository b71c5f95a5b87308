//! Output formatting utilities.

/// Format a byte count in human-readable binary units.
///
/// One decimal place, thousands-separated integer part. `TiB` is the
/// terminal unit; larger values stay in `TiB`.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

    let mut size = bytes as f64;
    let mut unit = UNITS[0];
    for &next in &UNITS[1..] {
        if size < 1024.0 {
            break;
        }
        size /= 1024.0;
        unit = next;
    }
    format!("{} {unit}", with_thousands(size))
}

fn with_thousands(value: f64) -> String {
    let text = format!("{value:.1}");
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "0"));
    let digits = int_part.len();
    let mut grouped = String::with_capacity(digits + digits / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (digits - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{grouped}.{frac_part}")
}
