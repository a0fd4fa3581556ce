use std::sync::atomic::{AtomicUsize, Ordering};

pub mod assets;
pub mod version;

static ID_COUNTER: AtomicUsize = AtomicUsize::new(1);

/// Process-unique ids for manifest rows and toasts.
pub fn generate_id(prefix: &str) -> String {
    let value = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{value}")
}

/// Rounds to whole ISK and inserts thousands separators, the way the game
/// client renders wallet figures.
pub fn format_isk(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative && grouped != "0" {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::{format_isk, generate_id};

    #[test]
    fn ids_never_repeat() {
        let first = generate_id("row");
        let second = generate_id("row");
        assert_ne!(first, second);
        assert!(first.starts_with("row-"));
    }

    #[test]
    fn isk_formatting_groups_thousands() {
        assert_eq!(format_isk(0.0), "0");
        assert_eq!(format_isk(999.4), "999");
        assert_eq!(format_isk(1_100_000.0), "1,100,000");
        assert_eq!(format_isk(-63_000_000.0), "-63,000,000");
        assert_eq!(format_isk(-0.2), "0");
    }
}
