//! Number formatting for counters.

/// Group digits in threes with commas: `15000` -> `"15,000"`.
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Counter label with optional prefix and suffix, e.g. `"15,000+"`.
pub fn counter_label(prefix: &str, value: u64, suffix: &str) -> String {
    format!("{prefix}{}{suffix}", thousands(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(15_000), "15,000");
        assert_eq!(thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn wraps_with_affixes() {
        assert_eq!(counter_label("", 98, "%"), "98%");
        assert_eq!(counter_label("$", 2500, "+"), "$2,500+");
    }
}
