//! Hex color helpers for deriving window chrome and backdrop colors

fn channels(hex: &str) -> [u8; 3] {
    let hex = hex.trim_start_matches('#');
    let byte = |i: usize| {
        hex.get(i..i + 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .unwrap_or(0)
    };
    [byte(0), byte(2), byte(4)]
}

/// Lighten a `#rrggbb` color: each channel moves toward 255 by `amount`
/// of the remaining distance.
pub fn lighten(hex: &str, amount: f64) -> String {
    let [r, g, b] = channels(hex).map(|c| {
        let moved = c as f64 + (255.0 - c as f64) * amount;
        (moved as i64).clamp(0, 255) as u8
    });
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Darken a `#rrggbb` color: each channel moves toward 0 by `amount`
/// of its value.
pub fn darken(hex: &str, amount: f64) -> String {
    let [r, g, b] = channels(hex).map(|c| {
        let moved = c as f64 * (1.0 - amount);
        (moved as i64).clamp(0, 255) as u8
    });
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_amount_is_identity() {
        assert_eq!(lighten("#272822", 0.0), "#272822");
        assert_eq!(darken("#272822", 0.0), "#272822");
        assert_eq!(lighten("272822", 0.0), "#272822");
    }

    #[test]
    fn full_amount_saturates() {
        assert_eq!(lighten("#123456", 1.0), "#ffffff");
        assert_eq!(darken("#123456", 1.0), "#000000");
    }

    #[test]
    fn lighten_is_monotonic_per_channel() {
        let mut prev = [0u8; 3];
        for step in 0..=10 {
            let out = lighten("#102030", step as f64 / 10.0);
            let cur = channels(&out);
            assert!(cur.iter().zip(prev.iter()).all(|(c, p)| c >= p), "{out}");
            prev = cur;
        }
    }

    #[test]
    fn darken_is_monotonic_per_channel() {
        let mut prev = [255u8; 3];
        for step in 0..=10 {
            let out = darken("#e0d0c0", step as f64 / 10.0);
            let cur = channels(&out);
            assert!(cur.iter().zip(prev.iter()).all(|(c, p)| c <= p), "{out}");
            prev = cur;
        }
    }

    #[test]
    fn output_is_lowercase_padded_hex() {
        assert_eq!(lighten("#0a0B0c", 0.0), "#0a0b0c");
        assert_eq!(darken("#FFFFFF", 0.99), "#020202");
    }

    #[test]
    fn repeated_zero_amount_is_idempotent() {
        let once = lighten("#336699", 0.0);
        assert_eq!(lighten(&once, 0.0), once);
    }
}
