//! Capacity text to metric tons

use crate::model::CapacityMt;

/// Extract metric tons from free-text capacity such as `"50000 MT"`.
///
/// Every character that is not an ASCII digit or `.` is dropped, then the
/// longest leading decimal number is read (`"1.2.3"` reads as `1.2`).
/// Zero, empty, or non-finite results fall back to 1 so that per-MT
/// divisions stay finite.
pub fn extract_capacity_mt(raw: &str) -> CapacityMt {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    match leading_decimal(&kept) {
        Some(value) if value != 0.0 && value.is_finite() => CapacityMt {
            raw: raw.to_string(),
            value,
            fallback: false,
        },
        _ => CapacityMt {
            raw: raw.to_string(),
            value: 1.0,
            fallback: true,
        },
    }
}

fn leading_decimal(s: &str) -> Option<f64> {
    let mut seen_dot = false;
    let end = s
        .char_indices()
        .find(|&(_, c)| {
            if c == '.' {
                if seen_dot {
                    return true;
                }
                seen_dot = true;
            }
            false
        })
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    let prefix = &s[..end];
    if !prefix.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    prefix.parse().ok()
}
