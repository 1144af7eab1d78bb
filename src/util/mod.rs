//! util — shared small helpers.
//!
//! Contains:
//! - now_secs(): current Unix time in seconds.
//! - file_timestamp(): local-time `yyyymmdd_HHMMSS` stamp for artifact names.
//! - sanitize_label(): capture label made safe for file names.
//! - trunc2(): fixed 2-decimal rendering of a float, truncated toward zero.
//!
//! Goal: keep trivial helpers out of the walkers and centralize behavior.

use chrono::Local;

/// Current Unix time in seconds (saturating, never panics).
#[inline]
pub fn now_secs() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Local-time stamp used in artifact file names: `yyyymmdd_HHMMSS`.
#[inline]
pub fn file_timestamp() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Make a capture label safe to embed in a file name.
/// Non-alphanumeric runs collapse to a single `_`; an empty label becomes "capture".
pub fn sanitize_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut last_us = false;
    for c in label.chars() {
        if c.is_ascii_alphanumeric() || c == '-' {
            out.push(c);
            last_us = false;
        } else if !last_us {
            out.push('_');
            last_us = true;
        }
    }
    let trimmed = out.trim_matches('_');
    if trimmed.is_empty() {
        "capture".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Render a float with exactly two decimal digits, truncated toward zero.
/// `1.239` -> `"1.23"`, `-0.009` -> `"-0.00"`.
#[inline]
pub fn trunc2(v: f32) -> String {
    let t = (v as f64 * 100.0).trunc() / 100.0;
    format!("{:.2}", t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trunc2_truncates_not_rounds() {
        assert_eq!(trunc2(1.239), "1.23");
        assert_eq!(trunc2(2.0), "2.00");
        assert_eq!(trunc2(-3.456), "-3.45");
        assert_eq!(trunc2(0.999), "0.99");
    }

    #[test]
    fn sanitize_label_basic() {
        assert_eq!(sanitize_label("Main Menu"), "Main_Menu");
        assert_eq!(sanitize_label("scene/07: boss?"), "scene_07_boss");
        assert_eq!(sanitize_label("***"), "capture");
        assert_eq!(sanitize_label(""), "capture");
    }

    #[test]
    fn now_secs_monotonic_nonzero() {
        let a = now_secs();
        let b = now_secs();
        assert!(b >= a);
        assert!(a > 0);
    }
}
