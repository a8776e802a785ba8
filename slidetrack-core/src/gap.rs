//! Inter-card spacing detection

use crate::constants::gap::{FALLBACK_PROPERTY, PROPERTY};
use crate::surface::CarouselSurface;

/// Read the track's configured gap, falling back to `default` when the style
/// is unreadable, empty, or not a usable length. Never fails.
pub fn detect_gap<S: CarouselSurface + ?Sized>(surface: &S, default: f32) -> f32 {
    let raw = match surface.track_style(PROPERTY) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        Ok(_) => surface.track_style(FALLBACK_PROPERTY),
        Err(err) => Err(err),
    };

    match raw {
        Ok(value) => match parse_css_length(&value) {
            Some(px) if px.is_finite() && px >= 0.0 => {
                log::debug!("track gap detected: {px}px (from {value:?})");
                px
            }
            _ => {
                log::debug!(
                    "track gap {value:?} is not a usable length, using {default}px"
                );
                default
            }
        },
        Err(err) => {
            log::debug!("track gap unreadable ({err}), using {default}px");
            default
        }
    }
}

/// Parse the leading number of a CSS length such as `"20px"` or `" 1.5rem"`.
///
/// Units are ignored; only the numeric prefix matters. Returns `None` when
/// no digits lead the value (`"normal"`, `""`, `"px"`).
pub fn parse_css_length(value: &str) -> Option<f32> {
    let s = value.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when followed by at least one digit.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f32>().ok()
}
