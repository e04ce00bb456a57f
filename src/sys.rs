// SPDX-License-Identifier: MIT OR Apache-2.0

//! Platform clocks.
//!
//! The monotonic clock comes from `std::time` on native targets and from
//! `web_time` on WebAssembly, where `std::time::Instant` panics. The wall clock
//! produces ISO-8601 instants in UTC with millisecond precision, the same shape
//! a browser's `Date.prototype.toISOString` produces.

#[cfg(not(target_arch = "wasm32"))]
pub use std::time::Instant;
#[cfg(target_arch = "wasm32")]
pub use web_time::Instant;

use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const ISO_8601: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");

/// The current wall-clock instant, e.g. `2024-05-01T12:30:00.125Z`.
pub(crate) fn iso_timestamp() -> String {
    let now = OffsetDateTime::now_utc();
    now.format(ISO_8601)
        .unwrap_or_else(|_| now.unix_timestamp().to_string())
}

/// Milliseconds elapsed since `start`, with sub-millisecond precision.
pub(crate) fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// Rounds milliseconds to two decimal places.
pub(crate) fn round_ms(ms: f64) -> f64 {
    (ms * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn timestamp_is_rfc3339_utc() {
        let stamp = iso_timestamp();
        assert_eq!(stamp.len(), "2024-05-01T12:30:00.125Z".len(), "{stamp}");
        assert!(stamp.ends_with('Z'));
        let parsed = OffsetDateTime::parse(
            &stamp,
            &time::format_description::well_known::Rfc3339,
        )
        .expect("timestamp should parse as RFC 3339");
        assert_eq!(parsed.offset(), time::UtcOffset::UTC);
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn rounds_to_hundredths() {
        assert_eq!(round_ms(1.23456), 1.23);
        assert_eq!(round_ms(0.005_1), 0.01);
        assert_eq!(round_ms(12.0), 12.0);
    }
}
