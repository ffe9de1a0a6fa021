// SPDX-License-Identifier: GPL-3.0-only

//! Storage capacity estimates feeding the remaining-photos badge
//!
//! The badge shows how many more photos fit on disk. The host supplies the
//! raw free-byte count; this module turns it into a shot estimate and
//! decides when the count is meaningful at all.

use tracing::debug;

/// Free space below this is treated as "no storage left", in bytes
pub const LOW_STORAGE_THRESHOLD_BYTES: i64 = 50_000_000;

/// Rough size of one captured photo, in bytes
pub const PHOTO_SIZE_BYTES: i64 = 3_000_000;

/// Free bytes remaining above the low-storage floor.
///
/// Non-positive means the device is effectively full even if a few bytes
/// are technically free.
pub fn usable_space(available_bytes: i64) -> i64 {
    available_bytes - LOW_STORAGE_THRESHOLD_BYTES
}

/// Estimate how many more photos fit in the given free space.
///
/// Returns a negative value ("unknown") when the device is below the
/// low-storage floor, mirroring the unknown-count convention of the badge.
pub fn remaining_photos(available_bytes: i64) -> i32 {
    let usable = usable_space(available_bytes);
    if usable <= 0 {
        debug!(available_bytes, "Below low-storage floor");
        return -1;
    }
    (usable / PHOTO_SIZE_BYTES).min(i32::MAX as i64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_photos_estimate() {
        // 350 MB free: 300 MB usable, 100 photos at 3 MB each
        assert_eq!(remaining_photos(350_000_000), 100);
    }

    #[test]
    fn test_remaining_unknown_when_full() {
        assert_eq!(remaining_photos(0), -1);
        assert_eq!(remaining_photos(LOW_STORAGE_THRESHOLD_BYTES), -1);
    }

    #[test]
    fn test_usable_space_sign() {
        assert!(usable_space(LOW_STORAGE_THRESHOLD_BYTES + 1) > 0);
        assert!(usable_space(LOW_STORAGE_THRESHOLD_BYTES - 1) < 0);
    }
}
