// SPDX-License-Identifier: MPL-2.0
//! Default values and accepted ranges for the settings file.

use crate::domain::progress::progress_bounds;

/// Milliseconds between two simulated progress ticks.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 500;
pub const MIN_TICK_INTERVAL_MS: u64 = 16;
pub const MAX_TICK_INTERVAL_MS: u64 = 10_000;

/// Percentage points per tick. Twenty ticks with the default.
pub const DEFAULT_PROGRESS_STEP: u8 = progress_bounds::DEFAULT_STEP;
pub const MIN_PROGRESS_STEP: u8 = 1;
pub const MAX_PROGRESS_STEP: u8 = progress_bounds::MAX;

pub const DEFAULT_UPLOAD_ENDPOINT: &str = "http://localhost:5000/upload";

/// Upload request timeout in seconds. Videos can be large.
pub const DEFAULT_UPLOAD_TIMEOUT_SECS: u64 = 300;
pub const MIN_UPLOAD_TIMEOUT_SECS: u64 = 5;
pub const MAX_UPLOAD_TIMEOUT_SECS: u64 = 3_600;

/// Toast lifetime for success and info.
pub const NOTIFICATION_SHORT_MS: u64 = 3_000;
/// Toast lifetime for warnings.
pub const NOTIFICATION_LONG_MS: u64 = 5_000;

const _: () = {
    assert!(0 < MIN_TICK_INTERVAL_MS);
    assert!(MIN_TICK_INTERVAL_MS <= DEFAULT_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS <= MAX_TICK_INTERVAL_MS);

    assert!(0 < MIN_PROGRESS_STEP);
    assert!(MIN_PROGRESS_STEP <= DEFAULT_PROGRESS_STEP);
    assert!(DEFAULT_PROGRESS_STEP <= MAX_PROGRESS_STEP);

    assert!(0 < MIN_UPLOAD_TIMEOUT_SECS);
    assert!(MIN_UPLOAD_TIMEOUT_SECS <= DEFAULT_UPLOAD_TIMEOUT_SECS);
    assert!(DEFAULT_UPLOAD_TIMEOUT_SECS <= MAX_UPLOAD_TIMEOUT_SECS);

    assert!(NOTIFICATION_SHORT_MS < NOTIFICATION_LONG_MS);
};
