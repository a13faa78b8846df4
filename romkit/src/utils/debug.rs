//! Process-wide debug switch.
//!
//! When enabled, byte operations warn about buffers that are passed as owned
//! copies instead of borrowed views. The flag never changes any result.

use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG: AtomicBool = AtomicBool::new(false);

/// Enables or disables the view advisory.
pub fn set_debug(enabled: bool) {
    DEBUG.store(enabled, Ordering::Relaxed);
}

#[inline(always)]
pub fn debug_enabled() -> bool {
    DEBUG.load(Ordering::Relaxed)
}
