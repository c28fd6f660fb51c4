//! Mien stabilizes the jittery per-frame output of in-browser-style perception classifiers.
//!
//! Face classifiers emit one raw age reading and one emotion score map per processed video
//! frame. Both are too noisy to display directly: the age jumps several years between frames and
//! carries a systematic offset, and the emotion label flickers. This crate turns those raw
//! readings into stable overlay values:
//!
//! * [`avg`] — windowed and exponential averaging primitives.
//! * [`calib`] — bias-corrected, clamped, rounded age estimation against a configured reference.
//! * [`classify`] — per-frame label score maps and their dominant-label reduction.
//! * [`analyzer`] — the per-face wrapper invoked once per detected frame, plus handedness
//!   mirroring for selfie-view hand tracking.
//!
//! Everything here is synchronous, single-threaded in-memory arithmetic; camera capture, the
//! classifier runtimes and the rendering layer are external collaborators.

use log::LevelFilter;

pub mod analyzer;
pub mod avg;
pub mod calib;
pub mod classify;
pub mod timer;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and this library log at *debug* level; `RUST_LOG` overrides as usual. If a
/// global logger is already registered, this macro does nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
