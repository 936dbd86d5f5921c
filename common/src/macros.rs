//! Status logging macros.
//!
//! Thin wrappers around `tracing` with fixed targets so a front end can render
//! user facing status lines differently from library diagnostics.

/// Target for plain progress lines.
pub const STATUS_TARGET: &str = "keygr::status";

/// Target for lines announcing a successful step.
pub const SUCCESS_TARGET: &str = "keygr::success";

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "keygr::status", $($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "keygr::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::__tracing::warn!(target: "keygr::status", $($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::__tracing::error!(target: "keygr::status", $($arg)*)
    };
}
