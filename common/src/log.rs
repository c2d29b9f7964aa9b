//! Status line macros.
//!
//! Thin wrappers over `tracing` so user-facing status lines and diagnostics
//! reach the same subscriber. The level decides the symbol the terminal
//! formatter prints in front of the line.

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "cgpa::status", $($arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "cgpa::status", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        ::tracing::warn!(target: "cgpa::status", $($arg)*)
    };
}
