//! Status macros shared by every crate of the workspace.
//!
//! They all emit `tracing` events on the `herocraft::status` target; the
//! terminal formatter decides how each level is decorated.

pub const STATUS_TARGET: &str = "herocraft::status";

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: $crate::log::STATUS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!(target: $crate::log::STATUS_TARGET, $($arg)*)
    };
}
