//! Logging shims over the `log` facade.
//!
//! With the `logging` feature the macros forward to `log`. Without it they
//! compile to a dead branch that still type-checks the format arguments.

#[cfg(feature = "logging")]
macro_rules! trace_event {
    ($($arg:tt)*) => {
        log::trace!(target: "chess_rules", $($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! trace_event {
    ($($arg:tt)*) => {{
        if false {
            let _ = format_args!($($arg)*);
        }
    }};
}

#[cfg(feature = "logging")]
macro_rules! debug_event {
    ($($arg:tt)*) => {
        log::debug!(target: "chess_rules", $($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! debug_event {
    ($($arg:tt)*) => {{
        if false {
            let _ = format_args!($($arg)*);
        }
    }};
}
