/// Conditional logging module for development builds
///
/// The `log!` macro provides informational logging that is compiled out in
/// production (release) builds by default. Warnings and errors go through
/// `leptos::logging::warn!` and `leptos::logging::error!` directly.
///
/// Logging is enabled when either:
/// - Building in debug mode (`cfg(debug_assertions)`)
/// - The `console_logging` feature is explicitly enabled
///
/// Output goes to the browser console on wasm and to stdout in native test
/// and bench builds, so drawing code can log without a browser present.
///
/// # Examples
///
/// ```ignore
/// use railmap_overlay::logging::log;
///
/// log!("Loaded network: {} stations", 20);
/// ```
/// Conditionally log in development builds
///
/// This macro expands to `leptos::logging::log!` in debug builds or when the
/// `console_logging` feature is enabled. In production release builds it
/// compiles to nothing (zero overhead).
#[macro_export]
macro_rules! log {
    ($($arg:expr),+ $(,)?) => {
        #[cfg(any(debug_assertions, feature = "console_logging"))]
        {
            leptos::logging::log!("{}", format!($($arg),+));
        }
    };
}

pub use crate::log;
