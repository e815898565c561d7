// src/core/debug.rs
//! Scanner and evaluator tracing on stderr. Off unless `QLANG_DEBUG` is `1`, `true`,
//! `yes` or `on`; the variable is read once per process.
use std::sync::OnceLock;

pub const DEBUG_VAR: &str = "QLANG_DEBUG";

pub fn is_enabled() -> bool {
    static TRACE: OnceLock<bool> = OnceLock::new();
    *TRACE.get_or_init(|| std::env::var(DEBUG_VAR).is_ok_and(|v| switch_on(&v)))
}

fn switch_on(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        if $crate::core::debug::is_enabled() {
            eprintln!("qlang: {}", format_args!($($arg)*));
        }
    }};
}
