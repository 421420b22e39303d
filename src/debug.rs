use std::sync::OnceLock;

static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

pub(crate) fn debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| std::env::var("QR_DEBUG").is_ok())
}

/// Stage tracing, compiled in for debug builds and switched on by `QR_DEBUG`.
macro_rules! trace_stage {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) && $crate::debug::debug_enabled() {
            eprintln!($($arg)*);
        }
    };
}

pub(crate) use trace_stage;
