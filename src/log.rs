/// Per-element trace events. Compiled out unless the `trace-verbose` feature
/// is enabled, since `map` and `filter` would otherwise emit one event per
/// element.
macro_rules! log {
    ($($arg:tt)*) => {
        #[cfg(feature = "trace-verbose")] {
            tracing::trace!($($arg)*);
        }
    };
}

#[test]
fn test_log() {
    #[allow(unused)]
    let local = "QWERTY";
    log!("This is a test with value `{}`, and local {local}!", 123);
}
