/// Evaluates the enclosed block and logs, at `debug`, how long it took.
#[doc(hidden)]
#[macro_export]
macro_rules! time {
    ($label:expr => $($token:tt)*) => ({
        let start = std::time::Instant::now();
        let value = { $($token)* };
        $crate::tracing::debug!("{} took {}ms", $label, start.elapsed().as_millis());
        value
    });
}

/// A `&'static Regex`, compiled the first time it is used. Panics if the
/// pattern is invalid.
#[doc(hidden)]
#[macro_export]
macro_rules! static_regex {
    ($pattern:expr) => ({
        static REGEX: once_cell::sync::OnceCell<regex::Regex> = once_cell::sync::OnceCell::new();
        REGEX.get_or_init(|| regex::Regex::new($pattern).unwrap_or_else(|e| panic!("{e}")))
    });
}

pub use {time, static_regex};
