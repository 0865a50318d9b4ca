/// Emits a TRACE event when the `tracing` feature is enabled; expands to nothing otherwise.
macro_rules! trace {
  ($($arg:tt)*) => {
    #[cfg(feature = "tracing")]
    tracing::trace!($($arg)*);
  };
}
