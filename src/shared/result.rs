/// Type alias for Result with anyhow::Error as the error type.
/// All layers propagate with `?` and attach context at I/O boundaries.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
