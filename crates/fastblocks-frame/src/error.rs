/// Errors that can occur while framing a message stream.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// A boundary marker carries an offset that is not valid hexadecimal.
    #[error("malformed index line: {line:?}")]
    MalformedIndex { line: String },

    /// A marker offset moved backwards; the index does not describe a
    /// forward partition of the raw stream.
    #[error("non-monotonic offset (cursor at {start:#x}, marker at {end:#x})")]
    NonMonotonicOffset { start: u64, end: u64 },

    /// The raw stream ended before a full message could be copied.
    #[error("raw stream truncated ({got} of {expected} bytes read)")]
    TruncatedInput { expected: u64, got: u64 },

    /// An I/O error occurred while reading or writing a stream.
    #[error("frame I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FrameError>;
