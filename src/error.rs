use alloc::string::String;

/// Result type used by every fallible `ByteCursor` operation.
pub type Result<T> = core::result::Result<T, CursorError>;

/// Error type for `ByteCursor` and the byte-transform helpers.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum CursorError {
    /// A read asked for more bytes than remain in the logical view. The cursor position is not
    /// advanced.
    EndOfBuffer {
        /// Number of bytes the read needed.
        requested: usize,
        /// Number of bytes that were left between the position and the end of the view.
        available: usize,
    },

    /// A terminator-delimited read reached the end of the view without finding the terminator,
    /// and the caller asked for this to be an error.
    TerminatorNotFound {
        /// The byte value that was searched for.
        terminator: u8,
    },

    /// The request uses a parameter combination that is not implemented.
    Unsupported(Unsupported),

    /// Input bytes were malformed for the requested transform or text encoding.
    Decode(DecodeError),
}

/// Operations or parameters that are recognized but not implemented.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Unsupported {
    /// `process_rotate_left` only supports a group size of 1.
    RotateGroupSize(usize),
    /// No decoder is registered for this encoding label.
    Encoding(String),
    /// 64-bit integers are not decoded by this cursor.
    Int64,
    /// `process_xor_many` needs a key of at least one byte.
    EmptyXorKey,
    /// Bit-level reads are limited to 64 bits.
    BitWidth(u32),
}

/// Malformed input found while decoding text or decompressing.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum DecodeError {
    /// Bytes are not well-formed in the named encoding.
    Malformed(&'static str),
    /// A text decoder supplied by the caller rejected the input.
    Custom(String),
    /// The zlib stream is corrupt or truncated.
    Zlib(String),
}

impl CursorError {
    pub(crate) fn eob(requested: usize, available: usize) -> Self {
        Self::EndOfBuffer {
            requested,
            available,
        }
    }
}

impl From<Unsupported> for CursorError {
    fn from(value: Unsupported) -> Self {
        Self::Unsupported(value)
    }
}

impl From<DecodeError> for CursorError {
    fn from(value: DecodeError) -> Self {
        Self::Decode(value)
    }
}

impl core::error::Error for CursorError {}

impl core::fmt::Display for CursorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EndOfBuffer {
                requested,
                available,
            } => write!(
                f,
                "requested {requested} bytes, but only {available} bytes available"
            ),
            Self::TerminatorNotFound { terminator } => {
                write!(f, "end of stream reached, but no terminator 0x{terminator:02x} found")
            }
            Self::Unsupported(u) => write!(f, "unsupported operation: {u}"),
            Self::Decode(e) => write!(f, "decode error: {e}"),
        }
    }
}

impl core::fmt::Display for Unsupported {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::RotateGroupSize(n) => write!(f, "rotation with group size {n}"),
            Self::Encoding(label) => write!(f, "text encoding {label:?}"),
            Self::Int64 => f.write_str("64-bit integer reads"),
            Self::EmptyXorKey => f.write_str("XOR with an empty key"),
            Self::BitWidth(n) => write!(f, "bit-level read of {n} bits"),
        }
    }
}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Malformed(name) => write!(f, "malformed {name} data"),
            Self::Custom(msg) => f.write_str(msg),
            Self::Zlib(msg) => write!(f, "zlib: {msg}"),
        }
    }
}
