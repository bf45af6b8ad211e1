#[macro_export]
macro_rules! log_or_err {
    ($state:expr, $level:expr, $err:expr $(,)?) => {{
        if $level <= $state.fail_level {
            return Err($err);
        } else {
            match $level {
                ::log::Level::Error => ::log::error!("{}", $err),
                ::log::Level::Warn => ::log::warn!("{}", $err),
                ::log::Level::Info => ::log::info!("{}", $err),
                ::log::Level::Debug => ::log::debug!("{}", $err),
                ::log::Level::Trace => ::log::trace!("{}", $err),
            }
        }
    }};
}

#[derive(thiserror::Error, Debug)]
pub enum FrameError {
    #[error("Frame length {0} too short - frame ignored")]
    TooShort(usize),

    #[error("Superframe length {sf_len} for frame length {frame_len} not divisible by 120 - frame ignored")]
    MisalignedLength { frame_len: usize, sf_len: usize },

    #[error("Different frame length {found} (should be: {expected}) - frame ignored")]
    LengthMismatch { found: usize, expected: usize },
}

#[derive(thiserror::Error, Debug)]
pub enum SyncError {
    #[error("Degenerate offset table (first entry bytes are zero)")]
    DegenerateOffsets,

    #[error("Fire code mismatch: calculated {calculated:#06X}, read {read:#06X}")]
    FireCodeMismatch { calculated: u16, read: u16 },

    #[error("AU start offsets not strictly increasing: au_start[{index}] = {value} >= au_start[{next_index}] = {next}")]
    NonMonotonicOffsets {
        index: usize,
        value: usize,
        next_index: usize,
        next: usize,
    },
}

#[derive(thiserror::Error, Debug)]
pub enum AccessUnitError {
    #[error("AU #{index} too short: {len} byte(s)")]
    TooShort { index: usize, len: usize },

    #[error("CRC mismatch for AU #{index}: calculated {calculated:#06X}, read {read:#06X}")]
    CrcMismatch {
        index: usize,
        calculated: u16,
        read: u16,
    },
}

#[derive(thiserror::Error, Debug)]
pub enum RsError {
    #[error("Uncorrectable Reed-Solomon codeword")]
    Uncorrectable,
}

#[derive(thiserror::Error, Debug)]
pub enum CodecError {
    #[error("Unsupported audio configuration: {0}")]
    UnsupportedConfiguration(String),

    #[error("Decoder initialization failed: {0}")]
    BackendInit(String),

    #[error("Decoder did not consume all input: {consumed} of {len} bytes")]
    IncompleteConsume { consumed: usize, len: usize },

    #[error("Decode failed: {0}")]
    DecodeFailed(String),
}
