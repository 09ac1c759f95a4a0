//! SDK error type.

use crate::state::RecordKind;

/// All errors returned by the cp-amm SDK.
///
/// Decoding is the only fallible surface; the accrual math is total.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    // ── Account parsing ──────────────────────────────────────────────────────
    /// The buffer ends before the discriminator or before a field at its fixed offset.
    #[error("Buffer too short at offset {offset}: need {needed} bytes, buffer is {len} bytes")]
    BufferTooShort { offset: usize, needed: usize, len: usize },

    /// The leading 8 bytes are not the discriminator of the requested account kind.
    #[error("Discriminator mismatch: not a {kind} account (expected {expected:?}, found {found:?})")]
    TagMismatch {
        kind:     RecordKind,
        expected: [u8; 8],
        found:    [u8; 8],
    },
}

/// Convenience alias so every module can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;
