use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("compressed buffer ends mid-integer (byte offset: {offset})")]
    Truncated { offset: usize },
    #[error("compressed integer exceeds 32 bits (byte offset: {offset})")]
    Overflow { offset: usize },
}

pub type DecodeResult<T> = Result<T, DecodeError>;
