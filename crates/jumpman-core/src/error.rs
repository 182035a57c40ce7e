use thiserror::Error;

pub type Result<T> = std::result::Result<T, JmError>;

#[derive(Debug, Error)]
pub enum JmError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("address 0x{0:04x} is not in any segment")]
    UnmappedAddress(u16),

    #[error("segment too short for level table pointer: {len} bytes")]
    MissingLevelTable { len: usize },
}
