use storeld_core::FieldKey;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("input is {len} bytes, above the {limit}-byte limit")]
    InputTooLarge { len: usize, limit: usize },

    #[error("invalid marker rule for {field}: {reason}")]
    InvalidRule { field: FieldKey, reason: String },
}
