use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FarmError {
	#[error("farm {id} not found")]
	NotFound { id: i64 },

	#[error("farm name has {len} characters, at most {} are allowed", super::MAX_NAME_LENGTH)]
	NameTooLong { len: usize },
}
