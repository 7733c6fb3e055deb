use thiserror::Error;

/// Precondition violations in caller-constructed attendance data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("subject {id}: attended {attended} exceeds total {total}")]
    AttendedExceedsTotal { id: String, attended: u32, total: u32 },

    #[error("duplicate subject id: {0}")]
    DuplicateSubject(String),
}
