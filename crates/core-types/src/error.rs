use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Title and content are required.")]
    MissingRequiredFields,

    #[error("Title or content must be provided for update.")]
    EmptyUpdate,
}
