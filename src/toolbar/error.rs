use thiserror::Error;

pub type ToolbarResult<T> = std::result::Result<T, ToolbarError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToolbarError {
    #[error("toolbar is already decorated with prefix {prefix:?}")]
    AlreadyDecorated { prefix: String },
}
