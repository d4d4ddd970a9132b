use crate::toolbar::ToolbarError;
use thiserror::Error;

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Toolbar(#[from] ToolbarError),

    #[error("ui main loop exited with status {code}")]
    UiExit { code: i32 },
}
