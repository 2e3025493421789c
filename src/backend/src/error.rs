use thiserror::Error;

#[cfg(test)]
mod tests;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TutorialError {
    /// SDL, the window or the event queue could not be brought up
    #[error("initialization failure: {0}")]
    SubsystemInit(String),
    /// one or more bitmaps could not be decoded or reformatted
    #[error("media loading failure: {0}")]
    ResourceLoad(String),
}

impl TutorialError {
    pub fn message(&self) -> &str {
        match self {
            TutorialError::SubsystemInit(msg) | TutorialError::ResourceLoad(msg) => msg,
        }
    }
}
