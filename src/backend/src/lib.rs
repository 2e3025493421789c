pub mod config;
pub mod error;
pub mod keypress;
pub mod lifecycle;
pub mod media;
pub mod presenter;
pub mod system;

pub use error::TutorialError;
