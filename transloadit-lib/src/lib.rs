mod error;
pub mod multipart;
pub mod signing;
pub mod upload;

pub type Result<T> = std::result::Result<T, error::Error>;

pub use error::*;
