pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{DriveError, Result};
pub use tolerance::Tolerance;
