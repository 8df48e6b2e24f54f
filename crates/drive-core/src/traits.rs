use crate::error::Result;

/// Validate that a value is internally consistent before it is used.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
