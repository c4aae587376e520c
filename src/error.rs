use thiserror::Error;

/// Errors produced by the distance metrics in this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An input string was rejected. Carries the name of the offending argument.
    #[error("`{0}` cannot be empty")]
    InvalidArgument(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
