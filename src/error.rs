use thiserror::Error;

pub type Result<T> = std::result::Result<T, LuhnError>;

#[derive(Error, Debug)]
pub enum LuhnError {
    #[error("invalid number {0:?}: expected one or more decimal digits")]
    InvalidInput(String),
    #[error("invalid length {0}: length must be greater than or equal to 1")]
    InvalidLength(usize),
}
