use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("Division by zero")]
    DivideByZero,
}

pub type Result<T> = std::result::Result<T, Error>;
