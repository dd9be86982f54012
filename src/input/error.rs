//! Error management.

use super::InputRule;
use crate::algo::RaggedRow;
use derive_more::Display;

#[derive(Debug, Display)]
pub enum Error {
    #[display(fmt = "{}", _0)]
    Io(std::io::Error),
    #[display(fmt = "{}", _0)]
    Parse(pest::error::Error<InputRule>),
    #[display(fmt = "{}", _0)]
    RaggedGrid(RaggedRow),
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<pest::error::Error<InputRule>> for Error {
    fn from(e: pest::error::Error<InputRule>) -> Self {
        Error::Parse(e)
    }
}

impl From<RaggedRow> for Error {
    fn from(e: RaggedRow) -> Self {
        Error::RaggedGrid(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
