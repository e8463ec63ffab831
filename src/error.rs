use crate::controllers::interactive::ControllerError;
use crate::logging::LoggingError;
use crate::storage::ramp_file::RampFileError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Controller(ControllerError),
    RampFile(RampFileError),
    Logging(LoggingError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Controller(err) => write!(f, "{}", err),
            Self::RampFile(err) => write!(f, "{}", err),
            Self::Logging(err) => write!(f, "{}", err),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Controller(err) => Some(err),
            Self::RampFile(err) => Some(err),
            Self::Logging(err) => Some(err),
        }
    }
}

impl From<ControllerError> for AppError {
    fn from(err: ControllerError) -> Self {
        Self::Controller(err)
    }
}

impl From<RampFileError> for AppError {
    fn from(err: RampFileError) -> Self {
        Self::RampFile(err)
    }
}

impl From<LoggingError> for AppError {
    fn from(err: LoggingError) -> Self {
        Self::Logging(err)
    }
}
