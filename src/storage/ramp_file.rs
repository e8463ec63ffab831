//! Colour ramp files.
//!
//! A ramp file holds a stop count on its first line followed by that many
//! lines of three integer channels:
//!
//! ```text
//! 3
//! 0 0 128
//! 256 256 256
//! 128 0 0
//! ```
//!
//! Blank lines are ignored. Channels use the 0–256 terminal scale and
//! values outside it are rejected.

use crate::core::colour::palette::ramp::{ColourRamp, RampError};
use crate::core::data::rgb::{CHANNEL_MAX, Rgb};
use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug)]
pub enum RampFileError {
    Io(io::Error),
    MissingCount,
    BadCount(String),
    MissingStop { expected: usize, found: usize },
    BadStop { line: usize, text: String },
    CountMismatch { declared: usize, found: usize },
    Ramp(RampError),
}

impl fmt::Display for RampFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "could not read ramp file: {}", err),
            Self::MissingCount => write!(f, "ramp file is empty, expected a stop count"),
            Self::BadCount(text) => write!(f, "invalid stop count {:?}", text),
            Self::MissingStop { expected, found } => {
                write!(f, "ramp file declares {} stops but only has {}", expected, found)
            }
            Self::BadStop { line, text } => {
                write!(f, "line {}: expected three integers, got {:?}", line, text)
            }
            Self::CountMismatch { declared, found } => {
                write!(f, "ramp file declares {} stops but has {}", declared, found)
            }
            Self::Ramp(err) => write!(f, "{}", err),
        }
    }
}

impl Error for RampFileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Ramp(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for RampFileError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<RampError> for RampFileError {
    fn from(err: RampError) -> Self {
        Self::Ramp(err)
    }
}

pub fn load_ramp(path: impl AsRef<Path>) -> Result<ColourRamp, RampFileError> {
    let text = fs::read_to_string(path)?;
    parse_ramp(&text)
}

pub fn parse_ramp(text: &str) -> Result<ColourRamp, RampFileError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (_, count_text) = lines.next().ok_or(RampFileError::MissingCount)?;
    let declared: usize = count_text
        .parse()
        .map_err(|_| RampFileError::BadCount(count_text.to_string()))?;

    let mut stops = Vec::new();
    while let Some((line, text)) = lines.next() {
        if stops.len() == declared {
            return Err(RampFileError::CountMismatch {
                declared,
                found: declared + 1 + lines.by_ref().count(),
            });
        }
        stops.push(parse_stop(line, text)?);
    }

    if stops.len() < declared {
        return Err(RampFileError::MissingStop {
            expected: declared,
            found: stops.len(),
        });
    }

    Ok(ColourRamp::new(stops)?)
}

fn parse_stop(line: usize, text: &str) -> Result<Rgb, RampFileError> {
    let bad_stop = || RampFileError::BadStop {
        line,
        text: text.to_string(),
    };

    let channels = text
        .split_whitespace()
        .map(str::parse::<i32>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| bad_stop())?;

    match channels.as_slice() {
        [r, g, b] if [r, g, b].iter().all(|c| (0..=CHANNEL_MAX).contains(*c)) => {
            Ok(Rgb::new(*r, *g, *b))
        }
        _ => Err(bad_stop()),
    }
}
