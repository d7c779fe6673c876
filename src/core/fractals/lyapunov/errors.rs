use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NonFiniteValue { field: &'static str, value: f64 },
    NonPositiveZoom(f64),
    ThresholdOutOfRange { field: &'static str, value: f64 },
    InvertedExponentWindow { lyp_min: f64, lyp_max: f64 },
    ZeroMaxIterationsError,
    EmptyPattern,
    InvalidPatternSymbol { symbol: char, position: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteValue { field, value } => {
                write!(f, "{} must be a finite number, got {}", field, value)
            }
            Self::NonPositiveZoom(zoom) => {
                write!(f, "zoom must be greater than zero, got {}", zoom)
            }
            Self::ThresholdOutOfRange { field, value } => {
                write!(f, "{} must lie in [0, 1], got {}", field, value)
            }
            Self::InvertedExponentWindow { lyp_min, lyp_max } => {
                write!(
                    f,
                    "lyp_min ({}) must be less than lyp_max ({})",
                    lyp_min, lyp_max
                )
            }
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::EmptyPattern => write!(f, "pattern must contain at least one symbol"),
            Self::InvalidPatternSymbol { symbol, position } => {
                write!(
                    f,
                    "pattern symbol '{}' at position {} is not A or B",
                    symbol, position
                )
            }
        }
    }
}

impl Error for ConfigError {}

#[derive(Debug)]
pub enum ConfigFileError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "cannot read config file: {}", err),
            Self::Parse(err) => write!(f, "invalid config JSON: {}", err),
        }
    }
}

impl Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ConfigFileError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}
