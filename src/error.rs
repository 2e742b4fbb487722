use std::fmt;

/// All errors produced by cronify.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TriggerError {
    /// The input matched none of the recognized layouts.
    UnrecognizedFormat { input: String },

    /// The input matched a layout but would not parse as a real time or
    /// datetime (e.g. a day that does not exist in its month).
    Parse { input: String, message: String },
}

impl fmt::Display for TriggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedFormat { input } => {
                write!(f, "unrecognized date/time format '{input}'")
            }
            Self::Parse { input, message } => write!(f, "cannot parse '{input}': {message}"),
        }
    }
}

impl std::error::Error for TriggerError {}

impl TriggerError {
    pub fn unrecognized(input: impl Into<String>) -> Self {
        Self::UnrecognizedFormat {
            input: input.into(),
        }
    }

    pub fn parse(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            message: message.into(),
        }
    }

    /// Format a rich error, listing the accepted layouts when nothing matched.
    pub fn display_rich(&self) -> String {
        match self {
            Self::UnrecognizedFormat { .. } => format!(
                "error: {self}\n  accepted: HH:MM:SS | HH:MM:SS D | MM-DD HH:MM:SS | YYYY-MM-DD HH:MM:SS"
            ),
            Self::Parse { .. } => format!("error: {self}"),
        }
    }
}
