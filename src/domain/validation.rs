use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidMsisdn { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMsisdn { input } => {
                write!(f, "msisdn must begin with 628 or 08: {input:?}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
