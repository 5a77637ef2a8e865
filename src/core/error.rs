use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IslandsError {
    InvalidSize(usize),
    InvalidRatio(u8),
    InvalidColor(String),
}

impl fmt::Display for IslandsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize(n) => write!(f, "invalid grid size: {}", n),
            Self::InvalidRatio(r) => write!(f, "land ratio out of range 0..=100: {}", r),
            Self::InvalidColor(s) => write!(f, "invalid color: {:?}", s),
        }
    }
}

impl std::error::Error for IslandsError {}

pub type Result<T> = std::result::Result<T, IslandsError>;
