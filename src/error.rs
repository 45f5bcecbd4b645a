use std::fmt;
use std::io;

pub type Result<T> = std::result::Result<T, ElementalError>;

/// Errors raised while building a symbol table or loading configuration.
///
/// Segmentation itself never fails: a word that cannot be spelled simply
/// yields no forms.
#[derive(Debug)]
pub enum ElementalError {
    /// symbol is not 1 to 3 ASCII letters
    InvalidSymbol(String),
    /// element name is empty or blank
    EmptyName(String),
    /// two symbols collide under case-insensitive comparison
    DuplicateSymbol { symbol: String, existing: String },
    /// extension dictionary line that is not `Symbol Name`
    MalformedLine { line: usize, content: String },
    Io(io::Error),
    Config(serde_yaml::Error),
}

impl fmt::Display for ElementalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementalError::InvalidSymbol(symbol) => {
                write!(f, "invalid element symbol: {:?}", symbol)
            }
            ElementalError::EmptyName(symbol) => {
                write!(f, "element name for symbol {:?} is empty", symbol)
            }
            ElementalError::DuplicateSymbol { symbol, existing } => write!(
                f,
                "symbol {:?} collides with existing symbol {:?}",
                symbol, existing
            ),
            ElementalError::MalformedLine { line, content } => {
                write!(f, "malformed dictionary line {}: {:?}", line, content)
            }
            ElementalError::Io(e) => write!(f, "io error: {}", e),
            ElementalError::Config(e) => write!(f, "config error: {}", e),
        }
    }
}

impl std::error::Error for ElementalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ElementalError::Io(e) => Some(e),
            ElementalError::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ElementalError {
    fn from(e: io::Error) -> Self {
        ElementalError::Io(e)
    }
}

impl From<serde_yaml::Error> for ElementalError {
    fn from(e: serde_yaml::Error) -> Self {
        ElementalError::Config(e)
    }
}
