/// Syntax error raised when token input does not reduce to a JSON value.
///
/// Lexing never fails; this is the parser's (and therefore the formatter's)
/// only failure mode. The message names the grammar production that failed
/// and what was expected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
}

impl SyntaxError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        SyntaxError { message: message.into() }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "syntax error: {}", self.message)
    }
}

impl std::error::Error for SyntaxError {}
