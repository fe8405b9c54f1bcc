//! Error types for 2DM decoding.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// The main error type for 2DM decoding operations.
#[derive(Debug, Error)]
#[error("{kind}{}", .context.as_ref().map(|ctx| format!(" ({ctx})")).unwrap_or_default())]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

/// Result type alias using the 2DM [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Records the zero-based token position the error was raised for.
    #[must_use]
    pub fn at_field(mut self, field: usize) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_field(field));
        self
    }

    /// Records the caller-owned line number the error was raised for.
    #[must_use]
    pub fn at_line(mut self, line: usize) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_line(line));
        self
    }

    /// Creates an unexpected card error.
    #[must_use]
    pub fn unexpected_card(expected: &'static str, found: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnexpectedCard {
            expected,
            found: found.into(),
        })
    }

    /// Creates a missing fields error.
    ///
    /// `required` and `actual` count data fields, i.e. tokens after the card.
    #[must_use]
    pub fn missing_fields(card: impl Into<String>, required: usize, actual: usize) -> Self {
        Self::new(ErrorKind::MissingFields {
            card: card.into(),
            required,
            actual,
        })
    }

    /// Creates an invalid identifier error.
    #[must_use]
    pub fn invalid_id(field: IdField, value: i64) -> Self {
        Self::new(ErrorKind::InvalidId { field, value })
    }

    /// Creates an invalid number error.
    #[must_use]
    pub fn invalid_number(token: impl Into<String>, expected: NumberKind) -> Self {
        Self::new(ErrorKind::InvalidNumber {
            token: token.into(),
            expected,
        })
    }

    /// Creates an unterminated node string error.
    #[must_use]
    pub fn unterminated_node_string(pending: usize) -> Self {
        Self::new(ErrorKind::UnterminatedNodeString { pending })
    }

    /// Returns the category of this error.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    /// Returns true for wrong, unknown, or underfilled cards.
    #[must_use]
    pub fn is_card_error(&self) -> bool {
        self.category() == ErrorCategory::Card
    }

    /// Returns true for well-formed numbers that violate a semantic constraint.
    #[must_use]
    pub fn is_format_error(&self) -> bool {
        self.category() == ErrorCategory::Format
    }

    /// Returns true for malformed numeric literals.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        self.category() == ErrorCategory::Parse
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErrorKind {
    /// The leading keyword does not match the decoder.
    #[error("invalid {expected} card \"{found}\"")]
    UnexpectedCard {
        /// Description of the card the decoder accepts.
        expected: &'static str,
        /// The keyword found on the line.
        found: String,
    },

    /// The line has too few fields for its card.
    #[error("{card} definition requires at least {required} fields, got {actual}")]
    MissingFields {
        /// The card being decoded (empty for blank lines).
        card: String,
        /// Minimum number of data fields after the card.
        required: usize,
        /// Number of data fields present.
        actual: usize,
    },

    /// An identifier parsed but is not allowed.
    #[error("invalid {field} ID: {value}")]
    InvalidId {
        /// Which kind of identifier was rejected.
        field: IdField,
        /// The rejected value.
        value: i64,
    },

    /// A new entity started while a node string was still open.
    #[error("node string with {pending} pending nodes was never terminated")]
    UnterminatedNodeString {
        /// Number of node IDs collected so far.
        pending: usize,
    },

    /// A token is not a well-formed numeric literal.
    #[error("invalid {expected} literal: {token:?}")]
    InvalidNumber {
        /// The offending token.
        token: String,
        /// The kind of number that was expected.
        expected: NumberKind,
    },
}

impl ErrorKind {
    /// Returns the category this kind belongs to.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::UnexpectedCard { .. } | Self::MissingFields { .. } => ErrorCategory::Card,
            Self::InvalidId { .. } | Self::UnterminatedNodeString { .. } => ErrorCategory::Format,
            Self::InvalidNumber { .. } => ErrorCategory::Parse,
        }
    }
}

/// The three error families callers distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Wrong or unrecognized card, or too few fields for it.
    Card,
    /// A parsed value violates a semantic constraint.
    Format,
    /// A token is not a valid number.
    Parse,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Card => write!(f, "card error"),
            Self::Format => write!(f, "format error"),
            Self::Parse => write!(f, "parse error"),
        }
    }
}

/// The role of an identifier that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdField {
    /// A node ID, either defining (`ND`) or referenced.
    Node,
    /// An element ID.
    Element,
}

impl fmt::Display for IdField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node => write!(f, "node"),
            Self::Element => write!(f, "element"),
        }
    }
}

/// The numeric type a token was expected to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    /// Base-10 integer.
    Integer,
    /// Floating point number.
    Float,
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Float => write!(f, "float"),
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Line number in the source file, as tracked by the caller.
    pub line: Option<usize>,
    /// Zero-based token index on the line (0 is the card).
    pub field: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the line number.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Sets the field position.
    #[must_use]
    pub fn with_field(mut self, field: usize) -> Self {
        self.field = Some(field);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.line, self.field) {
            (Some(line), Some(field)) => write!(f, "line {line}, field {field}"),
            (Some(line), None) => write!(f, "line {line}"),
            (None, Some(field)) => write!(f, "field {field}"),
            (None, None) => Ok(()),
        }
    }
}
