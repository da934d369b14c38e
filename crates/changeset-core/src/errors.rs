use changeset_core_types::Coordinate;
use thiserror::Error;

/// Result type alias using ChangesetError
pub type Result<T> = std::result::Result<T, ChangesetError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsErrorKind {
    // Addressing
    IndexOutOfRange,
    DuplicateIndex,
    SectionMismatch,

    // Script shape
    UnorderedScript,
    LengthMismatch,

    // Input
    InvalidInput,
    Serialization,
    Io,

    // Internal
    Internal,
}

impl CsErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            CsErrorKind::IndexOutOfRange => "ERR_INDEX_OUT_OF_RANGE",
            CsErrorKind::DuplicateIndex => "ERR_DUPLICATE_INDEX",
            CsErrorKind::SectionMismatch => "ERR_SECTION_MISMATCH",
            CsErrorKind::UnorderedScript => "ERR_UNORDERED_SCRIPT",
            CsErrorKind::LengthMismatch => "ERR_LENGTH_MISMATCH",
            CsErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            CsErrorKind::Serialization => "ERR_SERIALIZATION",
            CsErrorKind::Io => "ERR_IO",
            CsErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling plus the
/// addressing context (coordinate space, index, section) the failure
/// was detected at.
#[derive(Debug, Clone)]
pub struct CsError {
    kind: CsErrorKind,
    op: Option<String>,
    coordinate: Option<Coordinate>,
    index: Option<usize>,
    section: Option<usize>,
    message: String,
    source: Option<Box<CsError>>,
}

impl CsError {
    /// Create a new error with the specified kind
    pub fn new(kind: CsErrorKind) -> Self {
        Self {
            kind,
            op: None,
            coordinate: None,
            index: None,
            section: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the coordinate space the offending index belongs to
    pub fn with_coordinate(mut self, coordinate: Coordinate) -> Self {
        self.coordinate = Some(coordinate);
        self
    }

    /// Add index context
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Add section context
    pub fn with_section(mut self, section: usize) -> Self {
        self.section = Some(section);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: CsError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> CsErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the coordinate space context, if any
    pub fn coordinate(&self) -> Option<Coordinate> {
        self.coordinate
    }

    /// Get the index context, if any
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Get the section context, if any
    pub fn section(&self) -> Option<usize> {
        self.section
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&CsError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for CsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(coordinate) = self.coordinate {
            write!(f, " (coordinate: {})", coordinate)?;
        }
        if let Some(index) = self.index {
            write!(f, " (index: {})", index)?;
        }
        if let Some(section) = self.section {
            write!(f, " (section: {})", section)?;
        }
        Ok(())
    }
}

impl std::error::Error for CsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for Changeset operations
///
/// Diffing and translation are total; these errors only arise when a script
/// or batch is checked or applied against concrete sequences, or when
/// replay data is loaded.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChangesetError {
    /// An index does not address the sequence of its coordinate space
    #[error("{coordinate} index {index} is out of range for length {len}")]
    IndexOutOfRange {
        coordinate: Coordinate,
        index: usize,
        len: usize,
    },

    /// The same index is claimed twice within one coordinate space
    #[error("{coordinate} index {index} appears more than once")]
    DuplicateIndex { coordinate: Coordinate, index: usize },

    /// Destination-addressed edits are not strictly ascending
    #[error(
        "edit at position {position} targets destination {destination}, \
         not after previous destination {previous}"
    )]
    UnorderedScript {
        position: usize,
        destination: usize,
        previous: usize,
    },

    /// The script's deletions and insertions do not account for the length change
    #[error(
        "script turns {origin_len} elements into {reconstructed_len}, \
         expected {destination_len}"
    )]
    LengthMismatch {
        origin_len: usize,
        destination_len: usize,
        reconstructed_len: usize,
    },

    /// A row path is scoped to a different section than the one being applied
    #[error("row path scoped to section {found} while applying section {expected}")]
    SectionMismatch { expected: usize, found: usize },

    /// Replay data is structurally unusable
    #[error("Invalid replay data: {reason}")]
    InvalidReplayData { reason: String },

    /// Encoding or decoding failed
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },

    /// Reading input failed
    #[error("I/O error: {reason}")]
    Io { reason: String },
}

impl From<ChangesetError> for CsError {
    fn from(err: ChangesetError) -> Self {
        match err {
            ChangesetError::IndexOutOfRange {
                coordinate,
                index,
                len,
            } => CsError::new(CsErrorKind::IndexOutOfRange)
                .with_coordinate(coordinate)
                .with_index(index)
                .with_message(format!("index is out of range for length {}", len)),

            ChangesetError::DuplicateIndex { coordinate, index } => {
                CsError::new(CsErrorKind::DuplicateIndex)
                    .with_coordinate(coordinate)
                    .with_index(index)
                    .with_message("index appears more than once")
            }

            ChangesetError::UnorderedScript {
                position,
                destination,
                previous,
            } => CsError::new(CsErrorKind::UnorderedScript)
                .with_coordinate(Coordinate::Destination)
                .with_index(destination)
                .with_message(format!(
                    "edit at position {} does not follow destination {}",
                    position, previous
                )),

            ChangesetError::LengthMismatch {
                origin_len,
                destination_len,
                reconstructed_len,
            } => CsError::new(CsErrorKind::LengthMismatch).with_message(format!(
                "{} origin elements become {}, expected {}",
                origin_len, reconstructed_len, destination_len
            )),

            ChangesetError::SectionMismatch { expected, found } => {
                CsError::new(CsErrorKind::SectionMismatch)
                    .with_section(found)
                    .with_message(format!("expected rows of section {}", expected))
            }

            ChangesetError::InvalidReplayData { reason } => {
                CsError::new(CsErrorKind::InvalidInput)
                    .with_message(format!("Invalid replay data: {}", reason))
            }

            ChangesetError::Serialization { reason } => {
                CsError::new(CsErrorKind::Serialization).with_message(reason)
            }

            ChangesetError::Io { reason } => CsError::new(CsErrorKind::Io).with_message(reason),
        }
    }
}

impl From<std::io::Error> for ChangesetError {
    fn from(err: std::io::Error) -> Self {
        ChangesetError::Io {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ChangesetError {
    fn from(err: serde_json::Error) -> Self {
        ChangesetError::Serialization {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let err = ChangesetError::IndexOutOfRange {
            coordinate: Coordinate::Origin,
            index: 7,
            len: 3,
        };
        assert_eq!(
            err.to_string(),
            "origin index 7 is out of range for length 3"
        );
    }

    #[test]
    fn test_structured_display_includes_context() {
        let err = CsError::new(CsErrorKind::SectionMismatch)
            .with_op("apply_batch")
            .with_section(2)
            .with_message("expected rows of section 0");

        let text = err.to_string();
        assert!(text.starts_with("[ERR_SECTION_MISMATCH]"));
        assert!(text.contains("apply_batch"));
        assert!(text.contains("(section: 2)"));
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error;

        let inner = CsError::new(CsErrorKind::Serialization).with_message("bad json");
        let outer = CsError::new(CsErrorKind::InvalidInput).with_source(inner);

        assert_eq!(
            outer.source_error().map(|e| e.kind()),
            Some(CsErrorKind::Serialization)
        );
        assert!(outer.source().is_some());
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let parse: std::result::Result<Vec<String>, _> = serde_json::from_str("{not json");
        let err: ChangesetError = parse.unwrap_err().into();
        assert!(matches!(err, ChangesetError::Serialization { .. }));
    }
}
