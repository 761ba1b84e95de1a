use thiserror::Error;

/// Error constructing a [`Uuid`](crate::Uuid) from bytes or text.
///
/// Every constructor stops at the first violation it finds. Positions are byte offsets into the
/// input as given by the caller.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Raw byte input was not 16 bytes long.
    #[error("invalid byte length: expected 16, found {len}")]
    InvalidLength { len: usize },

    /// Unrecognized or malformed hexadecimal representation.
    #[error("invalid UUID string: {0}")]
    InvalidUuidString(ParseFault),

    /// Input has the length of the URN form but does not start with `urn:uuid:`.
    #[error("invalid URN prefix: expected \"urn:uuid:\"")]
    InvalidUrnPrefix,

    /// Compact input was not 22 characters long.
    #[error("invalid encoded length: expected 22, found {len}")]
    InvalidEncodedLength { len: usize },

    /// Compact input contained a character outside the 64-symbol alphabet.
    #[error("invalid character {ch:?} at {index}")]
    InvalidCharacter { ch: char, index: usize },
}

/// Details of an [`Error::InvalidUuidString`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Error)]
#[non_exhaustive]
pub enum ParseFault {
    /// Length matches none of the accepted forms.
    #[error("unrecognized length {len}")]
    Length { len: usize },

    /// A group separator is missing.
    #[error("expected '-' at {index}")]
    Hyphen { index: usize },

    /// A character is not a hexadecimal digit.
    #[error("invalid hexadecimal digit {ch:?} at {index}")]
    Digit { ch: char, index: usize },

    /// Braced form lacks its `{` or `}`.
    #[error("missing enclosing braces")]
    Braces,
}

impl From<ParseFault> for Error {
    fn from(src: ParseFault) -> Self {
        Self::InvalidUuidString(src)
    }
}
