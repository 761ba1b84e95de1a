//! Classification and parsing of textual representations

use crate::compact::{self, ENCODED_LEN};
use crate::{Error, ParseFault};

/// Literal prefix of the URN form.
const URN_PREFIX: &str = "urn:uuid:";

/// Offsets of the group separators in the 8-4-4-4-12 form.
const HYPHENS: [usize; 4] = [8, 13, 18, 23];

/// Textual representation of a UUID, recognized by the input length alone.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum Shape {
    /// `b4vJqsEfy0eNHwnbj4vJqs`
    Compact,
    /// `12345678123456781234567812345678`
    Simple,
    /// `12345678-1234-5678-1234-567812345678`
    Hyphenated,
    /// `{12345678-1234-5678-1234-567812345678}`
    Braced,
    /// `urn:uuid:12345678-1234-5678-1234-567812345678`
    Urn,
}

impl Shape {
    /// Returns the shape a string of `len` bytes must have, if any.
    pub(crate) const fn classify(len: usize) -> Option<Self> {
        match len {
            ENCODED_LEN => Some(Self::Compact),
            32 => Some(Self::Simple),
            36 => Some(Self::Hyphenated),
            38 => Some(Self::Braced),
            45 => Some(Self::Urn),
            _ => None,
        }
    }
}

/// Converts any supported representation into bytes, dispatching on the input length.
pub(crate) fn parse_any(src: &str) -> Result<[u8; 16], Error> {
    match Shape::classify(src.len()) {
        Some(Shape::Compact) => compact::decode(src),
        Some(shape) => parse_shape(src, shape),
        None => Err(ParseFault::Length { len: src.len() }.into()),
    }
}

/// Converts one of the hexadecimal representations into bytes.
pub(crate) fn parse_hex(src: &str) -> Result<[u8; 16], Error> {
    match Shape::classify(src.len()) {
        Some(shape) => parse_shape(src, shape),
        None => Err(ParseFault::Length { len: src.len() }.into()),
    }
}

fn parse_shape(src: &str, shape: Shape) -> Result<[u8; 16], Error> {
    let bytes = src.as_bytes();
    match shape {
        Shape::Simple => decode_hex(src, 0..32),
        Shape::Hyphenated => parse_hyphenated(src, 0),
        Shape::Braced => {
            if bytes[0] != b'{' || bytes[37] != b'}' {
                return Err(ParseFault::Braces.into());
            }
            parse_hyphenated(src, 1)
        }
        Shape::Urn => {
            if !src.starts_with(URN_PREFIX) {
                return Err(Error::InvalidUrnPrefix);
            }
            parse_hyphenated(src, URN_PREFIX.len())
        }
        Shape::Compact => Err(ParseFault::Length { len: src.len() }.into()),
    }
}

/// Parses the 36 bytes of the 8-4-4-4-12 form starting at `offset`.
fn parse_hyphenated(src: &str, offset: usize) -> Result<[u8; 16], Error> {
    let bytes = src.as_bytes();
    for i in HYPHENS {
        if bytes[offset + i] != b'-' {
            return Err(ParseFault::Hyphen { index: offset + i }.into());
        }
    }
    decode_hex(
        src,
        (0..36)
            .filter(|i| !HYPHENS.contains(i))
            .map(|i| offset + i),
    )
}

/// Decodes the 32 hexadecimal digits found at `positions` into bytes.
fn decode_hex(src: &str, positions: impl Iterator<Item = usize>) -> Result<[u8; 16], Error> {
    let bytes = src.as_bytes();
    let mut dst = [0u8; 16];
    for (i, index) in positions.enumerate() {
        let digit = hex_value(bytes[index]).ok_or_else(|| ParseFault::Digit {
            // earlier bytes are all ASCII, so `index` is a char boundary
            ch: src[index..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER),
            index,
        })?;
        dst[i / 2] = (dst[i / 2] << 4) | digit;
    }
    Ok(dst)
}

const fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_any, parse_hex, Shape};
    use crate::{Error, ParseFault};
    #[cfg(feature = "std")]
    use proptest::prelude::*;

    const BYTES: [u8; 16] = [
        18, 52, 86, 120, 18, 52, 86, 120, 18, 52, 86, 120, 18, 52, 86, 120,
    ];

    /// Classifies shapes by length
    #[test]
    fn classifies_shapes_by_length() {
        assert_eq!(Shape::classify(22), Some(Shape::Compact));
        assert_eq!(Shape::classify(32), Some(Shape::Simple));
        assert_eq!(Shape::classify(36), Some(Shape::Hyphenated));
        assert_eq!(Shape::classify(38), Some(Shape::Braced));
        assert_eq!(Shape::classify(45), Some(Shape::Urn));
        for len in [0, 3, 16, 21, 23, 31, 33, 35, 37, 39, 44, 46] {
            assert_eq!(Shape::classify(len), None);
        }
    }

    /// Accepts all hexadecimal forms of the same value
    #[test]
    fn accepts_all_hexadecimal_forms_of_the_same_value() {
        let cases = [
            "12345678-1234-5678-1234-567812345678",
            "12345678123456781234567812345678",
            "urn:uuid:12345678-1234-5678-1234-567812345678",
            "{12345678-1234-5678-1234-567812345678}",
        ];
        for e in cases {
            assert_eq!(parse_hex(e), Ok(BYTES));
            assert_eq!(parse_any(e), Ok(BYTES));
        }
    }

    /// Accepts both letter cases uniformly
    #[test]
    fn accepts_both_letter_cases_uniformly() {
        let lower = parse_hex("0180ae59-078c-7b80-b113-2fe14a615fb3");
        assert!(lower.is_ok());
        assert_eq!(parse_hex("0180AE59-078C-7B80-B113-2FE14A615FB3"), lower);
        assert_eq!(parse_hex("0180ae59078c7b80b1132fe14a615fb3"), lower);
        assert_eq!(parse_hex("0180AE59078C7B80B1132FE14A615FB3"), lower);
        assert_eq!(parse_hex("0180aE59078c7B80b1132Fe14a615fB3"), lower);
    }

    /// Dispatches compact form to decoder
    #[test]
    fn dispatches_compact_form_to_decoder() {
        assert_eq!(parse_any("b4vJqsEfy0eNHwnbj4vJqs"), Ok(BYTES));
        assert_eq!(
            parse_hex("b4vJqsEfy0eNHwnbj4vJqs"),
            Err(ParseFault::Length { len: 22 }.into())
        );
        assert_eq!(
            parse_any("b4vJqsEfy0eNHwnbj4vJq!"),
            Err(Error::InvalidCharacter { ch: '!', index: 21 })
        );
    }

    /// Returns error to unrecognized length
    #[test]
    fn returns_error_to_unrecognized_length() {
        for e in ["", "abc", "invalid", "0180a8f0-5b84-7438-ab50-f06ac2e5e08"] {
            let err = Err(Error::InvalidUuidString(ParseFault::Length { len: e.len() }));
            assert_eq!(parse_any(e), err);
            assert_eq!(parse_hex(e), err);
        }
    }

    /// Returns error to wrong URN prefix
    #[test]
    fn returns_error_to_wrong_urn_prefix() {
        for e in [
            "urn:pitu:12345678-1234-5678-1234-567812345678",
            "URN:UUID:12345678-1234-5678-1234-567812345678",
            "123456789-12345678-1234-5678-1234-56781234567",
        ] {
            assert_eq!(parse_any(e), Err(Error::InvalidUrnPrefix));
        }
    }

    /// Returns error to malformed hexadecimal strings
    #[test]
    fn returns_error_to_malformed_hexadecimal_strings() {
        let cases = [
            (
                " 0180a8f0-5b82-75b4-9fef-ecad657c30b",
                ParseFault::Hyphen { index: 8 },
            ),
            (
                "0180a8f0-5b847438-ab50-f06991838802",
                ParseFault::Length { len: 35 },
            ),
            (
                "0180a8f0-5b84-74384ab50-f06991838802",
                ParseFault::Hyphen { index: 18 },
            ),
            (
                "0180a8f0-5b84-7438-ab50_f06d3ea24429",
                ParseFault::Hyphen { index: 23 },
            ),
            (
                "0180a8f0-5b84-74 8-ab50-f06bed27bdc7",
                ParseFault::Digit { ch: ' ', index: 16 },
            ),
            (
                "0180a8g0-5b84-7438-ab50-f06c91175b8a",
                ParseFault::Digit { ch: 'g', index: 6 },
            ),
            (
                "+180a8f0-5b84-7438-ab50-f067cdce1d69",
                ParseFault::Digit { ch: '+', index: 0 },
            ),
            (
                "-180a8f0-5b84-7438-ab50-f067cdce1d69",
                ParseFault::Digit { ch: '-', index: 0 },
            ),
            (
                "(0180a8f0-5b84-7438-ab50-f06ac2e5e082}",
                ParseFault::Braces,
            ),
            (
                "{0180a8f0-5b84-7438-ab50-f06ac2e5e082)",
                ParseFault::Braces,
            ),
            (
                "{0180a8f0-5b84-7438-ab50-f06ac2e5e08x}",
                ParseFault::Digit { ch: 'x', index: 36 },
            ),
            (
                "urn:uuid:0180a8f0-5b84-7438-ab50+f06ac2e5e082",
                ParseFault::Hyphen { index: 32 },
            ),
            (
                "0180a8f05b847438ab50f068decfbfdz",
                ParseFault::Digit { ch: 'z', index: 31 },
            ),
            (
                "0180a8f0-5b84-7438-ab50f068decfbfd7",
                ParseFault::Length { len: 35 },
            ),
            (
                "0180a8f05b847438ab5-0f068decfbfd7",
                ParseFault::Length { len: 33 },
            ),
            (
                "0180a8f05b847438ab5-f068decfbfd7",
                ParseFault::Digit { ch: '-', index: 19 },
            ),
            (
                "0180a8f05b847438ab5éf068decfbfd",
                ParseFault::Digit { ch: 'é', index: 19 },
            ),
        ];

        for (text, fault) in cases {
            assert_eq!(parse_hex(text), Err(Error::InvalidUuidString(fault)), "{}", text);
        }
    }

    #[cfg(feature = "std")]
    proptest! {
        /// Parses every hexadecimal form of arbitrary bytes identically
        #[test]
        fn parses_every_hexadecimal_form_of_arbitrary_bytes_identically(
            bytes in any::<[u8; 16]>(),
        ) {
            let uuid = crate::Uuid::from(bytes);
            let hyphenated = uuid.hyphenated();
            let simple: String = hyphenated.chars().filter(|c| *c != '-').collect();
            let urn = format!("urn:uuid:{}", hyphenated);
            let braced = format!("{{{}}}", hyphenated);
            let upper = hyphenated.to_uppercase();
            let simple_upper = simple.to_uppercase();
            for e in [&*hyphenated, &*simple, &*simple_upper, &*urn, &*braced, &*upper] {
                prop_assert_eq!(parse_hex(e), Ok(bytes));
            }
            prop_assert_eq!(parse_any(&uuid.encode()), Ok(bytes));
        }
    }
}
