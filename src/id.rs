use core::{fmt, str};
use fstr::FStr;

use crate::{compact, parse, Error};

/// Represents a Universally Unique IDentifier.
///
/// The value is 16 bytes in network byte order and never changes after construction.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Creates an object from a 16-byte big-endian array.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Creates an object from a byte slice, copying its content.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] if the slice is not exactly 16 bytes long.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid22::{Error, Uuid};
    ///
    /// assert_eq!(Uuid::from_slice(&[0xff; 16]), Ok(Uuid::MAX));
    /// assert_eq!(Uuid::from_slice(&[0; 10]), Err(Error::InvalidLength { len: 10 }));
    /// ```
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        <[u8; 16]>::try_from(bytes)
            .map(Self)
            .map_err(|_| Error::InvalidLength { len: bytes.len() })
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Creates a UUIDv4 object from 16 random bytes, overwriting the version and variant bits.
    pub const fn from_fields_v4(rand_bytes: [u8; 16]) -> Self {
        Self(with_version_and_variant(rand_bytes, 4))
    }

    /// Creates a UUIDv7 object from a timestamp and 10 random bytes.
    ///
    /// Only the lowest 48 bits of `unix_ts_ms` are used. The random bytes fill the tail of the
    /// UUID before the version and variant bits are set, so six of their 80 bits are overwritten.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid22::Uuid;
    ///
    /// let uuid = Uuid::from_fields_v7(0x017f_22e2_79b0, [0xff; 10]);
    /// assert_eq!(uuid.to_string(), "017f22e2-79b0-7fff-bfff-ffffffffffff");
    /// assert_eq!(uuid.time(), Some(0x017f_22e2_79b0));
    /// ```
    pub const fn from_fields_v7(unix_ts_ms: u64, rand_bytes: [u8; 10]) -> Self {
        let mut bytes = [0u8; 16];

        bytes[0] = (unix_ts_ms >> 40) as u8;
        bytes[1] = (unix_ts_ms >> 32) as u8;
        bytes[2] = (unix_ts_ms >> 24) as u8;
        bytes[3] = (unix_ts_ms >> 16) as u8;
        bytes[4] = (unix_ts_ms >> 8) as u8;
        bytes[5] = unix_ts_ms as u8;

        let mut i = 0;
        while i < rand_bytes.len() {
            bytes[6 + i] = rand_bytes[i];
            i += 1;
        }

        Self(with_version_and_variant(bytes, 7))
    }

    /// Returns the version field (the upper four bits of byte 6).
    ///
    /// Any value yields a number in `0..=15`, including the Nil and Max UUIDs whose version
    /// fields carry no meaning.
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Reports the variant field value of the UUID.
    pub const fn variant(&self) -> Variant {
        match self.0[8] >> 4 {
            0b0000..=0b0111 => {
                if self.eq_const(&Self::NIL) {
                    Variant::Nil
                } else {
                    Variant::Var0
                }
            }
            0b1000..=0b1011 => Variant::Var10,
            0b1100..=0b1101 => Variant::Var110,
            _ => {
                if self.eq_const(&Self::MAX) {
                    Variant::Max
                } else {
                    Variant::VarReserved
                }
            }
        }
    }

    /// Returns the Unix timestamp in milliseconds embedded in a UUIDv7, or `None` for any other
    /// version.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid22::Uuid;
    ///
    /// let uuid: Uuid = "018e23f1-4c00-7000-8000-000000000000".parse()?;
    /// assert_eq!(uuid.time(), Some(1_710_000_000_000));
    /// assert_eq!(Uuid::NIL.time(), None);
    /// # Ok::<(), uuid22::Error>(())
    /// ```
    pub const fn time(&self) -> Option<u64> {
        if self.version() != 7 {
            return None;
        }
        let b = &self.0;
        let hi = u32::from_be_bytes([b[0], b[1], b[2], b[3]]) as u64;
        let lo = u16::from_be_bytes([b[4], b[5]]) as u64;
        Some((hi << 16) | lo)
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// structure that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// This method is primarily for `no_std` environments where heap-allocated string types are
    /// not readily available. Use the [`fmt::Display`] trait usually to get the 8-4-4-4-12
    /// canonical hexadecimal string representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid22::Uuid;
    ///
    /// let x = "01809424-3E59-7C05-9219-566F82FFF672".parse::<Uuid>()?;
    /// let y = x.hyphenated();
    /// assert_eq!(&y as &str, "01809424-3e59-7c05-9219-566f82fff672");
    /// assert_eq!(format!("{}", y), "01809424-3e59-7c05-9219-566f82fff672");
    /// # Ok::<(), uuid22::Error>(())
    /// ```
    pub fn hyphenated(&self) -> FStr<36> {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 36];
        let mut i = 0;
        for (j, e) in self.0.iter().enumerate() {
            buffer[i] = DIGITS[(e >> 4) as usize];
            buffer[i + 1] = DIGITS[(e & 15) as usize];
            i += 2;
            if j == 3 || j == 5 || j == 7 || j == 9 {
                buffer[i] = b'-';
                i += 1;
            }
        }
        debug_assert!(buffer.is_ascii());
        unsafe { FStr::from_inner_unchecked(buffer) }
    }

    /// Returns the 22-character compact representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid22::Uuid;
    ///
    /// let x = "12345678-1234-5678-1234-567812345678".parse::<Uuid>()?;
    /// assert_eq!(&x.encode() as &str, "b4vJqsEfy0eNHwnbj4vJqs");
    /// assert_eq!(Uuid::decode(&x.encode()), Ok(x));
    /// # Ok::<(), uuid22::Error>(())
    /// ```
    pub fn encode(&self) -> FStr<22> {
        let buffer = compact::encode(&self.0);
        debug_assert!(buffer.is_ascii());
        unsafe { FStr::from_inner_unchecked(buffer) }
    }

    /// Creates an object from the 22-character compact representation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEncodedLength`] if the input is not 22 bytes long, or
    /// [`Error::InvalidCharacter`] naming the first character found outside the alphabet when
    /// scanning from the end.
    pub fn decode(src: &str) -> Result<Self, Error> {
        compact::decode(src).map(Self)
    }

    /// Creates an object from one of the hexadecimal representations.
    ///
    /// Accepted are the 8-4-4-4-12 form, the same enclosed in braces or prefixed with
    /// `urn:uuid:`, and the 32 digits without hyphens, in either letter case. Unlike
    /// [`FromStr`](str::FromStr), this function rejects the compact representation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrnPrefix`] for a 45-byte input not starting with `urn:uuid:`,
    /// and [`Error::InvalidUuidString`] for any other malformed input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid22::Uuid;
    ///
    /// let x = Uuid::parse_str("urn:uuid:01809424-3e59-7c05-9219-566f82fff672")?;
    /// assert_eq!(Uuid::parse_str("{01809424-3e59-7c05-9219-566f82fff672}"), Ok(x));
    /// assert_eq!(Uuid::parse_str("018094243E597C059219566F82FFF672"), Ok(x));
    /// # Ok::<(), uuid22::Error>(())
    /// ```
    pub fn parse_str(src: &str) -> Result<Self, Error> {
        parse::parse_hex(src).map(Self)
    }

    const fn eq_const(&self, other: &Self) -> bool {
        let mut i = 0;
        while i < 16 {
            if self.0[i] != other.0[i] {
                return false;
            }
            i += 1;
        }
        true
    }
}

/// Sets the version field to `version` and the variant field to `10`.
const fn with_version_and_variant(mut bytes: [u8; 16], version: u8) -> [u8; 16] {
    bytes[6] = (version << 4) | (bytes[6] & 0x0f);
    bytes[8] = 0x80 | (bytes[8] & 0x3f);
    bytes
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hyphenated())
    }
}

impl str::FromStr for Uuid {
    type Err = Error;

    /// Creates an object from any supported textual representation, choosing the form by the
    /// input length: 22 bytes for the compact representation; 32, 36, 38, or 45 bytes for the
    /// hexadecimal ones.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        parse::parse_any(src).map(Self)
    }
}

impl TryFrom<&str> for Uuid {
    type Error = Error;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        src.parse()
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = Error;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(src)
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

/// UUID variants defined by RFC 9562.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Variant {
    /// Nil UUID.
    Nil,
    /// The variant field value of `0`.
    Var0,
    /// The variant field value of `10`.
    Var10,
    /// The variant field value of `110`.
    Var110,
    /// The reserved variant field value of `111`.
    VarReserved,
    /// Max UUID.
    Max,
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::Uuid;
    use crate::Error;

    impl From<Uuid> for String {
        fn from(src: Uuid) -> Self {
            src.to_string()
        }
    }

    impl TryFrom<String> for Uuid {
        type Error = Error;

        fn try_from(src: String) -> Result<Self, Self::Error> {
            src.parse()
        }
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.hyphenated())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Self::Value::from_slice(value).map_err(de::Error::custom)
        }
    }

}
