//! Hash modes.

use crate::{Error, Result};
use alloc::string::ToString;
use core::{fmt, str};

#[cfg(feature = "serde")]
use {
    alloc::string::String,
    serde::{Deserialize, Serialize, de, ser},
};

/// String identifier for MD5 fingerprints.
const MD5: &str = "md5";

/// String identifier for SHA-256 fingerprints.
const SHA256: &str = "sha256";

/// Hash function a fingerprint was computed with.
///
/// Selects how a fingerprint string is decoded and which label is printed on
/// the bottom border of the "randomart".
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum HashMode {
    /// MD5, written as colon-separated hex byte pairs.
    Md5,

    /// SHA-256, written as unpadded Base64.
    #[default]
    Sha256,
}

impl HashMode {
    /// Decode hash mode from the given string identifier.
    ///
    /// # Supported hash modes
    ///
    /// - `md5`
    /// - `sha256`
    pub fn new(id: &str) -> Result<Self> {
        id.parse()
    }

    /// Get the string identifier for this hash mode.
    pub fn as_str(self) -> &'static str {
        match self {
            HashMode::Md5 => MD5,
            HashMode::Sha256 => SHA256,
        }
    }

    /// Get the upper case name used in fingerprint prefixes (e.g. "SHA256").
    pub fn prefix(self) -> &'static str {
        match self {
            HashMode::Md5 => "MD5",
            HashMode::Sha256 => "SHA256",
        }
    }

    /// Get the bracketed footer for use in "randomart".
    pub fn footer(self) -> &'static str {
        match self {
            HashMode::Md5 => "[MD5]",
            HashMode::Sha256 => "[SHA256]",
        }
    }

    /// Get the size of a digest produced by this hash function.
    pub const fn digest_size(self) -> usize {
        match self {
            HashMode::Md5 => 16,
            HashMode::Sha256 => 32,
        }
    }
}

impl AsRef<str> for HashMode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for HashMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl str::FromStr for HashMode {
    type Err = Error;

    fn from_str(id: &str) -> Result<Self> {
        match id {
            MD5 => Ok(HashMode::Md5),
            SHA256 => Ok(HashMode::Sha256),
            _ => Err(Error::ModeUnsupported {
                mode: id.to_string(),
            }),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for HashMode {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        string.parse().map_err(de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl Serialize for HashMode {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::HashMode;
    use crate::Error;

    #[test]
    fn parse() {
        assert_eq!("md5".parse::<HashMode>().unwrap(), HashMode::Md5);
        assert_eq!(HashMode::new("sha256").unwrap(), HashMode::Sha256);
    }

    #[test]
    fn reject_unknown_modes() {
        for id in ["", "MD5", "sha512", "sha-256"] {
            assert_eq!(
                HashMode::new(id).err().unwrap(),
                Error::ModeUnsupported { mode: id.into() }
            );
        }
    }

    #[test]
    fn labels() {
        assert_eq!(HashMode::Md5.footer(), "[MD5]");
        assert_eq!(HashMode::Sha256.footer(), "[SHA256]");
        assert_eq!(HashMode::Sha256.prefix(), "SHA256");
        assert_eq!(HashMode::default(), HashMode::Sha256);
    }
}
