//! SSH key fingerprints.

use crate::{Error, HashMode, Randomart, Result, decode, extract, simulate};
use alloc::{string::String, vec::Vec};
use base64ct::{Base64Unpadded, Encoding};
use core::{
    fmt::{self, Display},
    str::FromStr,
};

#[cfg(feature = "serde")]
use {
    alloc::string::ToString,
    serde::{Deserialize, Serialize, de, ser},
};

/// Key fingerprint with a known digest size.
///
/// # Parsing/serializing fingerprint strings
///
/// The [`FromStr`] and [`Display`] impls use the prefixed format printed by
/// `ssh-keygen -l`:
///
/// ```text
/// MD5:58:d5:23:1e:2c:83:a0:5c:64:28:2d:b4:e4:58:ad:fa
/// SHA256:UCUiLr7Pjs9wFFJMDByLgc3NrtdU344OgUM45wZPcIQ
/// ```
///
/// Use [`Fingerprint::decode`] for bare fingerprints without a prefix.
///
/// # `serde` support
///
/// When the `serde` feature of this crate is enabled, this type receives impls
/// of [`Deserialize`][`serde::Deserialize`] and [`Serialize`][`serde::Serialize`].
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum Fingerprint {
    /// Fingerprints computed using MD5.
    Md5([u8; HashMode::Md5.digest_size()]),

    /// Fingerprints computed using SHA-256.
    Sha256([u8; HashMode::Sha256.digest_size()]),
}

impl Fingerprint {
    /// Size of a SHA-256 hash encoded as Base64.
    const SHA256_BASE64_SIZE: usize = 43;

    /// Decode a bare fingerprint string (no prefix) for the given hash mode,
    /// checking that it has the digest size of that mode.
    pub fn decode(fingerprint: &str, mode: HashMode) -> Result<Self> {
        let bytes = decode(fingerprint, mode)?;
        let length_err = || Error::Length {
            expected: mode.digest_size(),
            actual: bytes.len(),
        };

        match mode {
            HashMode::Md5 => bytes.as_slice().try_into().map(Self::Md5),
            HashMode::Sha256 => bytes.as_slice().try_into().map(Self::Sha256),
        }
        .map_err(|_| length_err())
    }

    /// Compute the fingerprint of the given public key blob.
    #[cfg(feature = "digest")]
    pub fn compute(mode: HashMode, public_key: &[u8]) -> Self {
        use sha2::Digest;

        match mode {
            HashMode::Md5 => {
                let mut bytes = [0u8; HashMode::Md5.digest_size()];
                bytes.copy_from_slice(&md5::Md5::digest(public_key));
                Self::Md5(bytes)
            }
            HashMode::Sha256 => {
                let mut bytes = [0u8; HashMode::Sha256.digest_size()];
                bytes.copy_from_slice(&sha2::Sha256::digest(public_key));
                Self::Sha256(bytes)
            }
        }
    }

    /// Get the hash mode used for this fingerprint.
    pub fn algorithm(self) -> HashMode {
        match self {
            Self::Md5(_) => HashMode::Md5,
            Self::Sha256(_) => HashMode::Sha256,
        }
    }

    /// Get the raw digest output for the fingerprint as bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Md5(bytes) => bytes.as_slice(),
            Self::Sha256(bytes) => bytes.as_slice(),
        }
    }

    /// Is this fingerprint MD5?
    pub fn is_md5(self) -> bool {
        matches!(self, Self::Md5(_))
    }

    /// Is this fingerprint SHA-256?
    pub fn is_sha256(self) -> bool {
        matches!(self, Self::Sha256(_))
    }

    /// Walk the bishop over this fingerprint.
    ///
    /// The result has the default `[   n/a  ]` header; replace it with
    /// [`Randomart::with_header`].
    pub fn randomart(self) -> Randomart<'static> {
        Randomart::new(simulate(&extract(self.as_bytes())), self.algorithm())
    }

    /// Render "randomart" hash visualization for this fingerprint as lines.
    ///
    /// ```text
    /// +---[   n/a  ]----+
    /// |.+.+=. . ...     |
    /// |*o++. . o.+ o    |
    /// |.=o.    .+ o .   |
    /// |  .    o  .      |
    /// | .    . S        |
    /// |.                |
    /// | .               |
    /// |  E              |
    /// |                 |
    /// +------[MD5]------+
    /// ```
    pub fn to_randomart_lines(self) -> Vec<String> {
        self.randomart().lines()
    }
}

impl AsRef<[u8]> for Fingerprint {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.algorithm().prefix())?;

        match self {
            Self::Md5(bytes) => {
                for (i, byte) in bytes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(":")?;
                    }

                    write!(f, "{byte:02x}")?;
                }

                Ok(())
            }
            Self::Sha256(bytes) => {
                let mut buf = [0u8; Self::SHA256_BASE64_SIZE];
                let base64 = Base64Unpadded::encode(bytes, &mut buf).map_err(|_| fmt::Error)?;
                f.write_str(base64)
            }
        }
    }
}

impl FromStr for Fingerprint {
    type Err = Error;

    fn from_str(id: &str) -> Result<Self> {
        let (prefix, fingerprint) = id.split_once(':').ok_or_else(|| Error::ModeUnsupported {
            mode: String::from(id),
        })?;

        // Fingerprints use a special upper-case hash algorithm encoding.
        let mode = match prefix {
            "MD5" => HashMode::Md5,
            "SHA256" => HashMode::Sha256,
            _ => {
                return Err(Error::ModeUnsupported {
                    mode: String::from(prefix),
                });
            }
        };

        Self::decode(fingerprint, mode)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Fingerprint {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        string.parse().map_err(de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Fingerprint {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::Fingerprint;
    use crate::{Error, HashMode};
    use alloc::string::ToString;
    use hex_literal::hex;

    const MD5_FINGERPRINT: &str = "MD5:58:d5:23:1e:2c:83:a0:5c:64:28:2d:b4:e4:58:ad:fa";
    const SHA256_FINGERPRINT: &str = "SHA256:UCUiLr7Pjs9wFFJMDByLgc3NrtdU344OgUM45wZPcIQ";

    #[test]
    fn parse_md5() {
        let fingerprint = MD5_FINGERPRINT.parse::<Fingerprint>().unwrap();
        assert_eq!(
            fingerprint,
            Fingerprint::Md5(hex!("58d5231e2c83a05c64282db4e458adfa"))
        );
        assert!(fingerprint.is_md5());
        assert_eq!(fingerprint.to_string(), MD5_FINGERPRINT);
    }

    #[test]
    fn parse_sha256() {
        let fingerprint = SHA256_FINGERPRINT.parse::<Fingerprint>().unwrap();
        assert_eq!(
            fingerprint,
            Fingerprint::Sha256(hex!(
                "5025222ebecf8ecf7014524c0c1c8b81cdcdaed754df8e0e814338e7064f7084"
            ))
        );
        assert!(fingerprint.is_sha256());
        assert_eq!(fingerprint.algorithm(), HashMode::Sha256);
        assert_eq!(fingerprint.to_string(), SHA256_FINGERPRINT);
    }

    #[test]
    fn reject_unknown_prefix() {
        assert_eq!(
            "SHA512:abcd".parse::<Fingerprint>().err().unwrap(),
            Error::ModeUnsupported {
                mode: "SHA512".into()
            }
        );
        assert!(matches!(
            "no-prefix".parse::<Fingerprint>(),
            Err(Error::ModeUnsupported { .. })
        ));
    }

    #[test]
    fn reject_wrong_length() {
        assert_eq!(
            Fingerprint::decode("aa:bb:cc", HashMode::Md5).err().unwrap(),
            Error::Length {
                expected: 16,
                actual: 3
            }
        );
        assert_eq!(
            Fingerprint::decode("AAECAwQF", HashMode::Sha256).err().unwrap(),
            Error::Length {
                expected: 32,
                actual: 6
            }
        );
    }

    #[test]
    fn randomart_lines() {
        let fingerprint = MD5_FINGERPRINT.parse::<Fingerprint>().unwrap();
        let lines = fingerprint.to_randomart_lines();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[8], "|  E              |");
        assert_eq!(lines[10], "+------[MD5]------+");
    }

    #[cfg(feature = "digest")]
    #[test]
    fn compute() {
        assert_eq!(
            Fingerprint::compute(HashMode::Md5, b""),
            Fingerprint::Md5(hex!("d41d8cd98f00b204e9800998ecf8427e"))
        );
        assert_eq!(
            Fingerprint::compute(HashMode::Sha256, b""),
            Fingerprint::Sha256(hex!(
                "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
            ))
        );
    }
}
