use std::fmt;
use std::str::FromStr;

use crate::hex::{hex_decode, hex_to_string};
use crate::HashError;

/// A git object identifier.
///
/// The variant is picked from the length of the hex form: 40 digits for
/// SHA-1, 64 for SHA-256. Ordering compares the raw digest bytes, which is
/// the same as comparing the lowercase hex strings, so sorting ids sorts
/// their printed form.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ObjectId {
    Sha1([u8; 20]),
    Sha256([u8; 32]),
}

impl ObjectId {
    /// Parse an id from its hex form, ignoring case.
    pub fn from_hex(hex: &str) -> Result<Self, HashError> {
        match hex.len() {
            40 => {
                let mut bytes = [0u8; 20];
                hex_decode(hex, &mut bytes)?;
                Ok(Self::Sha1(bytes))
            }
            64 => {
                let mut bytes = [0u8; 32];
                hex_decode(hex, &mut bytes)?;
                Ok(Self::Sha256(bytes))
            }
            n => Err(HashError::InvalidLength(n)),
        }
    }

    /// Build a SHA-1 id from a raw 20-byte digest.
    pub fn from_sha1(digest: [u8; 20]) -> Self {
        Self::Sha1(digest)
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Sha1(b) => b,
            Self::Sha256(b) => b,
        }
    }

    /// Lowercase hex form.
    pub fn to_hex(&self) -> String {
        hex_to_string(self.as_bytes())
    }

    /// Path of the loose object relative to the objects directory: `"xx/xxxx..."`.
    pub fn loose_path(&self) -> String {
        let hex = self.to_hex();
        format!("{}/{}", &hex[..2], &hex[2..])
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", &self.to_hex()[..8])
    }
}

impl FromStr for ObjectId {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
