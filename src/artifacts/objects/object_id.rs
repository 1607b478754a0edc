//! Content hashes naming loose objects
//!
//! Text form is 40 lowercase hex digits; tree entries store the same hash as
//! 20 raw bytes. A loose object lives at `objects/<2 digits>/<38 digits>`.

use crate::artifacts::objects::{LABEL_PREFIX_LENGTH, OBJECT_ID_LENGTH, RAW_OBJECT_ID_LENGTH};
use crate::errors::DecodeError;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Accepts upper or lower case; fails with `DecodeError::InvalidHash`
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        let well_formed =
            id.len() == OBJECT_ID_LENGTH && id.bytes().all(|byte| byte.is_ascii_hexdigit());

        match well_formed {
            true => Ok(ObjectId(id.to_ascii_lowercase())),
            false => Err(DecodeError::InvalidHash(id).into()),
        }
    }

    pub fn from_raw(raw: &[u8; RAW_OBJECT_ID_LENGTH]) -> Self {
        let mut hex = String::with_capacity(OBJECT_ID_LENGTH);
        for byte in raw {
            hex.push_str(&format!("{byte:02x}"));
        }
        ObjectId(hex)
    }

    /// Write the 20-byte form used inside tree entries
    pub fn write_h40_to<W: io::Write>(&self, writer: &mut W) -> anyhow::Result<()> {
        let mut raw = [0u8; RAW_OBJECT_ID_LENGTH];
        for (byte, pair) in raw.iter_mut().zip(self.0.as_bytes().chunks(2)) {
            // validated as hex on construction
            let pair = std::str::from_utf8(pair)?;
            *byte = u8::from_str_radix(pair, 16)?;
        }

        writer.write_all(&raw)?;
        Ok(())
    }

    /// `<2 digits>/<38 digits>`, relative to the objects directory
    pub fn to_path(&self) -> PathBuf {
        let (fan_out, rest) = self.0.split_at(2);
        [fan_out, rest].iter().collect()
    }

    /// First 6 characters, as shown in graph labels
    pub fn label_prefix(&self) -> &str {
        &self.0[..LABEL_PREFIX_LENGTH]
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
