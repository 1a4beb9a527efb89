//! Hex-string serde representation for the containers
//!
//! Every container serializes as its lowercase hex rendering. Deserializing a
//! word is strict: input wider than the word is an error rather than a
//! truncation.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{BitByte, BitWord, ByteSequence};

impl Serialize for BitByte {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for BitByte {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        BitByte::from_str_radix(&text, 16).map_err(DeError::custom)
    }
}

impl<const N: usize> Serialize for BitWord<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de, const N: usize> Deserialize<'de> for BitWord<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        match BitWord::parse_hex(&text).map_err(DeError::custom)? {
            (word, None) => Ok(word),
            (_, Some(truncation)) => Err(DeError::custom(truncation)),
        }
    }
}

impl Serialize for ByteSequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ByteSequence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        ByteSequence::from_hex(&text).map_err(DeError::custom)
    }
}
