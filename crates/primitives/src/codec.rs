//! Strict hexadecimal text decoding shared by the containers

use byteutils_api::{Error, Result};

/// Decode hex text into bytes, most-significant byte first.
///
/// An odd digit count is completed with a single leading `0`. Any character
/// outside `[0-9a-fA-F]` is rejected with `InvalidFormat`.
pub(crate) fn decode(context: &'static str, text: &str) -> Result<Vec<u8>> {
    if let Some((position, character)) = text.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
        return Err(Error::format(
            context,
            format!("non-hex character {:?} at position {}", character, position),
        ));
    }

    let decoded = if text.len() % 2 == 1 {
        hex::decode(format!("0{}", text))
    } else {
        hex::decode(text)
    };
    decoded.map_err(|e| Error::from(e).with_context(context))
}
