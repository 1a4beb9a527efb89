//! Property-based tests across the byte, word and sequence containers

use byteutils_primitives::{BitByte, BitWord, ByteSequence, Word128, Word32};
use byteutils_tests::mix_column;
use proptest::prelude::*;

/// Hex text of arbitrary case and length, possibly odd
fn hex_text() -> impl Strategy<Value = String> {
    "[0-9a-fA-F]{0,40}"
}

proptest! {
    #[test]
    fn word128_matches_native_u128(a in any::<u128>(), b in any::<u128>(), n in 0usize..=128) {
        let wa = Word128::from_u128(a);
        let wb = Word128::from_u128(b);

        prop_assert_eq!((wa + wb).to_u128().unwrap(), a.wrapping_add(b));
        prop_assert_eq!((wa ^ wb).to_u128().unwrap(), a ^ b);
        prop_assert_eq!((wa & wb).to_u128().unwrap(), a & b);
        prop_assert_eq!((wa | wb).to_u128().unwrap(), a | b);
        prop_assert_eq!((!wa).to_u128().unwrap(), !a);

        let left = a.checked_shl(n as u32).unwrap_or(0);
        let right = a.checked_shr(n as u32).unwrap_or(0);
        prop_assert_eq!(wa.shift_left(n).unwrap().to_u128().unwrap(), left);
        prop_assert_eq!(wa.shift_right(n).unwrap().to_u128().unwrap(), right);
    }

    #[test]
    fn word_parse_keeps_rightmost_bytes(text in hex_text()) {
        let (word, truncation) = BitWord::<5>::parse_hex(&text).unwrap();
        let padded = if text.len() % 2 == 1 { format!("0{}", text) } else { text.clone() };
        let decoded = hex::decode(&padded).unwrap();

        let keep = decoded.len().min(5);
        prop_assert_eq!(&word.to_be_bytes()[5 - keep..], &decoded[decoded.len() - keep..]);
        prop_assert!(word.to_be_bytes()[..5 - keep].iter().all(|&b| b == 0));
        prop_assert_eq!(truncation.is_some(), decoded.len() > 5);
    }

    #[test]
    fn sequence_words_cover_all_bytes(data in prop::collection::vec(any::<u8>(), 0..64)) {
        let bytes = ByteSequence::from(data.clone());
        let count = data.len() / 4;
        let words: Vec<Word32> = bytes.words(0, count).unwrap();

        let joined: Vec<u8> = words.iter().flat_map(|w| w.to_be_bytes()).collect();
        prop_assert_eq!(&joined[..], &data[..count * 4]);
        prop_assert!(bytes.word::<4>(count).is_err());
    }

    #[test]
    fn mix_column_is_linear(a in any::<u32>(), b in any::<u32>()) {
        let wa = Word32::from_u64(a as u64);
        let wb = Word32::from_u64(b as u64);
        prop_assert_eq!(mix_column(&(wa ^ wb)), mix_column(&wa) ^ mix_column(&wb));
    }

    #[test]
    fn gf_inverse_is_involution(value in 1u8..=255) {
        let byte = BitByte::new(value);
        prop_assert_eq!(byte.gf_inverse().gf_inverse(), byte);
        prop_assert_eq!(byte * byte.gf_inverse(), BitByte::ONE);
    }

    #[test]
    fn bits_match_binary_rendering(value in any::<u8>()) {
        let byte = BitByte::new(value);
        let rendered: String = byte.bits().map(|b| if b { '1' } else { '0' }).collect();
        prop_assert_eq!(rendered, format!("{:08b}", value));
    }
}
