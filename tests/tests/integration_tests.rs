use byteutils_api::{validate, Error, HexSerialize, Serialize};
use byteutils_internal::constant_time::ct_eq;
use byteutils_primitives::{BitByte, ByteSequence, Word128, Word32};
use byteutils_tests::{mix_column, sub_byte, vectors};

#[test]
fn test_gf_mul_known_answers() {
    for &(a, b, product) in vectors::GF_MUL {
        assert_eq!((BitByte::new(a) * BitByte::new(b)).value(), product);
        assert_eq!((BitByte::new(b) * BitByte::new(a)).value(), product);
    }
}

#[test]
fn test_mix_columns() {
    for &(input, output) in vectors::MIX_COLUMNS {
        let column = Word32::from_hex(input).unwrap();
        assert_eq!(mix_column(&column).to_hex(), output, "column {}", input);
    }
}

#[test]
fn test_sbox_samples() {
    for &(input, output) in vectors::SBOX {
        assert_eq!(sub_byte(BitByte::new(input)).value(), output);
    }
}

#[test]
fn test_key_expansion_first_word() {
    // FIPS-197 appendix A.1: w[4] from the 128-bit cipher key
    let key = ByteSequence::from_hex("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
    let w0: Word32 = key.word(0).unwrap();
    let w3: Word32 = key.word(3).unwrap();

    let rotated = w3.shift_left(8).unwrap() | w3.shift_right(24).unwrap();
    assert_eq!(rotated.to_hex(), "cf4f3c09");

    let mut substituted = rotated;
    for byte in &mut substituted {
        *byte = sub_byte(*byte);
    }
    assert_eq!(substituted.to_hex(), "8a84eb01");

    let rcon = Word32::from_hex("01000000").unwrap();
    let w4 = substituted ^ rcon ^ w0;
    assert_eq!(w4.to_hex(), "a0fafe17");
}

#[test]
fn test_add_round_key() {
    // FIPS-197 appendix B, round 0
    let input = Word128::from_hex("3243f6a8885a308d313198a2e0370734").unwrap();
    let key = Word128::from_hex("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
    assert_eq!((input ^ key).to_hex(), "193de3bea0f4e22b9ac68d2ae9f84808");
}

#[test]
fn test_hex_word_sequence_flow() {
    let mut state = ByteSequence::new();
    for text in ["00112233", "44556677", "8899aabb", "ccddeeff"] {
        state.push_word(&Word32::from_hex(text).unwrap());
    }
    assert_eq!(state.to_hex(), "00112233445566778899aabbccddeeff");

    let block: Word128 = state.word(0).unwrap();
    assert_eq!(block.to_hex(), state.to_hex());

    let columns: Vec<Word32> = state.words(0, 4).unwrap();
    let rebuilt: ByteSequence = columns.iter().flat_map(|w| w.iter().copied()).collect();
    assert_eq!(rebuilt, state);
}

#[test]
fn test_truncating_parse_through_sequence() {
    let (word, truncation) = Word32::parse_hex("abfafafafa").unwrap();
    let truncation = truncation.unwrap();
    assert_eq!(truncation.discarded_bytes, 1);
    assert_eq!(truncation.width_bits, 32);

    let mut bytes = ByteSequence::from_hex("ab").unwrap();
    bytes.push_word(&word);
    assert_eq!(bytes.to_hex(), "abfafafafa");
}

#[test]
fn test_trait_objects_agree() {
    fn round_trip<T: Serialize + HexSerialize + PartialEq + core::fmt::Debug>(value: T) {
        let bytes = value.to_bytes();
        assert_eq!(T::from_bytes(&bytes).unwrap(), value);
        assert_eq!(T::from_hex(&value.to_hex()).unwrap(), value);
        assert_eq!(hex::encode(&bytes), value.to_hex());
    }

    round_trip(Word32::from_u64(0xdeadbeef));
    round_trip(Word128::from_u128(u128::MAX - 1));
    round_trip(ByteSequence::from(vec![0u8, 1, 2, 0xff]));
}

#[test]
fn test_errors_carry_context() {
    let err = Word32::from_hex("12g4").unwrap_err();
    assert!(matches!(err, Error::InvalidFormat { context: "BitWord::from_hex", .. }));

    let err = Word32::zeroed().shift_left(33).unwrap_err();
    assert!(matches!(err, Error::ShiftOutOfRange { shift: 33, max: 32, .. }));

    let err = ByteSequence::new().byte(0).unwrap_err();
    assert!(matches!(err, Error::IndexOutOfRange { index: 0, len: 0, .. }));

    assert!(validate::size("test", 4, 4).is_ok());
}

#[test]
fn test_constant_time_equality_matches_bytes() {
    let a = Word128::from_hex("000102030405060708090a0b0c0d0e0f").unwrap();
    let b = Word128::from_be_bytes(a.to_be_bytes());
    assert_eq!(a, b);
    assert!(ct_eq(a.to_be_bytes(), b.to_be_bytes()));
    assert!(!ct_eq(a.to_be_bytes(), (!b).to_be_bytes()));
}
