use crate::{Error, from_chars, to_chars, to_chars_radix};

#[test]
fn negative_hex() {
    let mut buf = [0u8; 10];
    let written = to_chars_radix(&mut buf, -255i32, 16).unwrap();
    assert_eq!(written, 3);
    assert_eq!(&buf[..written], b"-ff");
}

#[test]
fn zero_is_one_digit() {
    let mut buf = [0u8; 4];
    let written = to_chars(&mut buf, 0u32).unwrap();
    assert_eq!(&buf[..written], b"0");

    let written = to_chars_radix(&mut buf, 0i64, 2).unwrap();
    assert_eq!(&buf[..written], b"0");
}

#[test]
fn no_leading_zeros_and_lowercase_digits() {
    let mut buf = [0u8; 16];
    let written = to_chars_radix(&mut buf, 255u8, 16).unwrap();
    assert_eq!(&buf[..written], b"ff");

    let written = to_chars_radix(&mut buf, 35u8, 36).unwrap();
    assert_eq!(&buf[..written], b"z");

    let written = to_chars_radix(&mut buf, 255u8, 2).unwrap();
    assert_eq!(&buf[..written], b"11111111");
}

#[test]
fn decimal_fast_path_matches_radix_ten() {
    let mut fast = [0u8; 40];
    let mut general = [0u8; 40];
    for value in [0i64, 7, -7, 1000, i64::MAX, i64::MIN] {
        let a = to_chars(&mut fast, value).unwrap();
        let b = to_chars_radix(&mut general, value, 10).unwrap();
        assert_eq!(&fast[..a], &general[..b]);
    }
}

#[test]
fn signed_minimum_keeps_its_sign() {
    let mut buf = [0u8; 40];
    let written = to_chars(&mut buf, i64::MIN).unwrap();
    assert_eq!(&buf[..written], b"-9223372036854775808");

    // The widest representation the codec can produce: i128::MIN in base 2
    // is a sign plus 128 binary digits.
    let mut wide = [0u8; 129];
    let written = to_chars_radix(&mut wide, i128::MIN, 2).unwrap();
    assert_eq!(written, 129);
    assert_eq!(wide[0], b'-');
    assert_eq!(wide[1], b'1');
    assert!(wide[2..written].iter().all(|&b| b == b'0'));
}

#[test]
fn exact_fit_succeeds() {
    let mut buf = [0u8; 3];
    let written = to_chars_radix(&mut buf, -255i32, 16).unwrap();
    assert_eq!(&buf[..written], b"-ff");
}

#[test]
fn too_small_buffer_is_value_too_large() {
    let mut buf = [0u8; 2];
    assert_eq!(to_chars_radix(&mut buf, -255i32, 16), Err(Error::ValueTooLarge));
    assert_eq!(to_chars(&mut buf, 1234u32), Err(Error::ValueTooLarge));
    assert_eq!(to_chars(&mut [], 0u8), Err(Error::ValueTooLarge));
}

#[test]
fn formatted_minimum_round_trips() {
    let mut buf = [0u8; 40];
    let written = to_chars(&mut buf, i128::MIN).unwrap();
    let (back, consumed) = from_chars::<i128>(&buf[..written]).unwrap();
    assert_eq!(back, i128::MIN);
    assert_eq!(consumed, written);
}

#[test]
#[should_panic(expected = "base must be in 2..=36")]
fn base_out_of_contract_panics() {
    let mut buf = [0u8; 8];
    let _ = to_chars_radix(&mut buf, 1u8, 37);
}
