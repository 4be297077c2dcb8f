//! Exercises the documented surface the way a consumer would: serializing a
//! numeric field into a scratch buffer and reading it back.

use numconv::{Error, FloatFormat, from_chars, from_chars_radix, to_chars, to_chars_radix};

#[test]
fn serialize_and_deserialize_a_record_field() {
    let mut buf = [0u8; 32];

    let written = to_chars(&mut buf, -40_075_017i64).unwrap();
    assert_eq!(&buf[..written], b"-40075017");

    let (value, consumed) = from_chars::<i64>(&buf[..written]).unwrap();
    assert_eq!((value, consumed), (-40_075_017, written));
}

#[test]
fn radix_surface() {
    let mut buf = [0u8; 32];
    let written = to_chars_radix(&mut buf, 0xdead_beefu32, 16).unwrap();
    assert_eq!(&buf[..written], b"deadbeef");
    assert_eq!(
        from_chars_radix::<u32>(&buf[..written], 16),
        Ok((0xdead_beef, written))
    );
}

#[test]
fn float_surface() {
    assert_eq!(
        from_chars_float_ok(b"6.022e23", FloatFormat::general()),
        6.022e23
    );
    assert_eq!(
        numconv::from_chars_float::<f64>(b"1e5", FloatFormat::fixed()),
        Err(Error::InvalidArgument)
    );
}

fn from_chars_float_ok(src: &[u8], format: FloatFormat) -> f64 {
    let (value, consumed) = numconv::from_chars_float(src, format).unwrap();
    assert_eq!(consumed, src.len());
    value
}

#[test]
fn errors_format_for_reporting() {
    assert_eq!(Error::InvalidArgument.to_string(), "invalid argument");
    assert_eq!(
        Error::ResultOutOfRange { consumed: 3 }.to_string(),
        "result out of range"
    );
    assert_eq!(
        Error::ValueTooLarge.to_string(),
        "value too large for the destination buffer"
    );
}
