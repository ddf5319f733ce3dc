use forge_wasm::values::leb128;
use rstest::rstest;

use crate::support::{decode_s32, decode_s64, decode_u32, decode_u64};

#[test]
fn encoded_u32() {
    macro_rules! assert_eq_encoded {
        ($input:expr, $expected:expr) => {
            assert_eq!(leb128::u32($input).as_slice(), $expected.as_slice());
        };
    }

    assert_eq_encoded!(0, [0x00]);
    assert_eq_encoded!(0x7F, [0x7F]);
    assert_eq_encoded!(0x80, [0x80, 0x01]);
    assert_eq_encoded!(0x3FFF, [0xFF, 0x7F]);
    assert_eq_encoded!(0x4000, [0x80, 0x80, 0x01]);
    assert_eq_encoded!(624_485, [0xE5, 0x8E, 0x26]);
    assert_eq_encoded!(0x0FFF_FFFF, [0xFF, 0xFF, 0xFF, 0x7F]);
    assert_eq_encoded!(u32::MAX, [0xFF, 0xFF, 0xFF, 0xFF, 0x0F]);
}

#[test]
fn encoded_s32() {
    macro_rules! assert_eq_encoded {
        ($input:expr, $expected:expr) => {
            assert_eq!(leb128::s32($input).as_slice(), $expected.as_slice());
        };
    }

    assert_eq_encoded!(0, [0x00]);
    assert_eq_encoded!(-1, [0x7F]);
    assert_eq_encoded!(63, [0x3F]);
    assert_eq_encoded!(-64, [0x40]);
    assert_eq_encoded!(64, [0xC0, 0x00]);
    assert_eq_encoded!(-65, [0xBF, 0x7F]);
    assert_eq_encoded!(i32::from(i8::MAX), [0xFF, 0x00]);
    assert_eq_encoded!(i32::from(i8::MIN), [0x80, 0x7F]);
    assert_eq_encoded!(-123_456, [0xC0, 0xBB, 0x78]);
    assert_eq_encoded!(i32::MAX, [0xFF, 0xFF, 0xFF, 0xFF, 0x07]);
    assert_eq_encoded!(i32::MIN, [0x80, 0x80, 0x80, 0x80, 0x78]);
}

#[test]
fn encoded_s64() {
    macro_rules! assert_eq_encoded {
        ($input:expr, $expected:expr) => {
            assert_eq!(leb128::s64($input).as_slice(), $expected.as_slice());
        };
    }

    assert_eq_encoded!(0, [0x00]);
    assert_eq_encoded!(-1, [0x7F]);
    assert_eq_encoded!(-17, [0x6F]);
    assert_eq_encoded!(
        i64::MAX,
        [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00]
    );
    assert_eq_encoded!(
        i64::MIN,
        [0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x7F]
    );
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(127)]
#[case(128)]
#[case(16_384)]
#[case(624_485)]
#[case(u32::MAX - 1)]
#[case(u32::MAX)]
fn u32_round_trip(#[case] value: u32) {
    let encoded = leb128::u32(value);
    let (decoded, len) = decode_u32(&encoded);
    assert_eq!(decoded, value);
    assert_eq!(len, encoded.len());
}

#[rstest]
#[case(0)]
#[case(127)]
#[case(128)]
#[case(u64::from(u32::MAX) + 1)]
#[case(u64::MAX)]
fn u64_round_trip(#[case] value: u64) {
    let encoded = leb128::u64(value);
    let (decoded, len) = decode_u64(&encoded);
    assert_eq!(decoded, value);
    assert_eq!(len, encoded.len());
}

#[rstest]
#[case(0)]
#[case(-1)]
#[case(63)]
#[case(-64)]
#[case(64)]
#[case(-65)]
#[case(-123_456)]
#[case(i32::MAX)]
#[case(i32::MIN)]
fn s32_round_trip(#[case] value: i32) {
    let encoded = leb128::s32(value);
    let (decoded, len) = decode_s32(&encoded);
    assert_eq!(decoded, value);
    assert_eq!(len, encoded.len());
}

#[rstest]
#[case(0)]
#[case(-1)]
#[case(i64::from(i32::MAX) + 1)]
#[case(i64::from(i32::MIN) - 1)]
#[case(-8_029_759_185_026_510_704)]
#[case(i64::MAX)]
#[case(i64::MIN)]
fn s64_round_trip(#[case] value: i64) {
    let encoded = leb128::s64(value);
    let (decoded, len) = decode_s64(&encoded);
    assert_eq!(decoded, value);
    assert_eq!(len, encoded.len());
}
