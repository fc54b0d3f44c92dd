use super::*;
use pretty_assertions::assert_eq;

fn int<I: Integer>(text: &str) -> Result<I, NumError> {
    parse_int(text, Base::Auto, &Separators::DEFAULT)
}

fn int_in<I: Integer>(text: &str, base: Base) -> Result<I, NumError> {
    parse_int(text, base, &Separators::DEFAULT)
}

// === Decimal ===

#[test]
fn decimal_values() {
    assert_eq!(int::<i32>("0"), Ok(0));
    assert_eq!(int::<i32>("7"), Ok(7));
    assert_eq!(int::<i32>("1969"), Ok(1969));
    assert_eq!(int::<i32>("+42"), Ok(42));
    assert_eq!(int::<i32>("-123"), Ok(-123));
    assert_eq!(int::<u64>("18446744073709551615"), Ok(u64::MAX));
    assert_eq!(int::<i64>("9223372036854775807"), Ok(i64::MAX));
    assert_eq!(int::<i64>("-9223372036854775807"), Ok(-i64::MAX));
}

#[test]
fn leading_spaces_are_skipped() {
    assert_eq!(int::<i32>("   15"), Ok(15));
    assert_eq!(int::<i32>("  -15"), Ok(-15));
}

#[test]
fn other_whitespace_is_rejected() {
    assert_eq!(int::<i32>("\t15"), Err(NumError::invalid(b'\t', 0)));
    assert_eq!(int::<i32>("15\n"), Err(NumError::invalid(b'\n', 2)));
}

// === Empty and Malformed ===

#[test]
fn empty_and_space_only_input() {
    assert_eq!(int::<i32>(""), Err(NumError::Empty));
    assert_eq!(int::<i32>(" "), Err(NumError::Empty));
    assert_eq!(int::<i32>("    "), Err(NumError::Empty));
}

#[test]
fn sign_without_digits() {
    assert_eq!(int::<i32>("-"), Err(NumError::NoDigits));
    assert_eq!(int::<i32>("  +"), Err(NumError::NoDigits));
    assert_eq!(int::<i32>("-,"), Err(NumError::NoDigits));
    assert_eq!(int::<i32>("- "), Err(NumError::NoDigits));
}

#[test]
fn stray_characters() {
    assert_eq!(int::<i32>("12a"), Err(NumError::invalid(b'a', 2)));
    assert_eq!(int::<i32>("abc"), Err(NumError::invalid(b'a', 0)));
    assert_eq!(int::<i32>("1-2"), Err(NumError::invalid(b'-', 1)));
    assert_eq!(int::<i32>("--1"), Err(NumError::invalid(b'-', 1)));
    assert_eq!(int::<i32>("1.5"), Err(NumError::invalid(b'.', 1)));
}

#[test]
fn non_ascii_bytes_are_rejected() {
    assert_eq!(int::<i32>("1²"), Err(NumError::invalid(0xC2, 1)));
    assert_eq!(
        parse_int_bytes::<i32>(b"12\xff", Base::Auto, &Separators::DEFAULT),
        Err(NumError::invalid(0xFF, 2))
    );
}

// === Base Detection ===

#[test]
fn auto_hex() {
    assert_eq!(int::<i32>("0x1F"), Ok(31));
    assert_eq!(int::<i32>("0X1f"), Ok(31));
    assert_eq!(int::<u32>("0xdeadBEEF"), Ok(0xdead_beef));
    assert_eq!(int::<i32>("0x0F"), Ok(15));
    assert_eq!(int::<i32>("000x10"), Ok(16));
}

#[test]
fn auto_octal() {
    assert_eq!(int::<i32>("010"), Ok(8));
    assert_eq!(int::<i32>("0777"), Ok(511));
    assert_eq!(int::<i32>("007"), Ok(7));
    assert_eq!(int::<i32>("08"), Err(NumError::invalid(b'8', 1)));
    assert_eq!(int::<i32>("01a"), Err(NumError::invalid(b'a', 2)));
}

#[test]
fn leading_zero_runs() {
    assert_eq!(int::<i32>("0"), Ok(0));
    assert_eq!(int::<i32>("0000"), Ok(0));
    assert_eq!(int::<i32>("-00"), Ok(0));
    assert_eq!(int::<u8>("  +0"), Ok(0));
}

#[test]
fn hex_prefix_without_digits() {
    assert_eq!(int::<i32>("0x"), Err(NumError::NoDigits));
    assert_eq!(int::<i32>("0xu"), Err(NumError::NoDigits));
    assert_eq!(int::<i32>("0xg"), Err(NumError::invalid(b'g', 2)));
}

#[test]
fn letters_require_hex() {
    assert_eq!(int::<i32>("ff"), Err(NumError::invalid(b'f', 0)));
    assert_eq!(int::<i32>("1e3"), Err(NumError::invalid(b'e', 1)));
}

// === Explicit Base ===

#[test]
fn explicit_hex_without_prefix() {
    assert_eq!(int_in::<i32>("ff", Base::Hexadecimal), Ok(255));
    assert_eq!(int_in::<i32>("0xff", Base::Hexadecimal), Ok(255));
}

#[test]
fn explicit_decimal_overrides_octal_detection() {
    assert_eq!(int_in::<i32>("010", Base::Decimal), Ok(10));
    assert_eq!(int_in::<i32>("-010", Base::Decimal), Ok(-10));
    assert_eq!(
        int_in::<i32>("0x10", Base::Decimal),
        Err(NumError::invalid(b'x', 1))
    );
}

#[test]
fn explicit_octal() {
    assert_eq!(int_in::<i32>("17", Base::Octal), Ok(15));
    assert_eq!(int_in::<i32>("19", Base::Octal), Err(NumError::invalid(b'9', 1)));
    assert_eq!(int_in::<i32>("0x1", Base::Octal), Err(NumError::invalid(b'x', 1)));
}

#[test]
fn base_radix_round_trip() {
    for base in [Base::Octal, Base::Decimal, Base::Hexadecimal] {
        let radix = base.radix().map(u32::from);
        assert_eq!(radix.and_then(Base::from_radix), Some(base));
    }
    assert_eq!(Base::Auto.radix(), None);
    assert_eq!(Base::from_radix(2), None);
}

// === Sign Placement ===

#[test]
fn sign_applies_only_to_signed_decimal() {
    assert_eq!(int::<i32>("-123"), Ok(-123));
    assert_eq!(int::<u32>("-123"), Ok(123));
    assert_eq!(int::<i32>("-0x1F"), Ok(31));
    assert_eq!(int::<i32>("-010"), Ok(8));
    assert_eq!(int_in::<i32>("-ff", Base::Hexadecimal), Ok(255));
}

// === Overflow ===

#[test]
fn overflow_is_reported_not_wrapped() {
    assert_eq!(int::<i32>("99999999999999999999"), Err(NumError::Overflow));
    assert_eq!(int::<i32>("2147483648"), Err(NumError::Overflow));
    assert_eq!(int::<u64>("18446744073709551616"), Err(NumError::Overflow));
    assert_eq!(int::<u8>("0x100"), Err(NumError::Overflow));
    assert_eq!(int::<u8>("0400"), Err(NumError::Overflow));
}

#[test]
fn overflow_in_last_digit() {
    assert_eq!(int::<i8>("127"), Ok(127));
    assert_eq!(int::<i8>("128"), Err(NumError::Overflow));
    assert_eq!(int::<u8>("255"), Ok(255));
    assert_eq!(int::<u8>("256"), Err(NumError::Overflow));
}

#[test]
fn minimum_magnitude_is_unreachable() {
    assert_eq!(int::<i8>("-127"), Ok(-127));
    assert_eq!(int::<i8>("-128"), Err(NumError::Overflow));
    assert_eq!(
        int::<i64>("-9223372036854775808"),
        Err(NumError::Overflow)
    );
}

#[test]
fn wide_destinations() {
    assert_eq!(
        int::<u128>("340282366920938463463374607431768211455"),
        Ok(u128::MAX)
    );
    assert_eq!(int::<i128>("-0x7f"), Ok(127));
    assert_eq!(int::<usize>("4096"), Ok(4096));
    assert_eq!(int::<isize>("-4096"), Ok(-4096));
}

// === Type Suffix ===

#[test]
fn suffix_letters_end_the_digits() {
    assert_eq!(int::<u32>("10u"), Ok(10));
    assert_eq!(int::<u64>("10ul"), Ok(10));
    assert_eq!(int::<i64>("10LL"), Ok(10));
    assert_eq!(int::<u64>("0x10UL"), Ok(16));
    assert_eq!(int::<i32>("0u"), Ok(0));
}

#[test]
fn nothing_numeric_after_suffix() {
    assert_eq!(int::<i32>("12u5"), Err(NumError::invalid(b'5', 3)));
    assert_eq!(int::<i32>("12u,"), Err(NumError::invalid(b',', 3)));
    assert_eq!(int::<i32>("12u "), Err(NumError::invalid(b' ', 3)));
}

#[test]
fn suffix_alone_has_no_digits() {
    assert_eq!(int::<i32>("u"), Err(NumError::NoDigits));
    assert_eq!(int::<i32>("-L"), Err(NumError::NoDigits));
}

// === Separator Tolerance ===

#[test]
fn thousands_separators_are_skipped_in_decimal() {
    assert_eq!(int::<i32>("1,000,000"), Ok(1_000_000));
    assert_eq!(int::<i32>("-1,234"), Ok(-1234));
}

#[test]
fn separator_positions_are_not_validated() {
    assert_eq!(int::<i32>("1,,2"), Ok(12));
    assert_eq!(int::<i32>("1 2"), Ok(12));
    assert_eq!(int::<i32>("12,"), Ok(12));
    assert_eq!(int::<i32>(",12"), Ok(12));
    assert_eq!(int::<i32>("1 , 2 "), Ok(12));
}

#[test]
fn separators_only_count_as_no_digits() {
    assert_eq!(int::<i32>(",,,"), Err(NumError::NoDigits));
}

#[test]
fn separators_are_rejected_outside_decimal() {
    assert_eq!(int::<i32>("0x1,0"), Err(NumError::invalid(b',', 3)));
    assert_eq!(int::<i32>("01 0"), Err(NumError::invalid(b' ', 2)));
    assert_eq!(
        int_in::<i32>("f f", Base::Hexadecimal),
        Err(NumError::invalid(b' ', 1))
    );
}

#[test]
fn grouping_follows_the_active_separator() {
    let german = Separators::new(',', '.').unwrap_or_default();
    assert_eq!(parse_int::<i32>("1.000.000", Base::Auto, &german), Ok(1_000_000));
    assert_eq!(
        parse_int::<i32>("1,000", Base::Auto, &german),
        Err(NumError::invalid(b',', 1))
    );

    let swiss = Separators::for_locale("de_CH");
    assert_eq!(parse_int::<i32>("1'000", Base::Auto, &swiss), Ok(1000));
}

// === Purity ===

#[test]
fn repeated_calls_agree() {
    for text in ["0x1F", "-12,345", "99999999999999999999", "abc", ""] {
        assert_eq!(int::<i32>(text), int::<i32>(text), "{text:?}");
    }
}

#[test]
fn str_and_bytes_agree() {
    for text in ["42", "-0x2A", "052", "4,2", "x"] {
        assert_eq!(
            int::<i64>(text),
            parse_int_bytes::<i64>(text.as_bytes(), Base::Auto, &Separators::DEFAULT),
            "{text:?}"
        );
    }
}
