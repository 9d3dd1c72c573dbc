#![cfg(test)]

use std::collections::hash_map::RandomState;
use std::hash::BuildHasher;

use super::*;
use crate::util::panic::assert_panics;

fn x(s: &str) -> UIntX {
    s.parse().expect("test literal should be a valid decimal string")
}

#[test]
fn test_addition() {
    let mut stuff = x("6719847289364162472817421");
    stuff += 1928317212831712_u64;
    assert_eq!(stuff, x("6719847291292479685649133"));
    assert!(stuff > UIntX::from(100_u32));
    assert_ne!(stuff, UIntX::zero());

    assert_eq!(
        x("999999999999999999") + UIntX::one(),
        x("1000000000000000000"),
        "A carry should propagate through every chunk and create a new one."
    );

    let a = x("123456789123456789123456789");
    let b = x("987654321");
    assert_eq!(&a + &b, &b + &a, "Addition should be commutative.");
    assert_eq!(&a + UIntX::zero(), a, "Zero should be the additive identity.");
}

#[test]
fn test_subtraction() {
    let mut stuff = x("9123847281347218347214212");
    stuff -= 9182371232121_u64;
    assert_eq!(stuff, x("9123847281338035975982091"));
    assert!(stuff > UIntX::from(100_u32));

    assert_eq!(
        x("1000000000000000000") - UIntX::one(),
        x("999999999999999999"),
        "A borrow should propagate through every chunk and the result should be normalized."
    );
    assert_eq!(x("123456789123") - x("123456789123"), UIntX::zero());
    assert_eq!(
        (x("123456789123") - x("123456789123")).chunks(),
        &[0],
        "Zero should be represented by a single chunk."
    );
}

#[test]
fn test_subtraction_underflow() {
    assert_eq!(UIntX::from(5_u8).checked_sub(&UIntX::from(6_u8)), Err(SubtractionUnderflow));

    let mut value = UIntX::from(5_u8);
    assert_eq!(value.try_sub_assign(&x("100000000000")), Err(SubtractionUnderflow));
    assert_eq!(value, UIntX::from(5_u8), "A failed subtraction should leave the value untouched.");

    assert_panics!({
        let _ = UIntX::from(1_u8) - UIntX::from(2_u8);
    });
}

#[test]
fn test_multiplication() {
    let mut stuff = x("819374812937489172894782121212212");
    stuff *= 7182461231831_u64;
    assert_eq!(stuff, x("5885127828262293680350082130474219356480320172"));

    let a = x("98765432109876543210");
    assert_eq!(&a * UIntX::one(), a, "One should be the multiplicative identity.");
    assert_eq!(&a * UIntX::zero(), UIntX::zero(), "Multiplying by zero should give zero.");
    assert_eq!(
        (&a * UIntX::zero()).chunks().len(),
        1,
        "A zero product should be normalized."
    );
    assert_eq!(
        &a * x("123456789012345"),
        x("123456789012345") * &a,
        "Multiplication should be commutative."
    );

    let two_pow_100: UIntX = std::iter::repeat_n(UIntX::from(2_u8), 100).product();
    assert_eq!(two_pow_100.to_string(), "1267650600228229401496703205376");
}

#[test]
fn test_division() {
    let mut stuff = x("1927498748914987934621746728364782163748212212231");
    stuff /= 814371284321_u64;
    assert_eq!(stuff, x("2366855003393301719774904141041689695"));
    assert!(stuff > UIntX::from(100_u32));

    assert_eq!(x("123456789012345678901234567890") / 1000000000_u64, x("123456789012345678901"));
    assert_eq!(x("1000000000000000000") / 999999999_u64, x("1000000001"));
    assert_eq!(UIntX::from(7_u8) / UIntX::from(9_u8), UIntX::zero());
}

#[test]
fn test_modulus() {
    let mut stuff = x("91984712847987981232998147123812");
    stuff %= 8914712412_u64;
    assert_eq!(stuff, x("3725426300"));
    assert!(stuff > UIntX::from(100_u32));

    assert_eq!(x("1000000000000000000") % 999999999_u64, UIntX::one());
}

#[test]
fn test_division_identity() {
    let pairs = [
        ("1927498748914987934621746728364782163748212212231", "814371284321"),
        ("91984712847987981232998147123812", "8914712412"),
        ("5", "123456789012345678901234567890"),
        ("999999999999999999999999999", "999999999"),
        ("340282366920938463463374607431768211456", "18446744073709551616"),
    ];

    for (a, b) in pairs {
        let (a, b) = (x(a), x(b));
        let (quotient, remainder) = a.div_rem(&b).expect("divisor is non-zero");
        assert_eq!(
            &quotient * &b + &remainder,
            a,
            "(a / b) * b + a % b should equal a."
        );
        assert!(remainder < b, "The remainder should be less than the divisor.");
    }
}

#[test]
fn test_division_by_zero() {
    let a = x("123456789012345678901234567890");
    assert_eq!(a.checked_div(&UIntX::zero()), Err(DivisionByZero));
    assert_eq!(a.checked_rem(&UIntX::zero()), Err(DivisionByZero));
    assert_eq!(a.div_rem(&UIntX::zero()), Err(DivisionByZero));

    assert_panics!({
        let _ = &a / UIntX::zero();
    });
    assert_panics!({
        let _ = &a % UIntX::zero();
    });
}

#[test]
fn test_ordering() {
    let values = [
        UIntX::zero(),
        UIntX::one(),
        x("999999999"),
        x("1000000000"),
        x("1000000001"),
        x("2000000000"),
        x("123456789012345678901234567890"),
    ];

    for (i, a) in values.iter().enumerate() {
        for (j, b) in values.iter().enumerate() {
            let relations = [a < b, a == b, a > b];
            assert_eq!(
                relations.iter().filter(|r| **r).count(),
                1,
                "Exactly one of <, == and > should hold."
            );
            assert_eq!(a.cmp(b), i.cmp(&j), "Values are listed in ascending order.");
        }
    }
}

#[test]
fn test_conversion() {
    let stuff = x("1234567890");
    assert_eq!(uintx_cast::<i64>(&stuff), 1234567890_i64);
    assert_eq!(uintx_cast::<u64>(&stuff), 1234567890_u64);
    assert_eq!(uintx_cast::<String>(&stuff), "1234567890");
    assert_eq!(uintx_cast::<f64>(&stuff), 1234567890.0);

    for n in [0_u64, 1, 999_999_999, 1_000_000_000, u64::MAX] {
        assert_eq!(uintx_cast::<u64>(&UIntX::from(n)), n, "Integers should round trip.");
    }
    assert_eq!(uintx_cast::<u128>(&UIntX::from(u128::MAX)), u128::MAX);

    assert_eq!(
        uintx_cast::<u8>(&UIntX::from(300_u32)),
        44,
        "Casting into a narrow type should wrap like an `as` cast."
    );

    assert_eq!(u64::try_from(&stuff), Ok(1234567890));
    assert_eq!(u8::try_from(&UIntX::from(300_u32)), Err(CastOverflow));
    assert_eq!(u128::try_from(x("340282366920938463463374607431768211456")), Err(CastOverflow));
}

#[test]
fn test_parsing_and_display() {
    assert_eq!(x("0").to_string(), "0");
    assert_eq!(x("000000000000000000042").to_string(), "42", "Leading zeros should be stripped.");
    assert_eq!(x("000").chunks(), &[0]);
    assert_eq!(x("1000000000").chunks(), &[0, 1]);
    assert_eq!(
        x("100000000000000000007").to_string(),
        "100000000000000000007",
        "Inner chunks should be zero padded."
    );
    assert_eq!(format!("{:>12}", UIntX::from(42_u8)), "          42");
    assert_eq!(format!("{:?}", UIntX::from(42_u8)), "UIntX(42)");

    assert!(matches!("".parse::<UIntX>(), Err(ParseUIntXError::Empty(_))));
    assert_eq!(
        "12a4".parse::<UIntX>(),
        Err(InvalidDigit { index: 2, found: 'a' }.into())
    );
    assert!("-5".parse::<UIntX>().is_err());

    assert_eq!(x("123456789012345678901234567890").digits(), 30);
    assert_eq!(UIntX::zero().digits(), 1);
}

#[test]
fn test_equality_and_hash() {
    let state = RandomState::new();
    let parsed = x("00001000000000");
    let built = UIntX::from(1_000_000_000_u64);

    assert_eq!(parsed, built, "Different construction methods should produce equal results.");
    assert_eq!(
        state.hash_one(&parsed),
        state.hash_one(&built),
        "Equal values should produce the same hash."
    );
}
