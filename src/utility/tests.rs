#![cfg(test)]

use super::*;

#[test]
fn test_any_basic() {
    let x = AnyValue::empty();
    let y = x.clone();
    assert!(x.is_empty());
    assert!(y.is_empty(), "Cloning an empty value should stay empty.");
    assert!(AnyValue::default().is_empty());
    assert!(x.as_ref::<i32>().is_err(), "An empty value holds nothing to cast to.");

    let x = AnyValue::new(10);
    assert!(!x.is_empty());
    assert!(x.is::<i32>());
    assert_eq!(x.as_ref::<i32>(), Ok(&10));
    assert_eq!(any_cast::<i32>(&x), Ok(10));
}

#[test]
fn test_any_copy_and_move() {
    let mut x = AnyValue::new(871286126121_u64);
    let y = x.clone();
    assert!(x.is::<u64>());
    assert!(y.is::<u64>());
    assert_eq!(any_cast::<u64>(&x), any_cast::<u64>(&y));

    *x.as_mut::<u64>().expect("x holds a u64") = 1;
    assert_eq!(
        y.as_ref::<u64>(),
        Ok(&871286126121),
        "A clone should be independent of the original."
    );

    let old = x.replace(String::from("Hello"));
    assert_eq!(old.take::<u64>(), Ok(1));
    assert_eq!(x.take::<String>(), Ok(String::from("Hello")));
}

#[test]
fn test_any_errors() {
    let mut x = AnyValue::new("Hello");
    assert!(x.is::<&str>());
    assert!(!x.is::<i32>());
    assert_eq!(
        x.as_ref::<f32>(),
        Err(BadAnyCast { target: "f32" })
    );
    assert!(any_cast::<i32>(&x).is_err());
    assert!(x.as_mut::<String>().is_err());

    x.clear();
    assert!(x.is_empty());
    assert!(x.take::<&str>().is_err());
}

#[test]
fn test_tribool() {
    use Tribool::*;

    assert_eq!(Tribool::default(), Indeterminate);
    assert_eq!(Tribool::from(true), True);
    assert_eq!(Option::<bool>::from(False), Some(false));
    assert_eq!(Option::<bool>::from(Indeterminate), None);
    assert!(Tribool::from(None).is_indeterminate());

    assert_eq!(!True, False);
    assert_eq!(!False, True);
    assert_eq!(!Indeterminate, Indeterminate);

    assert_eq!(True & True, True);
    assert_eq!(True & Indeterminate, Indeterminate);
    assert_eq!(Indeterminate & False, False, "False should dominate and.");
    assert_eq!(false & Indeterminate, False);
    assert_eq!(True & false, False);

    assert_eq!(False | False, False);
    assert_eq!(False | Indeterminate, Indeterminate);
    assert_eq!(Indeterminate | True, True, "True should dominate or.");
    assert_eq!(true | Indeterminate, True);

    assert_eq!(True.equals(True), True);
    assert_eq!(True.equals(False), False);
    assert_eq!(False.equals(Indeterminate), Indeterminate);
    assert_eq!(True.not_equals(False), True);
    assert_eq!(Indeterminate.not_equals(Indeterminate), Indeterminate);

    assert_eq!(True.to_string(), "true");
    assert_eq!(format!("{:>5}", False), "false");
    assert_eq!(Indeterminate.to_string(), "indeterminate");
}

#[test]
fn test_base64_encode() {
    let cases = [
        ("Hello", "SGVsbG8="),
        ("Hello World", "SGVsbG8gV29ybGQ="),
        ("pleasure.", "cGxlYXN1cmUu"),
        ("leasure.", "bGVhc3VyZS4="),
        ("easure.", "ZWFzdXJlLg=="),
        ("asure.", "YXN1cmUu"),
        ("sure.", "c3VyZS4="),
        ("any carnal pleasure.", "YW55IGNhcm5hbCBwbGVhc3VyZS4="),
        ("any carnal pleasure", "YW55IGNhcm5hbCBwbGVhc3VyZQ=="),
        ("any carnal pleasur", "YW55IGNhcm5hbCBwbGVhc3Vy"),
        ("any carnal pleasu", "YW55IGNhcm5hbCBwbGVhc3U="),
        ("any carnal pleas", "YW55IGNhcm5hbCBwbGVhcw=="),
        ("", ""),
    ];

    for (plain, encoded) in cases {
        assert_eq!(base64::encode(plain), encoded);
        assert_eq!(
            base64::decode(encoded).as_deref(),
            Ok(plain.as_bytes()),
            "Decoding should reverse encoding."
        );
    }

    assert_eq!(base64::encode([0xFF_u8, 0xFE, 0x00]), "//4A");
}

#[test]
fn test_base64_decode() {
    assert_eq!(base64::decode("SGVs\nbG8g V29y\tbGQ").as_deref(), Ok(&b"Hello World"[..]));
    assert_eq!(
        base64::decode("c3VyZS4").as_deref(),
        Ok(&b"sure."[..]),
        "Padding should be optional."
    );

    assert_eq!(base64::decode("SGVs*G8="), Err(InvalidBase64 { index: 4 }));
    assert_eq!(
        base64::decode("SGVsbG8=SGVs"),
        Err(InvalidBase64 { index: 8 }),
        "Data after padding is invalid."
    );
    assert_eq!(base64::decode("=AAA"), Err(InvalidBase64 { index: 0 }));
    assert_eq!(base64::decode("Zg==="), Err(InvalidBase64 { index: 4 }));
    assert_eq!(
        base64::decode("SGVsb"),
        Err(InvalidBase64 { index: 5 }),
        "A single trailing character can't make a byte."
    );
}
