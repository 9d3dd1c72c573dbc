#![cfg(test)]

use super::*;

#[test]
fn test_basic_algorithms() {
    assert_eq!(factorial(10_u64), 3628800);
    assert_eq!(factorial(0_u64), 1);
    assert_eq!(fibonacci(20_u64), 6765);
    assert_eq!(fibonacci(0_u32), 0);
    assert_eq!(fibonacci(1_u32), 1);
    assert_eq!(gcd(252_u64, 105), 21);
    assert_eq!(gcd(17_u64, 0), 17);
    assert_eq!(mod_pow(4_u64, 13, 497), 445);
    assert_eq!(mod_pow(7_u64, 0, 1), 0, "Anything modulo one should be zero.");
}

#[test]
fn test_algorithms_with_uintx() {
    assert_eq!(
        factorial(UIntX::from(30_u8)).to_string(),
        "265252859812191058636308480000000",
        "UIntX should be usable where the result overflows u64."
    );
    assert_eq!(
        fibonacci(UIntX::from(100_u8)).to_string(),
        "354224848179261915075"
    );
    assert_eq!(
        gcd(UIntX::from(252_u32), UIntX::from(105_u32)),
        UIntX::from(21_u32)
    );
    assert_eq!(
        mod_pow(UIntX::from(2_u8), UIntX::from(100_u8), UIntX::from(1_000_000_007_u64)),
        UIntX::from(976371285_u64)
    );
}

#[test]
fn test_generators() {
    assert!(primes(2).is_empty());
    assert_eq!(primes(3), [2]);
    assert_eq!(primes(30), [2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    assert_eq!(primes(1000).len(), 168);

    let triples = pythagorean_triples(100);
    assert!(triples.contains(&(3, 4, 5)));
    assert!(triples.contains(&(21, 20, 29)));
    assert!(
        !triples.contains(&(6, 8, 10)),
        "Only primitive triples should be generated."
    );
    for (a, b, c) in triples {
        assert_eq!(a * a + b * b, c * c, "Every triple should satisfy a² + b² = c².");
        assert!(c <= 100);
    }
}
