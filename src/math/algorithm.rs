use num_traits::Num;

/// Returns the `number`th Fibonacci number, where `fibonacci(0) == 0` and `fibonacci(1) == 1`.
///
/// Works for any unsigned numeric type, including [`UIntX`](super::UIntX) for results that would
/// overflow a primitive.
///
/// # Examples
/// ```
/// # use gears::math::fibonacci;
/// assert_eq!(fibonacci(20_u64), 6765);
/// ```
pub fn fibonacci<T: Num + Clone + PartialOrd>(number: T) -> T {
    if number < T::one() + T::one() {
        return number;
    }

    let mut current = T::one();
    let mut previous = T::zero();
    let mut remaining = number - T::one();

    while !remaining.is_zero() {
        let next = current.clone() + previous;
        previous = current;
        current = next;
        remaining = remaining - T::one();
    }

    current
}

/// Returns `number!`.
///
/// # Examples
/// ```
/// # use gears::math::factorial;
/// assert_eq!(factorial(10_u64), 3628800);
/// ```
pub fn factorial<T: Num + Clone + PartialOrd>(number: T) -> T {
    let mut result = T::one();
    let mut factor = number;

    while factor > T::one() {
        result = result * factor.clone();
        factor = factor - T::one();
    }

    result
}

/// Returns the greatest common divisor of `x` and `y`, using Euclid's algorithm.
pub fn gcd<T: Num + Clone>(x: T, y: T) -> T {
    let (mut x, mut y) = (x, y);

    while !y.is_zero() {
        let remainder = x % y.clone();
        x = y;
        y = remainder;
    }

    x
}

/// Returns `base^exponent % modulus`, by repeated squaring.
///
/// # Panics
/// Panics if `modulus` is zero and `T` panics on a remainder by zero.
pub fn mod_pow<T: Num + Clone>(base: T, exponent: T, modulus: T) -> T {
    let two = T::one() + T::one();
    let mut result = T::one() % modulus.clone();
    let mut base = base % modulus.clone();
    let mut exponent = exponent;

    while !exponent.is_zero() {
        if (exponent.clone() % two.clone()).is_one() {
            result = (base.clone() * result) % modulus.clone();
        }
        exponent = exponent / two.clone();
        base = (base.clone() * base) % modulus.clone();
    }

    result
}
