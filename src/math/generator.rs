use super::gcd;

/// Returns every prime strictly less than `limit`, in ascending order, using a sieve of
/// Eratosthenes.
///
/// # Examples
/// ```
/// # use gears::math::primes;
/// assert_eq!(primes(20), [2, 3, 5, 7, 11, 13, 17, 19]);
/// ```
pub fn primes(limit: u64) -> Vec<u64> {
    if limit < 3 {
        return Vec::new();
    }

    let size = limit as usize;
    let mut sieve = vec![true; size];
    sieve[0] = false;
    sieve[1] = false;

    let mut i = 2;
    while i * i < size {
        if sieve[i] {
            for multiple in (i * i..size).step_by(i) {
                sieve[multiple] = false;
            }
        }
        i += 1;
    }

    sieve
        .iter()
        .enumerate()
        .filter(|(_, is_prime)| **is_prime)
        .map(|(n, _)| n as u64)
        .collect()
}

/// Returns every primitive Pythagorean triple `(a, b, c)` with `c <= limit`, generated by Euclid's
/// formula `(j² - i², 2ij, i² + j²)` for coprime `i < j` of opposite parity.
///
/// # Examples
/// ```
/// # use gears::math::pythagorean_triples;
/// assert_eq!(pythagorean_triples(15), [(3, 4, 5), (5, 12, 13)]);
/// ```
pub fn pythagorean_triples(limit: u64) -> Vec<(u64, u64, u64)> {
    let mut triples = Vec::new();

    let mut i = 1_u64;
    while i * i + (i + 1) * (i + 1) <= limit {
        let mut j = i + 1;
        while j * j + i * i <= limit {
            if gcd(i, j) == 1 {
                triples.push((j * j - i * i, 2 * i * j, i * i + j * j));
            }
            j += 2;
        }
        i += 1;
    }

    triples.sort_by_key(|&(_, _, c)| c);
    triples
}
