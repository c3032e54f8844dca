// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// The first ten values of `n * n + 1` (for `n` in `1..=200`) that are twin primes.
pub const FIRST_TEN_TWIN_PRIME_SQUARES: [u64; 10] =
    [5, 17, 101, 197, 5477, 8837, 16901, 17957, 21317, 25601];

#[must_use]
pub const fn square(n: u64) -> u64 {
    n * n
}

#[must_use]
pub const fn incr(n: u64) -> u64 {
    n + 1
}

#[must_use]
pub const fn is_even(n: &u64) -> bool {
    *n % 2 == 0
}

/// Trial division; fine for the small values the tests use.
#[must_use]
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    (2..).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

/// `n` and `n + 2` are both prime.
#[must_use]
pub fn is_twin_prime(n: &u64) -> bool {
    is_prime(*n) && is_prime(*n + 2)
}
