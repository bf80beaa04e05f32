//! Integer hashing and rounding helpers.
//!
//! Pure arithmetic consumed by callers building hash codes over multiple
//! values: an order-sensitive combinator, an order-insensitive one, and
//! power-of-two rounding for table sizing.

/// Smallest power of two greater than or equal to `n`; 0 maps to 0.
#[inline]
pub fn round_to_power_of_two(n: u32) -> u32 {
    if n == 0 {
        0
    } else {
        n.next_power_of_two()
    }
}

/// Multiply with wrap-around: the high half of the 64-bit product is folded
/// back into the low half so no bits are simply discarded.
#[inline]
pub fn multiply_wrap(a: u32, b: u32) -> u32 {
    let wide = (a as u64).wrapping_mul(b as u64);
    (wide as u32).wrapping_add((wide >> 32) as u32)
}

/// Order-sensitive hash combination: fold `item` into `accumulated` scaled
/// by `prime`. Swapping two `(prime, item)` contributions generally changes
/// the result.
#[inline]
pub fn multi_hash_ordered(accumulated: u32, prime: u32, item: u32) -> u32 {
    multiply_wrap(accumulated, prime).wrapping_add(item)
}

/// Order-insensitive hash combination: each `(prime, item)` contribution is
/// hashed independently and summed, so contributions commute.
#[inline]
pub fn multi_hash_unordered(accumulated: u32, prime: u32, item: u32) -> u32 {
    multiply_wrap(item, prime).wrapping_add(accumulated)
}
