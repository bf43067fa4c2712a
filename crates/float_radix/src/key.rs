//! Conversions from floating-point values to radix keys, which can be sorted bitwise.
//!
//! Reinterpreted as unsigned integers, IEEE 754 values are sign-magnitude:
//! negative numbers land after the positive ones, and among themselves they
//! run the wrong way (larger magnitude, larger bit pattern).
//!
//! Both problems go away with one rule:
//! - sign bit 1: flip all the bits
//! - sign bit 0: flip the sign bit
//!
//! ```plaintext
//! NEG_INFINITY  1_11111111_0000...0    0_00000000_1111...1
//! -1.0          1_01111111_0000...0 -> 0_10000000_1111...1  flip all the bits
//! -0.0          1_00000000_0000...0    0_11111111_1111...1
//! ----------------------------------------------------------------------
//! 0.0           0_00000000_0000...0    1_00000000_0000...0
//! 1.0           0_01111111_0000...0 -> 1_01111111_0000...0  flip the sign bit
//! INFINITY      0_11111111_0000...0    1_11111111_0000...0
//! ```
//!
//! NaN payloads end up past the infinities on their own sign's side. That
//! placement is an artifact of the mapping, not an ordering guarantee.

/// Maps an `f32` to a `u32` whose unsigned order matches the float order.
#[inline(always)]
pub const fn f32_to_key(value: f32) -> u32 {
    let bits = value.to_bits();
    // All ones for negatives, just the sign bit otherwise.
    let mask = (((bits as i32) >> 31) as u32) | (1 << 31);
    bits ^ mask
}

/// Inverse of [`f32_to_key`].
#[inline(always)]
pub const fn key_to_f32(key: u32) -> f32 {
    let mask = ((((key as i32) >> 31) as u32) ^ u32::MAX) | (1 << 31);
    f32::from_bits(key ^ mask)
}

/// Maps an `f64` to a `u64` whose unsigned order matches the float order.
#[inline(always)]
pub const fn f64_to_key(value: f64) -> u64 {
    let bits = value.to_bits();
    let mask = (((bits as i64) >> 63) as u64) | (1 << 63);
    bits ^ mask
}

/// Inverse of [`f64_to_key`].
#[inline(always)]
pub const fn key_to_f64(key: u64) -> f64 {
    let mask = ((((key as i64) >> 63) as u64) ^ u64::MAX) | (1 << 63);
    f64::from_bits(key ^ mask)
}

/// Floating-point types the radix sort knows how to key.
///
/// Sealed: the engine trusts `digit` to stay below the mask it is given.
pub trait RadixFloat: Copy + Default + PartialOrd + private::Sealed {
    /// Unsigned integer of the same width as `Self`.
    type Key: Copy + Ord;

    /// Width of the key in bits.
    const BITS: u32;

    fn to_radix_key(self) -> Self::Key;

    fn from_radix_key(key: Self::Key) -> Self;

    /// Bucket of `self` for the digit starting at bit `shift`.
    fn digit(self, shift: u32, mask: usize) -> usize;
}

macro_rules! radix_float_impl {
    ($($t:ty => $key:ty, $to:ident, $from:ident;)*) => ($(
        impl RadixFloat for $t {
            type Key = $key;

            const BITS: u32 = <$key>::BITS;

            #[inline(always)]
            fn to_radix_key(self) -> $key {
                $to(self)
            }

            #[inline(always)]
            fn from_radix_key(key: $key) -> Self {
                $from(key)
            }

            #[inline(always)]
            fn digit(self, shift: u32, mask: usize) -> usize {
                ($to(self) >> shift) as usize & mask
            }
        }
    )*)
}

radix_float_impl! {
    f32 => u32, f32_to_key, key_to_f32;
    f64 => u64, f64_to_key, key_to_f64;
}

mod private {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}
