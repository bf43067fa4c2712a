//! Order-independent fingerprints for checking that a sort only permutes.

use std::ops::Add;

/// XOR and wrapping sum of the raw bit patterns, plus the element count.
///
/// Works on bits rather than values so `-0.0`, `0.0` and NaN payloads are all
/// told apart, and float rounding never makes two orders disagree.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Checksum {
    pub len: usize,
    pub xor: u64,
    pub sum: u64,
}

impl Checksum {
    pub fn of_f64(data: &[f64]) -> Self {
        Self::from_bits(data.iter().map(|x| x.to_bits()))
    }

    pub fn of_f32(data: &[f32]) -> Self {
        Self::from_bits(data.iter().map(|x| u64::from(x.to_bits())))
    }

    fn from_bits(bits: impl Iterator<Item = u64>) -> Self {
        bits.fold(Self::default(), |acc, b| {
            acc + Self {
                len: 1,
                xor: b,
                sum: b,
            }
        })
    }
}

impl Add for Checksum {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            len: self.len + rhs.len,
            xor: self.xor ^ rhs.xor,
            sum: self.sum.wrapping_add(rhs.sum),
        }
    }
}

/// Plain floating-point sum. Only order-independent when every partial sum
/// is exact, which holds for small hand-written cases.
pub fn float_sum(data: &[f64]) -> f64 {
    data.iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_order() {
        let a = [3.5, -2.0, 0.0, -0.5, 100.25];
        let b = [-2.0, -0.5, 0.0, 3.5, 100.25];
        assert_eq!(Checksum::of_f64(&a), Checksum::of_f64(&b));
        assert_eq!(float_sum(&a), 101.25);
        assert_eq!(float_sum(&b), 101.25);
    }

    #[test]
    fn detects_changed_values() {
        let a = [1.0, 2.0, 3.0];
        assert_ne!(Checksum::of_f64(&a), Checksum::of_f64(&[1.0, 2.0, 4.0]));
        assert_ne!(Checksum::of_f64(&a), Checksum::of_f64(&[1.0, 2.0]));
        assert_ne!(Checksum::of_f64(&[0.0]), Checksum::of_f64(&[-0.0]));
        // XOR alone cancels duplicated pairs; the sum does not.
        assert_ne!(
            Checksum::of_f64(&[5.0, 5.0, 1.0]),
            Checksum::of_f64(&[6.0, 6.0, 1.0])
        );
    }

    #[test]
    fn f32_checksum() {
        let a = [1.5_f32, -3.0, 0.25];
        let b = [0.25_f32, 1.5, -3.0];
        assert_eq!(Checksum::of_f32(&a), Checksum::of_f32(&b));
        assert_eq!(Checksum::of_f32(&a).len, 3);
        assert_eq!(Checksum::of_f32(&[]), Checksum::default());
    }
}
