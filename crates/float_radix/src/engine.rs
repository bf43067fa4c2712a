use log::trace;

use crate::key::RadixFloat;

#[inline]
pub(crate) fn pass_count(key_bits: u32, radix_bits: u32) -> u32 {
    key_bits.div_ceil(radix_bits)
}

/// Runs every counting pass over `data`, ping-ponging with `aux`.
///
/// `counts` must hold exactly `1 << radix_bits` buckets. Returns `true` when
/// the sorted sequence ended up in `aux`.
pub(crate) fn distribute<T: RadixFloat>(
    data: &mut [T],
    aux: &mut [T],
    counts: &mut [usize],
    radix_bits: u32,
) -> bool {
    debug_assert_eq!(data.len(), aux.len());
    debug_assert_eq!(counts.len(), 1usize << radix_bits);

    let len = data.len();
    let mask = counts.len() - 1;

    let mut src_is_data = true;
    for pass in 0..pass_count(T::BITS, radix_bits) {
        let shift = pass * radix_bits;
        let (src, dst) = if src_is_data {
            (&*data, &mut *aux)
        } else {
            (&*aux, &mut *data)
        };

        count_digits(src, counts, shift, mask);
        // Everything shares this digit: the scatter would be the identity.
        if counts.contains(&len) {
            trace!("radix pass {pass} skipped, single bucket");
            continue;
        }
        prefix_sum(counts);
        scatter(src, dst, counts, shift, mask);

        src_is_data = !src_is_data;
    }

    !src_is_data
}

#[inline]
fn count_digits<T: RadixFloat>(src: &[T], counts: &mut [usize], shift: u32, mask: usize) {
    counts.fill(0);
    for &x in src {
        counts[x.digit(shift, mask)] += 1;
    }
}

#[inline]
fn prefix_sum(counts: &mut [usize]) {
    let mut sum = 0usize;
    for c in counts.iter_mut() {
        let old = *c;
        *c = sum;
        sum += old;
    }
}

#[inline]
fn scatter<T: RadixFloat>(
    src: &[T],
    dst: &mut [T],
    offsets: &mut [usize],
    shift: u32,
    mask: usize,
) {
    debug_assert_eq!(src.len(), dst.len());
    // Hot loop: offsets come from the prefix sums of this very source, so
    // every position stays below `dst.len()` and every digit below
    // `offsets.len()`.
    unsafe {
        for &x in src {
            let digit = x.digit(shift, mask);
            let pos = *offsets.get_unchecked(digit);
            *dst.get_unchecked_mut(pos) = x;
            *offsets.get_unchecked_mut(digit) = pos + 1;
        }
    }
}
