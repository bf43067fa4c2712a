//! LSD radix sort for slices of `f32` and `f64`.
//!
//! Each value is mapped to an unsigned key with the same ordering (see
//! [`key`]), then sorted by repeated stable counting passes over 8-bit digits
//! of that key, ping-ponging between the caller's slice and a scratch buffer.
//!
//! ```
//! let mut data = [3.5, -2.0, 0.0, -0.5, 100.25];
//! float_radix::radix_sort(&mut data).unwrap();
//! assert_eq!(data, [-2.0, -0.5, 0.0, 3.5, 100.25]);
//! ```

mod engine;
mod error;
pub mod key;

use log::{debug, trace};

pub use error::{Result, SortError};
pub use key::{RadixFloat, f32_to_key, f64_to_key, key_to_f32, key_to_f64};

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    pub radix_bits: u32,
    pub insertion_threshold: usize,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    radix_bits: 8,
    insertion_threshold: 32,
};

/// Scratch space for the sort, reusable across calls on slices of the same
/// element type.
#[derive(Clone, Debug)]
pub struct SortContext<T> {
    aux: Vec<T>,
    counts: Vec<usize>,
}

impl<T> Default for SortContext<T> {
    fn default() -> Self {
        Self {
            aux: Vec::new(),
            counts: Vec::new(),
        }
    }
}

impl<T: RadixFloat> SortContext<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preallocates scratch space for slices of up to `len` elements.
    pub fn with_capacity(len: usize) -> Result<Self> {
        let mut ctx = Self::default();
        ctx.ensure_aux(len)?;
        ctx.ensure_counts(1 << TUNED_PARAMS.radix_bits)?;
        Ok(ctx)
    }

    /// Number of elements the scratch buffer currently holds.
    pub fn scratch_len(&self) -> usize {
        self.aux.len()
    }

    fn ensure_aux(&mut self, len: usize) -> Result<()> {
        if self.aux.len() < len {
            self.aux
                .try_reserve_exact(len - self.aux.len())
                .map_err(|source| SortError::ResourceExhaustion {
                    requested: len,
                    source,
                })?;
            self.aux.resize(len, T::default());
        }
        Ok(())
    }

    fn ensure_counts(&mut self, buckets: usize) -> Result<()> {
        if self.counts.len() < buckets {
            self.counts
                .try_reserve_exact(buckets - self.counts.len())
                .map_err(|source| SortError::ResourceExhaustion {
                    requested: buckets,
                    source,
                })?;
            self.counts.resize(buckets, 0);
        }
        Ok(())
    }

    fn buffers(&mut self, len: usize, buckets: usize) -> Result<(&mut [T], &mut [usize])> {
        self.ensure_aux(len)?;
        self.ensure_counts(buckets)?;
        Ok((&mut self.aux[..len], &mut self.counts[..buckets]))
    }
}

/// Sorts `data` ascending in place.
///
/// Scratch space is allocated for the call and released before returning.
/// On [`SortError::ResourceExhaustion`] `data` is left untouched. NaNs do not
/// cause an error, but where they end up is unspecified.
pub fn radix_sort<T: RadixFloat>(data: &mut [T]) -> Result<()> {
    let mut ctx = SortContext::new();
    radix_sort_with_ctx(data, &mut ctx)
}

/// Like [`radix_sort`], reusing the scratch space held by `ctx`.
pub fn radix_sort_with_ctx<T: RadixFloat>(
    data: &mut [T],
    ctx: &mut SortContext<T>,
) -> Result<()> {
    sort_with_radix_bits(data, ctx, TUNED_PARAMS.radix_bits)
}

pub fn sort_f32(data: &mut [f32]) -> Result<()> {
    radix_sort(data)
}

pub fn sort_f64(data: &mut [f64]) -> Result<()> {
    radix_sort(data)
}

/// Whether `data` is non-decreasing in radix key order, the order this crate
/// sorts into (`-0.0` before `0.0`).
pub fn is_sorted_by_key<T: RadixFloat>(data: &[T]) -> bool {
    data.is_sorted_by_key(|x| x.to_radix_key())
}

fn sort_with_radix_bits<T: RadixFloat>(
    data: &mut [T],
    ctx: &mut SortContext<T>,
    radix_bits: u32,
) -> Result<()> {
    let len = data.len();
    if len < 2 || is_sorted_by_key(data) {
        return Ok(());
    }
    if len <= TUNED_PARAMS.insertion_threshold {
        insertion_sort_by_key(data);
        return Ok(());
    }

    let (aux, counts) = ctx.buffers(len, 1 << radix_bits).inspect_err(|err| {
        debug!("radix sort of {len} elements aborted: {err}");
    })?;

    trace!(
        "radix sort: len={len} key_bits={} radix_bits={radix_bits} passes={}",
        T::BITS,
        engine::pass_count(T::BITS, radix_bits),
    );

    if engine::distribute(data, aux, counts, radix_bits) {
        data.copy_from_slice(aux);
    }
    Ok(())
}

fn insertion_sort_by_key<T: RadixFloat>(data: &mut [T]) {
    for i in 1..data.len() {
        let value = data[i];
        let key = value.to_radix_key();
        let mut j = i;
        while j > 0 && data[j - 1].to_radix_key() > key {
            data[j] = data[j - 1];
            j -= 1;
        }
        data[j] = value;
    }
}
