use std::collections::TryReserveError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SortError>;

#[derive(Error, Debug)]
pub enum SortError {
    /// Scratch space for the sort could not be allocated. The input is left
    /// exactly as it was passed in.
    #[error("cannot allocate radix sort scratch space for {requested} elements")]
    ResourceExhaustion {
        requested: usize,
        #[source]
        source: TryReserveError,
    },
}
