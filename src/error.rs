use thiserror::Error;

/// Errors returned by multiset operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MultisetError {
    /// A frequency argument was negative.
    #[error("count must be non-negative, but was {0}")]
    NegativeCount(isize),
    /// The total number of occurrences would not fit in a `usize`.
    #[error("total count overflow")]
    CountOverflow,
    /// An iterator was advanced past its last element.
    #[error("no such element")]
    NoSuchElement,
}

/// Rejects negative counts, returning the count as a frequency otherwise.
pub(crate) fn check_count(count: isize) -> Result<usize, MultisetError> {
    usize::try_from(count).map_err(|_| {
        log::debug!("rejected negative count {count}");
        MultisetError::NegativeCount(count)
    })
}
