use thiserror::Error;

/// Crate-specific error enum.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A channel index was not 0 (red), 1 (green), or 2 (blue).
    #[error("subscript out of range")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_out_of_range_message() {
        let err = Error::IndexOutOfRange { index: 3 };
        assert_eq!("subscript out of range", err.to_string());
    }
}
