/// Header cell above a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopIndex {
    /// Visible position number
    Numeral(usize),
    /// Invisible, same reserved width as a numeral
    Placeholder,
}

/// Header cell for column `x`, or nothing when top indexes are off.
///
/// A numeral shows on every chunk-aligned column that lies within the unpadded length `max_top`.
///
/// ```
/// use sqv::libs::viewer::top_index::{add_top_index, TopIndex};
/// assert_eq!(add_top_index(true, 5, 10, 12), Some(TopIndex::Numeral(10)));
/// assert_eq!(add_top_index(true, 5, 15, 12), Some(TopIndex::Placeholder));
/// assert_eq!(add_top_index(false, 5, 10, 12), None);
/// ```
pub fn add_top_index(
    top_indexes: bool,
    chunk_size: usize,
    x: usize,
    max_top: usize,
) -> Option<TopIndex> {
    if !top_indexes {
        return None;
    }

    if chunk_size > 0 && x % chunk_size == 0 && x <= max_top {
        Some(TopIndex::Numeral(x))
    } else {
        Some(TopIndex::Placeholder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_index_iff() {
        let (chunk_size, max_top) = (3, 7);
        for x in 1..=9 {
            let expected = if x % 3 == 0 && x <= 7 {
                TopIndex::Numeral(x)
            } else {
                TopIndex::Placeholder
            };
            assert_eq!(add_top_index(true, chunk_size, x, max_top), Some(expected));
        }
    }

    #[test]
    fn test_top_index_unchunked() {
        for x in 1..=4 {
            assert_eq!(add_top_index(true, 0, x, 4), Some(TopIndex::Placeholder));
        }
    }
}
