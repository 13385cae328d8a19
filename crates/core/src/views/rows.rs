/// Width of the rows built from images left over after the row hints run out.
pub const LEFTOVER_ROW_LEN: usize = 3;

/// Split `len` images into grid rows and return each row's size.
///
/// Capacities from `rows` are consumed in order, each clamped to at least
/// one image and at most the images remaining. Whatever is left after the
/// hints are exhausted is packed into rows of [`LEFTOVER_ROW_LEN`]; the last
/// of those may be narrower.
pub fn partition_rows(len: usize, rows: &[i64]) -> Vec<usize> {
    let mut sizes = Vec::with_capacity(rows.len() + len / LEFTOVER_ROW_LEN + 1);
    let mut remaining = len;

    for &capacity in rows {
        if remaining == 0 {
            break;
        }
        let capacity = usize::try_from(capacity.max(1)).unwrap_or(usize::MAX);
        let take = capacity.min(remaining);
        sizes.push(take);
        remaining -= take;
    }

    while remaining > 0 {
        let take = remaining.min(LEFTOVER_ROW_LEN);
        sizes.push(take);
        remaining -= take;
    }

    sizes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_then_rows_of_three() {
        assert_eq!(partition_rows(12, &[4, 3]), vec![4, 3, 3, 2]);
    }

    #[test]
    fn exact_multiple_of_three_has_full_last_row() {
        assert_eq!(partition_rows(6, &[]), vec![3, 3]);
    }

    #[test]
    fn non_positive_hints_take_one_image() {
        assert_eq!(partition_rows(4, &[0, -2, 2]), vec![1, 1, 2]);
    }

    #[test]
    fn oversized_hint_takes_what_is_left() {
        assert_eq!(partition_rows(3, &[5, 2]), vec![3]);
    }

    #[test]
    fn no_images_no_rows() {
        assert!(partition_rows(0, &[4, 3]).is_empty());
    }

    #[test]
    fn row_sizes_always_cover_every_image() {
        let hints = [4, 3, 4, 3, 2, 4, 4, 2, 1, 3, 3];
        for len in 0..60 {
            let sizes = partition_rows(len, &hints);
            assert_eq!(sizes.iter().sum::<usize>(), len, "len={len}");
            assert!(sizes.iter().all(|&s| s >= 1));
        }
    }
}
