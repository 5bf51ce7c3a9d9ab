//! Spreadsheet-style column naming.
//!
//! Maps a zero-indexed column position to its letter label (0 -> "A",
//! 25 -> "Z", 26 -> "AA"). The sequence is bijective base-26: there is no
//! zero digit, so labels roll over as ... Z, AA, AB ... and every index has
//! exactly one representation.

/// Convert a column index to spreadsheet-style letters (0 -> A, 25 -> Z, 26 -> AA).
///
/// Total for all indices and injective; a freshly appended column is named
/// `column_name(current_column_count)`.
pub fn column_name(index: usize) -> String {
    let mut result = String::new();
    let mut n = index as u128 + 1;
    while n > 0 {
        n -= 1;
        result.insert(0, (b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::column_name;

    #[test]
    fn test_single_letter_names() {
        assert_eq!(column_name(0), "A");
        assert_eq!(column_name(1), "B");
        assert_eq!(column_name(25), "Z");
    }

    #[test]
    fn test_rollover_to_double_letters() {
        assert_eq!(column_name(26), "AA");
        assert_eq!(column_name(27), "AB");
        assert_eq!(column_name(51), "AZ");
        assert_eq!(column_name(52), "BA");
        assert_eq!(column_name(701), "ZZ");
        assert_eq!(column_name(702), "AAA");
    }

    #[test]
    fn test_length_grows_with_index() {
        assert_eq!(column_name(25).len(), 1);
        assert_eq!(column_name(26).len(), 2);
        assert_eq!(column_name(701).len(), 2);
        assert_eq!(column_name(702).len(), 3);
    }

    #[test]
    fn test_injective_over_prefix() {
        let mut seen = std::collections::HashSet::new();
        for i in 0..10_000 {
            assert!(seen.insert(column_name(i)), "duplicate name at index {}", i);
        }
    }

    #[test]
    fn test_handles_max_usize() {
        let letters = column_name(usize::MAX);
        assert!(!letters.is_empty());
        assert!(letters.chars().all(|c| c.is_ascii_uppercase()));
    }
}
