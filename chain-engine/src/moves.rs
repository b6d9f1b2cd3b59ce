use crate::types::Word;

/// Returns true if a braid move `aba -> bab` applies at position `i`.
///
/// Requires `w[i] == w[i+2]` and `w[i+1]` adjacent to `w[i]`.
/// Windows running past the end of the word never match.
///
/// # Example
/// ```
/// use chain_engine::{is_braid_move, Word};
///
/// let word = Word::from([1, 2, 1, 3]);
/// assert!(is_braid_move(0, &word));
/// assert!(!is_braid_move(1, &word));
/// ```
pub fn is_braid_move(i: usize, w: &Word) -> bool {
    if i + 2 >= w.len() {
        return false;
    }
    w[i] == w[i + 2] && w[i].abs_diff(w[i + 1]) == 1
}

/// Applies a braid move at position `i`, rewriting the window `aba` as `bab`.
///
/// The result is another reduced word for the same element, and applying the
/// move again restores `w`. Only meaningful where [`is_braid_move`] holds.
///
/// # Panics
///
/// Panics if `i + 2` is out of range for `w`.
pub fn do_braid_move(i: usize, w: &Word) -> Word {
    let mut next = w.clone();
    let window = &mut next.generators_mut()[i..i + 3];
    window.swap(0, 1);
    window[2] = window[0];
    next
}

/// Returns true if the generators at `i` and `i+1` commute (differ by more than 1).
pub fn is_comm_move(i: usize, w: &Word) -> bool {
    if i + 1 >= w.len() {
        return false;
    }
    w[i].abs_diff(w[i + 1]) > 1
}

/// Applies a commutation move, swapping positions `i` and `i+1`.
///
/// # Panics
///
/// Panics if `i + 1` is out of range for `w`.
pub fn do_comm_move(i: usize, w: &Word) -> Word {
    let mut next = w.clone();
    next.generators_mut().swap(i, i + 1);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::top_permutation;
    use proptest::prelude::*;

    #[test]
    fn test_braid_move_detection() {
        let word = Word::from([1, 2, 1, 3, 2, 1]);
        assert!(is_braid_move(0, &word));
        assert!(!is_braid_move(1, &word));
        assert!(!is_braid_move(3, &word));
        // Window past the end
        assert!(!is_braid_move(4, &word));
    }

    #[test]
    fn test_braid_move_needs_adjacent_generators() {
        // 1 and 3 commute, so 131 is not a braid window
        let word = Word::from([1, 3, 1]);
        assert!(!is_braid_move(0, &word));
    }

    #[test]
    fn test_do_braid_move() {
        let word = Word::from([1, 2, 1, 3]);
        assert_eq!(do_braid_move(0, &word), Word::from([2, 1, 2, 3]));
    }

    #[test]
    fn test_do_braid_move_inside_word() {
        let word = Word::from([1, 3, 2, 3, 1]);
        assert_eq!(do_braid_move(1, &word), Word::from([1, 2, 3, 2, 1]));
        assert_eq!(do_braid_move(1, &do_braid_move(1, &word)), word);
    }

    #[test]
    #[should_panic]
    fn test_do_braid_move_out_of_range_panics() {
        do_braid_move(2, &Word::from([1, 2, 1]));
    }

    #[test]
    #[should_panic]
    fn test_do_comm_move_out_of_range_panics() {
        do_comm_move(2, &Word::from([1, 3, 2]));
    }

    #[test]
    fn test_comm_move_detection() {
        let word = Word::from([1, 3, 2]);
        assert!(is_comm_move(0, &word));
        assert!(!is_comm_move(1, &word));
        assert!(!is_comm_move(2, &word));
    }

    #[test]
    fn test_do_comm_move() {
        let word = Word::from([1, 3, 2]);
        assert_eq!(do_comm_move(0, &word), Word::from([3, 1, 2]));
    }

    fn arbitrary_word() -> impl Strategy<Value = Word> {
        proptest::collection::vec(1usize..6, 3..12).prop_map(Word::from_generators)
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            .. ProptestConfig::default()
        })]

        #[test]
        fn braid_move_is_an_involution(word in arbitrary_word()) {
            for i in 0..word.len() - 2 {
                if is_braid_move(i, &word) {
                    let once = do_braid_move(i, &word);
                    prop_assert!(is_braid_move(i, &once));
                    prop_assert_eq!(once[i], word[i + 1]);
                    prop_assert_eq!(&do_braid_move(i, &once), &word);
                    prop_assert_eq!(
                        top_permutation(&once, 6).unwrap(),
                        top_permutation(&word, 6).unwrap()
                    );
                }
            }
        }

        #[test]
        fn comm_move_is_an_involution(word in arbitrary_word()) {
            for i in 0..word.len() - 1 {
                if is_comm_move(i, &word) {
                    let twice = do_comm_move(i, &do_comm_move(i, &word));
                    prop_assert_eq!(&twice, &word);
                }
            }
        }
    }
}
