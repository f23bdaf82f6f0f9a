use log::debug;

use crate::problem::Numbers;

/// Whether a puzzle is solvable by inspection and should not be generated.
///
/// Trivial when the target is `0` and one of the numbers is `0` (multiply
/// everything by it), or when all four numbers are equal.
pub fn is_trivial(numbers: &Numbers, target: i64) -> bool {
    if target == 0 && numbers.contains(&0) {
        debug!("Trivial: target 0 with a zero operand in {:?}", numbers);
        return true;
    }

    let [first, rest @ ..] = numbers;
    if rest.iter().all(|n| n == first) {
        debug!("Trivial: all numbers equal in {:?}", numbers);
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_target_with_zero_operand() {
        assert!(is_trivial(&[0, 1, 2, 3], 0));
        assert!(is_trivial(&[5, 0, 8, 2], 0));
        assert!(is_trivial(&[0, 0, 0, 0], 0));
    }

    #[test]
    fn test_all_numbers_equal() {
        assert!(is_trivial(&[2, 2, 2, 2], 8));
        assert!(is_trivial(&[5, 5, 5, 5], 20));
        assert!(is_trivial(&[7, 7, 7, 7], 0));
    }

    #[test]
    fn test_regular_problems_kept() {
        assert!(!is_trivial(&[1, 2, 3, 4], 0));
        assert!(!is_trivial(&[0, 1, 2, 3], 5));
        assert!(!is_trivial(&[1, 2, 3, 4], 6));
        assert!(!is_trivial(&[8, 5, 2, 1], 3));
        assert!(!is_trivial(&[9, 7, 4, 2], 5));
        assert!(!is_trivial(&[3, 3, 3, 4], 13));
    }
}
