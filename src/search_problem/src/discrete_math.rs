use itertools::Itertools;

/// The number of pairs `i < j` with `perm[i] > perm[j]`.
#[must_use]
pub fn inversion_count(perm: &[u8]) -> usize {
    perm.iter()
        .tuple_combinations()
        .filter(|(a, b)| a > b)
        .count()
}

/// Whether a sliding-tile arrangement is reachable from the sorted goal.
///
/// `tiles` is the row-major layout including the blank (`0`); the blank is
/// removed before counting inversions. This is the odd-width board rule:
/// a slide never changes the parity of the remaining sequence.
#[must_use]
pub fn is_solvable(tiles: &[u8]) -> bool {
    let without_blank = tiles.iter().copied().filter(|&v| v != 0).collect_vec();
    inversion_count(&without_blank) % 2 == 0
}

#[cfg(test)]
mod tests {
    use super::{inversion_count, is_solvable};

    #[test]
    fn inversions() {
        assert_eq!(inversion_count(&[]), 0);
        assert_eq!(inversion_count(&[1, 2, 3, 4]), 0);
        assert_eq!(inversion_count(&[2, 1]), 1);
        assert_eq!(inversion_count(&[3, 2, 1]), 3);
        assert_eq!(inversion_count(&[8, 7, 6, 5, 4, 3, 2, 1]), 28);
    }

    #[test]
    fn solvability_ignores_blank() {
        assert!(is_solvable(&[0, 1, 2, 3, 4, 5, 6, 7, 8]));
        assert!(is_solvable(&[1, 2, 3, 4, 5, 6, 7, 8, 0]));
        assert!(!is_solvable(&[0, 2, 1, 3, 4, 5, 6, 7, 8]));
        // 8 7 6 5 4 3 2 1 has 28 inversions
        assert!(is_solvable(&[8, 7, 6, 5, 4, 3, 2, 1, 0]));
    }
}
