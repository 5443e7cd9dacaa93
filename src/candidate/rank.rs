//! Deterministic ranking of candidates.

use crate::candidate::Candidate;
use std::cmp::Ordering;

fn candidate_cmp_asc(a: &Candidate, b: &Candidate) -> Ordering {
    a.score()
        .total_cmp(&b.score())
        .then_with(|| a.digit.cmp(&b.digit))
}

/// Sorts candidates by ascending score; ties go to the smaller digit.
pub fn sort_candidates_asc(candidates: &mut [Candidate]) {
    candidates.sort_by(candidate_cmp_asc);
}

#[cfg(test)]
mod tests {
    use super::sort_candidates_asc;
    use crate::candidate::Candidate;
    use crate::digit::Digit;

    fn cand(d: u8, distance: f32, penalty: f32) -> Candidate {
        Candidate {
            digit: Digit::new(d).unwrap(),
            distance,
            penalty,
        }
    }

    #[test]
    fn sorts_by_total_score() {
        let mut list = vec![cand(3, 0.1, 0.8), cand(6, 0.4, 0.0), cand(0, 0.2, 0.0)];
        sort_candidates_asc(&mut list);
        let order: Vec<u8> = list.iter().map(|c| c.digit.value()).collect();
        assert_eq!(order, vec![0, 6, 3]);
    }

    #[test]
    fn ties_break_on_digit() {
        let mut list = vec![cand(7, 0.3, 0.0), cand(2, 0.3, 0.0)];
        sort_candidates_asc(&mut list);
        assert_eq!(list[0].digit.value(), 2);
    }

    #[test]
    fn infinite_scores_sort_last() {
        let mut list = vec![cand(1, f32::INFINITY, 0.0), cand(4, 0.9, 0.5)];
        sort_candidates_asc(&mut list);
        assert_eq!(list[0].digit.value(), 4);
    }
}
