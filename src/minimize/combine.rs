//! Prime-implicant generation (the combination phase)
//!
//! Classic Quine-McCluskey table construction: terms are grouped by the
//! number of 1 bits in their pattern, adjacent groups are compared pairwise,
//! and every pair differing in exactly one bit merges into a term of the next
//! level. Terms that never merge are the prime-implicant candidates.

use std::collections::{HashMap, HashSet};

use log::debug;

use crate::term::Term;

use super::TermId;

/// Generate all prime-implicant candidates from the base terms in `work`
///
/// Merged terms are appended to `arena`, which owns every term for the rest
/// of the run. The returned ids are deduplicated by pattern: two merge paths
/// reaching the same implicant (0,1 then 8,9 versus 0,8 then 1,9) record it
/// once. Candidates built purely from don't-care terms are skipped; they can
/// never be needed by the cover.
///
/// Terminates because every merge adds a dash and the dash count is bounded
/// by the literal count.
pub(crate) fn generate_prime_implicants(
    arena: &mut Vec<Term>,
    mut work: Vec<TermId>,
) -> Vec<TermId> {
    let mut prime_ids: Vec<TermId> = Vec::new();
    let mut prime_expressions: HashSet<String> = HashSet::new();
    let mut pass = 0u32;

    while !work.is_empty() {
        work.sort_by_key(|&id| arena[id].one_count());
        let groups = group_by_one_count(arena, &work);

        // Compare each group against its successor. Only groups whose
        // one-counts differ by exactly 1 can contain adjacent terms.
        let mut next_work: Vec<TermId> = Vec::new();
        let mut next_expressions: HashMap<String, TermId> = HashMap::new();
        for pair in groups.windows(2) {
            let (current, next) = (&pair[0], &pair[1]);
            if arena[next[0]].one_count() - arena[current[0]].one_count() != 1 {
                continue;
            }

            for &current_id in current {
                for &next_id in next {
                    let separating_bit =
                        match arena[current_id].separating_bit(&arena[next_id]) {
                            Some(bit) => bit,
                            None => continue,
                        };

                    arena[current_id].select();
                    arena[next_id].select();

                    let merged = Term::merged(&arena[current_id], &arena[next_id], separating_bit);
                    // Equal patterns cover equal minterm sets, so duplicate
                    // merge results add nothing to the next level. A pattern
                    // is a skippable don't-care implicant only if every merge
                    // path reaching it was pure don't-care.
                    match next_expressions.get(&merged.expression()) {
                        Some(&existing) => {
                            if !merged.is_dont_care() && arena[existing].is_dont_care() {
                                arena[existing].clear_dont_care();
                            }
                        }
                        None => {
                            let id = arena.len();
                            next_expressions.insert(merged.expression(), id);
                            next_work.push(id);
                            arena.push(merged);
                        }
                    }
                }
            }
        }

        // Whatever survived this level unselected can merge no further: it is
        // a prime-implicant candidate.
        for &id in &work {
            if arena[id].is_selected() || arena[id].is_dont_care() {
                continue;
            }
            if prime_expressions.insert(arena[id].expression()) {
                prime_ids.push(id);
            }
        }

        debug!(
            "combination pass {}: {} terms in, {} merged terms out, {} candidates so far",
            pass,
            work.len(),
            next_work.len(),
            prime_ids.len()
        );
        pass += 1;
        work = next_work;
    }

    prime_ids
}

/// Partition `work` (sorted ascending by one-count) into runs of equal one-count
fn group_by_one_count(arena: &[Term], work: &[TermId]) -> Vec<Vec<TermId>> {
    let mut groups: Vec<Vec<TermId>> = Vec::new();
    for &id in work {
        let count = arena[id].one_count();
        match groups.last_mut() {
            Some(group) if arena[group[0]].one_count() == count => group.push(id),
            _ => groups.push(vec![id]),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primes_of(literal_count: usize, minterms: &[u32]) -> Vec<String> {
        let mut arena: Vec<Term> = minterms
            .iter()
            .map(|&m| Term::new(m, literal_count))
            .collect();
        let work: Vec<TermId> = (0..arena.len()).collect();
        let ids = generate_prime_implicants(&mut arena, work);
        let mut expressions: Vec<String> =
            ids.iter().map(|&id| arena[id].expression()).collect();
        expressions.sort();
        expressions
    }

    #[test]
    fn test_single_minterm_is_its_own_prime() {
        assert_eq!(primes_of(2, &[3]), vec!["11"]);
    }

    #[test]
    fn test_full_truth_table_collapses_to_all_dashes() {
        assert_eq!(primes_of(2, &[0, 1, 2, 3]), vec!["--"]);
    }

    #[test]
    fn test_classic_four_literal_table() {
        // Worked example: the six prime implicants of
        // f(a,b,c,d) = sum(0, 1, 2, 5, 6, 7, 8, 9, 10, 14).
        assert_eq!(
            primes_of(4, &[0, 1, 2, 5, 6, 7, 8, 9, 10, 14]),
            vec!["--10", "-0-0", "-00-", "0-01", "01-1", "011-"]
        );
    }

    #[test]
    fn test_duplicate_merge_paths_recorded_once() {
        // 0,1,8,9 can be reached as (0,1)+(8,9) or (0,8)+(1,9).
        assert_eq!(primes_of(4, &[0, 1, 8, 9]), vec!["-00-"]);
    }

    #[test]
    fn test_gap_between_groups_prevents_comparison() {
        // One-counts 0 and 2: never adjacent, both stay prime.
        assert_eq!(primes_of(2, &[0, 3]), vec!["00", "11"]);
    }

    #[test]
    fn test_pure_dont_care_implicants_are_skipped() {
        let mut arena = vec![Term::new(0, 2), Term::new(1, 2)];
        arena[0].mark_dont_care();
        arena[1].mark_dont_care();
        let ids = generate_prime_implicants(&mut arena, vec![0, 1]);
        assert!(ids.is_empty());
    }

    #[test]
    fn test_duplicate_pattern_through_required_minterm_clears_flag() {
        // Value 1 is declared both don't-care and required. The 0-1 merge is
        // reached first through the pure don't-care pair, but the required
        // derivation must still make it a candidate.
        let mut arena = vec![Term::new(0, 2), Term::new(1, 2), Term::new(1, 2)];
        arena[0].mark_dont_care();
        arena[1].mark_dont_care();
        let ids = generate_prime_implicants(&mut arena, vec![0, 1, 2]);
        assert_eq!(ids.len(), 1);
        assert_eq!(arena[ids[0]].expression(), "0-");
    }

    #[test]
    fn test_mixed_dont_care_implicant_survives() {
        let mut arena = vec![Term::new(0, 2), Term::new(1, 2)];
        arena[1].mark_dont_care();
        let ids = generate_prime_implicants(&mut arena, vec![0, 1]);
        assert_eq!(ids.len(), 1);
        assert_eq!(arena[ids[0]].expression(), "0-");
        assert!(!arena[ids[0]].is_dont_care());
    }
}
