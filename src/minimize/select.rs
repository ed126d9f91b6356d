//! Minimal-cover selection over the prime-implicant candidates
//!
//! Essential prime implicants (the only candidate covering some minterm) are
//! taken first; any residual obligation is resolved by a greedy fallback that
//! repeatedly picks the candidate covering the most still-unsatisfied
//! minterms. The greedy step is a heuristic, not globally optimal: ties and
//! cycles of mutual coverage can yield a valid but non-minimal cover, exactly
//! like the textbook algorithm.

use std::collections::BTreeMap;

use log::debug;

use crate::term::Term;

use super::TermId;

/// Select a cover of the required minterms from the candidate terms
///
/// `dont_care_values` lists minterms that impose no coverage obligation.
/// Picked terms are returned in selection order: essentials in ascending
/// order of the minterm that made them essential, then greedy picks.
pub(crate) fn select_cover(
    arena: &mut [Term],
    prime_ids: &[TermId],
    dont_care_values: &[u32],
) -> Vec<TermId> {
    for &id in prime_ids {
        arena[id].begin_covering();
    }

    // Obligation map: each required minterm to the candidates covering it.
    // A BTreeMap keeps the scan order deterministic across runs.
    let mut obligations: BTreeMap<u32, Vec<TermId>> = BTreeMap::new();
    for &id in prime_ids {
        let minterms = arena[id].minterms().to_vec();
        for minterm in minterms {
            obligations.entry(minterm).or_default().push(id);
        }
    }

    // Don't-care minterms never need covering.
    for &dc in dont_care_values {
        if let Some(bucket) = obligations.remove(&dc) {
            for id in bucket {
                arena[id].cover_minterm(dc);
            }
        }
    }

    let mut picked: Vec<TermId> = Vec::new();

    // Essential pass: a minterm with a single surviving candidate makes that
    // candidate mandatory. Buckets are only ever removed whole, so no new
    // essentials appear once this pass runs dry.
    loop {
        let essential = obligations
            .values()
            .find(|bucket| bucket.len() == 1)
            .map(|bucket| bucket[0]);
        let id = match essential {
            Some(id) => id,
            None => break,
        };
        debug!(
            "essential prime implicant: {} ({})",
            arena[id].expression(),
            arena[id].decimals()
        );
        take(arena, &mut obligations, &mut picked, id);
    }

    // Greedy fallback for whatever the essentials left uncovered.
    while !obligations.is_empty() {
        let candidate = prime_ids
            .iter()
            .copied()
            .filter(|&id| {
                !arena[id].is_prime_implicant() && !arena[id].remaining_minterms().is_empty()
            })
            .max_by(|&a, &b| {
                arena[a]
                    .remaining_minterms()
                    .len()
                    .cmp(&arena[b].remaining_minterms().len())
                    // Tie-break: prefer the lowest representative value.
                    .then_with(|| arena[b].value().cmp(&arena[a].value()))
            });
        let id = match candidate {
            Some(id) => id,
            // No candidate with outstanding coverage is left; the map is
            // exhausted or the input was malformed. Either way we are done.
            None => break,
        };
        debug!(
            "greedy prime implicant: {} ({})",
            arena[id].expression(),
            arena[id].decimals()
        );
        take(arena, &mut obligations, &mut picked, id);
    }

    picked
}

/// Add `id` to the cover and retire every minterm it satisfies
fn take(
    arena: &mut [Term],
    obligations: &mut BTreeMap<u32, Vec<TermId>>,
    picked: &mut Vec<TermId>,
    id: TermId,
) {
    arena[id].mark_prime_implicant();
    picked.push(id);

    let minterms = arena[id].minterms().to_vec();
    for minterm in minterms {
        if let Some(bucket) = obligations.remove(&minterm) {
            for covering in bucket {
                arena[covering].cover_minterm(minterm);
            }
        }
    }
}
