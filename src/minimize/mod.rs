//! The Quine-McCluskey minimization engine
//!
//! The engine runs in two phases over a single term arena:
//!
//! 1. `combine` folds adjacent terms level by level until every surviving
//!    pattern is a prime-implicant candidate.
//! 2. `select` chooses a cover of the required minterms from those
//!    candidates: essential implicants first, then a greedy fallback.
//!
//! The arena (a plain `Vec<Term>`) owns every term created during a run;
//! worklists, candidate lists, and the obligation map hold indices into it.
//! The engine is single-threaded and purely synchronous, so the mutable flags
//! on arena terms see one writer at a time by construction.

mod combine;
mod select;

use std::fmt;

use log::debug;

use crate::term::Term;

/// Index of a term in the run's arena
pub(crate) type TermId = usize;

/// Run the full minimization pipeline over the base terms
///
/// `base_terms` holds one [`Term`] per input minterm and don't-care term;
/// `dont_care_values` repeats the don't-care indices so the covering phase
/// can drop their obligations.
pub(crate) fn run(
    literal_count: usize,
    base_terms: Vec<Term>,
    dont_care_values: &[u32],
) -> MinimalCover {
    let mut arena = base_terms;
    let work: Vec<TermId> = (0..arena.len()).collect();

    let prime_ids = combine::generate_prime_implicants(&mut arena, work);
    debug!("{} prime implicant candidates", prime_ids.len());

    let picked = select::select_cover(&mut arena, &prime_ids, dont_care_values);
    debug!("selected cover of {} terms", picked.len());

    MinimalCover {
        literal_count,
        terms: picked.into_iter().map(|id| arena[id].clone()).collect(),
    }
}

/// The selected cover of a minimized Boolean function
///
/// Holds the chosen prime implicants in selection order and renders them as
/// a sum-of-products expression.
///
/// # Examples
///
/// ```
/// use qmc_logic::BoolFunction;
///
/// let f = BoolFunction::from_minterms(3, &[3, 7]).unwrap();
/// let cover = f.minimize();
/// assert_eq!(cover.num_terms(), 1);
/// assert_eq!(cover.expression(), "bc");
/// assert_eq!(format!("f = {}", cover), "f = bc");
/// ```
#[derive(Debug, Clone)]
pub struct MinimalCover {
    literal_count: usize,
    terms: Vec<Term>,
}

impl MinimalCover {
    /// Get the selected terms in the order they were chosen
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Get the number of selected terms
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// Whether the cover holds no terms at all (no input minterms)
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Get the bit width of the minimized function
    pub fn literal_count(&self) -> usize {
        self.literal_count
    }

    /// Whether some selected term covers `minterm`
    pub fn covers(&self, minterm: u32) -> bool {
        self.terms
            .iter()
            .any(|term| term.minterms().contains(&minterm))
    }

    /// Render the cover as a sum-of-products expression
    ///
    /// Terms are joined with `" + "`. An empty cover renders as the empty
    /// string; a cover whose single term has every position dashed (the
    /// constant-1 function) also renders as the empty string.
    pub fn expression(&self) -> String {
        let literals: Vec<String> = self.terms.iter().map(|term| term.literal_form()).collect();
        literals.join(" + ")
    }

    /// Render the cover with each term's covered minterms in parentheses
    ///
    /// This is the debug form of [`MinimalCover::expression`]:
    /// `"cd' (2,10,6,14) + b'c' (0,1,8,9)"`.
    pub fn annotated_expression(&self) -> String {
        let literals: Vec<String> = self
            .terms
            .iter()
            .map(|term| format!("{} ({})", term.literal_form(), term.decimals()))
            .collect();
        literals.join(" + ")
    }
}

impl fmt::Display for MinimalCover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cover(literal_count: usize, minterms: &[u32]) -> MinimalCover {
        let terms = minterms
            .iter()
            .map(|&m| Term::new(m, literal_count))
            .collect();
        run(literal_count, terms, &[])
    }

    #[test]
    fn test_empty_input_gives_empty_expression() {
        let cover = cover(4, &[]);
        assert!(cover.is_empty());
        assert_eq!(cover.expression(), "");
        assert_eq!(format!("f = {}", cover), "f = ");
    }

    #[test]
    fn test_annotated_expression_lists_minterms() {
        let cover = cover(2, &[0, 1]);
        assert_eq!(cover.annotated_expression(), "a' (0,1)");
    }

    #[test]
    fn test_covers_reports_membership() {
        let cover = cover(3, &[0, 1]);
        assert!(cover.covers(0));
        assert!(cover.covers(1));
        assert!(!cover.covers(5));
    }

    #[test]
    fn test_tautology_renders_empty_term() {
        let cover = cover(2, &[0, 1, 2, 3]);
        assert_eq!(cover.num_terms(), 1);
        assert_eq!(cover.expression(), "");
        assert_eq!(cover.terms()[0].expression(), "--");
    }
}
