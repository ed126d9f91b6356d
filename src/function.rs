//! Input description of a Boolean function to minimize
//!
//! This module provides [`BoolFunction`], the builder that collects the
//! minterms, maxterms, and don't-care terms of a single-output Boolean
//! function and validates them against the declared literal count before the
//! minimization engine ever runs.

use crate::error::FunctionError;
use crate::minimize::{self, MinimalCover};
use crate::term::Term;

/// Variables are lettered `a..=z`, so wider functions cannot be rendered.
const MAX_LITERALS: usize = 26;

/// A single-output Boolean function described by its true rows
///
/// A `BoolFunction` collects the rows of a truth table for which the function
/// is 1 (minterms), optionally rows whose value is unconstrained (don't-care
/// terms), and validates every index against the declared literal count.
/// Maxterms (product-of-sums indices) are accepted too and converted to
/// their complementary minterm on the way in.
///
/// # Examples
///
/// ```
/// use qmc_logic::BoolFunction;
///
/// # fn main() -> Result<(), qmc_logic::FunctionError> {
/// let mut f = BoolFunction::new(4)?;
/// for m in [0, 1, 2, 5, 6, 7, 8, 9, 10, 14] {
///     f.add_minterm(m)?;
/// }
///
/// let cover = f.minimize();
/// assert_eq!(cover.expression(), "b'c' + cd' + a'bd");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BoolFunction {
    literal_count: usize,
    minterms: Vec<u32>,
    dont_care_terms: Vec<u32>,
}

impl BoolFunction {
    /// Create an empty function over `literal_count` variables
    ///
    /// # Errors
    ///
    /// Returns [`FunctionError::InvalidLiteralCount`] when `literal_count`
    /// is zero or larger than 26.
    pub fn new(literal_count: usize) -> Result<Self, FunctionError> {
        if literal_count == 0 || literal_count > MAX_LITERALS {
            return Err(FunctionError::InvalidLiteralCount {
                given: literal_count,
            });
        }
        Ok(BoolFunction {
            literal_count,
            minterms: Vec::new(),
            dont_care_terms: Vec::new(),
        })
    }

    /// Create a function over `literal_count` variables from its minterms
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_logic::BoolFunction;
    ///
    /// let f = BoolFunction::from_minterms(2, &[3]).unwrap();
    /// assert_eq!(f.minimize().expression(), "ab");
    /// ```
    pub fn from_minterms(literal_count: usize, minterms: &[u32]) -> Result<Self, FunctionError> {
        let mut function = Self::new(literal_count)?;
        for &m in minterms {
            function.add_minterm(m)?;
        }
        Ok(function)
    }

    /// Get the declared literal count
    pub fn literal_count(&self) -> usize {
        self.literal_count
    }

    /// Get the collected minterms (maxterms already converted)
    pub fn minterms(&self) -> &[u32] {
        &self.minterms
    }

    /// Get the collected don't-care terms
    pub fn dont_care_terms(&self) -> &[u32] {
        &self.dont_care_terms
    }

    /// Largest index representable in the declared bit width
    fn max_term(&self) -> u32 {
        (1u32 << self.literal_count) - 1
    }

    fn check_range(&self, value: u32) -> Result<(), FunctionError> {
        if value > self.max_term() {
            return Err(FunctionError::TermOutOfRange {
                value,
                literal_count: self.literal_count,
            });
        }
        Ok(())
    }

    /// Add a sum-of-products minterm
    ///
    /// # Errors
    ///
    /// Returns [`FunctionError::TermOutOfRange`] when the index does not fit
    /// in the declared bit width.
    pub fn add_minterm(&mut self, value: u32) -> Result<(), FunctionError> {
        self.check_range(value)?;
        self.minterms.push(value);
        Ok(())
    }

    /// Add a product-of-sums maxterm
    ///
    /// The index is converted to its complementary minterm
    /// (`2^literal_count - 1 - value`) before being stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_logic::BoolFunction;
    ///
    /// let mut f = BoolFunction::new(2).unwrap();
    /// f.add_maxterm(0).unwrap();
    /// assert_eq!(f.minterms(), &[3]);
    /// ```
    pub fn add_maxterm(&mut self, value: u32) -> Result<(), FunctionError> {
        self.check_range(value)?;
        self.minterms.push(self.max_term() - value);
        Ok(())
    }

    /// Add a don't-care term
    ///
    /// Don't-care terms may merge with minterms to produce more general
    /// implicants but are never required to be covered by the result.
    pub fn add_dont_care(&mut self, value: u32) -> Result<(), FunctionError> {
        self.check_range(value)?;
        self.dont_care_terms.push(value);
        Ok(())
    }

    /// Minimize the function with the Quine-McCluskey algorithm
    ///
    /// Returns the selected cover: essential prime implicants plus greedy
    /// picks for any residual coverage. An empty function yields an empty
    /// cover, not an error.
    pub fn minimize(&self) -> MinimalCover {
        let mut terms: Vec<Term> = self
            .minterms
            .iter()
            .map(|&m| Term::new(m, self.literal_count))
            .collect();
        for &dc in &self.dont_care_terms {
            let mut term = Term::new(dc, self.literal_count);
            term.mark_dont_care();
            terms.push(term);
        }

        minimize::run(self.literal_count, terms, &self.dont_care_terms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_literal_count() {
        assert_eq!(
            BoolFunction::new(0).unwrap_err(),
            FunctionError::InvalidLiteralCount { given: 0 }
        );
    }

    #[test]
    fn test_rejects_unrenderable_literal_count() {
        assert!(BoolFunction::new(27).is_err());
        assert!(BoolFunction::new(26).is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_minterm() {
        let mut f = BoolFunction::new(3).unwrap();
        assert_eq!(
            f.add_minterm(8),
            Err(FunctionError::TermOutOfRange {
                value: 8,
                literal_count: 3
            })
        );
        assert!(f.add_minterm(7).is_ok());
    }

    #[test]
    fn test_maxterm_conversion() {
        let mut f = BoolFunction::new(4).unwrap();
        f.add_maxterm(0).unwrap();
        f.add_maxterm(15).unwrap();
        assert_eq!(f.minterms(), &[15, 0]);
    }

    #[test]
    fn test_dont_care_terms_tracked_separately() {
        let mut f = BoolFunction::new(3).unwrap();
        f.add_minterm(1).unwrap();
        f.add_dont_care(3).unwrap();
        assert_eq!(f.minterms(), &[1]);
        assert_eq!(f.dont_care_terms(), &[3]);
    }
}
