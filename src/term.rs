//! Bit-vector term types for Boolean function minimization
//!
//! This module provides the core [`Term`] type used throughout the minimizer.
//! A term represents either a single minterm or a group of minterms folded
//! together during the combination phase, as a fixed-width bit pattern in
//! which merged-away positions read as dashes (wildcards).

use std::fmt;

/// The reading of a single bit position in a term's pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PatternBit {
    /// The variable at this position must be 0
    Zero,
    /// The variable at this position must be 1
    One,
    /// The variable at this position was eliminated by merging
    Dash,
}

/// A product term over a fixed number of literals
///
/// A `Term` is a bit pattern of width `literal_count` with possible dash
/// (wildcard) positions. A freshly constructed term covers exactly one
/// minterm; terms built by merging cover the union of their parents'
/// minterms and carry one additional dash at the bit that separated them.
///
/// # Examples
///
/// ```
/// use qmc_logic::Term;
///
/// let term = Term::new(5, 4);
/// assert_eq!(term.expression(), "0101");
/// assert_eq!(term.one_count(), 2);
/// assert_eq!(term.literal_form(), "a'bc'd");
/// ```
#[derive(Debug, Clone)]
pub struct Term {
    /// Representative minterm: the numerically largest minterm folded in
    value: u32,
    /// Fixed bit width shared by every term of one problem
    literal_count: usize,
    /// Original minterm indices covered by this term, in merge order
    minterms: Vec<u32>,
    /// Wildcarded bit positions, 0 = least significant
    dashes: Vec<usize>,
    /// Set once this term merged into a larger implicant (not itself prime)
    selected: bool,
    /// Set once this term was chosen for the final cover
    prime_implicant: bool,
    /// Set if every folded minterm was a declared don't-care
    dont_care: bool,
    /// Working set for the covering phase, shrunk as minterms get satisfied
    remaining_minterms: Vec<u32>,
}

impl Term {
    /// Create a base term covering the single minterm `value`
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_logic::Term;
    ///
    /// let term = Term::new(3, 2);
    /// assert_eq!(term.expression(), "11");
    /// assert_eq!(term.minterms(), &[3]);
    /// ```
    pub fn new(value: u32, literal_count: usize) -> Self {
        Term {
            value,
            literal_count,
            minterms: vec![value],
            dashes: Vec::new(),
            selected: false,
            prime_implicant: false,
            dont_care: false,
            remaining_minterms: Vec::new(),
        }
    }

    /// Build the merged term of two adjacent terms
    ///
    /// `separating_bit` must be the single position where the patterns of
    /// `first` and `second` differ, as reported by [`Term::separating_bit`].
    /// The merged term covers the union of both parents' minterms, inherits
    /// their (identical) dash set plus the separating bit, and is a pure
    /// don't-care only if both parents were.
    pub(crate) fn merged(first: &Term, second: &Term, separating_bit: usize) -> Self {
        let mut minterms = Vec::with_capacity(first.minterms.len() + second.minterms.len());
        minterms.extend_from_slice(&first.minterms);
        minterms.extend_from_slice(&second.minterms);

        // Adjacent terms have identical dash sets, so the first parent's
        // dashes plus the separating bit describe the merged pattern.
        let mut dashes = first.dashes.clone();
        dashes.push(separating_bit);

        Term {
            value: first.value.max(second.value),
            literal_count: first.literal_count.max(second.literal_count),
            minterms,
            dashes,
            selected: false,
            prime_implicant: false,
            dont_care: first.dont_care && second.dont_care,
            remaining_minterms: Vec::new(),
        }
    }

    /// Get the representative minterm (largest minterm folded into this term)
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Get the bit width this term is interpreted over
    pub fn literal_count(&self) -> usize {
        self.literal_count
    }

    /// Get the original minterm indices covered by this term
    pub fn minterms(&self) -> &[u32] {
        &self.minterms
    }

    /// Get the wildcarded bit positions (0 = least significant)
    pub fn dash_positions(&self) -> &[usize] {
        &self.dashes
    }

    /// Read the pattern at bit position `i` (0 = least significant)
    ///
    /// Positions at or beyond `literal_count` read as [`PatternBit::Zero`]
    /// rather than indexing out of bounds.
    pub(crate) fn bit_at(&self, i: usize) -> PatternBit {
        if i >= self.literal_count {
            return PatternBit::Zero;
        }
        if self.dashes.contains(&i) {
            return PatternBit::Dash;
        }
        if (self.value >> i) & 1 == 1 {
            PatternBit::One
        } else {
            PatternBit::Zero
        }
    }

    /// Get the bit-pattern string of this term
    ///
    /// The string has length `literal_count`, most significant bit first,
    /// left-padded with `'0'` and with every dash position shown as `'-'`.
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_logic::Term;
    ///
    /// assert_eq!(Term::new(0, 4).expression(), "0000");
    /// assert_eq!(Term::new(9, 4).expression(), "1001");
    /// ```
    pub fn expression(&self) -> String {
        (0..self.literal_count)
            .rev()
            .map(|i| match self.bit_at(i) {
                PatternBit::Zero => '0',
                PatternBit::One => '1',
                PatternBit::Dash => '-',
            })
            .collect()
    }

    /// Count the `1` positions of the pattern (dashes excluded)
    ///
    /// This is the grouping key of the combination phase: merges are only
    /// attempted between terms whose one-counts differ by exactly 1.
    pub fn one_count(&self) -> u32 {
        (0..self.literal_count)
            .filter(|&i| self.bit_at(i) == PatternBit::One)
            .count() as u32
    }

    /// Render this term in product-term syntax
    ///
    /// Each non-dash position emits its variable letter (`a` for the most
    /// significant bit, `b` for the next, ...), followed by `'` when the bit
    /// is 0. Dash positions emit nothing, so a term with every position
    /// dashed renders as the empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_logic::Term;
    ///
    /// assert_eq!(Term::new(5, 4).literal_form(), "a'bc'd");
    /// assert_eq!(Term::new(3, 2).literal_form(), "ab");
    /// ```
    pub fn literal_form(&self) -> String {
        let mut literal = String::new();
        for (letter_index, i) in (0..self.literal_count).rev().enumerate() {
            match self.bit_at(i) {
                PatternBit::Dash => {}
                PatternBit::One => {
                    literal.push((b'a' + letter_index as u8) as char);
                }
                PatternBit::Zero => {
                    literal.push((b'a' + letter_index as u8) as char);
                    literal.push('\'');
                }
            }
        }
        literal
    }

    /// Render the covered minterms as a comma-separated decimal list
    pub fn decimals(&self) -> String {
        let decimals: Vec<String> = self.minterms.iter().map(|m| m.to_string()).collect();
        decimals.join(",")
    }

    /// Find the single bit position where `self` and `other` differ
    ///
    /// Returns `None` when the patterns are identical or differ in two or
    /// more positions. This is the adjacency test that drives merging, and it
    /// is symmetric: `a.separating_bit(&b) == b.separating_bit(&a)`.
    pub fn separating_bit(&self, other: &Term) -> Option<usize> {
        let width = self.literal_count.max(other.literal_count);
        let mut separating = None;
        for i in 0..width {
            if self.bit_at(i) != other.bit_at(i) {
                if separating.is_some() {
                    // Two or more separating bits: not adjacent.
                    return None;
                }
                separating = Some(i);
            }
        }
        separating
    }

    /// Whether this term has merged into a larger implicant
    pub(crate) fn is_selected(&self) -> bool {
        self.selected
    }

    /// Mark this term as merged into a larger implicant
    pub(crate) fn select(&mut self) {
        self.selected = true;
    }

    /// Whether this term was chosen for the final cover
    pub(crate) fn is_prime_implicant(&self) -> bool {
        self.prime_implicant
    }

    /// Mark this term as chosen for the final cover
    pub(crate) fn mark_prime_implicant(&mut self) {
        self.prime_implicant = true;
    }

    /// Whether every minterm folded into this term was a declared don't-care
    pub fn is_dont_care(&self) -> bool {
        self.dont_care
    }

    /// Flag this term as originating from a declared don't-care minterm
    pub(crate) fn mark_dont_care(&mut self) {
        self.dont_care = true;
    }

    /// Drop the don't-care flag
    ///
    /// Used when another merge path reaches the same pattern through a
    /// required minterm, proving the pattern is not purely don't-care.
    pub(crate) fn clear_dont_care(&mut self) {
        self.dont_care = false;
    }

    /// Snapshot the covered minterms into the covering-phase working set
    pub(crate) fn begin_covering(&mut self) {
        self.remaining_minterms = self.minterms.clone();
    }

    /// Remove `minterm` from the covering-phase working set, if present
    pub(crate) fn cover_minterm(&mut self, minterm: u32) {
        if let Some(position) = self.remaining_minterms.iter().position(|&m| m == minterm) {
            self.remaining_minterms.remove(position);
        }
    }

    /// Get the minterms this term covers that are not yet satisfied
    pub(crate) fn remaining_minterms(&self) -> &[u32] {
        &self.remaining_minterms
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.literal_form())
    }
}
