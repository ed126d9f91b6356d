//! # Quine-McCluskey Logic Minimizer
//!
//! This crate minimizes a single-output Boolean function given as a list of
//! sum-of-products minterms (or product-of-sums maxterms), optionally with
//! don't-care terms, using the Quine-McCluskey algorithm. The result is a
//! minimal sum-of-products cover: every required minterm is covered, using
//! essential prime implicants plus a greedy fallback for residual coverage.
//!
//! ## Overview
//!
//! The algorithm runs in two phases:
//!
//! 1. **Combination**: terms are grouped by the number of 1 bits in their
//!    pattern; terms in adjacent groups that differ in exactly one bit merge
//!    into a wider implicant with a dash (wildcard) at the separating bit.
//!    Terms that can merge no further are the prime implicants.
//! 2. **Covering**: prime implicants that are the only cover of some minterm
//!    are essential and always chosen; any remaining obligation is resolved
//!    greedily by repeatedly taking the implicant covering the most
//!    still-unsatisfied minterms.
//!
//! The greedy step mirrors the textbook heuristic: the cover is always valid
//! but not guaranteed globally minimal when candidates tie or cover each
//! other cyclically.
//!
//! ## Minimizing a function
//!
//! ```
//! use qmc_logic::BoolFunction;
//!
//! # fn main() -> Result<(), qmc_logic::FunctionError> {
//! let mut f = BoolFunction::new(4)?;
//! for m in [0, 1, 2, 5, 6, 7, 8, 9, 10, 14] {
//!     f.add_minterm(m)?;
//! }
//!
//! let cover = f.minimize();
//! println!("f = {}", cover); // f = b'c' + cd' + a'bd
//! # assert_eq!(cover.expression(), "b'c' + cd' + a'bd");
//! # Ok(())
//! # }
//! ```
//!
//! ## Don't-care terms
//!
//! Don't-care rows may merge with required minterms to produce wider
//! implicants but never have to be covered themselves:
//!
//! ```
//! use qmc_logic::BoolFunction;
//!
//! # fn main() -> Result<(), qmc_logic::FunctionError> {
//! let mut f = BoolFunction::new(3)?;
//! f.add_minterm(1)?;
//! f.add_minterm(5)?;
//! f.add_dont_care(3)?;
//! f.add_dont_care(7)?;
//!
//! // The don't-cares widen the cover to a single literal.
//! assert_eq!(f.minimize().expression(), "c");
//! # Ok(())
//! # }
//! ```
//!
//! ## Product-of-sums input
//!
//! Maxterm indices are converted to their complementary minterm
//! (`2^literal_count - 1 - value`) as they are added:
//!
//! ```
//! use qmc_logic::BoolFunction;
//!
//! # fn main() -> Result<(), qmc_logic::FunctionError> {
//! let mut f = BoolFunction::new(2)?;
//! f.add_maxterm(0)?; // stored as minterm 3
//! assert_eq!(f.minimize().expression(), "ab");
//! # Ok(())
//! # }
//! ```

// Public modules
pub mod error;
pub mod function;
pub mod minimize;
pub mod term;

// Re-export high-level public API
pub use error::FunctionError;
pub use function::BoolFunction;
pub use minimize::MinimalCover;
pub use term::Term;
