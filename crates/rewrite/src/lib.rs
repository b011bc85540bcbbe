//! The axiom table, matcher, substituter, positional rewriter and
//! canonical key for Boolean-algebra proof search.

pub mod axioms;
pub mod key;
pub mod matcher;
pub mod rewriter;
pub mod subst;
pub mod substitute;

pub use axioms::{axiom_table, Axiom};
pub use key::canonical_key;
pub use matcher::try_match;
pub use rewriter::{all_successors, all_successors_with, apply_at_root};
pub use subst::{FreshGen, Subst};
pub use substitute::instantiate;
