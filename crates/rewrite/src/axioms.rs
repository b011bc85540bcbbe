//! The twelve fixed Boolean-algebra axioms, parsed once from their
//! concrete-grammar source and cached for the lifetime of the process.

use expr::{parse, Expr};
use std::sync::OnceLock;

/// A named, bidirectional rewrite rule: `lhs` and `rhs` are patterns whose
/// `Expr::Var` nodes are pattern holes, applied in either direction.
pub struct Axiom {
    pub name: &'static str,
    pub lhs: Expr,
    pub rhs: Expr,
}

const AXIOM_SOURCES: &[(&str, &str, &str)] = &[
    ("assoc-add", "(+ a (+ b c))", "(+ (+ a b) c)"),
    ("assoc-mul", "(* a (* b c))", "(* (* a b) c)"),
    ("comm-add", "(+ a b)", "(+ b a)"),
    ("comm-mul", "(* a b)", "(* b a)"),
    ("abs-add", "(+ a (* a b))", "a"),
    ("abs-mul", "(* a (+ a b))", "a"),
    ("iden-add", "(+ a 0)", "a"),
    ("iden-mul", "(* a 1)", "a"),
    ("dist-add", "(+ a (* b c))", "(* (+ a b) (+ a c))"),
    ("dist-mul", "(* a (+ b c))", "(+ (* a b) (* a c))"),
    ("comp-add", "(+ a (~ a))", "1"),
    ("comp-mul", "(* a (~ a))", "0"),
];

static AXIOMS: OnceLock<Vec<Axiom>> = OnceLock::new();

/// The fixed axiom table, in its declared order.
/// Parsed once on first use.
pub fn axiom_table() -> &'static [Axiom] {
    AXIOMS
        .get_or_init(|| {
            AXIOM_SOURCES
                .iter()
                .map(|(name, lhs, rhs)| Axiom {
                    name,
                    lhs: parse(lhs).expect("axiom lhs is well-formed"),
                    rhs: parse(rhs).expect("axiom rhs is well-formed"),
                })
                .collect()
        })
        .as_slice()
}
