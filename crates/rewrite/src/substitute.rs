//! Instantiates a rewrite's right-hand side under a substitution (spec
//! §4.2), deep-cloning bound subtrees and minting fresh pattern variables
//! for anything the left-hand side never bound.

use crate::subst::{FreshGen, Subst};
use expr::Expr;
use std::collections::HashMap;

/// Instantiates `pattern` under `subst`, minting a fresh variable the first
/// time an unbound pattern variable is seen and reusing it for any later
/// occurrence of that same name within this call (e.g. comp-add applied
/// R=>L instantiates `(+ a (~ a))` from a match that bound nothing — both
/// occurrences of `a` must still come out identical, not two distinct
/// fresh names).
pub fn instantiate(pattern: &Expr, subst: &Subst, fresh: &mut FreshGen) -> Expr {
    let mut minted: HashMap<String, Expr> = HashMap::new();
    instantiate_inner(pattern, subst, fresh, &mut minted)
}

fn instantiate_inner(
    pattern: &Expr,
    subst: &Subst,
    fresh: &mut FreshGen,
    minted: &mut HashMap<String, Expr>,
) -> Expr {
    match pattern {
        Expr::Lit(b) => Expr::Lit(*b),
        Expr::Var(name) => {
            if let Some(bound) = subst.get(name) {
                bound.clone()
            } else if let Some(already) = minted.get(name) {
                already.clone()
            } else {
                let minted_var = Expr::var(fresh.next());
                minted.insert(name.clone(), minted_var.clone());
                minted_var
            }
        }
        Expr::Not(inner) => Expr::not(instantiate_inner(inner, subst, fresh, minted)),
        Expr::And(l, r) => Expr::and(
            instantiate_inner(l, subst, fresh, minted),
            instantiate_inner(r, subst, fresh, minted),
        ),
        Expr::Or(l, r) => Expr::or(
            instantiate_inner(l, subst, fresh, minted),
            instantiate_inner(r, subst, fresh, minted),
        ),
    }
}
