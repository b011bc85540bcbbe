//! Enumerates every one-step successor of an `Expr` under the axiom table.
//! Replacement is purely functional: a rewrite at some position rebuilds
//! only the spine from the root down to that position, sharing (via
//! `Rc::clone`) every subtree off that spine — sound because `Expr` is
//! immutable — rather than deep-cloning the whole tree per rewrite.

use crate::axioms::axiom_table;
use crate::matcher::try_match;
use crate::subst::FreshGen;
use crate::substitute::instantiate;
use expr::Expr;
use std::rc::Rc;

/// Matches `lhs` against `node` and, on success, instantiates `rhs` under
/// the resulting substitution.
pub fn apply_at_root(node: &Expr, lhs: &Expr, rhs: &Expr, fresh: &mut FreshGen) -> Option<Expr> {
    let subst = try_match(lhs, node)?;
    Some(instantiate(rhs, &subst, fresh))
}

/// All distinct trees reachable from `node` by rewriting `lhs` to `rhs` at
/// exactly one position, in pre-order (root, then children left-to-right,
/// recursively).
fn successors_in(node: &Expr, lhs: &Expr, rhs: &Expr, fresh: &mut FreshGen) -> Vec<Expr> {
    let mut out = Vec::new();
    if let Some(rewritten) = apply_at_root(node, lhs, rhs, fresh) {
        out.push(rewritten);
    }
    match node {
        Expr::Lit(_) | Expr::Var(_) => {}
        Expr::Not(inner) => {
            for v in successors_in(inner, lhs, rhs, fresh) {
                out.push(Expr::Not(Rc::new(v)));
            }
        }
        Expr::And(l, r) => {
            for v in successors_in(l, lhs, rhs, fresh) {
                out.push(Expr::And(Rc::new(v), Rc::clone(r)));
            }
            for v in successors_in(r, lhs, rhs, fresh) {
                out.push(Expr::And(Rc::clone(l), Rc::new(v)));
            }
        }
        Expr::Or(l, r) => {
            for v in successors_in(l, lhs, rhs, fresh) {
                out.push(Expr::Or(Rc::new(v), Rc::clone(r)));
            }
            for v in successors_in(r, lhs, rhs, fresh) {
                out.push(Expr::Or(Rc::clone(l), Rc::new(v)));
            }
        }
    }
    out
}

/// Every one-step successor of `node` across all twelve axioms, in both
/// directions, at every position. Enumeration order (axioms in declared
/// order, forward then backward per axiom, positions in pre-order) is
/// fixed so callers — in particular the search's BFS — get deterministic,
/// reproducible results, though the order carries no semantic weight.
///
/// Threads `fresh` through the whole enumeration so that callers expanding
/// many nodes in one run (the BFS frontier, in particular) can share a
/// single counter across all of them: a `FreshGen` reset per node would let
/// two unrelated minted variables from two different expansions collide on
/// the same name, which `Expr`'s structural equality would then treat as
/// the literal same subtree.
pub fn all_successors_with(node: &Expr, fresh: &mut FreshGen) -> Vec<(&'static str, Expr)> {
    let mut out = Vec::new();
    for axiom in axiom_table() {
        for v in successors_in(node, &axiom.lhs, &axiom.rhs, fresh) {
            out.push((axiom.name, v));
        }
        for v in successors_in(node, &axiom.rhs, &axiom.lhs, fresh) {
            out.push((axiom.name, v));
        }
    }
    out
}

/// As [`all_successors_with`], but for ad-hoc callers outside of a search
/// run that have no `FreshGen` of their own to share: starts a fresh
/// counter at `_0` for this call alone. Not used by the BFS (see
/// `search::bfs::find_shortest_path_with_cap`, which threads one
/// `FreshGen` across the entire frontier loop instead).
pub fn all_successors(node: &Expr) -> Vec<(&'static str, Expr)> {
    let mut fresh = FreshGen::new();
    all_successors_with(node, &mut fresh)
}
