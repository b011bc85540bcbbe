//! Decides whether a pattern `Expr` unifies with a target `Expr`, producing
//! a substitution or failure. Threads one growing substitution through
//! recursive child matches and rejects a pattern variable's second
//! occurrence unless it agrees with its first binding.

use crate::subst::Subst;
use expr::Expr;

/// Attempts to match `pattern` against `target`. Pattern variables
/// (`Expr::Var`) act as holes: the first occurrence of a name binds it to
/// whatever subtree is at that position, and every later occurrence of the
/// same name must match the already-bound subtree under strict structural
/// equality (`Expr`'s derived `PartialEq`).
pub fn try_match(pattern: &Expr, target: &Expr) -> Option<Subst> {
    let mut subst = Subst::new();
    match_into(pattern, target, &mut subst).then_some(subst)
}

fn match_into(pattern: &Expr, target: &Expr, subst: &mut Subst) -> bool {
    match pattern {
        Expr::Lit(b) => matches!(target, Expr::Lit(t) if t == b),
        Expr::Var(name) => match subst.get(name) {
            Some(bound) => bound == target,
            None => {
                subst.insert(name.clone(), target.clone());
                true
            }
        },
        Expr::Not(p_inner) => match target {
            Expr::Not(t_inner) => match_into(p_inner, t_inner, subst),
            _ => false,
        },
        Expr::And(p_l, p_r) => match target {
            Expr::And(t_l, t_r) => match_into(p_l, t_l, subst) && match_into(p_r, t_r, subst),
            _ => false,
        },
        Expr::Or(p_l, p_r) => match target {
            Expr::Or(t_l, t_r) => match_into(p_l, t_l, subst) && match_into(p_r, t_r, subst),
            _ => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expr::parse;

    #[test]
    fn literal_pattern_matches_only_equal_literal() {
        assert!(try_match(&parse("0").unwrap(), &parse("0").unwrap()).is_some());
        assert!(try_match(&parse("0").unwrap(), &parse("1").unwrap()).is_none());
    }

    #[test]
    fn var_pattern_binds_any_subtree() {
        let pattern = parse("a").unwrap();
        let target = parse("(+ x y)").unwrap();
        let subst = try_match(&pattern, &target).unwrap();
        assert_eq!(subst.get("a"), Some(&target));
    }

    #[test]
    fn repeated_var_requires_identical_subtree() {
        // pattern (+ a (~ a)) requires both a's to match the same subtree
        let pattern = parse("(+ a (~ a))").unwrap();
        let ok = parse("(+ x (~ x))").unwrap();
        let bad = parse("(+ x (~ y))").unwrap();
        assert!(try_match(&pattern, &ok).is_some());
        assert!(try_match(&pattern, &bad).is_none());
    }

    #[test]
    fn operator_mismatch_fails() {
        let pattern = parse("(+ a b)").unwrap();
        let target = parse("(* x y)").unwrap();
        assert!(try_match(&pattern, &target).is_none());
    }

    #[test]
    fn arity_mismatch_via_different_operator_fails() {
        let pattern = parse("(~ a)").unwrap();
        let target = parse("(+ x y)").unwrap();
        assert!(try_match(&pattern, &target).is_none());
    }

    #[test]
    fn match_of_instantiated_pattern_rebinds_same_variables() {
        // invariant: match(L, e) = σ implies match(L, instantiate(L, σ)) ~ σ on vars(L)
        use crate::substitute::instantiate;
        use crate::subst::FreshGen;

        let pattern = parse("(+ a (~ a))").unwrap();
        let target = parse("(+ x (~ x))").unwrap();
        let subst = try_match(&pattern, &target).unwrap();

        let mut fresh = FreshGen::new();
        let reinstantiated = instantiate(&pattern, &subst, &mut fresh);
        let subst2 = try_match(&pattern, &reinstantiated).unwrap();

        assert_eq!(subst.get("a"), subst2.get("a"));
    }
}
