//! End-to-end proof search scenarios exercising the parser,
//! rewriter and BFS search together exactly as the CLI wires them up.

use expr::parse;
use search::{find_shortest_path, SearchOutcome};

fn prove(start: &str, target: &str, max_depth: usize) -> SearchOutcome {
    find_shortest_path(&parse(start).unwrap(), &parse(target).unwrap(), max_depth, usize::MAX)
}

#[test]
fn one_cannot_be_proved_equal_to_zero() {
    assert_eq!(prove("1", "0", 5), SearchOutcome::NotFound);
}

#[test]
fn complement_mul_collapses_to_zero_in_one_step() {
    match prove("(* a (~ a))", "0", 2) {
        SearchOutcome::Found(steps) => {
            assert_eq!(steps.len(), 1);
            assert_eq!(steps[0].axiom, "comp-mul");
        }
        SearchOutcome::NotFound => panic!("expected a proof"),
    }
}

#[test]
fn additive_identity_drops_the_zero() {
    match prove("(+ a 0)", "a", 2) {
        SearchOutcome::Found(steps) => {
            assert_eq!(steps.len(), 1);
            assert_eq!(steps[0].axiom, "iden-add");
        }
        SearchOutcome::NotFound => panic!("expected a proof"),
    }
}

#[test]
fn associativity_add_regroups_in_one_step() {
    match prove("(+ a (+ b c))", "(+ (+ a b) c)", 2) {
        SearchOutcome::Found(steps) => {
            assert_eq!(steps.len(), 1);
            assert_eq!(steps[0].axiom, "assoc-add");
        }
        SearchOutcome::NotFound => panic!("expected a proof"),
    }
}

#[test]
fn commutativity_add_swaps_operands_in_one_step() {
    match prove("(+ a b)", "(+ b a)", 2) {
        SearchOutcome::Found(steps) => {
            assert_eq!(steps.len(), 1);
            assert_eq!(steps[0].axiom, "comm-add");
        }
        SearchOutcome::NotFound => panic!("expected a proof"),
    }
}

#[test]
fn absorption_mul_collapses_in_one_step() {
    match prove("(* a (+ a b))", "a", 3) {
        SearchOutcome::Found(steps) => {
            assert_eq!(steps.len(), 1);
            assert_eq!(steps[0].axiom, "abs-mul");
        }
        SearchOutcome::NotFound => panic!("expected a proof"),
    }
}

#[test]
fn a_longer_proof_chains_multiple_axioms() {
    // (* a (+ b a)) -- comm-add --> (* a (+ a b)) -- abs-mul --> a
    match prove("(* a (+ b a))", "a", 3) {
        SearchOutcome::Found(steps) => {
            assert!(steps.len() <= 3);
            assert_eq!(steps.last().unwrap().expr, parse("a").unwrap());
        }
        SearchOutcome::NotFound => panic!("expected a proof"),
    }
}

#[test]
fn insufficient_depth_reports_not_found_rather_than_searching_forever() {
    assert_eq!(prove("(+ a (+ b c))", "(+ (+ a b) c)", 0), SearchOutcome::NotFound);
}
