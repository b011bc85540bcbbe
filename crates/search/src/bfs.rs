//! Breadth-first shortest-path search over the one-step-rewrite graph
//! bounded by depth and per-node size, reconstructing a
//! shortest witnessing proof by walking parent pointers back to the start.

use expr::Expr;
use rewrite::{all_successors_with, canonical_key, FreshGen};
use std::collections::{HashMap, HashSet, VecDeque};

/// Default cap on the visited set's size ("an implementation
/// should cap visited-set size ... exceeding the cap is reported as 'not
/// found'"). Library callers that want a cap derived from their own
/// `max_depth` policy should call [`find_shortest_path_with_cap`] directly
/// instead of relying on this default.
pub const DEFAULT_VISITED_CAP: usize = 1_000_000;

/// One step of a proof: the expression reached, and the axiom that
/// licensed reaching it from the previous step (or from `start`, for the
/// first step).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofStep {
    pub expr: Expr,
    pub axiom: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Vec<ProofStep>),
    NotFound,
}

/// Finds a shortest sequence of axiom rewrites from `start` to `target`,
/// bounded by `max_depth` rewrite steps and `max_size` nodes per
/// intermediate expression. Uses [`DEFAULT_VISITED_CAP`] as the visited-set
/// size cap.
pub fn find_shortest_path(start: &Expr, target: &Expr, max_depth: usize, max_size: usize) -> SearchOutcome {
    find_shortest_path_with_cap(start, target, max_depth, max_size, DEFAULT_VISITED_CAP, &|| false)
}

/// As [`find_shortest_path`], but polls `should_stop` once per frontier pop
/// and returns `NotFound` with no side effects as soon as it reports true
/// (optional cooperative cancellation).
pub fn find_shortest_path_cancellable(
    start: &Expr,
    target: &Expr,
    max_depth: usize,
    max_size: usize,
    should_stop: &dyn Fn() -> bool,
) -> SearchOutcome {
    find_shortest_path_with_cap(start, target, max_depth, max_size, DEFAULT_VISITED_CAP, should_stop)
}

/// Full form of the search: every bound is explicit, including the
/// visited-set size cap. Callers that derive their cap from
/// `max_depth` (as the CLI does) should call this directly.
pub fn find_shortest_path_with_cap(
    start: &Expr,
    target: &Expr,
    max_depth: usize,
    max_size: usize,
    visited_cap: usize,
    should_stop: &dyn Fn() -> bool,
) -> SearchOutcome {
    let start_key = canonical_key(start);
    let target_key = canonical_key(target);

    // Shared across every node expanded in this run, per spec.md §9: two
    // expansions minting a fresh variable from independently-reset counters
    // could both produce `_0`, and `Expr`'s structural equality would then
    // treat those two unrelated binders as the literal same subtree.
    let mut fresh = FreshGen::new();

    let mut frontier: VecDeque<Expr> = VecDeque::new();
    let mut depth: HashMap<String, usize> = HashMap::new();
    let mut parent: HashMap<String, (String, &'static str)> = HashMap::new();
    let mut exprs: HashMap<String, Expr> = HashMap::new();
    let mut visited: HashSet<String> = HashSet::new();

    visited.insert(start_key.clone());
    depth.insert(start_key.clone(), 0);
    exprs.insert(start_key.clone(), start.clone());
    frontier.push_back(start.clone());

    while let Some(u) = frontier.pop_front() {
        if should_stop() {
            return SearchOutcome::NotFound;
        }

        let u_key = canonical_key(&u);
        if u_key == target_key {
            return SearchOutcome::Found(reconstruct(&exprs, &parent, &start_key, &u_key));
        }

        let u_depth = depth[&u_key];
        if u_depth >= max_depth {
            continue;
        }

        for (axiom_name, v) in all_successors_with(&u, &mut fresh) {
            if v.size() > max_size {
                continue;
            }
            let v_key = canonical_key(&v);
            if visited.contains(&v_key) {
                continue;
            }
            if visited.len() >= visited_cap {
                return SearchOutcome::NotFound;
            }

            visited.insert(v_key.clone());
            depth.insert(v_key.clone(), u_depth + 1);
            parent.insert(v_key.clone(), (u_key.clone(), axiom_name));
            exprs.insert(v_key.clone(), v.clone());
            frontier.push_back(v);
        }
    }

    SearchOutcome::NotFound
}

/// Walks `parent` from `target_key` back to `start_key`, reversing into
/// start-to-finish order.
fn reconstruct(
    exprs: &HashMap<String, Expr>,
    parent: &HashMap<String, (String, &'static str)>,
    start_key: &str,
    target_key: &str,
) -> Vec<ProofStep> {
    let mut steps = Vec::new();
    let mut cur = target_key.to_string();
    while cur != start_key {
        let (prev, axiom) = parent[&cur].clone();
        steps.push(ProofStep {
            expr: exprs[&cur].clone(),
            axiom,
        });
        cur = prev;
    }
    steps.reverse();
    steps
}
