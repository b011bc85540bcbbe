//! Breadth-first shortest-path proof search over the rewrite graph defined
//! by the `rewrite` crate's axiom table.

pub mod bfs;

pub use bfs::{
    find_shortest_path, find_shortest_path_cancellable, find_shortest_path_with_cap, ProofStep,
    SearchOutcome, DEFAULT_VISITED_CAP,
};
