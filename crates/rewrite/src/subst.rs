use expr::Expr;
use std::collections::HashMap;

/// A finite mapping from pattern-variable name to the `Expr` subtree it
/// was bound to during one match attempt. Lives only for the duration of
/// that match plus the instantiation that follows it.
pub type Subst = HashMap<String, Expr>;

/// Generates fresh pattern-variable names (`_0, _1, _2, …`) disjoint from
/// the single-letter user alphabet, so the substituter can name a
/// right-hand-side variable that the left-hand side never bound. One
/// `FreshGen` is shared across a single search run so names stay globally
/// unique within that run.
#[derive(Debug, Default, Clone)]
pub struct FreshGen {
    counter: usize,
}

impl FreshGen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self) -> String {
        let name = format!("_{}", self.counter);
        self.counter += 1;
        name
    }
}
