//! The canonical key used for visited-set membership: the
//! prefix-parenthesized serialization of the tree, already the input
//! format, unambiguous, and exact on variable names (no alpha-renaming).

use expr::{print, Expr};

pub fn canonical_key(expr: &Expr) -> String {
    print(expr)
}
