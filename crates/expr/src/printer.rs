use crate::ast::Expr;

/// Renders `expr` back into the concrete grammar. `parse(print(e))
/// == e` holds structurally for every `Expr` the parser can produce.
pub fn print(expr: &Expr) -> String {
    let mut out = String::new();
    write_expr(expr, &mut out);
    out
}

fn write_expr(expr: &Expr, out: &mut String) {
    match expr {
        Expr::Lit(bit) => out.push_str(if *bit == 0 { "0" } else { "1" }),
        Expr::Var(name) => out.push_str(name),
        Expr::Not(inner) => {
            out.push_str("(~ ");
            write_expr(inner, out);
            out.push(')');
        }
        Expr::And(lhs, rhs) => {
            out.push_str("(* ");
            write_expr(lhs, out);
            out.push(' ');
            write_expr(rhs, out);
            out.push(')');
        }
        Expr::Or(lhs, rhs) => {
            out.push_str("(+ ");
            write_expr(lhs, out);
            out.push(' ');
            write_expr(rhs, out);
            out.push(')');
        }
    }
}
