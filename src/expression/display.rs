use std::fmt;

use crate::expression::ast::Expression;

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn precedence(expr: &Expression) -> u8 {
            match expr {
                Expression::Add(_, _) | Expression::Sub(_, _) => 1,
                Expression::Mul(_, _) | Expression::Div(_, _) => 2,
                Expression::Number(_) => 3,
            }
        }

        fn write_with_parens(
            f: &mut fmt::Formatter,
            expr: &Expression,
            need_parens: bool,
        ) -> fmt::Result {
            if need_parens {
                write!(f, "(")?;
                fmt_expression(f, expr)?;
                write!(f, ")")
            } else {
                fmt_expression(f, expr)
            }
        }

        fn write_binary(
            f: &mut fmt::Formatter,
            l: &Expression,
            symbol: &str,
            r: &Expression,
            level: u8,
            right_associative_safe: bool,
        ) -> fmt::Result {
            let need_l = precedence(l) < level;
            let need_r = if right_associative_safe {
                precedence(r) < level
            } else {
                precedence(r) <= level
            };
            write_with_parens(f, l, need_l)?;
            write!(f, " {} ", symbol)?;
            write_with_parens(f, r, need_r)
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Number(n) => write!(f, "{}", n),
                Expression::Add(l, r) => write_binary(f, l, "+", r, 1, true),
                Expression::Sub(l, r) => write_binary(f, l, "-", r, 1, false),
                Expression::Mul(l, r) => write_binary(f, l, "*", r, 2, true),
                Expression::Div(l, r) => write_binary(f, l, "/", r, 2, false),
            }
        }

        fmt_expression(f, self)
    }
}
