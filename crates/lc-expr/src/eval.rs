use crate::ast::{BinOp, Expr};
use crate::error::{ExprError, ExprResult};
use crate::parser;

/// A parsed expression bound to one free variable name.
///
/// Parsing happens once; evaluation can then run at many sample positions.
#[derive(Debug, Clone)]
pub struct CompiledExpr {
    ast: Expr,
    var: String,
}

impl CompiledExpr {
    /// Parse `source`, treating `var` as the expression's free variable.
    pub fn parse(source: &str, var: &str) -> ExprResult<Self> {
        Ok(Self {
            ast: parser::parse(source)?,
            var: var.to_string(),
        })
    }

    /// Evaluate with the free variable bound to `x`.
    ///
    /// Non-finite arithmetic results are returned as-is; only structural
    /// problems (unknown names, wrong arity) are errors.
    pub fn eval(&self, x: f64) -> ExprResult<f64> {
        eval_node(&self.ast, &self.var, x)
    }
}

fn eval_node(expr: &Expr, var: &str, x: f64) -> ExprResult<f64> {
    match expr {
        Expr::Number(value) => Ok(*value),
        Expr::Ident(name) => {
            if name == var {
                Ok(x)
            } else {
                constant(name).ok_or_else(|| ExprError::UnknownIdentifier(name.clone()))
            }
        }
        Expr::Neg(operand) => Ok(-eval_node(operand, var, x)?),
        Expr::Binary { op, lhs, rhs } => {
            let l = eval_node(lhs, var, x)?;
            let r = eval_node(rhs, var, x)?;
            Ok(match op {
                BinOp::Add => l + r,
                BinOp::Sub => l - r,
                BinOp::Mul => l * r,
                BinOp::Div => l / r,
                BinOp::Rem => l % r,
                BinOp::Pow => l.powf(r),
            })
        }
        Expr::Call { name, args } => {
            let mut values = Vec::with_capacity(args.len());
            for arg in args {
                values.push(eval_node(arg, var, x)?);
            }
            call_builtin(name, &values)
        }
    }
}

fn constant(name: &str) -> Option<f64> {
    match name {
        "pi" => Some(std::f64::consts::PI),
        "e" => Some(std::f64::consts::E),
        "tau" => Some(std::f64::consts::TAU),
        _ => None,
    }
}

fn call_builtin(name: &str, args: &[f64]) -> ExprResult<f64> {
    let unary = |f: fn(f64) -> f64| -> ExprResult<f64> {
        if args.len() == 1 {
            Ok(f(args[0]))
        } else {
            Err(ExprError::Arity {
                name: name.to_string(),
                expected: 1,
                got: args.len(),
            })
        }
    };
    let binary = |f: fn(f64, f64) -> f64| -> ExprResult<f64> {
        if args.len() == 2 {
            Ok(f(args[0], args[1]))
        } else {
            Err(ExprError::Arity {
                name: name.to_string(),
                expected: 2,
                got: args.len(),
            })
        }
    };

    match name {
        "sin" => unary(f64::sin),
        "cos" => unary(f64::cos),
        "tan" => unary(f64::tan),
        "asin" => unary(f64::asin),
        "acos" => unary(f64::acos),
        "atan" => unary(f64::atan),
        "sqrt" => unary(f64::sqrt),
        "cbrt" => unary(f64::cbrt),
        "exp" => unary(f64::exp),
        "ln" => unary(f64::ln),
        "log10" => unary(f64::log10),
        "log2" => unary(f64::log2),
        "abs" => unary(f64::abs),
        "floor" => unary(f64::floor),
        "ceil" => unary(f64::ceil),
        "round" => unary(f64::round),
        "sign" => unary(f64::signum),
        "pow" => binary(f64::powf),
        "min" => binary(f64::min),
        "max" => binary(f64::max),
        _ => Err(ExprError::UnknownFunction(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(source: &str, x: f64) -> ExprResult<f64> {
        CompiledExpr::parse(source, "x")?.eval(x)
    }

    #[test]
    fn arithmetic() {
        assert_eq!(eval("1 + 2 * 3", 0.0).unwrap(), 7.0);
        assert_eq!(eval("(1 + 2) * 3", 0.0).unwrap(), 9.0);
        assert_eq!(eval("10 % 4", 0.0).unwrap(), 2.0);
        assert_eq!(eval("2 ^ 10", 0.0).unwrap(), 1024.0);
    }

    #[test]
    fn variable_binding() {
        assert_eq!(eval("x * x", 7.0).unwrap(), 49.0);
        assert_eq!(eval("-x", 3.0).unwrap(), -3.0);
    }

    #[test]
    fn implicit_multiplication() {
        assert_eq!(eval("2x + 1", 4.0).unwrap(), 9.0);
        assert_eq!(eval("2(x + 1)", 4.0).unwrap(), 10.0);
    }

    #[test]
    fn builtins_and_constants() {
        assert!((eval("sin(pi)", 0.0).unwrap()).abs() < 1e-12);
        assert_eq!(eval("pow(x, 2)", 5.0).unwrap(), 25.0);
        assert_eq!(eval("max(x, 10)", 3.0).unwrap(), 10.0);
        assert_eq!(eval("ln(e)", 0.0).unwrap(), 1.0);
    }

    #[test]
    fn power_right_associative_eval() {
        // 2^(3^2) = 512, not (2^3)^2 = 64
        assert_eq!(eval("2^3^2", 0.0).unwrap(), 512.0);
    }

    #[test]
    fn unknown_identifier_is_error() {
        assert_eq!(
            eval("y + 1", 0.0),
            Err(ExprError::UnknownIdentifier("y".to_string()))
        );
    }

    #[test]
    fn unknown_function_is_error() {
        assert!(matches!(
            eval("frob(x)", 0.0),
            Err(ExprError::UnknownFunction(_))
        ));
    }

    #[test]
    fn wrong_arity_is_error() {
        assert!(matches!(eval("sin(x, 1)", 0.0), Err(ExprError::Arity { .. })));
        assert!(matches!(eval("pow(x)", 0.0), Err(ExprError::Arity { .. })));
    }

    #[test]
    fn non_finite_results_pass_through() {
        assert!(eval("1 / x", 0.0).unwrap().is_infinite());
        assert!(eval("ln(-1)", 0.0).unwrap().is_nan());
        assert!(eval("sqrt(-x)", 4.0).unwrap().is_nan());
    }

    #[test]
    fn compiled_expr_reusable() {
        let compiled = CompiledExpr::parse("x^2", "x").unwrap();
        assert_eq!(compiled.eval(2.0).unwrap(), 4.0);
        assert_eq!(compiled.eval(9.0).unwrap(), 81.0);
    }
}
