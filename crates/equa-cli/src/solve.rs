//! `equa solve`: offline solving.

use anyhow::Result;
use equa_core::{Coefficients, Equation, explain, pretty_equation};
use serde_json::json;

use crate::SolveArgs;

/// Renders the result of solving `args` as text or JSON.
pub fn render(args: &SolveArgs) -> Result<String> {
    Coefficients::new(args.a, args.b, args.c).validate()?;
    let equation = Equation::new(args.a, args.b, args.c);
    let pretty = pretty_equation(args.a, args.b, args.c);
    tracing::debug!(equation = %equation, "solved");

    if args.json {
        let mut value = json!({
            "equation": pretty,
            "equation_string": equation.equation_string(),
            "solution": equation.solution_text(),
            "solution_type": equation.solution_type(),
            "discriminant": equation.discriminant(),
            "roots": equation.solution().roots,
        });
        if args.steps {
            value["steps"] = json!(explain(args.a, args.b, args.c));
        }
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    let mut out = format!("{pretty}\n{}", equation.solution_text());
    if args.steps {
        out.push_str("\n\n");
        out.push_str(&explain(args.a, args.b, args.c).join("\n"));
    }
    Ok(out)
}
