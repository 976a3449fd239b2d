//! Step-by-step derivation of a solution.

use crate::format::{fixed, number, pretty_equation};
use crate::solver::{Roots, solve};

/// Explains how `a·x² + b·x + c = 0` is solved, one line per step.
///
/// Follows the same branch order as [`solve`] and ends with the same root
/// values. Blank strings separate the stages of a quadratic derivation.
pub fn explain(a: f64, b: f64, c: f64) -> Vec<String> {
    let solution = solve(a, b, c);
    let mut steps: Vec<String> = Vec::new();

    match solution.roots {
        Roots::Infinite => {
            steps.push("Analysis:".into());
            steps.push("The equation reduces to 0 = 0".into());
            steps.push("Every real number satisfies it".into());
            steps.push("Conclusion: infinitely many solutions".into());
        }
        Roots::None => {
            steps.push("Analysis:".into());
            steps.push(format!("The equation reduces to {} = 0", number(c)));
            steps.push("This is a contradiction".into());
            steps.push("Conclusion: no solution".into());
        }
        Roots::Linear { x } => {
            steps.push("Analysis:".into());
            steps.push("a = 0, so the equation is linear".into());
            steps.push(format!("Equation: {}", pretty_equation(0.0, b, c)));
            steps.push("Solve the linear equation:".into());
            steps.push(format!("{}x = {}", number(b), number(-c)));
            steps.push(format!("x = {}/{}", number(-c), number(b)));
            steps.push(format!("Solution: x = {}", fixed(x)));
        }
        roots => {
            let d = solution.discriminant.unwrap_or(b * b - 4.0 * a * c);

            steps.push("Quadratic equation analysis:".into());
            steps.push(format!("Equation: {}", pretty_equation(a, b, c)));
            steps.push(format!(
                "Coefficients: a = {}, b = {}, c = {}",
                number(a),
                number(b),
                number(c)
            ));
            steps.push(String::new());
            steps.push("Compute the discriminant D:".into());
            steps.push("D = b² - 4ac".into());
            steps.push(format!("D = ({})² - 4({})({})", number(b), number(a), number(c)));
            steps.push(format!("D = {} - {}", number(b * b), number(4.0 * a * c)));
            steps.push(format!("D = {}", number(d)));
            steps.push(String::new());

            quadratic_steps(&mut steps, a, b, d, roots);
        }
    }

    steps
}

fn quadratic_steps(steps: &mut Vec<String>, a: f64, b: f64, d: f64, roots: Roots) {
    match roots {
        Roots::TwoReal { x1, x2 } => {
            let sqrt_d = d.sqrt();
            steps.push("D > 0: two distinct real roots".into());
            steps.push("Apply the quadratic formula:".into());
            steps.push("x₁ = (-b + √D)/(2a)".into());
            steps.push("x₂ = (-b - √D)/(2a)".into());
            steps.push(String::new());
            steps.push(format!("√D = √{} = {}", number(d), fixed(sqrt_d)));
            steps.push(String::new());
            steps.push("Compute x₁:".into());
            steps.push(format!("x₁ = ({} + {})/(2 × {})", number(-b), fixed(sqrt_d), number(a)));
            steps.push(format!("x₁ = {}/{}", fixed(-b + sqrt_d), number(2.0 * a)));
            steps.push(format!("x₁ = {}", fixed(x1)));
            steps.push(String::new());
            steps.push("Compute x₂:".into());
            steps.push(format!("x₂ = ({} - {})/(2 × {})", number(-b), fixed(sqrt_d), number(a)));
            steps.push(format!("x₂ = {}/{}", fixed(-b - sqrt_d), number(2.0 * a)));
            steps.push(format!("x₂ = {}", fixed(x2)));
        }
        Roots::Repeated { x } => {
            steps.push("D = 0: one repeated real root".into());
            steps.push("Apply the formula:".into());
            steps.push("x = -b/(2a)".into());
            steps.push(String::new());
            steps.push("Compute x:".into());
            steps.push(format!("x = {}/(2 × {})", number(-b), number(a)));
            steps.push(format!("x = {}/{}", number(-b), number(2.0 * a)));
            steps.push(format!("x = {}", fixed(x)));
        }
        Roots::Complex { re, im } => {
            let sqrt_abs_d = d.abs().sqrt();
            steps.push("D < 0: two complex conjugate roots".into());
            steps.push("Apply the complex quadratic formula:".into());
            steps.push("x₁ = (-b + i√|D|)/(2a)".into());
            steps.push("x₂ = (-b - i√|D|)/(2a)".into());
            steps.push(String::new());
            steps.push(format!("|D| = {}", number(d.abs())));
            steps.push(format!("√|D| = {}", fixed(sqrt_abs_d)));
            steps.push(String::new());
            steps.push("Compute x₁:".into());
            steps.push(format!("x₁ = ({} + i × {})/(2 × {})", number(-b), fixed(sqrt_abs_d), number(a)));
            steps.push(format!("x₁ = {} + {}i", fixed(re), fixed(im)));
            steps.push(String::new());
            steps.push("Compute x₂:".into());
            steps.push(format!("x₂ = ({} - i × {})/(2 × {})", number(-b), fixed(sqrt_abs_d), number(a)));
            steps.push(format!("x₂ = {} - {}i", fixed(re), fixed(im)));
        }
        Roots::Linear { .. } | Roots::Infinite | Roots::None => {}
    }
}
