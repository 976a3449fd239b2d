//! Number and equation formatting helpers.

/// Number of decimal places used for every value in a solution text.
pub const PRECISION: usize = 6;

/// Formats a value with [`PRECISION`] fixed decimal places.
///
/// Negative zero is printed as `0.000000`.
pub fn fixed(value: f64) -> String {
    format!("{:.*}", PRECISION, value + 0.0)
}

/// Formats a value in its shortest natural form (`2`, `-3.5`).
///
/// Negative zero is printed as `0`.
pub fn number(value: f64) -> String {
    format!("{}", value + 0.0)
}

/// Formats a coefficient the way it appears in a stored equation string.
///
/// Integral values keep a trailing `.0` (`1.0`, `-5.0`).
pub fn coefficient(value: f64) -> String {
    format!("{value:?}")
}

/// Renders `a·x² + b·x + c = 0` in human form.
///
/// Zero terms are dropped, unit coefficients lose their `1`, and signs are
/// folded into the joining operator.
///
/// # Examples
///
/// ```
/// use equa_core::pretty_equation;
///
/// assert_eq!(pretty_equation(1.0, -5.0, 6.0), "x² - 5x + 6 = 0");
/// assert_eq!(pretty_equation(0.0, 0.0, 0.0), "0 = 0");
/// ```
pub fn pretty_equation(a: f64, b: f64, c: f64) -> String {
    let mut parts: Vec<String> = Vec::new();

    if a != 0.0 {
        parts.push(if a == 1.0 {
            "x²".to_string()
        } else if a == -1.0 {
            "-x²".to_string()
        } else {
            format!("{}x²", number(a))
        });
    }

    if b != 0.0 {
        let term = if b == 1.0 {
            "x".to_string()
        } else if b == -1.0 {
            "-x".to_string()
        } else {
            format!("{}x", number(b))
        };

        if parts.is_empty() {
            parts.push(term);
        } else if b > 0.0 {
            parts.push(format!("+ {}", term.replacen('-', "", 1)));
        } else {
            parts.push(format!("- {}", term.replacen('-', "", 1)));
        }
    }

    if c != 0.0 {
        if parts.is_empty() {
            parts.push(number(c));
        } else if c > 0.0 {
            parts.push(format!("+ {}", number(c)));
        } else {
            parts.push(format!("- {}", number(c.abs())));
        }
    }

    if parts.is_empty() {
        return "0 = 0".to_string();
    }

    format!("{} = 0", parts.join(" "))
}
