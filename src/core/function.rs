//! Plottable functions.  `None` marks an undefined value (out of domain,
//! NaN, ±inf) and is dropped before anything is drawn.

/// A pure mapping `x -> y`, where `None` means “nothing to draw here”.
pub type Function<'a> = dyn Fn(f64) -> Option<f64> + 'a;

/// Adapt a plain `f64 -> f64` closure; non-finite results become `None`.
#[inline]
pub fn defined<F>(f: F) -> impl Fn(f64) -> Option<f64>
where
    F: Fn(f64) -> f64,
{
    move |x| {
        let y = f(x);
        y.is_finite().then_some(y)
    }
}

/// Built-in functions reachable by name from the CLI.
pub const BUILTIN_NAMES: [&str; 11] = [
    "x", "square", "cube", "sqrt", "abs", "sin", "cos", "tan", "exp", "ln", "recip",
];

/// Look up a built-in by name (case-insensitive).
#[must_use]
pub fn builtin(name: &str) -> Option<fn(f64) -> f64> {
    let f: fn(f64) -> f64 = match name.trim().to_ascii_lowercase().as_str() {
        "x" | "identity" => |x| x,
        "square" | "x2" => |x| x * x,
        "cube" | "x3" => |x| x * x * x,
        "sqrt" => f64::sqrt,
        "abs" => f64::abs,
        "sin" => f64::sin,
        "cos" => f64::cos,
        "tan" => f64::tan,
        "exp" => f64::exp,
        "ln" | "log" => f64::ln,
        "recip" | "1/x" => f64::recip,
        _ => return None,
    };
    Some(f)
}
