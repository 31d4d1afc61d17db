use crate::core::data::complex::Complex;

pub const ESCAPE_RADIUS: f64 = 2.0;

/// Outcome of escape-time iteration for one complex constant: the step
/// counter (including the overshoot steps) and |Z| after the final step.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeTime {
    pub iterations: u32,
    pub modulus: f64,
}

/// Runs `Z ← Z² + C` from `Z = 0`, counting steps, while `|Z|` stays within
/// the escape radius and the counter is under budget. After the loop exits,
/// exactly two more unconditional steps run — the smooth-coloring formula
/// needs `Z` carried past the threshold for the `ln(ln(|Z|))` term, and both
/// steps count toward the returned total.
///
/// The counter bound guarantees termination even when `Z` degrades to
/// NaN or infinity at extreme zoom; such pixels end up classified interior.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> EscapeTime {
    let mut z = Complex::ZERO;
    let mut iterations = 0;

    loop {
        z = z * z + c;
        iterations += 1;

        if z.magnitude_squared() > ESCAPE_RADIUS * ESCAPE_RADIUS || iterations >= max_iterations {
            break;
        }
    }

    z = z * z + c;
    z = z * z + c;
    iterations += 2;

    EscapeTime {
        iterations,
        modulus: z.magnitude(),
    }
}

/// Continuous iteration count for an escaped point, rescaled to palette
/// positions: `(n + 1 - ln(ln|Z|) / ln 2) / max_iterations * palette_len`.
/// May come out negative or beyond the palette length; `Palette::sample`
/// wraps it.
#[must_use]
pub fn smooth_iteration_count(escape: EscapeTime, max_iterations: u32, palette_len: usize) -> f64 {
    let mu = f64::from(escape.iterations) + 1.0 - escape.modulus.ln().ln() / ESCAPE_RADIUS.ln();
    mu / f64::from(max_iterations) * palette_len as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_never_escapes() {
        // C = 0: Z stays at 0 forever, the budget is exhausted
        let escape = escape_time(Complex::ZERO, 100);

        assert_eq!(escape.iterations, 102); // budget plus two overshoot steps
        assert_eq!(escape.modulus, 0.0);
    }

    #[test]
    fn test_far_exterior_point_escapes_on_first_step() {
        let c = Complex {
            real: 3.0,
            imag: 0.0,
        };

        let escape = escape_time(c, 100);

        // loop exits after step 1 (|Z| = 3), then the two overshoot steps:
        // 3 → 12 → 147
        assert_eq!(escape.iterations, 3);
        assert_eq!(escape.modulus, 147.0);
    }

    #[test]
    fn test_escaped_point_stays_under_budget() {
        let c = Complex {
            real: 0.4,
            imag: 0.4,
        };

        let escape = escape_time(c, 550);

        assert!(escape.iterations < 550);
        assert!(escape.modulus > ESCAPE_RADIUS);
    }

    #[test]
    fn test_interior_point_reaches_budget() {
        // C = -1 cycles 0 → -1 → 0 → -1, never escaping
        let c = Complex {
            real: -1.0,
            imag: 0.0,
        };

        let escape = escape_time(c, 50);

        assert!(escape.iterations >= 50);
    }

    #[test]
    fn test_budget_of_one_still_terminates() {
        let c = Complex {
            real: 0.1,
            imag: 0.1,
        };

        let escape = escape_time(c, 1);

        assert_eq!(escape.iterations, 3);
    }

    #[test]
    fn test_smooth_count_is_finite_for_escaped_point() {
        let c = Complex {
            real: 3.0,
            imag: 0.0,
        };
        let escape = escape_time(c, 100);

        let mu = smooth_iteration_count(escape, 100, 100);

        assert!(mu.is_finite());
        assert!(mu > 0.0);
    }

    #[test]
    fn test_smooth_count_matches_the_formula() {
        let escape = EscapeTime {
            iterations: 3,
            modulus: 147.0,
        };

        let mu = smooth_iteration_count(escape, 100, 100);

        let expected = (3.0 + 1.0 - 147.0_f64.ln().ln() / 2.0_f64.ln()) / 100.0 * 100.0;
        assert_eq!(mu, expected);
    }

    #[test]
    fn test_smooth_count_scales_with_palette_length() {
        let escape = EscapeTime {
            iterations: 10,
            modulus: 50.0,
        };

        let short = smooth_iteration_count(escape, 100, 10);
        let long = smooth_iteration_count(escape, 100, 100);

        assert!((long - short * 10.0).abs() < 1e-9);
    }
}
