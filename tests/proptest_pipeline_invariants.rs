//! Property-based invariant tests for the sampling → raster → canvas pipeline.
//!
//! 1. The interpolant passes through both ends of a bracket and its midpoint.
//! 2. The interpolant is undefined past the last sample.
//! 3. The range finder returns `(c, c)` for a constant function.
//! 4. Normalised values always sit strictly inside the frame.
//! 5. Consecutive defined columns are joined by a gap-free vertical run.
//! 6. An undefined column stops the run from bridging it.
//! 7. The canvas always serialises to `height` lines of `width` cells.

use proptest::prelude::*;
use termplot::{
    Canvas, Color, Function, PixelPoint, SamplePoint, Series, draw_points, functions_min_max,
    interpolate, normalize, rasterize,
};

// ── Helpers ─────────────────────────────────────────────────────────────

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
}

fn rows_at(points: &[PixelPoint], col: usize) -> Vec<usize> {
    let mut rows: Vec<usize> = points.iter().filter(|p| p.col == col).map(|p| p.row).collect();
    rows.sort_unstable();
    rows
}

fn color_strategy() -> impl Strategy<Value = Color> {
    prop::sample::select(Color::ALL.to_vec())
}

fn strip_codes(line: &str) -> String {
    Color::ALL
        .iter()
        .fold(line.to_owned(), |acc, c| acc.replace(c.code(), ""))
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Interpolation exactness
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn interpolant_hits_bracket_ends_and_midpoint(
        x0 in -1e3..1e3f64,
        dx in 1e-3..1e3f64,
        y0 in -1e3..1e3f64,
        y1 in -1e3..1e3f64,
    ) {
        let x1 = x0 + dx;
        let pts = [SamplePoint::new(x0, y0), SamplePoint::new(x1, y1)];

        let at0 = interpolate(&pts, x0).unwrap();
        let at1 = interpolate(&pts, x1).unwrap();
        let mid = interpolate(&pts, (x0 + x1) / 2.0).unwrap();
        prop_assert!(close(at0, y0), "f(x0) = {at0}, want {y0}");
        prop_assert!(close(at1, y1), "f(x1) = {at1}, want {y1}");
        prop_assert!(close(mid, (y0 + y1) / 2.0), "f(mid) = {mid}");
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Domain boundedness
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn interpolant_undefined_past_last_sample(
        xs in prop::collection::vec(-1e3..1e3f64, 2..20),
        beyond in 1e-6..1e3f64,
    ) {
        let mut xs = xs;
        xs.sort_by(f64::total_cmp);
        let pts: Vec<SamplePoint> = xs.iter().map(|&x| SamplePoint::new(x, x * 2.0)).collect();
        let last = xs[xs.len() - 1];
        prop_assert_eq!(interpolate(&pts, last + beyond), None);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Range finder on constants
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn range_finder_constant(c in -1e6..1e6f64, lo in -1e3..1e3f64, span in 1e-3..1e3f64) {
        let f: &Function = &move |_x| Some(c);
        prop_assert_eq!(functions_min_max(lo, lo + span, &[f]), (c, c));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Normaliser keeps values strictly inside the frame
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn normalized_values_are_inside_frame(
        values in prop::collection::vec(prop::option::of(-1e3..1e3f64), 0..64),
        height in 1usize..64,
        y_min in -1e3..0.0f64,
        span in 1e-2..2e3f64,
    ) {
        let out = normalize(&values, height, y_min, y_min + span);
        prop_assert_eq!(out.len(), values.len());
        let top = (height - 1) as f64;
        for (v, n) in values.iter().zip(&out) {
            if v.is_none() {
                prop_assert!(n.is_none());
            }
            if let Some(n) = n {
                prop_assert!(*n > 0.0 && *n < top, "{n} outside (0, {top})");
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Trace continuity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn consecutive_columns_form_a_continuous_run(
        values in prop::collection::vec(0.0..100.0f64, 2..40),
    ) {
        let normalized: Vec<Option<f64>> = values.iter().copied().map(Some).collect();
        let pts = rasterize(&normalized);

        for col in 1..values.len() {
            let prev = values[col - 1] as usize;
            let cur = values[col] as usize;
            let expected: Vec<usize> = if cur > prev {
                (prev + 1..=cur).collect()
            } else if cur < prev {
                (cur..prev).collect()
            } else {
                vec![cur]
            };
            prop_assert_eq!(rows_at(&pts, col), expected, "column {}", col);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Gap reset
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn undefined_column_breaks_the_run(a in 0.0..100.0f64, b in 0.0..100.0f64) {
        let pts = rasterize(&[Some(a), None, Some(b)]);
        prop_assert_eq!(
            pts,
            vec![PixelPoint::new(0, a as usize), PixelPoint::new(2, b as usize)]
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Canvas shape
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn canvas_serialises_to_full_grid(
        width in 1usize..40,
        height in 1usize..20,
        raw in prop::collection::vec((0usize..1000, 0usize..1000, color_strategy()), 0..30),
    ) {
        let series: Vec<Series> = raw
            .iter()
            .map(|&(c, r, color)| Series::new(vec![PixelPoint::new(c % width, r % height)], color))
            .collect();
        let out = draw_points(&series, width, height).unwrap();

        let lines: Vec<&str> = out.lines().collect();
        prop_assert_eq!(lines.len(), height);
        for line in lines {
            prop_assert_eq!(strip_codes(line), " ".repeat(width));
        }

        let mut canvas = Canvas::new(width, height);
        for s in &series {
            canvas.paint(s).unwrap();
        }
        if let Some(last) = series.last() {
            let p = last.points[0];
            prop_assert_eq!(canvas.get(p.col, p.row), Some(last.color));
        }
    }
}
