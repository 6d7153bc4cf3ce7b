//! # chartkit
//!
//! Core chart primitives: scales, path builders, tick generation.
//! Implements Strategy pattern for flexible scale behaviors.

use std::fmt::Write;

use pingu_core::{AxisFormatter, NumberFormatter};

// ============================================================================
// STRATEGY PATTERN: Scale Trait
// ============================================================================

/// Strategy trait for scales (maps domain values to range values)
pub trait Scale: Send + Sync {
    /// Map a domain value into the range
    fn scale(&self, value: f64) -> f64;
}

// ============================================================================
// LINEAR SCALE
// ============================================================================

/// Linear scale (D3-style continuous scale)
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
    clamp: bool,
}

impl LinearScale {
    pub fn new() -> Self {
        Self {
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
            clamp: false,
        }
    }

    pub fn domain(mut self, min: f64, max: f64) -> Self {
        self.domain = (min, max);
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = (min, max);
        self
    }

    pub fn clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    pub fn domain_bounds(&self) -> (f64, f64) {
        self.domain
    }

    /// Extend the domain outward to multiples of the nice tick step
    pub fn nice(mut self, count: usize) -> Self {
        let (min, max) = self.domain;
        if let Some(step) = nice_step(max - min, count) {
            self.domain = ((min / step).floor() * step, (max / step).ceil() * step);
        }
        self
    }

    /// Generate "nice" tick values (rounded to clean numbers) inside the domain
    pub fn nice_ticks(&self, count: usize) -> Vec<f64> {
        let (min, max) = self.domain;
        let Some(step) = nice_step(max - min, count) else {
            return vec![min];
        };

        let nice_min = (min / step).floor() * step;
        let nice_max = (max / step).ceil() * step;

        let mut ticks = Vec::new();
        let mut tick = nice_min;

        while tick <= nice_max + step * 0.5 {
            if tick >= min - step * 1e-9 && tick <= max + step * 1e-9 {
                ticks.push(tick);
            }
            tick += step;
        }

        ticks
    }
}

fn nice_step(span: f64, count: usize) -> Option<f64> {
    if span <= 0.0 || count == 0 || !span.is_finite() {
        return None;
    }

    let rough_step = span / count as f64;
    let magnitude = 10.0_f64.powf(rough_step.log10().floor());
    let residual = rough_step / magnitude;

    let step = if residual <= 1.0 {
        magnitude
    } else if residual <= 2.0 {
        2.0 * magnitude
    } else if residual <= 5.0 {
        5.0 * magnitude
    } else {
        10.0 * magnitude
    };
    Some(step)
}

impl Default for LinearScale {
    fn default() -> Self {
        Self::new()
    }
}

impl Scale for LinearScale {
    fn scale(&self, value: f64) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;

        if (d_max - d_min).abs() < f64::EPSILON {
            return (r_min + r_max) / 2.0;
        }

        let mut normalized = (value - d_min) / (d_max - d_min);

        if self.clamp {
            normalized = normalized.clamp(0.0, 1.0);
        }

        r_min + normalized * (r_max - r_min)
    }
}

/// Y scale for a value axis starting at zero, with nice upper bound
pub fn value_scale(max: f64, height: f64, ticks: usize) -> LinearScale {
    let upper = if max > 0.0 { max } else { 1.0 };
    LinearScale::new()
        .domain(0.0, upper)
        .nice(ticks)
        .range(height, 0.0)
        .clamp(true)
}

/// Tick positions and labels for a value axis
pub fn axis_ticks(scale: &LinearScale, count: usize) -> Vec<(f64, String)> {
    let formatter = AxisFormatter;
    scale
        .nice_ticks(count)
        .into_iter()
        .map(|tick| (scale.scale(tick), formatter.format(tick)))
        .collect()
}

// ============================================================================
// BAND SCALE (for categorical x positions)
// ============================================================================

/// Band scale for categorical data (one band per record)
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain_count: usize,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
}

impl BandScale {
    pub fn new(count: usize) -> Self {
        Self {
            domain_count: count,
            range: (0.0, 1.0),
            padding_inner: 0.1,
            padding_outer: 0.1,
        }
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = (min, max);
        self
    }

    pub fn padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.clamp(0.0, 1.0);
        self.padding_outer = outer.clamp(0.0, 1.0);
        self
    }

    /// Step between band starts
    pub fn step(&self) -> f64 {
        if self.domain_count == 0 {
            return 0.0;
        }

        let (r_min, r_max) = self.range;
        let n = self.domain_count as f64;
        (r_max - r_min) / (n - self.padding_inner + 2.0 * self.padding_outer).max(1.0)
    }

    /// Width of each band
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding_inner)
    }

    /// Start position for index
    pub fn scale(&self, index: usize) -> f64 {
        if self.domain_count == 0 {
            return self.range.0;
        }

        let step = self.step();
        self.range.0 + self.padding_outer * step + index as f64 * step
    }

    /// Center position for index
    pub fn scale_center(&self, index: usize) -> f64 {
        self.scale(index) + self.bandwidth() / 2.0
    }
}

// ============================================================================
// PATH BUILDER (fluent API)
// ============================================================================

/// SVG path builder with fluent API
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    commands: String,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            commands: String::with_capacity(256),
        }
    }

    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        let _ = write!(self.commands, "M{:.2},{:.2}", x, y);
        self
    }

    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        let _ = write!(self.commands, "L{:.2},{:.2}", x, y);
        self
    }

    pub fn arc_to(mut self, r: f64, large_arc: bool, sweep: bool, x: f64, y: f64) -> Self {
        let _ = write!(
            self.commands,
            "A{:.2},{:.2},0,{},{},{:.2},{:.2}",
            r, r, large_arc as u8, sweep as u8, x, y
        );
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push('Z');
        self
    }

    pub fn build(self) -> String {
        self.commands
    }
}

/// Line path through the points (non-closed)
pub fn line_path(points: &[(f64, f64)]) -> String {
    let Some((&(x0, y0), rest)) = points.split_first() else {
        return String::new();
    };

    rest.iter()
        .fold(PathBuilder::new().move_to(x0, y0), |b, &(x, y)| b.line_to(x, y))
        .build()
}

/// Bar with rounded top corners, flat at the baseline
pub fn rounded_top_bar(x: f64, y: f64, width: f64, height: f64, radius: f64) -> String {
    let r = radius.min(width / 2.0).min(height).max(0.0);
    let bottom = y + height;

    PathBuilder::new()
        .move_to(x, bottom)
        .line_to(x, y + r)
        .arc_to(r, false, true, x + r, y)
        .line_to(x + width - r, y)
        .arc_to(r, false, true, x + width, y + r)
        .line_to(x + width, bottom)
        .close()
        .build()
}

/// Point on a circle; 0 degrees is 12 o'clock, angles grow clockwise
pub fn polar(cx: f64, cy: f64, radius: f64, degrees: f64) -> (f64, f64) {
    let rad = (degrees - 90.0).to_radians();
    (cx + radius * rad.cos(), cy + radius * rad.sin())
}

/// Annular sector between `start` and `end` degrees
pub fn arc_slice_path(cx: f64, cy: f64, inner: f64, outer: f64, start: f64, end: f64) -> String {
    let sweep = (end - start).clamp(0.0, 360.0);

    // a full ring can't be drawn as one arc, split it in two halves
    if sweep >= 359.999 {
        let mid = start + 180.0;
        return format!(
            "{}{}",
            arc_slice_path(cx, cy, inner, outer, start, mid),
            arc_slice_path(cx, cy, inner, outer, mid, start + 360.0)
        );
    }

    let large = sweep > 180.0;
    let (ox0, oy0) = polar(cx, cy, outer, start);
    let (ox1, oy1) = polar(cx, cy, outer, start + sweep);
    let (ix1, iy1) = polar(cx, cy, inner, start + sweep);
    let (ix0, iy0) = polar(cx, cy, inner, start);

    PathBuilder::new()
        .move_to(ox0, oy0)
        .arc_to(outer, large, true, ox1, oy1)
        .line_to(ix1, iy1)
        .arc_to(inner, large, false, ix0, iy0)
        .close()
        .build()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_scale() {
        let scale = LinearScale::new().domain(0.0, 100.0).range(0.0, 500.0);

        assert_eq!(scale.scale(0.0), 0.0);
        assert_eq!(scale.scale(50.0), 250.0);
        assert_eq!(scale.scale(100.0), 500.0);

        let clamped = scale.clamp(true);
        assert_eq!(clamped.scale(-20.0), 0.0);
        assert_eq!(clamped.scale(140.0), 500.0);
    }

    #[test]
    fn test_nice_domain() {
        let scale = LinearScale::new().domain(0.0, 2300.0).nice(5);
        assert_eq!(scale.domain_bounds(), (0.0, 2500.0));
        assert_eq!(scale.nice_ticks(5), vec![0.0, 500.0, 1000.0, 1500.0, 2000.0, 2500.0]);
    }

    #[test]
    fn test_value_scale_flips_range() {
        let scale = value_scale(2300.0, 200.0, 5);
        assert_eq!(scale.scale(0.0), 200.0);
        assert_eq!(scale.scale(2500.0), 0.0);

        let ticks = axis_ticks(&scale, 5);
        assert_eq!(ticks.first().map(|t| t.1.as_str()), Some("0"));
        assert_eq!(ticks.last().map(|t| t.1.as_str()), Some("2.5K"));
    }

    #[test]
    fn test_value_scale_all_zero() {
        let scale = value_scale(0.0, 100.0, 5);
        assert_eq!(scale.scale(0.0), 100.0);
    }

    #[test]
    fn test_band_scale() {
        let scale = BandScale::new(5).range(0.0, 100.0);
        let bw = scale.bandwidth();
        assert!(bw > 0.0);
        assert!(bw < 20.0);
        // bands are evenly spaced and stay inside the range
        assert!(scale.scale(0) > 0.0);
        assert!(scale.scale(4) + bw < 100.0 + 1e-9);
        let gap = scale.scale(1) - scale.scale(0);
        assert!((gap - scale.step()).abs() < 1e-9);
    }

    #[test]
    fn test_line_path() {
        let path = line_path(&[(0.0, 0.0), (50.0, 50.0), (100.0, 0.0)]);
        assert!(path.starts_with("M0.00,0.00"));
        assert!(path.contains("L50.00,50.00"));
        assert!(line_path(&[]).is_empty());
    }

    #[test]
    fn test_rounded_bar_is_closed() {
        let path = rounded_top_bar(10.0, 20.0, 40.0, 100.0, 4.0);
        assert!(path.starts_with("M10.00,120.00"));
        assert!(path.contains("A4.00,4.00"));
        assert!(path.ends_with('Z'));
    }

    #[test]
    fn test_polar_orientation() {
        let (x, y) = polar(0.0, 0.0, 10.0, 0.0);
        assert!(x.abs() < 1e-9 && (y + 10.0).abs() < 1e-9);
        let (x, y) = polar(0.0, 0.0, 10.0, 90.0);
        assert!((x - 10.0).abs() < 1e-9 && y.abs() < 1e-9);
    }

    #[test]
    fn test_full_ring_splits() {
        let path = arc_slice_path(0.0, 0.0, 60.0, 80.0, 0.0, 360.0);
        assert_eq!(path.matches('Z').count(), 2);
    }
}
