//! Geometry for drawing a [`ChartDescriptor`] into a fixed SVG viewport.
//!
//! Years map linearly onto x, values onto y with "nice" rounded bounds. All
//! coordinates are in viewBox units; the SVG scales to its container.

use super::chart::ChartDescriptor;
use super::series::Point;

pub const VIEW_WIDTH: f64 = 800.0;
pub const VIEW_HEIGHT: f64 = 420.0;

const PAD_LEFT: f64 = 84.0;
const PAD_RIGHT: f64 = 24.0;
const PAD_TOP: f64 = 24.0;
const PAD_BOTTOM: f64 = 56.0;

const TARGET_TICKS: usize = 5;

/// A tick on either axis: position in viewBox units and its value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub pos: f64,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
    pub year: i32,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotGeometry {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub points: Vec<PlotPoint>,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
}

impl PlotGeometry {
    pub fn for_chart(chart: &ChartDescriptor) -> Self {
        Self::for_points(&chart.trace.points)
    }

    pub fn for_points(points: &[Point]) -> Self {
        let left = PAD_LEFT;
        let right = VIEW_WIDTH - PAD_RIGHT;
        let top = PAD_TOP;
        let bottom = VIEW_HEIGHT - PAD_BOTTOM;

        let (year_min, year_max) = points
            .iter()
            .map(|p| p.year)
            .fold(None, |acc: Option<(i32, i32)>, y| match acc {
                None => Some((y, y)),
                Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
            })
            .unwrap_or((0, 1));
        let (year_min, year_max) = if year_min == year_max {
            (year_min - 1, year_max + 1)
        } else {
            (year_min, year_max)
        };

        let finite = points.iter().map(|p| p.value).filter(|v| v.is_finite());
        let (value_min, value_max) = finite
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
            .unwrap_or((0.0, 1.0));
        let y_values = nice_ticks(value_min, value_max, TARGET_TICKS);
        let (y_lo, y_hi) = match (y_values.first(), y_values.last()) {
            (Some(lo), Some(hi)) if hi > lo => (*lo, *hi),
            _ => (value_min - 1.0, value_max + 1.0),
        };

        let x_of = |year: i32| {
            left + (right - left) * f64::from(year - year_min) / f64::from(year_max - year_min)
        };
        let y_of = |value: f64| bottom - (bottom - top) * (value - y_lo) / (y_hi - y_lo);

        let plotted = points
            .iter()
            .filter(|p| p.value.is_finite())
            .map(|p| PlotPoint {
                x: x_of(p.year),
                y: y_of(p.value),
                year: p.year,
                value: p.value,
            })
            .collect();

        let x_ticks = year_ticks(year_min, year_max)
            .into_iter()
            .map(|year| Tick {
                pos: x_of(year),
                value: f64::from(year),
            })
            .collect();
        let y_ticks = y_values
            .into_iter()
            .map(|value| Tick {
                pos: y_of(value),
                value,
            })
            .collect();

        Self {
            left,
            right,
            top,
            bottom,
            points: plotted,
            x_ticks,
            y_ticks,
        }
    }

    /// SVG path data joining the points in trace order.
    pub fn line_path(&self) -> String {
        let mut path = String::new();
        for (idx, p) in self.points.iter().enumerate() {
            let cmd = if idx == 0 { 'M' } else { 'L' };
            path.push_str(&format!("{cmd}{:.1},{:.1} ", p.x, p.y));
        }
        path.trim_end().to_string()
    }

    /// Index of the point whose x is closest to `x`, for unified hover.
    pub fn nearest_index(&self, x: f64) -> Option<usize> {
        self.points
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| (a.x - x).abs().total_cmp(&(b.x - x).abs()))
            .map(|(idx, _)| idx)
    }

    /// Map a pointer offset inside the rendered element to viewBox x. `None`
    /// until the element has been measured.
    pub fn x_from_pointer(offset_x: f64, rendered_width: f64) -> Option<f64> {
        if !rendered_width.is_finite() || rendered_width <= 0.0 {
            return None;
        }
        Some((offset_x / rendered_width).clamp(0.0, 1.0) * VIEW_WIDTH)
    }
}

/// Round tick values covering `[min, max]` with roughly `count` steps of 1, 2 or 5 × 10ⁿ.
pub fn nice_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || count == 0 {
        return Vec::new();
    }
    let (min, max) = if (max - min).abs() < f64::EPSILON {
        let pad = if min == 0.0 { 1.0 } else { min.abs() * 0.1 };
        (min - pad, max + pad)
    } else {
        (min.min(max), min.max(max))
    };

    let raw_step = (max - min) / count as f64;
    let magnitude = 10f64.powi(raw_step.log10().floor() as i32);
    let residual = raw_step / magnitude;
    let step = if residual > 5.0 {
        10.0 * magnitude
    } else if residual > 2.0 {
        5.0 * magnitude
    } else if residual > 1.0 {
        2.0 * magnitude
    } else {
        magnitude
    };

    let start = (min / step).floor() * step;
    let end = (max / step).ceil() * step;
    let steps = ((end - start) / step).round() as usize;
    (0..=steps).map(|i| start + step * i as f64).collect()
}

/// One tick per year for short ranges, otherwise an even stride.
fn year_ticks(min: i32, max: i32) -> Vec<i32> {
    let span = (max - min).max(1);
    let stride = match span {
        0..=10 => 1,
        11..=25 => 2,
        _ => 5,
    };
    (min..=max).step_by(stride as usize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(values: &[(i32, f64)]) -> Vec<Point> {
        values
            .iter()
            .map(|&(year, value)| Point { year, value })
            .collect()
    }

    #[test]
    fn nice_ticks_cover_the_range() {
        let ticks = nice_ticks(2_900_000.0, 3_100_000.0, 5);
        assert!(ticks.first().copied().unwrap() <= 2_900_000.0);
        assert!(ticks.last().copied().unwrap() >= 3_100_000.0);
        assert_eq!(ticks, vec![2_900_000.0, 2_950_000.0, 3_000_000.0, 3_050_000.0, 3_100_000.0]);
    }

    #[test]
    fn flat_series_still_gets_a_span() {
        let ticks = nice_ticks(68.0, 68.0, 5);
        assert!(ticks.len() >= 2);
        assert!(ticks[0] < 68.0 && *ticks.last().unwrap() > 68.0);
    }

    #[test]
    fn points_span_the_plot_area() {
        let geometry = PlotGeometry::for_points(&pts(&[(2019, 10.0), (2020, 20.0), (2021, 15.0)]));
        let first = geometry.points[0];
        let last = geometry.points[2];
        assert_eq!(first.x, geometry.left);
        assert_eq!(last.x, geometry.right);
        assert!(geometry.points[1].y < first.y);
        assert_eq!(geometry.x_ticks.len(), 3);
    }

    #[test]
    fn empty_chart_has_axes_but_no_points() {
        let geometry = PlotGeometry::for_points(&[]);
        assert!(geometry.points.is_empty());
        assert!(!geometry.y_ticks.is_empty());
        assert_eq!(geometry.line_path(), "");
        assert_eq!(geometry.nearest_index(400.0), None);
    }

    #[test]
    fn nearest_index_snaps_to_closest_year() {
        let geometry = PlotGeometry::for_points(&pts(&[(2019, 1.0), (2020, 2.0), (2021, 3.0)]));
        assert_eq!(geometry.nearest_index(0.0), Some(0));
        assert_eq!(geometry.nearest_index(VIEW_WIDTH), Some(2));
        let middle = geometry.points[1].x;
        assert_eq!(geometry.nearest_index(middle + 5.0), Some(1));
    }

    #[test]
    fn path_follows_trace_order() {
        let geometry = PlotGeometry::for_points(&pts(&[(2019, 1.0), (2020, 2.0)]));
        let path = geometry.line_path();
        assert!(path.starts_with('M'));
        assert_eq!(path.matches('L').count(), 1);
    }

    #[test]
    fn pointer_maps_through_the_current_width() {
        assert_eq!(PlotGeometry::x_from_pointer(200.0, 400.0), Some(VIEW_WIDTH / 2.0));
        // Same pointer after the element grew to 800px.
        assert_eq!(PlotGeometry::x_from_pointer(200.0, 800.0), Some(VIEW_WIDTH / 4.0));
        assert_eq!(PlotGeometry::x_from_pointer(900.0, 800.0), Some(VIEW_WIDTH));
        assert_eq!(PlotGeometry::x_from_pointer(10.0, 0.0), None);
    }
}
