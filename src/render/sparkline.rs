// Mini-chart geometry: history values to canvas-space polyline

use crate::models::Polyline;

/// Share of the canvas height a 100% value reaches.
pub const VERTICAL_SCALE: f64 = 0.85;
/// Pixels kept free under a 0% value.
pub const BOTTOM_MARGIN: f64 = 2.0;
pub const STROKE_WIDTH: f64 = 2.0;
pub const STROKE_COLOR: &str = "#4da3ff";

/// Spreads `values` left to right across `width`; higher values sit higher
/// on screen (smaller y).
pub fn sparkline_points(values: &[f64], width: f64, height: f64) -> Polyline {
    let last = values.len().saturating_sub(1);
    let points = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = if last == 0 {
                0.0
            } else {
                i as f64 / last as f64 * width
            };
            let y = height - (v / 100.0) * height * VERTICAL_SCALE - BOTTOM_MARGIN;
            [x, y]
        })
        .collect();
    Polyline(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_span_the_width() {
        let p = sparkline_points(&[0.0, 50.0, 100.0], 120.0, 40.0);
        assert_eq!(p.len(), 3);
        assert_eq!(p.points()[0], [0.0, 38.0]);
        assert_eq!(p.points()[1], [60.0, 21.0]);
        assert_eq!(p.points()[2], [120.0, 4.0]);
    }

    #[test]
    fn higher_values_draw_higher() {
        let p = sparkline_points(&[10.0, 90.0], 100.0, 100.0);
        assert!(p.points()[1][1] < p.points()[0][1]);
    }

    #[test]
    fn single_point_sits_on_left_edge() {
        let p = sparkline_points(&[100.0], 80.0, 20.0);
        assert_eq!(p.points(), &[[0.0, 1.0]]);
    }

    #[test]
    fn empty_series_draws_nothing() {
        assert!(sparkline_points(&[], 80.0, 20.0).is_empty());
    }
}
