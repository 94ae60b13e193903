//! Geometry for the cash-flow chart. The component in
//! `components::chart` only turns a [`Plot`] into SVG elements.

use crate::format::format_short_date;
use crate::models::{parse_date, ChartPoint};

const PAD_LEFT: f64 = 56.0;
const PAD_RIGHT: f64 = 16.0;
const PAD_TOP: f64 = 16.0;
const PAD_BOTTOM: f64 = 28.0;
const MAX_TICKS: usize = 6;
const GRID_LINES: usize = 4;

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    /// `d` attribute for the stroke.
    pub line: String,
    /// `d` attribute for the filled area under the stroke.
    pub area: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub pos: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Plot {
    pub width: f64,
    pub height: f64,
    pub income: Series,
    pub expense: Series,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
}

impl Plot {
    pub fn baseline(&self) -> f64 {
        self.height - PAD_BOTTOM
    }

    pub fn left(&self) -> f64 {
        PAD_LEFT
    }

    pub fn right(&self) -> f64 {
        self.width - PAD_RIGHT
    }
}

/// Lays out both series in a `width` x `height` view box. `None` when there
/// is nothing to draw.
pub fn plot(points: &[ChartPoint], width: f64, height: f64) -> Option<Plot> {
    if points.is_empty() {
        return None;
    }

    let inner_w = width - PAD_LEFT - PAD_RIGHT;
    let inner_h = height - PAD_TOP - PAD_BOTTOM;
    let baseline = height - PAD_BOTTOM;

    let peak = points
        .iter()
        .flat_map(|p| [p.income, p.expense])
        .fold(0.0_f64, f64::max);
    let max = if peak > 0.0 { peak } else { 1.0 };

    let x_at = |i: usize| -> f64 {
        if points.len() == 1 {
            PAD_LEFT + inner_w / 2.0
        } else {
            PAD_LEFT + inner_w * i as f64 / (points.len() - 1) as f64
        }
    };
    let y_at = |v: f64| -> f64 { PAD_TOP + inner_h * (1.0 - v.max(0.0) / max) };

    let series = |value: fn(&ChartPoint) -> f64| -> Series {
        let coords: Vec<(f64, f64)> = points
            .iter()
            .enumerate()
            .map(|(i, p)| (x_at(i), y_at(value(p))))
            .collect();
        let line = coords
            .iter()
            .enumerate()
            .map(|(i, (x, y))| format!("{}{:.1},{:.1}", if i == 0 { "M" } else { " L" }, x, y))
            .collect::<String>();
        let first_x = coords[0].0;
        let last_x = coords[coords.len() - 1].0;
        let area = format!(
            "{} L{:.1},{:.1} L{:.1},{:.1} Z",
            line, last_x, baseline, first_x, baseline
        );
        Series { line, area }
    };

    let step = (points.len() + MAX_TICKS - 1) / MAX_TICKS;
    let x_ticks = points
        .iter()
        .enumerate()
        .step_by(step.max(1))
        .map(|(i, p)| Tick {
            pos: x_at(i),
            label: axis_label(&p.date),
        })
        .collect();

    let y_ticks = (0..=GRID_LINES)
        .map(|i| {
            let value = max * i as f64 / GRID_LINES as f64;
            Tick {
                pos: y_at(value),
                label: compact_amount(value),
            }
        })
        .collect();

    Some(Plot {
        width,
        height,
        income: series(|p| p.income),
        expense: series(|p| p.expense),
        x_ticks,
        y_ticks,
    })
}

fn axis_label(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => format_short_date(date),
        None => raw.to_string(),
    }
}

/// `950`, `1.2k`, `3.4M`
pub fn compact_amount(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.1}k", value / 1_000.0)
    } else {
        format!("{:.0}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn point(date: &str, income: f64, expense: f64) -> ChartPoint {
        ChartPoint {
            date: date.to_string(),
            income,
            expense,
        }
    }

    #[test]
    fn nothing_to_plot() {
        assert_eq!(plot(&[], 400.0, 200.0), None);
    }

    #[test]
    fn two_points_span_the_inner_width() {
        let points = [point("2024-03-01", 100.0, 0.0), point("2024-03-02", 50.0, 100.0)];
        let plot = plot(&points, 272.0, 144.0).unwrap();

        // inner box: x 56..256, y 16..116
        assert_eq!(plot.income.line, "M56.0,16.0 L256.0,66.0");
        assert_eq!(plot.expense.line, "M56.0,116.0 L256.0,16.0");
        assert_eq!(
            plot.income.area,
            "M56.0,16.0 L256.0,66.0 L256.0,116.0 L56.0,116.0 Z"
        );
        assert_eq!(plot.baseline(), 116.0);
    }

    #[test]
    fn single_point_is_centred() {
        let plot = plot(&[point("2024-03-01", 10.0, 5.0)], 272.0, 144.0).unwrap();
        assert_eq!(plot.income.line, "M156.0,16.0");
        assert_eq!(plot.x_ticks.len(), 1);
        assert_eq!(plot.x_ticks[0].label, "Mar 1");
    }

    #[test]
    fn all_zero_series_sit_on_the_baseline() {
        let plot = plot(&[point("a", 0.0, 0.0), point("b", 0.0, 0.0)], 272.0, 144.0).unwrap();
        assert_eq!(plot.income.line, "M56.0,116.0 L256.0,116.0");
        assert_eq!(plot.x_ticks[1].label, "b");
    }

    #[test]
    fn ticks_are_thinned_out() {
        let points: Vec<_> = (1..=14)
            .map(|d| point(&format!("2024-03-{:02}", d), d as f64, 0.0))
            .collect();
        let plot = plot(&points, 600.0, 300.0).unwrap();
        assert_eq!(plot.x_ticks.len(), 5);
        assert_eq!(plot.y_ticks.len(), GRID_LINES + 1);
        assert_eq!(plot.y_ticks.last().unwrap().label, "14");
    }

    #[test]
    fn compact_amounts() {
        assert_eq!(compact_amount(950.0), "950");
        assert_eq!(compact_amount(1240.0), "1.2k");
        assert_eq!(compact_amount(3_400_000.0), "3.4M");
    }
}
