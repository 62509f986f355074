// Rendered dashboard frame (wire format for /ws/dashboard and /api/dashboard)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Polyline in canvas pixel space, points ordered left to right.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polyline(pub Vec<[f64; 2]>);

impl Polyline {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn points(&self) -> &[[f64; 2]] {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SparklineFrame {
    pub width: f64,
    pub height: f64,
    pub stroke_width: f64,
    pub stroke_color: String,
    pub points: Polyline,
}

/// Legend label and line colour of one chart dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesStyle {
    pub label: String,
    pub color: String,
}

/// Main line chart: two datasets on a fixed y-axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartFrame {
    pub cpu: Vec<f64>,
    pub ram: Vec<f64>,
    pub cpu_style: SeriesStyle,
    pub ram_style: SeriesStyle,
    pub y_min: f64,
    pub y_max: f64,
    /// Always false: series are swapped in without transition.
    pub animate: bool,
}

/// Everything one tick puts on screen, keyed by element id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardFrame {
    pub timestamp: u64,
    pub text: BTreeMap<String, String>,
    pub chart: ChartFrame,
    pub sparklines: BTreeMap<String, SparklineFrame>,
}

impl DashboardFrame {
    pub fn text(&self, id: &str) -> Option<&str> {
        self.text.get(id).map(String::as_str)
    }

    pub fn sparkline(&self, id: &str) -> Option<&SparklineFrame> {
        self.sparklines.get(id)
    }
}
