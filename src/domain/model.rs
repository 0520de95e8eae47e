use crate::utils::error::{AirfoilError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// 弦長比例座標點
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Ordered point sequence. The order defines the traced curve, so nothing in
/// the crate sorts or deduplicates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoordinateTable(Vec<Point>);

impl CoordinateTable {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn push(&mut self, point: Point) {
        self.0.push(point);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.0.iter()
    }

    pub fn first(&self) -> Option<&Point> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&Point> {
        self.0.last()
    }

    /// Divides every coordinate by `factor`, keeping row order.
    pub fn scaled_down(self, factor: f64) -> Self {
        Self(
            self.0
                .into_iter()
                .map(|p| Point::new(p.x / factor, p.y / factor))
                .collect(),
        )
    }
}

impl From<Vec<Point>> for CoordinateTable {
    fn from(points: Vec<Point>) -> Self {
        Self(points)
    }
}

impl FromIterator<Point> for CoordinateTable {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CoordinateTable {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Display label of an airfoil plus an optional annotation that only appears
/// in the header line (e.g. `M=2.0% P=40.0% T=12.0%`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirfoilName {
    label: String,
    annotation: Option<String>,
}

impl AirfoilName {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            annotation: None,
        }
    }

    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn annotation(&self) -> Option<&str> {
        self.annotation.as_deref()
    }

    /// 標準格式的第一行
    pub fn header(&self) -> String {
        match &self.annotation {
            Some(annotation) => format!("{} {}", self.label, annotation),
            None => self.label.clone(),
        }
    }

    /// `NACA 2412 Airfoil` -> `NACA_2412_Airfoil.txt`
    ///
    /// Only `[A-Za-z0-9._-]` survive, everything else becomes `_`, so a
    /// label read from an upload can never name a path.
    pub fn suggested_file_name(&self) -> String {
        let sanitized: String = self
            .label
            .trim()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        let stem = sanitized.trim_start_matches('.');

        if stem.is_empty() {
            "airfoil.txt".to_string()
        } else {
            format!("{}.txt", stem)
        }
    }
}

impl fmt::Display for AirfoilName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Name header followed by `x y` rows
    #[default]
    Standard,
    /// `x y 0.000000` rows without a header
    #[cfg_attr(feature = "cli", value(name = "solidworks"))]
    SolidWorks,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Standard => "standard",
            Layout::SolidWorks => "solidworks",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = AirfoilError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Layout::Standard),
            "solidworks" => Ok(Layout::SolidWorks),
            _ => Err(AirfoilError::UnknownLayout {
                value: s.to_string(),
            }),
        }
    }
}

/// Extract 階段的結果
#[derive(Debug, Clone)]
pub struct AirfoilProfile {
    pub name: AirfoilName,
    pub table: CoordinateTable,
    pub metadata: BTreeMap<String, String>,
}

impl AirfoilProfile {
    pub fn new(name: AirfoilName, table: CoordinateTable) -> Self {
        Self {
            name,
            table,
            metadata: BTreeMap::new(),
        }
    }
}

/// Rendered text plus what the delivery layer needs to offer it as a file.
#[derive(Debug, Clone, Serialize)]
pub struct AirfoilDocument {
    pub coordinates: String,
    pub name: String,
    pub format: Layout,
    pub point_count: usize,
    pub file_name: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}
