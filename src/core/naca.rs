//! NACA 4-digit airfoil generator.
//!
//! Coordinates follow the standard NACA equations for the mean camber line
//! and the thickness distribution, sampled with cosine spacing.

use crate::domain::model::{AirfoilName, CoordinateTable, Point};
use crate::utils::error::{AirfoilError, Result};
use regex::Regex;
use std::f64::consts::PI;
use std::sync::OnceLock;

pub const DEFAULT_POINT_COUNT: usize = 81;

/// Thickness polynomial coefficients, open trailing edge variant.
const THICKNESS_COEFFICIENTS: [f64; 5] = [0.2969, -0.1260, -0.3516, 0.2843, -0.1015];

fn code_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // `\d` 會匹配 Unicode 數字，這裡只接受 ASCII
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]{4}$").expect("static pattern is valid"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NacaCode(String);

impl NacaCode {
    pub fn parse(code: &str) -> Result<Self> {
        if !code_pattern().is_match(code) {
            return Err(AirfoilError::InvalidCode {
                code: code.to_string(),
            });
        }
        Ok(Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn parameters(&self) -> NacaParameters {
        let digits: Vec<u32> = self.0.chars().filter_map(|c| c.to_digit(10)).collect();
        NacaParameters {
            max_camber: f64::from(digits[0]) / 100.0,
            camber_position: f64::from(digits[1]) / 10.0,
            thickness: f64::from(digits[2] * 10 + digits[3]) / 100.0,
        }
    }
}

/// Chord fractions decoded from the code: `m`, `p`, `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NacaParameters {
    pub max_camber: f64,
    pub camber_position: f64,
    pub thickness: f64,
}

impl NacaParameters {
    /// Half thickness `yt(x)`.
    pub fn half_thickness(&self, x: f64) -> f64 {
        let [a0, a1, a2, a3, a4] = THICKNESS_COEFFICIENTS;
        (self.thickness / 0.2) * (a0 * x.sqrt() + a1 * x + a2 * x.powi(2) + a3 * x.powi(3) + a4 * x.powi(4))
    }

    /// Camber line height and slope `(yc, dyc/dx)` at `x`.
    pub fn camber(&self, x: f64) -> (f64, f64) {
        let m = self.max_camber;
        let p = self.camber_position;

        if p == 0.0 {
            return (0.0, 0.0);
        }

        if x < p {
            let yc = (m / p.powi(2)) * (2.0 * p * x - x.powi(2));
            let slope = (2.0 * m / p.powi(2)) * (p - x);
            (yc, slope)
        } else {
            let aft = (1.0 - p).powi(2);
            let yc = (m / aft) * ((1.0 - 2.0 * p) + 2.0 * p * x - x.powi(2));
            let slope = (2.0 * m / aft) * (p - x);
            (yc, slope)
        }
    }

    /// Upper and lower surface points at chord station `x`.
    pub fn surface_points(&self, x: f64) -> (Point, Point) {
        let yt = self.half_thickness(x);
        let (yc, slope) = self.camber(x);
        let theta = slope.atan();
        let (sin, cos) = theta.sin_cos();

        let upper = Point::new(x - yt * sin, yc + yt * cos);
        let lower = Point::new(x + yt * sin, yc - yt * cos);
        (upper, lower)
    }

    pub fn annotation(&self) -> String {
        format!(
            "M={:.1}% P={:.1}% T={:.1}%",
            self.max_camber * 100.0,
            self.camber_position * 100.0,
            self.thickness * 100.0
        )
    }
}

/// Chord stations `x_i = (1 - cos(i·π/(n-1))) / 2`, from 0 to 1.
pub fn cosine_stations(point_count: usize) -> Vec<f64> {
    let last = (point_count.max(2) - 1) as f64;
    (0..point_count)
        .map(|i| {
            let beta = i as f64 * PI / last;
            (1.0 - beta.cos()) / 2.0
        })
        .collect()
}

/// Generates the closed outline of a NACA 4-digit airfoil.
///
/// The table runs along the lower surface from the trailing edge to the
/// leading edge, then back along the upper surface to the trailing edge.
/// The leading edge point is shared, the trailing edge appears at both
/// ends, giving `2 * point_count - 1` rows.
pub fn generate(code: &str, point_count: usize) -> Result<(CoordinateTable, AirfoilName)> {
    let code = NacaCode::parse(code)?;
    if point_count < 2 {
        return Err(AirfoilError::InvalidPointCount { count: point_count });
    }

    let params = code.parameters();
    let (upper, lower): (Vec<Point>, Vec<Point>) = cosine_stations(point_count)
        .into_iter()
        .map(|x| params.surface_points(x))
        .unzip();

    let mut table = CoordinateTable::with_capacity(2 * point_count - 1);
    for point in lower.iter().rev() {
        table.push(*point);
    }
    for point in upper.iter().skip(1) {
        table.push(*point);
    }

    let name = AirfoilName::new(format!("NACA {} Airfoil", code.as_str()))
        .with_annotation(params.annotation());

    Ok((table, name))
}
