//! Catmull-Rom splines and arched connector curves.
//!
//! The spline passes through every control point. Open splines extrapolate
//! a phantom point before the first and after the last control point by
//! mirroring their neighbours.

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use shapekit_core::GeometryError;

/// Knot parameterization of a Catmull-Rom spline
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CurveType {
    /// Knot spacing by the square root of the chord length
    #[default]
    Centripetal,
    /// Knot spacing by the chord length
    Chordal,
    /// Uniform knots, tangents scaled by `tension`
    CatmullRom { tension: f64 },
}

/// Cubic `c0 + c1 t + c2 t^2 + c3 t^3` on one axis of one segment
#[derive(Debug, Clone, Copy)]
struct Cubic {
    c0: f64,
    c1: f64,
    c2: f64,
    c3: f64,
}

impl Cubic {
    /// Hermite form from end values and end tangents
    fn hermite(x0: f64, x1: f64, t0: f64, t1: f64) -> Self {
        Self {
            c0: x0,
            c1: t0,
            c2: -3.0 * x0 + 3.0 * x1 - 2.0 * t0 - t1,
            c3: 2.0 * x0 - 2.0 * x1 + t0 + t1,
        }
    }

    fn uniform(x0: f64, x1: f64, x2: f64, x3: f64, tension: f64) -> Self {
        Self::hermite(x1, x2, tension * (x2 - x0), tension * (x3 - x1))
    }

    fn nonuniform(x: [f64; 4], dt0: f64, dt1: f64, dt2: f64) -> Self {
        let [x0, x1, x2, x3] = x;
        let t1 = (x1 - x0) / dt0 - (x2 - x0) / (dt0 + dt1) + (x2 - x1) / dt1;
        let t2 = (x2 - x1) / dt1 - (x3 - x1) / (dt1 + dt2) + (x3 - x2) / dt2;
        // Rescale tangents to the [0, 1] parameter range of the segment.
        Self::hermite(x1, x2, t1 * dt1, t2 * dt1)
    }

    fn eval(&self, t: f64) -> f64 {
        let t2 = t * t;
        self.c0 + self.c1 * t + self.c2 * t2 + self.c3 * t2 * t
    }
}

/// An open Catmull-Rom spline through at least two points
#[derive(Debug, Clone, PartialEq)]
pub struct CatmullRom {
    points: Vec<Point3<f64>>,
    curve_type: CurveType,
}

impl CatmullRom {
    pub fn new(points: Vec<Point3<f64>>, curve_type: CurveType) -> Result<Self, GeometryError> {
        if points.len() < 2 {
            return Err(GeometryError::TooFewPoints {
                expected: 2,
                actual: points.len(),
            });
        }
        Ok(Self { points, curve_type })
    }

    pub fn control_points(&self) -> &[Point3<f64>] {
        &self.points
    }

    pub fn curve_type(&self) -> CurveType {
        self.curve_type
    }

    /// Point at parameter `t` in `[0, 1]`, spread evenly over segments.
    pub fn point_at(&self, t: f64) -> Point3<f64> {
        let points = &self.points;
        let l = points.len();

        let p = (l - 1) as f64 * t.clamp(0.0, 1.0);
        let mut segment = p.floor() as usize;
        let mut weight = p - segment as f64;
        if segment >= l - 1 {
            segment = l - 2;
            weight = 1.0;
        }

        let p1 = points[segment];
        let p2 = points[segment + 1];
        let p0 = if segment > 0 {
            points[segment - 1]
        } else {
            p1 + (p1 - p2)
        };
        let p3 = if segment + 2 < l {
            points[segment + 2]
        } else {
            p2 + (p2 - p1)
        };

        let axes: [Cubic; 3] = match self.curve_type {
            CurveType::Centripetal | CurveType::Chordal => {
                let exponent = if self.curve_type == CurveType::Chordal {
                    0.5
                } else {
                    0.25
                };
                let mut dt0 = (p1 - p0).norm_squared().powf(exponent);
                let mut dt1 = (p2 - p1).norm_squared().powf(exponent);
                let mut dt2 = (p3 - p2).norm_squared().powf(exponent);

                // Coincident points would divide by zero.
                if dt1 < 1e-4 {
                    dt1 = 1.0;
                }
                if dt0 < 1e-4 {
                    dt0 = dt1;
                }
                if dt2 < 1e-4 {
                    dt2 = dt1;
                }

                std::array::from_fn(|i| {
                    Cubic::nonuniform([p0[i], p1[i], p2[i], p3[i]], dt0, dt1, dt2)
                })
            }
            CurveType::CatmullRom { tension } => {
                std::array::from_fn(|i| Cubic::uniform(p0[i], p1[i], p2[i], p3[i], tension))
            }
        };

        Point3::from(Vector3::from_fn(|i, _| axes[i].eval(weight)))
    }

    /// `divisions + 1` points at evenly spaced parameters, ends included.
    ///
    /// Zero divisions is treated as one.
    pub fn sample(&self, divisions: usize) -> Vec<Point3<f64>> {
        let divisions = divisions.max(1);
        (0..=divisions)
            .map(|d| self.point_at(d as f64 / divisions as f64))
            .collect()
    }
}

/// Shape of an [`arched_curve`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchOptions {
    /// Lift of the apex above the chord midpoint, along +z
    pub height: f64,
    pub divisions: usize,
    pub curve_type: CurveType,
}

impl Default for ArchOptions {
    fn default() -> Self {
        Self {
            height: 5.0,
            divisions: 50,
            curve_type: CurveType::default(),
        }
    }
}

/// Sample an arch from `start` to `end` whose apex sits `height` above the
/// midpoint.
///
/// Used for fly lines between two locations on a map.
pub fn arched_curve(
    start: Point3<f64>,
    end: Point3<f64>,
    options: &ArchOptions,
) -> Vec<Point3<f64>> {
    let mut apex = nalgebra::center(&start, &end);
    apex.z += options.height;

    // Three points always satisfy the spline's minimum.
    let curve = CatmullRom {
        points: vec![start, apex, end],
        curve_type: options.curve_type,
    };
    let samples = curve.sample(options.divisions);
    tracing::trace!(
        "Sampled arched curve {:?} -> {:?} into {} points",
        start,
        end,
        samples.len()
    );
    samples
}
