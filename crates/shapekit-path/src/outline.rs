//! Interpreted shape outlines and their conversion to `lyon` paths.

use lyon::geom::Arc;
use lyon::math::point;
use lyon::path::iterator::*;
use lyon::path::Path;
use serde::{Deserialize, Serialize};
use shapekit_core::Point;

/// Gap below which the pen is considered to already sit on an arc's start
const ARC_JOIN_EPSILON: f32 = 1e-4;

/// Smallest flattening tolerance; finer values are raised to it
pub const MIN_FLATTEN_TOLERANCE: f64 = 1e-4;

/// One drawing operation of an outline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    /// Start a new subpath at `(x, y)`
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    CubicBezierTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    QuadraticBezierTo { x1: f64, y1: f64, x: f64, y: f64 },
    /// Circular arc around `(cx, cy)`, angles in radians
    ///
    /// `counterclockwise` is true when the angle increases from
    /// `start_angle` to `end_angle`.
    ArcTo {
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        counterclockwise: bool,
    },
}

impl DrawOp {
    /// Where the pen rests after this operation
    pub fn end_point(&self) -> Point {
        match *self {
            DrawOp::MoveTo { x, y }
            | DrawOp::LineTo { x, y }
            | DrawOp::CubicBezierTo { x, y, .. }
            | DrawOp::QuadraticBezierTo { x, y, .. } => Point::new(x, y),
            DrawOp::ArcTo {
                cx,
                cy,
                radius,
                end_angle,
                ..
            } => Point::new(cx + radius * end_angle.cos(), cy + radius * end_angle.sin()),
        }
    }

    pub fn is_move(&self) -> bool {
        matches!(self, DrawOp::MoveTo { .. })
    }
}

/// Ordered drawing operations produced by the path interpreter
///
/// A non-empty outline always starts with [`DrawOp::MoveTo`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<DrawOp>", into = "Vec<DrawOp>")]
pub struct ShapeOutline {
    ops: Vec<DrawOp>,
}

impl ShapeOutline {
    pub(crate) fn new(ops: Vec<DrawOp>) -> Self {
        Self { ops }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawOp> {
        self.ops.iter()
    }

    /// Number of subpaths (one per `MoveTo`)
    pub fn subpaths(&self) -> usize {
        self.ops.iter().filter(|op| op.is_move()).count()
    }

    /// Build a `lyon` path from the outline.
    ///
    /// Arcs are emitted as cubic segments. A subpath is closed when its last
    /// point lands back on its first. An edge with no subpath open starts one
    /// at the pen.
    pub fn to_path(&self) -> Path {
        let mut builder = Path::builder();
        let mut open = false;
        let mut first = point(0.0, 0.0);
        let mut pen = point(0.0, 0.0);

        for op in &self.ops {
            if !open && !op.is_move() {
                first = pen;
                builder.begin(first);
                open = true;
            }
            match *op {
                DrawOp::MoveTo { x, y } => {
                    if open {
                        builder.end((pen - first).length() <= ARC_JOIN_EPSILON);
                    }
                    first = point(x as f32, y as f32);
                    pen = first;
                    builder.begin(first);
                    open = true;
                }
                DrawOp::LineTo { x, y } => {
                    pen = point(x as f32, y as f32);
                    builder.line_to(pen);
                }
                DrawOp::CubicBezierTo {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                } => {
                    pen = point(x as f32, y as f32);
                    builder.cubic_bezier_to(
                        point(x1 as f32, y1 as f32),
                        point(x2 as f32, y2 as f32),
                        pen,
                    );
                }
                DrawOp::QuadraticBezierTo { x1, y1, x, y } => {
                    pen = point(x as f32, y as f32);
                    builder.quadratic_bezier_to(point(x1 as f32, y1 as f32), pen);
                }
                DrawOp::ArcTo {
                    cx,
                    cy,
                    radius,
                    start_angle,
                    end_angle,
                    ..
                } => {
                    let center = point(cx as f32, cy as f32);
                    let radius = radius as f32;
                    let start = center
                        + lyon::math::vector(
                            radius * (start_angle as f32).cos(),
                            radius * (start_angle as f32).sin(),
                        );
                    if (start - pen).length() > ARC_JOIN_EPSILON {
                        builder.line_to(start);
                    }

                    let arc_geom = Arc {
                        center,
                        radii: lyon::math::vector(radius, radius),
                        x_rotation: lyon::math::Angle::radians(0.0),
                        start_angle: lyon::math::Angle::radians(start_angle as f32),
                        sweep_angle: lyon::math::Angle::radians((end_angle - start_angle) as f32),
                    };
                    arc_geom.for_each_cubic_bezier(&mut |ctrl| {
                        builder.cubic_bezier_to(ctrl.ctrl1, ctrl.ctrl2, ctrl.to);
                    });
                    pen = arc_geom.to();
                }
            }
        }

        if open {
            builder.end((pen - first).length() <= ARC_JOIN_EPSILON);
        }

        builder.build()
    }

    /// Flatten every subpath into a polyline within `tolerance`.
    ///
    /// Tolerances below [`MIN_FLATTEN_TOLERANCE`] (or NaN) are raised to it.
    pub fn flatten(&self, tolerance: f64) -> Vec<Vec<Point>> {
        let clamped = tolerance
            .max(MIN_FLATTEN_TOLERANCE)
            .min(f64::from(f32::MAX));
        if clamped != tolerance {
            tracing::debug!("Flattening tolerance {} clamped to {}", tolerance, clamped);
        }

        let path = self.to_path();
        let mut polylines = Vec::new();
        let mut current: Vec<Point> = Vec::new();

        for event in path.iter().flattened(clamped as f32) {
            match event {
                lyon::path::Event::Begin { at } => {
                    current.clear();
                    current.push(Point::new(at.x as f64, at.y as f64));
                }
                lyon::path::Event::Line { to, .. } => {
                    current.push(Point::new(to.x as f64, to.y as f64));
                }
                lyon::path::Event::End { .. } => {
                    if !current.is_empty() {
                        polylines.push(std::mem::take(&mut current));
                    }
                }
                _ => {}
            }
        }

        polylines
    }
}

impl<'a> IntoIterator for &'a ShapeOutline {
    type Item = &'a DrawOp;
    type IntoIter = std::slice::Iter<'a, DrawOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

impl IntoIterator for ShapeOutline {
    type Item = DrawOp;
    type IntoIter = std::vec::IntoIter<DrawOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl From<Vec<DrawOp>> for ShapeOutline {
    /// Wrap raw operations, prefixing a `MoveTo(0, 0)` when the first
    /// operation does not start a subpath.
    fn from(mut ops: Vec<DrawOp>) -> Self {
        if ops.first().is_some_and(|op| !op.is_move()) {
            ops.insert(0, DrawOp::MoveTo { x: 0.0, y: 0.0 });
        }
        Self { ops }
    }
}

impl From<ShapeOutline> for Vec<DrawOp> {
    fn from(outline: ShapeOutline) -> Self {
        outline.ops
    }
}
