//! Endpoint-to-center conversion for elliptical arcs.
//!
//! Follows the conversion from the SVG implementation notes (F.6.5/F.6.6):
//! the half-delta between the endpoints is rotated into the ellipse frame,
//! undersized radii are scaled up, and the center and angles are solved in
//! that frame.

use shapekit_core::Point;
use std::f64::consts::TAU;

/// An arc expressed by center and angles
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CenterArc {
    pub center: Point,
    pub rx: f64,
    pub ry: f64,
    /// Angle of the start point in the local (unrotated) frame
    pub start_angle: f64,
    /// Signed angular span; negative when the sweep flag is unset
    pub delta_angle: f64,
}

/// Signed angle from `u` to `v`
fn angle_between(u: (f64, f64), v: (f64, f64)) -> f64 {
    let dot = u.0 * v.0 + u.1 * v.1;
    let cross = u.0 * v.1 - u.1 * v.0;
    cross.atan2(dot)
}

/// Convert an endpoint-parameterized arc to center form.
///
/// `x_axis_rotation` is in radians. Returns `None` when the endpoints
/// coincide or a radius is zero; callers handle those before drawing.
pub(crate) fn endpoint_to_center(
    from: Point,
    to: Point,
    rx: f64,
    ry: f64,
    x_axis_rotation: f64,
    large_arc: bool,
    sweep: bool,
) -> Option<CenterArc> {
    let mut rx = rx.abs();
    let mut ry = ry.abs();
    if rx == 0.0 || ry == 0.0 || from == to {
        return None;
    }

    let (sin_phi, cos_phi) = x_axis_rotation.sin_cos();

    // Step 1: (x1', y1')
    let dx2 = (from.x - to.x) / 2.0;
    let dy2 = (from.y - to.y) / 2.0;
    let x1p = cos_phi * dx2 + sin_phi * dy2;
    let y1p = -sin_phi * dx2 + cos_phi * dy2;

    // Radii too small to span the endpoints are scaled up uniformly.
    let lambda = (x1p * x1p) / (rx * rx) + (y1p * y1p) / (ry * ry);
    if lambda > 1.0 {
        let scale = lambda.sqrt();
        rx *= scale;
        ry *= scale;
    }

    // Step 2: (cx', cy')
    let rx2 = rx * rx;
    let ry2 = ry * ry;
    let x1p2 = x1p * x1p;
    let y1p2 = y1p * y1p;
    let denom = rx2 * y1p2 + ry2 * x1p2;
    if denom == 0.0 {
        return None;
    }
    let numer = (rx2 * ry2 - rx2 * y1p2 - ry2 * x1p2).max(0.0);
    let sign = if large_arc == sweep { -1.0 } else { 1.0 };
    let coef = sign * (numer / denom).sqrt();
    let cxp = coef * (rx * y1p / ry);
    let cyp = coef * (-ry * x1p / rx);

    // Step 3: (cx, cy)
    let cx = cos_phi * cxp - sin_phi * cyp + (from.x + to.x) / 2.0;
    let cy = sin_phi * cxp + cos_phi * cyp + (from.y + to.y) / 2.0;

    // Step 4: angles
    let u = ((x1p - cxp) / rx, (y1p - cyp) / ry);
    let v = ((-x1p - cxp) / rx, (-y1p - cyp) / ry);
    let start_angle = angle_between((1.0, 0.0), u);
    let mut delta_angle = angle_between(u, v);
    if !sweep && delta_angle > 0.0 {
        delta_angle -= TAU;
    } else if sweep && delta_angle < 0.0 {
        delta_angle += TAU;
    }

    Some(CenterArc {
        center: Point::new(cx, cy),
        rx,
        ry,
        start_angle,
        delta_angle,
    })
}
