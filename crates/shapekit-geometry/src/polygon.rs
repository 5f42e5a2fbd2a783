//! Planar polygons: point containment and interior grid sampling.

use crate::bounds::Bounds2;
use serde::{Deserialize, Serialize};
use shapekit_core::{GeometryError, Point};

/// Even-odd ray casting test.
///
/// Casts a ray towards +x and counts edge crossings. Points exactly on an
/// edge may land on either side. An empty vertex list contains nothing.
pub fn is_point_in_polygon(point: Point, vertices: &[Point]) -> bool {
    let Point { x, y } = point;
    let mut inside = false;
    let mut j = match vertices.len() {
        0 => return false,
        n => n - 1,
    };

    for (i, vi) in vertices.iter().enumerate() {
        let vj = vertices[j];
        if ((vi.y > y) != (vj.y > y)) && (x < (vj.x - vi.x) * (y - vi.y) / (vj.y - vi.y) + vi.x) {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Sampling density for [`Polygon::grid`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridOptions {
    /// Steps along x
    pub rows: u32,
    /// Steps along y
    pub cols: u32,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self { rows: 20, cols: 10 }
    }
}

/// A closed polygon given by its vertices, implicitly closed from the last
/// vertex back to the first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// Build from `[x, y]` pairs, such as a GeoJSON ring.
    pub fn from_coords(coords: &[[f64; 2]]) -> Self {
        Self::new(coords.iter().copied().map(Point::from).collect())
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, point: Point) -> bool {
        is_point_in_polygon(point, &self.vertices)
    }

    pub fn bounds(&self) -> Option<Bounds2> {
        Bounds2::from_points(&self.vertices)
    }

    /// Sample a regular grid over the bounding box and keep the samples
    /// that fall inside the polygon.
    ///
    /// The grid has `rows + 1` columns of x values and `cols + 1` y values
    /// per column, both including the box edges. Samples are returned in
    /// x-major order.
    pub fn grid(&self, options: &GridOptions) -> Result<Vec<Point>, GeometryError> {
        if options.rows == 0 || options.cols == 0 {
            return Err(GeometryError::InvalidGrid {
                reason: format!(
                    "rows and cols must be positive (rows={}, cols={})",
                    options.rows, options.cols
                ),
            });
        }

        let Some(bounds) = self.bounds() else {
            return Ok(Vec::new());
        };

        let row_step = (bounds.max.x - bounds.min.x) / options.rows as f64;
        let col_step = (bounds.max.y - bounds.min.y) / options.cols as f64;

        let mut samples = Vec::new();
        for row in 0..=options.rows {
            let x = bounds.min.x + row as f64 * row_step;
            for col in 0..=options.cols {
                let sample = Point::new(x, bounds.min.y + col as f64 * col_step);
                if self.contains(sample) {
                    samples.push(sample);
                }
            }
        }

        tracing::debug!(
            "Sampled {} grid points inside a {}-vertex polygon ({}x{})",
            samples.len(),
            self.len(),
            options.rows,
            options.cols
        );
        Ok(samples)
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(vertices: Vec<Point>) -> Self {
        Self::new(vertices)
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
