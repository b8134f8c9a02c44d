use crate::foundation::core::{BezPath, Point, WavePoint};
use crate::wave::params::{Position, Shape};

/// Canvas frame a silhouette is closed against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathFrame {
    /// Canvas width; the region closes at `x = width`.
    pub width: f64,
    /// Canvas height; the bottom anchor edge.
    pub height: f64,
    /// Anchor edge.
    pub position: Position,
}

impl PathFrame {
    /// Frame for a `width` x `height` canvas anchored at `position`.
    pub fn new(width: f64, height: f64, position: Position) -> Self {
        Self {
            width,
            height,
            position,
        }
    }

    fn edge_y(self) -> f64 {
        match self.position {
            Position::Top => 0.0,
            Position::Bottom => self.height,
        }
    }
}

/// Close `points` into a filled region spanning from the anchor edge to the silhouette.
///
/// [`Shape::Smooth`] threads a quadratic through each pair midpoint with the earlier sample as
/// control point; [`Shape::Peaks`] keeps straight segments so zigzag corners stay sharp.
pub fn build_bez_path(points: &[WavePoint], frame: PathFrame, shape: Shape) -> BezPath {
    let edge = frame.edge_y();
    let mut path = BezPath::new();
    path.move_to(Point::new(0.0, edge));

    let Some((&first, rest)) = points.split_first() else {
        path.line_to(Point::new(frame.width, edge));
        path.close_path();
        return path;
    };

    path.line_to(first);
    match shape {
        Shape::Smooth => {
            for pair in points.windows(2) {
                path.quad_to(pair[0], pair[0].midpoint(pair[1]));
            }
            if let Some(&last) = rest.last() {
                path.line_to(last);
            }
        }
        Shape::Peaks => {
            for &p in rest {
                path.line_to(p);
            }
        }
    }

    path.line_to(Point::new(frame.width, edge));
    path.close_path();
    path
}

/// SVG path data (`d` attribute) for [`build_bez_path`].
pub fn build_path(points: &[WavePoint], frame: PathFrame, shape: Shape) -> String {
    build_bez_path(points, frame, shape).to_svg()
}

#[cfg(test)]
#[path = "../../tests/unit/wave/path.rs"]
mod tests;
