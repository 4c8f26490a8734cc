//! Geometry kernel: stateless cubic-Bézier and line math.
//!
//! Curve evaluation and de Casteljau splitting are delegated to
//! `lyon::geom::CubicBezierSegment<f64>`; everything here works in world
//! coordinates with `f64` precision.

use curvekit_core::constants::{COLLINEAR_TOLERANCE, NEAREST_SAMPLES};
use curvekit_core::Point;
use lyon::geom::{point, CubicBezierSegment};

/// A cubic Bézier described by its four control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cubic {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl Cubic {
    pub fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        Self { p0, p1, p2, p3 }
    }

    fn to_lyon(self) -> CubicBezierSegment<f64> {
        CubicBezierSegment {
            from: point(self.p0.x, self.p0.y),
            ctrl1: point(self.p1.x, self.p1.y),
            ctrl2: point(self.p2.x, self.p2.y),
            to: point(self.p3.x, self.p3.y),
        }
    }

    fn from_lyon(segment: &CubicBezierSegment<f64>) -> Self {
        let p = |q: lyon::geom::Point<f64>| Point::new(q.x, q.y);
        Self::new(p(segment.from), p(segment.ctrl1), p(segment.ctrl2), p(segment.to))
    }

    /// Point on the curve at parameter `t`.
    pub fn eval(&self, t: f64) -> Point {
        evaluate_cubic(t, self.p0, self.p1, self.p2, self.p3)
    }

    /// De Casteljau split into the two halves `[0, t]` and `[t, 1]`.
    pub fn split(&self, t: f64) -> (Cubic, Cubic) {
        let (left, right) = self.to_lyon().split(t);
        (Cubic::from_lyon(&left), Cubic::from_lyon(&right))
    }
}

/// Result of the sampled nearest-point search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestPoint {
    pub distance: f64,
    pub t: f64,
}

/// New control data after splitting a segment at one parameter.
///
/// `start_ctrl2` replaces the outgoing handle of the segment's start node and
/// `end_ctrl1` the incoming handle of its end node; `anchor`, `ctrl1` and
/// `ctrl2` describe the node inserted at the split point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Subdivision {
    pub start_ctrl2: Point,
    pub end_ctrl1: Point,
    pub anchor: Point,
    pub ctrl1: Point,
    pub ctrl2: Point,
}

/// Evaluates the cubic Bernstein form at `t`. Exact at `t = 0` and `t = 1`.
pub fn evaluate_cubic(t: f64, p0: Point, p1: Point, p2: Point, p3: Point) -> Point {
    if t == 0.0 {
        return p0;
    }
    if t == 1.0 {
        return p3;
    }
    let q = Cubic::new(p0, p1, p2, p3).to_lyon().sample(t);
    Point::new(q.x, q.y)
}

/// Nearest sample to `target` using the default sampling resolution.
pub fn nearest_point_on_cubic(
    target: Point,
    p0: Point,
    p1: Point,
    p2: Point,
    p3: Point,
) -> NearestPoint {
    nearest_point_on_cubic_sampled(target, Cubic::new(p0, p1, p2, p3), NEAREST_SAMPLES)
}

/// Samples `samples + 1` evenly spaced parameters and keeps the closest one.
///
/// This is an approximation used for threshold-based hit-testing; the
/// returned `t` is always one of the sampled parameters.
pub fn nearest_point_on_cubic_sampled(target: Point, curve: Cubic, samples: usize) -> NearestPoint {
    let samples = samples.max(1);
    let mut best = NearestPoint {
        distance: f64::INFINITY,
        t: 0.0,
    };

    for i in 0..=samples {
        let t = i as f64 / samples as f64;
        let distance = curve.eval(t).distance_to(&target);
        if distance < best.distance {
            best = NearestPoint { distance, t };
        }
    }

    best
}

/// De Casteljau subdivision at `t`; callers pass `t` in `[0, 1]`.
pub fn subdivide_cubic(t: f64, p0: Point, p1: Point, p2: Point, p3: Point) -> Subdivision {
    let (left, right) = Cubic::new(p0, p1, p2, p3).split(t);
    Subdivision {
        start_ctrl2: left.p1,
        end_ctrl1: right.p2,
        anchor: left.p3,
        ctrl1: left.p2,
        ctrl2: right.p1,
    }
}

/// Cross-product straightness test. `tolerance` is an absolute bound on the
/// cross-product magnitude, not a distance.
pub fn is_collinear(a: Point, b: Point, c: Point, tolerance: f64) -> bool {
    (b - a).cross(&(c - a)).abs() <= tolerance
}

/// `is_collinear` with the default tolerance.
pub fn is_collinear_default(a: Point, b: Point, c: Point) -> bool {
    is_collinear(a, b, c, COLLINEAR_TOLERANCE)
}

/// Reflects `p` across the infinite line through `a` and `b`.
///
/// A degenerate line (`a == b`) returns `p` unchanged.
pub fn reflect_across_line(p: Point, a: Point, b: Point) -> Point {
    let la = b.y - a.y;
    let lb = a.x - b.x;
    let lc = b.x * a.y - b.y * a.x;

    let denom = la * la + lb * lb;
    if denom == 0.0 {
        return p;
    }

    let d = (la * p.x + lb * p.y + lc) / denom;
    Point::new(p.x - 2.0 * la * d, p.y - 2.0 * lb * d)
}
