use serde::{Deserialize, Serialize};

/// World-space position. X and Y span the horizontal plane used for every
/// orientation test; Z is carried through untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn xy(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Component-wise comparison with an absolute tolerance on all three axes.
    #[inline]
    pub fn equals(&self, other: &Point, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.z - other.z).abs() <= tolerance
    }

    #[inline]
    pub fn distance_2d(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl From<[f64; 2]> for Point {
    fn from(p: [f64; 2]) -> Self {
        Point::xy(p[0], p[1])
    }
}

impl From<[f64; 3]> for Point {
    fn from(p: [f64; 3]) -> Self {
        Point::new(p[0], p[1], p[2])
    }
}

/// Twice the signed area of triangle `a -> b -> c` on the horizontal plane.
///
/// Positive when `c` lies clockwise of the directed ray `a -> b` seen from +Z
/// in a Y-up frame, negative when counter-clockwise, zero when collinear. With
/// portal `left` vertices on the traveller's left, "tightening" the right bound
/// means a result `<= 0` and tightening the left bound a result `>= 0`.
///
/// No epsilon is applied. Nearly collinear inputs can land on either side of
/// zero depending on rounding; an exact zero counts as "not strictly inside",
/// so the funnel accepts such candidates as tightening instead of widening.
#[inline]
pub fn signed_2d_area(a: Point, b: Point, c: Point) -> f64 {
    let abx = b.x - a.x;
    let aby = b.y - a.y;
    let acx = c.x - a.x;
    let acy = c.y - a.y;
    acx * aby - abx * acy
}
