//! Regular convex polygon with a fixed circumradius.
//!
//! Closed forms for side count `n` and circumradius `R`:
//! - side length `s = 2R sin(π/n)`, apothem `a = R cos(π/n)`
//! - area `n·s·a/2`, perimeter `n·s`, interior angle `(n-2)·180/n` degrees

use std::cmp::Ordering;
use std::f64::consts::PI;
use std::fmt;

use nalgebra::Vector2;

use crate::error::SequenceError;

/// Pure value type built from `(sides, circumradius)`.
///
/// Invariants: `sides >= 3`, `circumradius` finite and `> 0`.
#[derive(Clone, Copy, Debug)]
pub struct ConvexPolygon {
    sides: u32,
    circumradius: f64,
}

impl ConvexPolygon {
    pub fn new(sides: u32, circumradius: f64) -> Result<Self, SequenceError> {
        if sides < 3 {
            return Err(SequenceError::invalid_value(format!(
                "a polygon needs at least 3 sides (sides={sides})"
            )));
        }
        check_circumradius(circumradius)?;
        Ok(Self {
            sides,
            circumradius,
        })
    }

    /// Caller has already validated both arguments.
    #[inline]
    pub(crate) fn unchecked(sides: u32, circumradius: f64) -> Self {
        debug_assert!(sides >= 3 && circumradius.is_finite() && circumradius > 0.0);
        Self {
            sides,
            circumradius,
        }
    }

    #[inline]
    pub fn sides(&self) -> u32 {
        self.sides
    }
    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.sides
    }
    #[inline]
    pub fn edge_count(&self) -> u32 {
        self.sides
    }
    #[inline]
    pub fn circumradius(&self) -> f64 {
        self.circumradius
    }

    /// Interior angle in degrees.
    #[inline]
    pub fn interior_angle(&self) -> f64 {
        let n = self.sides as f64;
        (n - 2.0) * 180.0 / n
    }

    #[inline]
    pub fn side_length(&self) -> f64 {
        2.0 * self.circumradius * (PI / self.sides as f64).sin()
    }

    #[inline]
    pub fn apothem(&self) -> f64 {
        self.circumradius * (PI / self.sides as f64).cos()
    }

    #[inline]
    pub fn area(&self) -> f64 {
        0.5 * self.sides as f64 * self.side_length() * self.apothem()
    }

    #[inline]
    pub fn perimeter(&self) -> f64 {
        self.sides as f64 * self.side_length()
    }

    /// Area per unit boundary (`area / perimeter`, equal to the apothem / 2).
    #[inline]
    pub fn efficiency(&self) -> f64 {
        self.area() / self.perimeter()
    }

    /// Vertices counterclockwise at angles `2πk/n`, centered on the origin.
    pub fn vertices(&self) -> Vec<Vector2<f64>> {
        let step = 2.0 * PI / self.sides as f64;
        (0..self.sides)
            .map(|k| {
                let theta = step * k as f64;
                Vector2::new(self.circumradius * theta.cos(), self.circumradius * theta.sin())
            })
            .collect()
    }
}

pub(crate) fn check_circumradius(circumradius: f64) -> Result<(), SequenceError> {
    if !circumradius.is_finite() || circumradius <= 0.0 {
        return Err(SequenceError::invalid_value(format!(
            "circumradius must be finite and positive (circumradius={circumradius})"
        )));
    }
    Ok(())
}

impl PartialEq for ConvexPolygon {
    fn eq(&self, other: &Self) -> bool {
        self.sides == other.sides && self.circumradius == other.circumradius
    }
}

impl PartialOrd for ConvexPolygon {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.sides.cmp(&other.sides) {
            Ordering::Equal => self.circumradius.partial_cmp(&other.circumradius),
            o => Some(o),
        }
    }
}

impl fmt::Display for ConvexPolygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ConvexPolygon(sides={}, circumradius={})",
            self.sides, self.circumradius
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn triangle_and_square_closed_forms() {
        let tri = ConvexPolygon::new(3, 4.0).unwrap();
        let s = 2.0 * 4.0 * (PI / 3.0).sin();
        assert!((tri.side_length() - s).abs() < 1e-12);
        assert!((tri.perimeter() - 20.784609690826528).abs() < 1e-9);
        assert!((tri.interior_angle() - 60.0).abs() < 1e-12);

        // Unit-circumradius square has side √2 and area 2.
        let sq = ConvexPolygon::new(4, 1.0).unwrap();
        assert!((sq.side_length() - 2f64.sqrt()).abs() < 1e-12);
        assert!((sq.area() - 2.0).abs() < 1e-12);
        assert!((sq.interior_angle() - 90.0).abs() < 1e-12);
        assert!((sq.efficiency() - sq.apothem() / 2.0).abs() < 1e-12);
    }

    #[test]
    fn vertices_lie_on_circumcircle_and_match_side_length() {
        let p = ConvexPolygon::new(7, 2.5).unwrap();
        let v = p.vertices();
        assert_eq!(v.len(), 7);
        for w in &v {
            assert!((w.norm() - 2.5).abs() < 1e-12);
        }
        assert!(((v[1] - v[0]).norm() - p.side_length()).abs() < 1e-12);
    }

    #[test]
    fn rejects_degenerate_inputs() {
        assert_eq!(ConvexPolygon::new(2, 1.0).unwrap_err().kind(), ErrorKind::Value);
        assert_eq!(ConvexPolygon::new(5, 0.0).unwrap_err().kind(), ErrorKind::Value);
        assert_eq!(
            ConvexPolygon::new(5, f64::INFINITY).unwrap_err().kind(),
            ErrorKind::Value
        );
    }

    #[test]
    fn equality_and_ordering_follow_sides_then_radius() {
        let a = ConvexPolygon::new(5, 1.0).unwrap();
        let b = ConvexPolygon::new(5, 1.0).unwrap();
        let c = ConvexPolygon::new(6, 0.5).unwrap();
        let d = ConvexPolygon::new(5, 2.0).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, d);
        assert!(a < c);
        assert!(a < d);
        assert_eq!(a.to_string(), "ConvexPolygon(sides=5, circumradius=1)");
    }
}
