//! Points and affine transforms
//!
//! Geometry is authored in document space and mapped into device space by a
//! 3x3 homogeneous matrix. During traversal the current transform is an
//! immutable value passed down the recursion, so a child's transform can
//! never leak to its siblings.

use std::ops::{Add, Mul, Sub};

/// An ordered (x, y) pair with no inherent unit
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub fn new(x: f64, y: f64) -> Self {
        Vector2D { x, y }
    }
}

impl Add for Vector2D {
    type Output = Vector2D;
    fn add(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;
    fn sub(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Vector2D;
    fn mul(self, s: f64) -> Vector2D {
        Vector2D::new(self.x * s, self.y * s)
    }
}

/// Row-major 3x3 homogeneous transform matrix
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform2D {
    pub m: [[f64; 3]; 3],
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    pub fn identity() -> Self {
        Transform2D {
            m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }
    pub fn translation(dx: f64, dy: f64) -> Self {
        Transform2D {
            m: [[1.0, 0.0, dx], [0.0, 1.0, dy], [0.0, 0.0, 1.0]],
        }
    }
    pub fn scaling(sx: f64, sy: f64) -> Self {
        Transform2D {
            m: [[sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, 1.0]],
        }
    }
    pub fn rotation(angle: f64) -> Self {
        let (sa, ca) = angle.sin_cos();
        Transform2D {
            m: [[ca, -sa, 0.0], [sa, ca, 0.0], [0.0, 0.0, 1.0]],
        }
    }
    /// Map a point through the matrix, dividing out the homogeneous weight
    pub fn transform(&self, p: Vector2D) -> Vector2D {
        let m = &self.m;
        let x = m[0][0] * p.x + m[0][1] * p.y + m[0][2];
        let y = m[1][0] * p.x + m[1][1] * p.y + m[1][2];
        let w = m[2][0] * p.x + m[2][1] * p.y + m[2][2];
        Vector2D::new(x / w, y / w)
    }
}

impl Mul for Transform2D {
    type Output = Transform2D;
    /// Composition: `(a * b).transform(p) == a.transform(b.transform(p))`
    fn mul(self, rhs: Transform2D) -> Transform2D {
        let mut m = [[0.0; 3]; 3];
        for (i, row) in m.iter_mut().enumerate() {
            for (j, v) in row.iter_mut().enumerate() {
                *v = (0..3).map(|k| self.m[i][k] * rhs.m[k][j]).sum();
            }
        }
        Transform2D { m }
    }
}
