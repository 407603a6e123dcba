//! Projective geometric algebra motors and points.
//!
//! A [`Motor`] is an even-grade element of the 3D projective geometric algebra
//! (basis `e0, e1, e2, e3` with `e0² = 0`). It encodes a rigid transform,
//! rotation plus translation, as a single value, much like a dual quaternion.
//! A [`Point`] is a homogeneous trivector; Euclidean coordinates are recovered
//! by dividing by its `e123` weight.
//!
//! Motors are expected to be unit-normalized. Nothing here checks that; a
//! non-normalized motor simply produces a non-isometric result.

use glam::Vec3A;

/// Rigid 3D transform as an 8-component PGA motor.
///
/// Layout: scalar, rotation bivector (`e12, e13, e23`), translation bivector
/// (`e01, e02, e03`), pseudoscalar (`e0123`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motor {
    /// Scalar part
    pub s: f32,
    /// Rotation bivector, xy plane
    pub e12: f32,
    /// Rotation bivector, xz plane
    pub e13: f32,
    /// Rotation bivector, yz plane
    pub e23: f32,
    /// Translation bivector, x
    pub e01: f32,
    /// Translation bivector, y
    pub e02: f32,
    /// Translation bivector, z
    pub e03: f32,
    /// Pseudoscalar part
    pub e0123: f32,
}

impl Default for Motor {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Motor {
    /// The motor that leaves every point where it is.
    pub const IDENTITY: Self = Self {
        s: 1.0,
        e12: 0.0,
        e13: 0.0,
        e23: 0.0,
        e01: 0.0,
        e02: 0.0,
        e03: 0.0,
        e0123: 0.0,
    };

    /// Build a motor from `[s, e12, e13, e23, e01, e02, e03, e0123]`.
    pub fn from_array([s, e12, e13, e23, e01, e02, e03, e0123]: [f32; 8]) -> Self {
        Self {
            s,
            e12,
            e13,
            e23,
            e01,
            e02,
            e03,
            e0123,
        }
    }

    /// Components in `[s, e12, e13, e23, e01, e02, e03, e0123]` order.
    pub fn to_array(self) -> [f32; 8] {
        [
            self.s, self.e12, self.e13, self.e23, self.e01, self.e02, self.e03, self.e0123,
        ]
    }

    /// Pure translation by `offset`.
    pub fn translation(offset: Vec3A) -> Self {
        Self {
            e01: offset.x * -0.5,
            e02: offset.y * -0.5,
            e03: offset.z * -0.5,
            ..Self::IDENTITY
        }
    }

    /// Rotation by `angle` radians in the xy plane (x towards y).
    pub fn rotation_xy(angle: f32) -> Self {
        let (sin, cos) = (angle * 0.5).sin_cos();
        Self {
            s: cos,
            e12: sin,
            ..Self::IDENTITY
        }
    }

    /// Rotation by `angle` radians in the xz plane (x towards z).
    pub fn rotation_xz(angle: f32) -> Self {
        let (sin, cos) = (angle * 0.5).sin_cos();
        Self {
            s: cos,
            e13: sin,
            ..Self::IDENTITY
        }
    }

    /// Rotation by `angle` radians in the yz plane (y towards z).
    pub fn rotation_yz(angle: f32) -> Self {
        let (sin, cos) = (angle * 0.5).sin_cos();
        Self {
            s: cos,
            e23: sin,
            ..Self::IDENTITY
        }
    }

    /// Geometric product `self * other`.
    ///
    /// Transforming a point by the product is the same as transforming it by
    /// `self` first and `other` second.
    pub fn apply(self, other: Self) -> Self {
        let a = self.s;
        let b = self.e12;
        let c = self.e13;
        let d = self.e23;
        let e = self.e01;
        let f = self.e02;
        let g = self.e03;
        let h = self.e0123;
        let i = other.s;
        let j = other.e12;
        let k = other.e13;
        let l = other.e23;
        let m = other.e01;
        let n = other.e02;
        let o = other.e03;
        let p = other.e0123;

        Self {
            s: -b * j - c * k - d * l + a * i,
            e12: -c * l + a * j + b * i + d * k,
            e13: -d * j + a * k + b * l + c * i,
            e23: -b * k + a * l + c * j + d * i,
            e01: -d * p - f * j - g * k - h * l + a * m + b * n + c * o + e * i,
            e02: -b * m - g * l + a * n + c * p + d * o + e * j + f * i + h * k,
            e03: -b * p - c * m - d * n - h * j + a * o + e * k + f * l + g * i,
            e0123: -c * n - f * k + a * p + b * o + d * m + e * l + g * j + h * i,
        }
    }

    /// Geometric product `other * self`.
    pub fn pre_apply(self, other: Self) -> Self {
        other.apply(self)
    }

    /// Compose: transform by `self`, then by `next`.
    pub fn then(self, next: Self) -> Self {
        self.apply(next)
    }

    /// Algebraic reverse, which is the inverse of a unit motor.
    pub fn inverse(self) -> Self {
        Self {
            s: self.s,
            e12: -self.e12,
            e13: -self.e13,
            e23: -self.e23,
            e01: -self.e01,
            e02: -self.e02,
            e03: -self.e03,
            e0123: self.e0123,
        }
    }

    /// Drop translation and pseudoscalar, keeping a rotation about the origin.
    ///
    /// Used to reorient directions, which carry no position.
    pub fn rotation_only(self) -> Self {
        Self {
            s: self.s,
            e12: self.e12,
            e13: self.e13,
            e23: self.e23,
            e01: 0.0,
            e02: 0.0,
            e03: 0.0,
            e0123: 0.0,
        }
    }

    /// Norm of the rotor (non-null) part.
    pub fn rotor_norm(self) -> f32 {
        (self.s * self.s + self.e12 * self.e12 + self.e13 * self.e13 + self.e23 * self.e23).sqrt()
    }

    /// Scale every component by the inverse rotor norm.
    ///
    /// This fixes the magnitude of hand-authored motors. It does not repair the
    /// `s·e0123 = e12·e03 - e13·e02 + e23·e01` constraint.
    pub fn normalized(self) -> Self {
        let inv = 1.0 / self.rotor_norm();
        Self::from_array(self.to_array().map(|component| component * inv))
    }

    /// Move a Euclidean point through this motor.
    pub fn transform_point(self, v: Vec3A) -> Vec3A {
        project_point(embed_point(v).transform(self))
    }

    /// Rotate a direction by the rotational part of this motor.
    pub fn transform_direction(self, v: Vec3A) -> Vec3A {
        project_point(embed_point(v).transform(self.rotation_only()))
    }
}

/// Homogeneous PGA point (a grade-3 element).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// z, scaled by weight
    pub e012: f32,
    /// -y, scaled by weight
    pub e013: f32,
    /// x, scaled by weight
    pub e023: f32,
    /// Weight
    pub e123: f32,
}

impl Point {
    /// The coordinate origin.
    pub const ORIGIN: Self = Self {
        e012: 0.0,
        e013: 0.0,
        e023: 0.0,
        e123: 1.0,
    };

    /// Sandwich product: the motor's reverse on the left, the motor on the right.
    ///
    /// Every term below is load-bearing. Do not simplify.
    pub fn transform(self, motor: Motor) -> Self {
        let a = motor.s;
        let b = motor.e12;
        let c = motor.e13;
        let d = motor.e23;
        let e = motor.e01;
        let f = motor.e02;
        let g = motor.e03;
        let h = motor.e0123;
        let i = self.e012;
        let j = self.e013;
        let k = self.e023;
        let l = self.e123;

        Self {
            e012: -2.0 * a * d * j
                + -2.0 * a * g * l
                + a * a * i
                + 2.0 * a * c * k
                + -d * d * i
                + -2.0 * d * f * l
                + 2.0 * b * d * k
                + -2.0 * b * h * l
                + -2.0 * c * e * l
                + b * b * i
                + 2.0 * b * c * j
                + -c * c * i,
            e013: -2.0 * a * b * k
                + -b * b * j
                + 2.0 * b * c * i
                + 2.0 * b * e * l
                + a * a * j
                + 2.0 * a * d * i
                + 2.0 * a * f * l
                + -2.0 * c * h * l
                + -2.0 * d * g * l
                + -d * d * j
                + 2.0 * c * d * k
                + c * c * j,
            e023: -2.0 * a * c * i
                + -2.0 * a * e * l
                + a * a * k
                + 2.0 * a * b * j
                + -c * c * k
                + 2.0 * c * d * j
                + 2.0 * c * g * l
                + -2.0 * d * h * l
                + 2.0 * b * f * l
                + -b * b * k
                + 2.0 * b * d * i
                + d * d * k,
            e123: a * a * l + b * b * l + c * c * l + d * d * l,
        }
    }
}

/// Lift a Euclidean vector to a PGA point with unit weight.
pub fn embed_point(v: Vec3A) -> Point {
    Point {
        e012: v.z,
        e013: -v.y,
        e023: v.x,
        e123: 1.0,
    }
}

/// Recover Euclidean coordinates by dividing through by the weight.
///
/// A zero weight (an ideal point) yields non-finite components.
pub fn project_point(p: Point) -> Vec3A {
    Vec3A::new(p.e023 / p.e123, -p.e013 / p.e123, p.e012 / p.e123)
}

impl From<Vec3A> for Point {
    fn from(value: Vec3A) -> Self {
        embed_point(value)
    }
}

impl From<Point> for Vec3A {
    fn from(value: Point) -> Self {
        project_point(value)
    }
}
