// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Provides a Quaternion type for representing 3D rotations.
//!
//! Quaternions here follow the double-cover convention: `q` and `-q` encode
//! the same rotation, and operations that must pick one member of the pair
//! (lerp, slerp) do so by the sign of the dot product. All operations are
//! total; degenerate inputs produce NaN components, never errors.

use serde::{Deserialize, Serialize};

use super::{Mat4, Vec3};
use std::ops::{Add, Div, Mul, MulAssign, Neg, Sub};

/// Dot-product threshold above which slerp falls back to linear
/// interpolation of the coefficients. Below an angle of ~1.4e-3 rad the
/// `1/sin(omega)` term loses more precision than the straight line gains.
const SLERP_EPSILON: f64 = 1e-6;

/// Represents a quaternion for efficient 3D rotations.
///
/// A quaternion is stored as `(x, y, z, w)`, where `[x, y, z]` is the
/// "vector" part and `w` is the "scalar" part. For representing rotations it
/// should be a "unit quaternion" where `x² + y² + z² + w² = 1`; the type
/// does not enforce this.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize)]
#[repr(C)]
pub struct Quaternion {
    /// The x component of the vector part.
    pub x: f64,
    /// The y component of the vector part.
    pub y: f64,
    /// The z component of the vector part.
    pub z: f64,
    /// The scalar (real) part.
    pub w: f64,
}

/// Names the quaternion component with the largest magnitude in a rotation
/// matrix, keyed on the sign of the trace and the argmax of the diagonal.
/// Extraction derives the named component from a square root and the other
/// three from off-diagonal terms, which keeps that root well away from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DominantComponent {
    W,
    X,
    Y,
    Z,
}

impl DominantComponent {
    fn of(m11: f64, m22: f64, m33: f64) -> Self {
        let trace = m11 + m22 + m33;
        if trace > 0.0 {
            Self::W
        } else if m11 >= m22 && m11 >= m33 {
            Self::X
        } else if m22 > m33 {
            Self::Y
        } else {
            Self::Z
        }
    }
}

impl Quaternion {
    /// The identity quaternion, representing no rotation.
    pub const IDENTITY: Quaternion = Quaternion {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    /// Creates a new quaternion from its raw components.
    ///
    /// Note: This does not guarantee a unit quaternion. For creating rotations,
    /// prefer using `from_axis_angle` or other rotation-specific constructors.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a quaternion from a vector part and a scalar part.
    #[inline]
    pub fn from_vec3(vector_part: Vec3, w: f64) -> Self {
        Self {
            x: vector_part.x,
            y: vector_part.y,
            z: vector_part.z,
            w,
        }
    }

    /// Creates a quaternion representing a rotation around a given axis by a given angle.
    ///
    /// # Arguments
    ///
    /// * `axis`: The axis of rotation. It must already be normalized: the axis
    ///   is used as-is, so a non-unit axis scales the vector part, and the zero
    ///   vector yields the degenerate-but-valid `(0, 0, 0, cos(half))`.
    /// * `angle_radians`: The angle of rotation in radians. `angle + 4π`
    ///   reproduces the same components; `angle + 2π` yields the negated
    ///   quaternion, the other member of the double-cover pair.
    #[inline]
    pub fn from_axis_angle(axis: Vec3, angle_radians: f64) -> Self {
        let half_angle = angle_radians * 0.5;
        let s = half_angle.sin();
        let c = half_angle.cos();
        Self {
            x: axis.x * s,
            y: axis.y * s,
            z: axis.z * s,
            w: c,
        }
    }

    /// Creates a quaternion from yaw (about Y), pitch (about X), and roll
    /// (about Z) angles in radians.
    ///
    /// Equivalent to
    /// `from_axis_angle(Vec3::Y, yaw) * from_axis_angle(Vec3::X, pitch) * from_axis_angle(Vec3::Z, roll)`:
    /// when rotating a vector, roll is applied first, then pitch, then yaw.
    /// Derived directly from the half-angle products rather than three
    /// quaternion multiplications.
    pub fn from_yaw_pitch_roll(yaw: f64, pitch: f64, roll: f64) -> Self {
        let half_roll = roll * 0.5;
        let sr = half_roll.sin();
        let cr = half_roll.cos();
        let half_pitch = pitch * 0.5;
        let sp = half_pitch.sin();
        let cp = half_pitch.cos();
        let half_yaw = yaw * 0.5;
        let sy = half_yaw.sin();
        let cy = half_yaw.cos();

        Self {
            x: cy * sp * cr + sy * cp * sr,
            y: sy * cp * cr - cy * sp * sr,
            z: cy * cp * sr - sy * sp * cr,
            w: cy * cp * cr + sy * sp * sr,
        }
    }

    /// Creates a quaternion from a 4x4 rotation matrix.
    ///
    /// Only the upper-left 3x3 block participates. The extraction branches on
    /// which quaternion component dominates: the trace-positive case derives
    /// `w` directly, otherwise the largest diagonal entry selects the x-, y-,
    /// or z-pivot derivation. The result is not normalized; an orthonormal
    /// rotation block yields a unit quaternion up to rounding.
    pub fn from_rotation_matrix(m: &Mat4) -> Self {
        let m11 = m.rows[0].x;
        let m12 = m.rows[0].y;
        let m13 = m.rows[0].z;
        let m21 = m.rows[1].x;
        let m22 = m.rows[1].y;
        let m23 = m.rows[1].z;
        let m31 = m.rows[2].x;
        let m32 = m.rows[2].y;
        let m33 = m.rows[2].z;

        match DominantComponent::of(m11, m22, m33) {
            DominantComponent::W => {
                let s = (m11 + m22 + m33 + 1.0).sqrt();
                let inv_s = 0.5 / s;
                Self {
                    x: (m23 - m32) * inv_s,
                    y: (m31 - m13) * inv_s,
                    z: (m12 - m21) * inv_s,
                    w: 0.5 * s,
                }
            }
            DominantComponent::X => {
                let s = (1.0 + m11 - m22 - m33).sqrt();
                let inv_s = 0.5 / s;
                Self {
                    x: 0.5 * s,
                    y: (m12 + m21) * inv_s,
                    z: (m13 + m31) * inv_s,
                    w: (m23 - m32) * inv_s,
                }
            }
            DominantComponent::Y => {
                let s = (1.0 + m22 - m11 - m33).sqrt();
                let inv_s = 0.5 / s;
                Self {
                    x: (m21 + m12) * inv_s,
                    y: 0.5 * s,
                    z: (m32 + m23) * inv_s,
                    w: (m31 - m13) * inv_s,
                }
            }
            DominantComponent::Z => {
                let s = (1.0 + m33 - m11 - m22).sqrt();
                let inv_s = 0.5 / s;
                Self {
                    x: (m31 + m13) * inv_s,
                    y: (m32 + m23) * inv_s,
                    z: 0.5 * s,
                    w: (m12 - m21) * inv_s,
                }
            }
        }
    }

    /// Calculates the squared length (magnitude) of the quaternion.
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.dot(*self)
    }

    /// Calculates the length (magnitude) of the quaternion.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Returns a normalized version of the quaternion with a length of 1.
    ///
    /// Divides by the length without guarding it: the zero quaternion yields
    /// NaN in every component.
    #[inline]
    pub fn normalize(&self) -> Self {
        let inv_norm = 1.0 / self.length();
        Self {
            x: self.x * inv_norm,
            y: self.y * inv_norm,
            z: self.z * inv_norm,
            w: self.w * inv_norm,
        }
    }

    /// Computes the conjugate of the quaternion, which negates the vector part.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: self.w,
        }
    }

    /// Computes the inverse of the quaternion: the conjugate divided by the
    /// *squared* length. For a unit quaternion this equals the conjugate.
    ///
    /// The zero quaternion yields NaN in every component, matching
    /// [`Quaternion::normalize`].
    #[inline]
    pub fn inverse(&self) -> Self {
        self.conjugate() * (1.0 / self.length_squared())
    }

    /// Computes the dot product of two quaternions.
    #[inline]
    pub fn dot(&self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Returns `true` if this is exactly the identity quaternion `(0, 0, 0, 1)`.
    /// The comparison is exact, not approximate.
    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Combines two rotations using the Hamilton product `self · rhs`.
    ///
    /// Rotating a vector by the result applies `rhs` first, then `self`.
    /// The `*` operator delegates here, so `a * b` composes "apply b, then a";
    /// for the reading-order composition see [`Quaternion::then`].
    #[inline]
    pub fn hamilton_product(self, rhs: Self) -> Self {
        Self {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }

    /// Composes two rotations in application order: the result applies `self`
    /// first, then `next`. Equals `next * self` in Hamilton-product order.
    ///
    /// The two spellings exist because the argument order of concatenation is
    /// a historical source of bugs; `a.then(b)` reads the way it rotates.
    #[inline]
    pub fn then(self, next: Self) -> Self {
        next.hamilton_product(self)
    }

    /// Rotates a 3D vector by this quaternion.
    ///
    /// Applies the quaternion's rotation-matrix basis vectors directly, so a
    /// non-unit quaternion scales the result accordingly and the zero
    /// quaternion leaves the vector unchanged.
    pub fn rotate_vec3(&self, v: Vec3) -> Vec3 {
        let x2 = self.x + self.x;
        let y2 = self.y + self.y;
        let z2 = self.z + self.z;

        let wx2 = self.w * x2;
        let wy2 = self.w * y2;
        let wz2 = self.w * z2;
        let xx2 = self.x * x2;
        let xy2 = self.x * y2;
        let xz2 = self.x * z2;
        let yy2 = self.y * y2;
        let yz2 = self.y * z2;
        let zz2 = self.z * z2;

        Vec3::new(
            v.x * (1.0 - yy2 - zz2) + v.y * (xy2 - wz2) + v.z * (xz2 + wy2),
            v.x * (xy2 + wz2) + v.y * (1.0 - xx2 - zz2) + v.z * (yz2 - wx2),
            v.x * (xz2 - wy2) + v.y * (yz2 + wx2) + v.z * (1.0 - xx2 - yy2),
        )
    }

    /// Performs a linear interpolation between two quaternions and normalizes
    /// the result.
    ///
    /// The factor `t` is not clamped. When the inputs lie in opposite
    /// hemispheres (`dot < 0`), `end`'s contribution is negated so the blend
    /// takes the short way around. An exactly zero-length blend result is
    /// returned as-is instead of being normalized into NaN.
    pub fn lerp(start: Self, end: Self, t: f64) -> Self {
        let t1 = 1.0 - t;
        let r = if start.dot(end) >= 0.0 {
            start * t1 + end * t
        } else {
            start * t1 - end * t
        };

        let length_squared = r.length_squared();
        if length_squared > 0.0 {
            r * (1.0 / length_squared.sqrt())
        } else {
            r
        }
    }

    /// Performs a Spherical Linear Interpolation (Slerp) between two quaternions.
    ///
    /// Slerp provides a smooth, constant-angular-velocity interpolation
    /// between two rotations, following the shortest path on the surface of a
    /// 4D sphere. The factor `t` is not clamped. When the hemisphere
    /// correction triggers (`dot < 0`), the result at `t = 1` is the
    /// *negation* of `end` — the same rotation, the other double-cover sign.
    ///
    /// Nearly identical inputs fall back to linear coefficients to avoid the
    /// `1/sin(omega)` cancellation; the result is not re-normalized.
    pub fn slerp(start: Self, end: Self, t: f64) -> Self {
        let mut cos_omega = start.dot(end);
        let mut flip = false;

        if cos_omega < 0.0 {
            flip = true;
            cos_omega = -cos_omega;
        }

        let (s1, s2) = if cos_omega > 1.0 - SLERP_EPSILON {
            // Too close: straight linear coefficients.
            (1.0 - t, if flip { -t } else { t })
        } else {
            let omega = cos_omega.acos();
            let inv_sin_omega = 1.0 / omega.sin();
            let s1 = ((1.0 - t) * omega).sin() * inv_sin_omega;
            let s2 = if flip {
                -(t * omega).sin() * inv_sin_omega
            } else {
                (t * omega).sin() * inv_sin_omega
            };
            (s1, s2)
        };

        start * s1 + end * s2
    }
}

// --- Operator Overloads ---

impl Default for Quaternion {
    /// Returns the identity quaternion, representing no rotation.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Quaternion> for Quaternion {
    type Output = Self;
    /// Combines two rotations using the Hamilton product; `a * b` applies `b`
    /// first, then `a`. Quaternion multiplication is not commutative.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.hamilton_product(rhs)
    }
}

impl MulAssign<Quaternion> for Quaternion {
    /// Combines this rotation with another.
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Div<Quaternion> for Quaternion {
    type Output = Self;
    /// Divides by another quaternion: `a / b` equals `a * b.inverse()`.
    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self.hamilton_product(rhs.inverse())
    }
}

impl Add<Quaternion> for Quaternion {
    type Output = Self;
    /// Adds two quaternions component-wise.
    /// Note: This is not a standard rotation operation.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            w: self.w + rhs.w,
        }
    }
}

impl Sub<Quaternion> for Quaternion {
    type Output = Self;
    /// Subtracts two quaternions component-wise.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            w: self.w - rhs.w,
        }
    }
}

impl Mul<f64> for Quaternion {
    type Output = Self;
    /// Scales all components of the quaternion by a scalar.
    #[inline]
    fn mul(self, scalar: f64) -> Self::Output {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
            w: self.w * scalar,
        }
    }
}

impl Neg for Quaternion {
    type Output = Self;
    /// Negates all components of the quaternion, yielding the other member of
    /// the double-cover pair for the same rotation.
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}
