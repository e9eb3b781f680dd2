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

//! Provides 2D, 3D, and 4D vector types and their associated operations.
//!
//! All operations are total: degenerate inputs (zero-length normalize,
//! division by zero) propagate IEEE NaN or infinity componentwise instead
//! of reporting errors.

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use super::matrix::Mat4;
use super::quaternion::Quaternion;
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

// --- Vec2 ---

/// A 2-dimensional vector with `f64` components.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    bytemuck::Pod,
    bytemuck::Zeroable,
    Serialize,
    Deserialize,
    Encode,
    Decode,
)]
#[repr(C)]
pub struct Vec2 {
    /// The x component of the vector.
    pub x: f64,
    /// The y component of the vector.
    pub y: f64,
}

impl Vec2 {
    /// A vector with all components set to `0.0`.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    /// A vector with all components set to `1.0`.
    pub const ONE: Self = Self { x: 1.0, y: 1.0 };
    /// The unit vector pointing along the positive X-axis.
    pub const X: Self = Self { x: 1.0, y: 0.0 };
    /// The unit vector pointing along the positive Y-axis.
    pub const Y: Self = Self { x: 0.0, y: 1.0 };

    /// Creates a new `Vec2` with the specified components.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a new `Vec2` with both components set to `value`.
    #[inline]
    pub const fn splat(value: f64) -> Self {
        Self { x: value, y: value }
    }

    /// Returns a new vector with the absolute value of each component.
    #[inline]
    pub const fn abs(self) -> Self {
        Self {
            x: if self.x < 0.0 { -self.x } else { self.x },
            y: if self.y < 0.0 { -self.y } else { self.y },
        }
    }

    /// Returns a new vector with the square root of each component.
    /// The square root of a negative component is NaN.
    #[inline]
    pub fn sqrt(&self) -> Self {
        Self {
            x: self.x.sqrt(),
            y: self.y.sqrt(),
        }
    }

    /// Calculates the squared length (magnitude) of the vector.
    /// This is faster than `length()` as it avoids a square root.
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.dot(*self)
    }

    /// Calculates the length (magnitude) of the vector.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Returns a normalized version of the vector with a length of 1.
    ///
    /// Divides by the length without guarding it: a zero-length input
    /// yields NaN components.
    #[inline]
    pub fn normalize(&self) -> Self {
        *self / self.length()
    }

    /// Calculates the dot product of this vector and another.
    #[inline]
    pub fn dot(&self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y
    }

    /// Calculates the squared distance between this vector and another.
    #[inline]
    pub fn distance_squared(&self, other: Self) -> f64 {
        (*self - other).length_squared()
    }

    /// Calculates the distance between this vector and another.
    #[inline]
    pub fn distance(&self, other: Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Performs a linear interpolation between two vectors.
    ///
    /// The factor `t` is not clamped; values outside `[0.0, 1.0]`
    /// extrapolate along the line through `start` and `end`.
    #[inline]
    pub fn lerp(start: Self, end: Self, t: f64) -> Self {
        start * (1.0 - t) + end * t
    }

    /// Returns the componentwise minimum of two vectors.
    /// Each component is `self` when it compares less than `other`, otherwise `other`.
    #[inline]
    pub fn min(&self, other: Self) -> Self {
        Self {
            x: if self.x < other.x { self.x } else { other.x },
            y: if self.y < other.y { self.y } else { other.y },
        }
    }

    /// Returns the componentwise maximum of two vectors.
    /// Each component is `self` when it compares greater than `other`, otherwise `other`.
    #[inline]
    pub fn max(&self, other: Self) -> Self {
        Self {
            x: if self.x > other.x { self.x } else { other.x },
            y: if self.y > other.y { self.y } else { other.y },
        }
    }

    /// Clamps each component between the corresponding components of `min` and `max`.
    ///
    /// The upper bound is applied before the lower bound, so `min` wins when a
    /// caller passes `min > max` (HLSL clamp order).
    #[inline]
    pub fn clamp(&self, min: Self, max: Self) -> Self {
        self.min(max).max(min)
    }

    /// Reflects the vector off a surface with the given `normal`.
    #[inline]
    pub fn reflect(&self, normal: Self) -> Self {
        *self - normal * (2.0 * self.dot(normal))
    }

    /// Transforms the vector as a point by a matrix, using the row-vector
    /// convention with `z = 0` and `w = 1`.
    #[inline]
    pub fn transform(&self, m: &Mat4) -> Self {
        Self {
            x: self.x * m.rows[0].x + self.y * m.rows[1].x + m.rows[3].x,
            y: self.x * m.rows[0].y + self.y * m.rows[1].y + m.rows[3].y,
        }
    }

    /// Transforms the vector as a direction by a matrix, ignoring the
    /// translation row.
    #[inline]
    pub fn transform_normal(&self, m: &Mat4) -> Self {
        Self {
            x: self.x * m.rows[0].x + self.y * m.rows[1].x,
            y: self.x * m.rows[0].y + self.y * m.rows[1].y,
        }
    }

    /// Rotates the vector by a quaternion, treating it as `(x, y, 0)` and
    /// discarding the rotated z component.
    #[inline]
    pub fn rotate(&self, rotation: Quaternion) -> Self {
        let r = rotation.rotate_vec3(Vec3::new(self.x, self.y, 0.0));
        Self::new(r.x, r.y)
    }
}

// --- Operator Overloads ---

impl Add for Vec2 {
    type Output = Self;
    /// Adds two vectors component-wise.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Self;
    /// Subtracts two vectors component-wise.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;
    /// Multiplies the vector by a scalar.
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;
    /// Multiplies a scalar by a vector.
    #[inline]
    fn mul(self, rhs: Vec2) -> Self::Output {
        rhs * self
    }
}

impl Mul<Vec2> for Vec2 {
    type Output = Self;
    /// Multiplies two vectors component-wise.
    #[inline]
    fn mul(self, rhs: Vec2) -> Self::Output {
        Self {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
        }
    }
}

impl Div<f64> for Vec2 {
    type Output = Self;
    /// Divides the vector by a scalar.
    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        let inv_rhs = 1.0 / rhs;
        Self {
            x: self.x * inv_rhs,
            y: self.y * inv_rhs,
        }
    }
}

impl Div<Vec2> for Vec2 {
    type Output = Self;
    /// Divides two vectors component-wise.
    #[inline]
    fn div(self, rhs: Vec2) -> Self::Output {
        Self {
            x: self.x / rhs.x,
            y: self.y / rhs.y,
        }
    }
}

impl Neg for Vec2 {
    type Output = Self;
    /// Negates the vector.
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Index<usize> for Vec2 {
    type Output = f64;
    /// Allows accessing a vector component by index (`v[0]`, `v[1]`).
    ///
    /// # Panics
    /// Panics if `index` is not 0 or 1.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Index out of bounds for Vec2"),
        }
    }
}

impl IndexMut<usize> for Vec2 {
    /// Allows mutably accessing a vector component by index (`v[0] = ...`).
    ///
    /// # Panics
    /// Panics if `index` is not 0 or 1.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Index out of bounds for Vec2"),
        }
    }
}

// --- Vec3 ---

/// A 3-dimensional vector with `f64` components.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    bytemuck::Pod,
    bytemuck::Zeroable,
    Serialize,
    Deserialize,
    Encode,
    Decode,
)]
#[repr(C)]
pub struct Vec3 {
    /// The x component of the vector.
    pub x: f64,
    /// The y component of the vector.
    pub y: f64,
    /// The z component of the vector.
    pub z: f64,
}

impl Vec3 {
    /// A vector with all components set to `0.0`.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    /// A vector with all components set to `1.0`.
    pub const ONE: Self = Self {
        x: 1.0,
        y: 1.0,
        z: 1.0,
    };
    /// The unit vector pointing along the positive X-axis.
    pub const X: Self = Self {
        x: 1.0,
        y: 0.0,
        z: 0.0,
    };
    /// The unit vector pointing along the positive Y-axis.
    pub const Y: Self = Self {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };
    /// The unit vector pointing along the positive Z-axis.
    pub const Z: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };

    /// Creates a new `Vec3` with the specified components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a new `Vec3` with all components set to `value`.
    #[inline]
    pub const fn splat(value: f64) -> Self {
        Self {
            x: value,
            y: value,
            z: value,
        }
    }

    /// Creates a `Vec3` from a `Vec2` and a `z` component.
    #[inline]
    pub const fn from_vec2(v: Vec2, z: f64) -> Self {
        Self { x: v.x, y: v.y, z }
    }

    /// Returns a new vector with the absolute value of each component.
    #[inline]
    pub const fn abs(self) -> Self {
        Self {
            x: if self.x < 0.0 { -self.x } else { self.x },
            y: if self.y < 0.0 { -self.y } else { self.y },
            z: if self.z < 0.0 { -self.z } else { self.z },
        }
    }

    /// Returns a new vector with the square root of each component.
    /// The square root of a negative component is NaN.
    #[inline]
    pub fn sqrt(&self) -> Self {
        Self {
            x: self.x.sqrt(),
            y: self.y.sqrt(),
            z: self.z.sqrt(),
        }
    }

    /// Calculates the squared length (magnitude) of the vector.
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.dot(*self)
    }

    /// Calculates the length (magnitude) of the vector.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Returns a normalized version of the vector with a length of 1.
    ///
    /// Divides by the length without guarding it: a zero-length input
    /// yields NaN components.
    #[inline]
    pub fn normalize(&self) -> Self {
        *self / self.length()
    }

    /// Calculates the dot product of this vector and another.
    #[inline]
    pub fn dot(&self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product of this vector and another.
    #[inline]
    pub fn cross(&self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Calculates the squared distance between this vector and another.
    #[inline]
    pub fn distance_squared(&self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Calculates the distance between this vector and another.
    #[inline]
    pub fn distance(&self, other: Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Performs a linear interpolation between two vectors.
    ///
    /// The factor `t` is not clamped; values outside `[0.0, 1.0]`
    /// extrapolate along the line through `start` and `end`.
    #[inline]
    pub fn lerp(start: Self, end: Self, t: f64) -> Self {
        start * (1.0 - t) + end * t
    }

    /// Returns the componentwise minimum of two vectors.
    /// Each component is `self` when it compares less than `other`, otherwise `other`.
    #[inline]
    pub fn min(&self, other: Self) -> Self {
        Self {
            x: if self.x < other.x { self.x } else { other.x },
            y: if self.y < other.y { self.y } else { other.y },
            z: if self.z < other.z { self.z } else { other.z },
        }
    }

    /// Returns the componentwise maximum of two vectors.
    /// Each component is `self` when it compares greater than `other`, otherwise `other`.
    #[inline]
    pub fn max(&self, other: Self) -> Self {
        Self {
            x: if self.x > other.x { self.x } else { other.x },
            y: if self.y > other.y { self.y } else { other.y },
            z: if self.z > other.z { self.z } else { other.z },
        }
    }

    /// Clamps each component between the corresponding components of `min` and `max`.
    ///
    /// The upper bound is applied before the lower bound, so `min` wins when a
    /// caller passes `min > max` (HLSL clamp order).
    #[inline]
    pub fn clamp(&self, min: Self, max: Self) -> Self {
        self.min(max).max(min)
    }

    /// Reflects the vector off a surface with the given `normal`.
    #[inline]
    pub fn reflect(&self, normal: Self) -> Self {
        *self - normal * (2.0 * self.dot(normal))
    }

    /// Transforms the vector as a point by a matrix, using the row-vector
    /// convention with `w = 1`.
    #[inline]
    pub fn transform(&self, m: &Mat4) -> Self {
        Self {
            x: self.x * m.rows[0].x + self.y * m.rows[1].x + self.z * m.rows[2].x + m.rows[3].x,
            y: self.x * m.rows[0].y + self.y * m.rows[1].y + self.z * m.rows[2].y + m.rows[3].y,
            z: self.x * m.rows[0].z + self.y * m.rows[1].z + self.z * m.rows[2].z + m.rows[3].z,
        }
    }

    /// Transforms the vector as a direction by a matrix, ignoring the
    /// translation row.
    #[inline]
    pub fn transform_normal(&self, m: &Mat4) -> Self {
        Self {
            x: self.x * m.rows[0].x + self.y * m.rows[1].x + self.z * m.rows[2].x,
            y: self.x * m.rows[0].y + self.y * m.rows[1].y + self.z * m.rows[2].y,
            z: self.x * m.rows[0].z + self.y * m.rows[1].z + self.z * m.rows[2].z,
        }
    }

    /// Rotates the vector by a quaternion.
    #[inline]
    pub fn rotate(&self, rotation: Quaternion) -> Self {
        rotation.rotate_vec3(*self)
    }
}

// --- Operator Overloads ---

impl Default for Vec3 {
    /// Returns `Vec3::ZERO`.
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for Vec3 {
    type Output = Self;
    /// Adds two vectors component-wise.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Vec3 {
    type Output = Self;
    /// Subtracts two vectors component-wise.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;
    /// Multiplies the vector by a scalar.
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;
    /// Multiplies a scalar by a vector.
    #[inline]
    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs * self
    }
}

impl Mul<Vec3> for Vec3 {
    type Output = Self;
    /// Multiplies two vectors component-wise.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
            z: self.z * rhs.z,
        }
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;
    /// Divides the vector by a scalar.
    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        let inv_rhs = 1.0 / rhs;
        Self {
            x: self.x * inv_rhs,
            y: self.y * inv_rhs,
            z: self.z * inv_rhs,
        }
    }
}

impl Div<Vec3> for Vec3 {
    type Output = Self;
    /// Divides two vectors component-wise.
    #[inline]
    fn div(self, rhs: Vec3) -> Self::Output {
        Self {
            x: self.x / rhs.x,
            y: self.y / rhs.y,
            z: self.z / rhs.z,
        }
    }
}

impl Neg for Vec3 {
    type Output = Self;
    /// Negates the vector.
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Index<usize> for Vec3 {
    type Output = f64;
    /// Allows accessing a vector component by index.
    /// # Panics
    /// Panics if `index` is not 0, 1, or 2.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Index out of bounds for Vec3"),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    /// Allows mutably accessing a vector component by index.
    /// # Panics
    /// Panics if `index` is not 0, 1, or 2.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Index out of bounds for Vec3"),
        }
    }
}

// --- Vec4 ---

/// A 4-dimensional vector with `f64` components, often used for homogeneous coordinates.
///
/// `Vec4` primarily represents points (`w` = 1.0) and directions (`w` = 0.0)
/// in homogeneous space, allowing them to be transformed by a [`Mat4`].
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    bytemuck::Pod,
    bytemuck::Zeroable,
    Serialize,
    Deserialize,
    Encode,
    Decode,
)]
#[repr(C)]
pub struct Vec4 {
    /// The x component of the vector.
    pub x: f64,
    /// The y component of the vector.
    pub y: f64,
    /// The z component of the vector.
    pub z: f64,
    /// The w component, used for homogeneous coordinates.
    pub w: f64,
}

impl Vec4 {
    /// A vector with all components set to `0.0`.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 0.0,
    };
    /// A vector with all components set to `1.0`.
    pub const ONE: Self = Self {
        x: 1.0,
        y: 1.0,
        z: 1.0,
        w: 1.0,
    };
    /// The unit vector pointing along the positive X-axis.
    pub const X: Self = Self {
        x: 1.0,
        y: 0.0,
        z: 0.0,
        w: 0.0,
    };
    /// The unit vector pointing along the positive Y-axis.
    pub const Y: Self = Self {
        x: 0.0,
        y: 1.0,
        z: 0.0,
        w: 0.0,
    };
    /// The unit vector pointing along the positive Z-axis.
    pub const Z: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 1.0,
        w: 0.0,
    };
    /// The unit vector pointing along the positive W-axis.
    pub const W: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    /// Creates a new `Vec4` with the specified components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a new `Vec4` with all components set to `value`.
    #[inline]
    pub const fn splat(value: f64) -> Self {
        Self {
            x: value,
            y: value,
            z: value,
            w: value,
        }
    }

    /// Creates a `Vec4` from a `Vec2` and `z`, `w` components.
    #[inline]
    pub const fn from_vec2(v: Vec2, z: f64, w: f64) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z,
            w,
        }
    }

    /// Creates a `Vec4` from a `Vec3` and a `w` component.
    #[inline]
    pub const fn from_vec3(v: Vec3, w: f64) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
            w,
        }
    }

    /// Returns the `[x, y, z]` components of the vector as a `Vec3`, discarding `w`.
    #[inline]
    pub const fn truncate(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Returns a new vector with the absolute value of each component.
    #[inline]
    pub const fn abs(self) -> Self {
        Self {
            x: if self.x < 0.0 { -self.x } else { self.x },
            y: if self.y < 0.0 { -self.y } else { self.y },
            z: if self.z < 0.0 { -self.z } else { self.z },
            w: if self.w < 0.0 { -self.w } else { self.w },
        }
    }

    /// Returns a new vector with the square root of each component.
    /// The square root of a negative component is NaN.
    #[inline]
    pub fn sqrt(&self) -> Self {
        Self {
            x: self.x.sqrt(),
            y: self.y.sqrt(),
            z: self.z.sqrt(),
            w: self.w.sqrt(),
        }
    }

    /// Calculates the squared length (magnitude) of the vector.
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.dot(*self)
    }

    /// Calculates the length (magnitude) of the vector.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Returns a normalized version of the vector with a length of 1.
    ///
    /// Divides by the length without guarding it: a zero-length input
    /// yields NaN components.
    #[inline]
    pub fn normalize(&self) -> Self {
        *self / self.length()
    }

    /// Calculates the dot product of this vector and another.
    #[inline]
    pub fn dot(&self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Calculates the squared distance between this vector and another.
    #[inline]
    pub fn distance_squared(&self, other: Self) -> f64 {
        (*self - other).length_squared()
    }

    /// Calculates the distance between this vector and another.
    #[inline]
    pub fn distance(&self, other: Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Performs a linear interpolation between two vectors.
    ///
    /// The factor `t` is not clamped; values outside `[0.0, 1.0]`
    /// extrapolate along the line through `start` and `end`.
    #[inline]
    pub fn lerp(start: Self, end: Self, t: f64) -> Self {
        start * (1.0 - t) + end * t
    }

    /// Returns the componentwise minimum of two vectors.
    /// Each component is `self` when it compares less than `other`, otherwise `other`.
    #[inline]
    pub fn min(&self, other: Self) -> Self {
        Self {
            x: if self.x < other.x { self.x } else { other.x },
            y: if self.y < other.y { self.y } else { other.y },
            z: if self.z < other.z { self.z } else { other.z },
            w: if self.w < other.w { self.w } else { other.w },
        }
    }

    /// Returns the componentwise maximum of two vectors.
    /// Each component is `self` when it compares greater than `other`, otherwise `other`.
    #[inline]
    pub fn max(&self, other: Self) -> Self {
        Self {
            x: if self.x > other.x { self.x } else { other.x },
            y: if self.y > other.y { self.y } else { other.y },
            z: if self.z > other.z { self.z } else { other.z },
            w: if self.w > other.w { self.w } else { other.w },
        }
    }

    /// Clamps each component between the corresponding components of `min` and `max`.
    ///
    /// The upper bound is applied before the lower bound, so `min` wins when a
    /// caller passes `min > max` (HLSL clamp order).
    #[inline]
    pub fn clamp(&self, min: Self, max: Self) -> Self {
        self.min(max).max(min)
    }

    /// Transforms the vector by a matrix, using the row-vector convention
    /// with all four components participating.
    #[inline]
    pub fn transform(&self, m: &Mat4) -> Self {
        Self {
            x: self.x * m.rows[0].x
                + self.y * m.rows[1].x
                + self.z * m.rows[2].x
                + self.w * m.rows[3].x,
            y: self.x * m.rows[0].y
                + self.y * m.rows[1].y
                + self.z * m.rows[2].y
                + self.w * m.rows[3].y,
            z: self.x * m.rows[0].z
                + self.y * m.rows[1].z
                + self.z * m.rows[2].z
                + self.w * m.rows[3].z,
            w: self.x * m.rows[0].w
                + self.y * m.rows[1].w
                + self.z * m.rows[2].w
                + self.w * m.rows[3].w,
        }
    }

    /// Rotates the `[x, y, z]` components by a quaternion, passing `w`
    /// through unchanged.
    #[inline]
    pub fn rotate(&self, rotation: Quaternion) -> Self {
        let r = rotation.rotate_vec3(self.truncate());
        Self::new(r.x, r.y, r.z, self.w)
    }
}

// --- Operator Overloads ---

impl Add for Vec4 {
    type Output = Self;
    /// Adds two vectors component-wise.
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

impl Sub for Vec4 {
    type Output = Self;
    /// Subtracts two vectors component-wise.
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

impl Mul<f64> for Vec4 {
    type Output = Self;
    /// Multiplies the vector by a scalar.
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
            w: self.w * rhs,
        }
    }
}

impl Mul<Vec4> for f64 {
    type Output = Vec4;
    /// Multiplies a scalar by a vector.
    #[inline]
    fn mul(self, rhs: Vec4) -> Self::Output {
        rhs * self
    }
}

impl Mul<Vec4> for Vec4 {
    type Output = Self;
    /// Multiplies two vectors component-wise.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
            z: self.z * rhs.z,
            w: self.w * rhs.w,
        }
    }
}

impl Div<f64> for Vec4 {
    type Output = Self;
    /// Divides the vector by a scalar.
    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        let inv_rhs = 1.0 / rhs;
        Self {
            x: self.x * inv_rhs,
            y: self.y * inv_rhs,
            z: self.z * inv_rhs,
            w: self.w * inv_rhs,
        }
    }
}

impl Div<Vec4> for Vec4 {
    type Output = Self;
    /// Divides two vectors component-wise.
    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x / rhs.x,
            y: self.y / rhs.y,
            z: self.z / rhs.z,
            w: self.w / rhs.w,
        }
    }
}

impl Neg for Vec4 {
    type Output = Self;
    /// Negates the vector.
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

impl Index<usize> for Vec4 {
    type Output = f64;
    /// Allows accessing a vector component by index.
    /// # Panics
    /// Panics if `index` is not between 0 and 3.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Index out of bounds for Vec4"),
        }
    }
}

impl IndexMut<usize> for Vec4 {
    /// Allows mutably accessing a vector component by index.
    /// # Panics
    /// Panics if `index` is not between 0 and 3.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Index out of bounds for Vec4"),
        }
    }
}

/// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{approx_eq, degrees_to_radians};

    fn vec2_approx_eq(a: Vec2, b: Vec2) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
    }

    fn vec3_approx_eq(a: Vec3, b: Vec3) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
    }

    fn vec4_approx_eq(a: Vec4, b: Vec4) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z) && approx_eq(a.w, b.w)
    }

    fn rotation_xyz_30deg() -> Mat4 {
        Mat4::from_rotation_x(degrees_to_radians(30.0))
            * Mat4::from_rotation_y(degrees_to_radians(30.0))
            * Mat4::from_rotation_z(degrees_to_radians(30.0))
    }

    // Test Vec2

    #[test]
    fn test_vec2_new() {
        let v = Vec2::new(1.0, 2.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(Vec2::splat(3.0), Vec2::new(3.0, 3.0));
    }

    #[test]
    fn test_vec2_abs() {
        let v = Vec2::new(-1.0, 2.0);
        assert_eq!(v.abs(), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_vec2_constants() {
        assert_eq!(Vec2::ZERO, Vec2::new(0.0, 0.0));
        assert_eq!(Vec2::ONE, Vec2::new(1.0, 1.0));
        assert_eq!(Vec2::X, Vec2::new(1.0, 0.0));
        assert_eq!(Vec2::Y, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_vec2_ops() {
        let v1 = Vec2::new(1.0, 2.0);
        let v2 = Vec2::new(3.0, 4.0);
        assert_eq!(v1 + v2, Vec2::new(4.0, 6.0));
        assert_eq!(v2 - v1, Vec2::new(2.0, 2.0));
        assert_eq!(v1 * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(3.0 * v1, Vec2::new(3.0, 6.0));
        assert_eq!(v1 * v2, Vec2::new(3.0, 8.0)); // Component-wise
        assert_eq!(-v1, Vec2::new(-1.0, -2.0));
        assert!(vec2_approx_eq(
            Vec2::new(4.0, 6.0) / 2.0,
            Vec2::new(2.0, 3.0)
        ));
        assert!(vec2_approx_eq(
            Vec2::new(4.0, 6.0) / Vec2::new(2.0, 3.0),
            Vec2::new(2.0, 2.0)
        ));
    }

    #[test]
    fn test_vec2_div_by_zero() {
        let v = Vec2::new(-2.0, 3.0) / 0.0;
        assert_eq!(v.x, f64::NEG_INFINITY);
        assert_eq!(v.y, f64::INFINITY);

        let w = Vec2::new(0.047, -3.0) / Vec2::ZERO;
        assert_eq!(w.x, f64::INFINITY);
        assert_eq!(w.y, f64::NEG_INFINITY);
    }

    #[test]
    fn test_vec2_dot() {
        let v1 = Vec2::new(1.0, 2.0);
        let v2 = Vec2::new(3.0, 4.0);
        assert!(approx_eq(v1.dot(v2), 11.0));

        // Perpendicular vectors
        assert_eq!(Vec2::new(1.55, 1.55).dot(Vec2::new(-1.55, 1.55)), 0.0);
    }

    #[test]
    fn test_vec2_length() {
        let v = Vec2::new(2.0, 4.0);
        assert!(approx_eq(v.length_squared(), 20.0));
        assert!(approx_eq(v.length(), 20.0_f64.sqrt()));
        assert!(approx_eq(Vec2::ZERO.length(), 0.0));
    }

    #[test]
    fn test_vec2_distance() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);
        assert!(approx_eq(a.distance_squared(b), 8.0));
        assert!(approx_eq(a.distance(b), 8.0_f64.sqrt()));
        assert_eq!(Vec2::new(1.051, 2.05).distance(Vec2::new(1.051, 2.05)), 0.0);
    }

    #[test]
    fn test_vec2_normalize() {
        let v = Vec2::new(2.0, 3.0);
        let n = v.normalize();
        assert!(vec2_approx_eq(
            n,
            Vec2::new(0.554700196225229122018341733457, 0.8320502943378436830275126001855)
        ));
        assert!(approx_eq(n.length(), 1.0));
    }

    #[test]
    fn test_vec2_normalize_zero_is_nan() {
        let n = Vec2::ZERO.normalize();
        assert!(n.x.is_nan() && n.y.is_nan());
    }

    #[test]
    fn test_vec2_normalize_infinite_length() {
        // Squared length overflows to infinity, so components collapse to zero.
        let n = Vec2::new(f64::MAX, f64::MAX).normalize();
        assert_eq!(n, Vec2::ZERO);
    }

    #[test]
    fn test_vec2_lerp() {
        let start = Vec2::new(1.0, 2.0);
        let end = Vec2::new(3.0, 4.0);
        assert!(vec2_approx_eq(Vec2::lerp(start, end, 0.5), Vec2::new(2.0, 3.0)));
        assert!(vec2_approx_eq(Vec2::lerp(start, end, 0.0), start));
        assert!(vec2_approx_eq(Vec2::lerp(start, end, 1.0), end));
        // The factor is not clamped.
        assert!(vec2_approx_eq(
            Vec2::lerp(Vec2::ZERO, end, 2.0),
            Vec2::new(6.0, 8.0)
        ));
        assert!(vec2_approx_eq(
            Vec2::lerp(Vec2::ZERO, end, -2.0),
            Vec2::new(-6.0, -8.0)
        ));
    }

    #[test]
    fn test_vec2_min_max() {
        let lo = Vec2::new(-1.0, 4.0);
        let hi = Vec2::new(2.0, 1.0);
        assert_eq!(lo.min(hi), Vec2::new(-1.0, 1.0));
        assert_eq!(hi.min(lo), Vec2::new(-1.0, 1.0));
        assert_eq!(lo.max(hi), Vec2::new(2.0, 4.0));
        assert_eq!(hi.max(lo), Vec2::new(2.0, 4.0));
    }

    #[test]
    fn test_vec2_clamp() {
        let min = Vec2::new(-1.0, 1.0);
        let max = Vec2::new(1.0, 3.0);
        assert_eq!(Vec2::new(0.5, 2.0).clamp(min, max), Vec2::new(0.5, 2.0));
        assert_eq!(Vec2::new(2.0, 4.0).clamp(min, max), max);
        assert_eq!(Vec2::new(-2.0, 0.0).clamp(min, max), min);
        // When min > max, the lower bound wins.
        assert_eq!(Vec2::new(0.0, 2.0).clamp(max, min), max);
    }

    #[test]
    fn test_vec2_reflect() {
        let a = Vec2::new(1.0, 1.0).normalize();
        // Reflect on the X axis.
        assert!(vec2_approx_eq(a.reflect(Vec2::Y), Vec2::new(a.x, -a.y)));
        // Reflect on the Y axis.
        assert!(vec2_approx_eq(a.reflect(Vec2::X), Vec2::new(-a.x, a.y)));
        // Source equal to the normal reflects to its negation.
        let n = Vec2::new(0.45, 1.28).normalize();
        assert!(vec2_approx_eq(n.reflect(n), -n));
    }

    #[test]
    fn test_vec2_transform() {
        let v = Vec2::new(1.0, 2.0);
        let mut m = rotation_xyz_30deg();
        m.rows[3].x = 10.0;
        m.rows[3].y = 20.0;
        m.rows[3].z = 30.0;

        assert!(vec2_approx_eq(
            v.transform(&m),
            Vec2::new(10.316987, 22.183012)
        ));
    }

    #[test]
    fn test_vec2_rotate_matches_matrix() {
        let v = Vec2::new(1.0, 2.0);
        let m = rotation_xyz_30deg();
        let q = Quaternion::from_rotation_matrix(&m);

        assert!(vec2_approx_eq(v.rotate(q), v.transform(&m)));
    }

    #[test]
    fn test_vec2_rotate_degenerate_quaternions() {
        let v = Vec2::new(1.0, 2.0);
        // The zero quaternion leaves the vector untouched.
        assert!(vec2_approx_eq(v.rotate(Quaternion::new(0.0, 0.0, 0.0, 0.0)), v));
        assert!(vec2_approx_eq(v.rotate(Quaternion::IDENTITY), v));
    }

    #[test]
    fn test_vec2_index() {
        let mut v = Vec2::new(5.0, 6.0);
        assert_eq!(v[0], 5.0);
        assert_eq!(v[1], 6.0);
        v[0] = 10.0;
        assert_eq!(v.x, 10.0);
    }

    #[test]
    #[should_panic]
    fn test_vec2_index_out_of_bounds() {
        let v = Vec2::new(1.0, 2.0);
        let _ = v[2]; // Should panic
    }

    // Test Vec3

    #[test]
    fn test_new() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
        assert_eq!(Vec3::splat(2.0), Vec3::new(2.0, 2.0, 2.0));
        assert_eq!(
            Vec3::from_vec2(Vec2::new(1.0, 2.0), 3.0),
            Vec3::new(1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn test_vec3_abs() {
        let v = Vec3::new(-2.5, 2.0, 0.5);
        assert_eq!(v.abs(), Vec3::new(2.5, 2.0, 0.5));
        assert_eq!(Vec3::ZERO.abs(), Vec3::ZERO);

        let special = Vec3::new(0.0, f64::NEG_INFINITY, f64::NAN).abs();
        assert_eq!(special.x, 0.0);
        assert_eq!(special.y, f64::INFINITY);
        assert!(special.z.is_nan());
    }

    #[test]
    fn test_vec3_sqrt() {
        let b = Vec3::new(5.5, 4.5, 16.5).sqrt();
        assert_eq!(b.x as i32, 2);
        assert_eq!(b.y as i32, 2);
        assert_eq!(b.z as i32, 4);
        assert!(Vec3::new(-2.5, 2.0, 0.5).sqrt().x.is_nan());
    }

    #[test]
    fn test_constants() {
        assert_eq!(Vec3::ZERO, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(Vec3::ONE, Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(Vec3::X, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(Vec3::Y, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(Vec3::Z, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_add() {
        let v1 = Vec3::new(1.0, 2.0, 3.0);
        let v2 = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(v1 + v2, Vec3::new(5.0, 7.0, 9.0));
    }

    #[test]
    fn test_sub() {
        let v1 = Vec3::new(4.0, 2.0, 3.0);
        let v2 = Vec3::new(1.0, 5.0, 7.0);
        assert_eq!(v1 - v2, Vec3::new(3.0, -3.0, -4.0));
    }

    #[test]
    fn test_scalar_mul() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(3.0 * v, Vec3::new(3.0, 6.0, 9.0)); // Test f64 * Vec3
    }

    #[test]
    fn test_component_mul() {
        let v1 = Vec3::new(1.0, 2.0, 3.0);
        let v2 = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(v1 * v2, Vec3::new(4.0, 10.0, 18.0));
    }

    #[test]
    fn test_scalar_div() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert!(vec3_approx_eq(v / 2.0, Vec3::new(0.5, 1.0, 1.5)));
    }

    #[test]
    fn test_component_div() {
        let v1 = Vec3::new(4.0, 2.0, 3.0);
        let v2 = Vec3::new(1.0, 5.0, 6.0);
        assert!(vec3_approx_eq(v1 / v2, Vec3::new(4.0, 0.4, 0.5)));
    }

    #[test]
    fn test_div_by_zero() {
        let v = Vec3::new(-2.0, 3.0, f64::MAX) / 0.0;
        assert_eq!(v.x, f64::NEG_INFINITY);
        assert_eq!(v.y, f64::INFINITY);
        assert_eq!(v.z, f64::INFINITY);

        let w = Vec3::new(0.047, -3.0, f64::NEG_INFINITY) / Vec3::ZERO;
        assert_eq!(w.x, f64::INFINITY);
        assert_eq!(w.y, f64::NEG_INFINITY);
        assert_eq!(w.z, f64::NEG_INFINITY);
    }

    #[test]
    fn test_neg() {
        let v = Vec3::new(1.0, -2.0, 3.0);
        assert_eq!(-v, Vec3::new(-1.0, 2.0, -3.0));

        let special = -Vec3::new(f64::NAN, f64::INFINITY, f64::NEG_INFINITY);
        assert!(special.x.is_nan());
        assert_eq!(special.y, f64::NEG_INFINITY);
        assert_eq!(special.z, f64::INFINITY);
    }

    #[test]
    fn test_length() {
        let v1 = Vec3::new(3.0, 4.0, 0.0);
        assert!(approx_eq(v1.length_squared(), 25.0));
        assert!(approx_eq(v1.length(), 5.0));

        let v2 = Vec3::ZERO;
        assert!(approx_eq(v2.length_squared(), 0.0));
        assert!(approx_eq(v2.length(), 0.0));
    }

    #[test]
    fn test_dot() {
        let v1 = Vec3::new(1.0, 2.0, 3.0);
        let v2 = Vec3::new(4.0, 5.0, 6.0);
        assert!(approx_eq(v1.dot(v2), 32.0));

        // Orthogonal vectors
        assert!(approx_eq(Vec3::X.dot(Vec3::Y), 0.0));
    }

    #[test]
    fn test_distance() {
        let v1 = Vec3::new(1.0, 2.0, 3.0);
        let v2 = Vec3::new(4.0, 5.0, 6.0);
        assert!(approx_eq(v1.distance_squared(v2), 27.0));
        assert!(approx_eq(v1.distance(v2), 3.0 * 3.0_f64.sqrt()));
    }

    #[test]
    fn test_cross() {
        // Standard basis vectors
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
        assert_eq!(Vec3::Z.cross(Vec3::X), Vec3::Y);

        // Anti-commutative property
        assert_eq!(Vec3::Y.cross(Vec3::X), -Vec3::Z);

        // Parallel vectors
        assert_eq!(Vec3::X.cross(Vec3::X), Vec3::ZERO);
    }

    #[test]
    fn test_normalize() {
        let norm = Vec3::new(1.0, 2.0, 3.0).normalize();
        assert!(vec3_approx_eq(
            norm,
            Vec3::new(
                0.26726124191242438468455348087975,
                0.53452248382484876936910696175951,
                0.80178372573727315405366044263926
            )
        ));
        assert!(approx_eq(norm.length(), 1.0));

        assert!(vec3_approx_eq(Vec3::X.normalize(), Vec3::X));
    }

    #[test]
    fn test_normalize_zero_is_nan() {
        let n = Vec3::ZERO.normalize();
        assert!(n.x.is_nan() && n.y.is_nan() && n.z.is_nan());
    }

    #[test]
    fn test_lerp() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert!(vec3_approx_eq(Vec3::lerp(a, b, 0.0), a));
        assert!(vec3_approx_eq(Vec3::lerp(a, b, 1.0), b));
        assert!(vec3_approx_eq(Vec3::lerp(a, b, 0.5), Vec3::new(2.5, 3.5, 4.5)));
        // Factor beyond [0, 1] extrapolates.
        assert!(vec3_approx_eq(
            Vec3::lerp(Vec3::ZERO, b, 2.0),
            Vec3::new(8.0, 10.0, 12.0)
        ));
        assert!(vec3_approx_eq(
            Vec3::lerp(Vec3::ZERO, b, -2.0),
            Vec3::new(-8.0, -10.0, -12.0)
        ));
        // Lerp between identical points is stationary.
        let p = Vec3::new(1.68, 2.34, 5.43);
        assert!(vec3_approx_eq(Vec3::lerp(p, p, 0.18), p));
    }

    #[test]
    fn test_vec3_min_max() {
        let min = Vec3::ZERO;
        let max = Vec3::ONE;
        assert_eq!(min.min(max), min);
        assert_eq!(max.min(min), min);
        assert_eq!(min.max(max), max);
        assert_eq!(max.max(min), max);
    }

    #[test]
    fn test_vec3_clamp() {
        let min = Vec3::new(0.0, 0.1, 0.13);
        let max = Vec3::new(1.0, 1.1, 1.13);

        // Value inside the range.
        let a = Vec3::new(0.5, 0.3, 0.33);
        assert!(vec3_approx_eq(a.clamp(min, max), a));
        // Value above the range.
        assert!(vec3_approx_eq(Vec3::new(2.0, 3.0, 4.0).clamp(min, max), max));
        // Value below the range.
        assert!(vec3_approx_eq(
            Vec3::new(-2.0, -3.0, -4.0).clamp(min, max),
            min
        ));
        // Mixed case.
        assert!(vec3_approx_eq(
            Vec3::new(-2.0, 0.5, 4.0).clamp(min, max),
            Vec3::new(min.x, 0.5, max.z)
        ));

        // User specified min greater than max: the min value wins everywhere.
        let (min, max) = (max, min);
        assert!(vec3_approx_eq(a.clamp(min, max), min));
        assert!(vec3_approx_eq(Vec3::new(2.0, 3.0, 4.0).clamp(min, max), min));
        assert!(vec3_approx_eq(
            Vec3::new(-2.0, -3.0, -4.0).clamp(min, max),
            min
        ));
    }

    #[test]
    fn test_vec3_reflect() {
        let a = Vec3::new(1.0, 1.0, 1.0).normalize();

        // Reflect on the XZ plane.
        assert!(vec3_approx_eq(a.reflect(Vec3::Y), Vec3::new(a.x, -a.y, a.z)));
        // Reflect on the XY plane.
        assert!(vec3_approx_eq(a.reflect(Vec3::Z), Vec3::new(a.x, a.y, -a.z)));
        // Reflect on the YZ plane.
        assert!(vec3_approx_eq(a.reflect(Vec3::X), Vec3::new(-a.x, a.y, a.z)));

        // Source equal to the normal reflects to its negation.
        let n = Vec3::new(0.45, 1.28, 0.86).normalize();
        assert!(vec3_approx_eq(n.reflect(n), -n));
        assert!(vec3_approx_eq((-n).reflect(n), n));
        // A vector perpendicular to the normal is unchanged.
        let perp = Vec3::new(1.28, 0.45, 0.01).cross(n);
        assert!(vec3_approx_eq(perp.reflect(n), perp));
    }

    #[test]
    fn test_vec3_transform() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let mut m = rotation_xyz_30deg();
        m.rows[3].x = 10.0;
        m.rows[3].y = 20.0;
        m.rows[3].z = 30.0;

        assert!(vec3_approx_eq(
            v.transform(&m),
            Vec3::new(12.191987, 21.533493, 32.616024)
        ));
    }

    #[test]
    fn test_vec3_transform_normal() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let mut m = rotation_xyz_30deg();
        m.rows[3].x = 10.0;
        m.rows[3].y = 20.0;
        m.rows[3].z = 30.0;

        assert!(vec3_approx_eq(
            v.transform_normal(&m),
            Vec3::new(2.19198728, 1.53349364, 2.61602545)
        ));
    }

    #[test]
    fn test_vec3_rotate_matches_matrix() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let m = rotation_xyz_30deg();
        let q = Quaternion::from_rotation_matrix(&m);

        assert!(vec3_approx_eq(v.rotate(q), v.transform(&m)));
    }

    #[test]
    fn test_vec3_rotate_degenerate_quaternions() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        // The zero quaternion leaves the vector untouched.
        assert!(vec3_approx_eq(v.rotate(Quaternion::new(0.0, 0.0, 0.0, 0.0)), v));
        assert!(vec3_approx_eq(v.rotate(Quaternion::IDENTITY), v));
    }

    #[test]
    fn test_vec3_nan_equality() {
        let a = Vec3::new(f64::NAN, 0.0, 0.0);
        assert!(a != Vec3::ZERO);
        assert!(!(a == Vec3::ZERO));
        // IEEE comparison rules: NaN is not equal to itself.
        assert!(!(a == a));
    }

    // Test Vec4

    #[test]
    fn test_vec4_new() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
        assert_eq!(v.w, 4.0);
        assert_eq!(Vec4::splat(5.0), Vec4::new(5.0, 5.0, 5.0, 5.0));
        assert_eq!(
            Vec4::from_vec2(Vec2::new(1.0, 2.0), 3.0, 4.0),
            Vec4::new(1.0, 2.0, 3.0, 4.0)
        );
    }

    #[test]
    fn test_vec4_abs() {
        let v = Vec4::new(-1.0, 2.0, -3.0, -0.5);
        assert_eq!(v.abs(), Vec4::new(1.0, 2.0, 3.0, 0.5));
    }

    #[test]
    fn test_vec4_sqrt() {
        let v = Vec4::new(4.0, 9.0, 16.0, 25.0).sqrt();
        assert!(vec4_approx_eq(v, Vec4::new(2.0, 3.0, 4.0, 5.0)));
        assert!(Vec4::new(-1.0, 1.0, 1.0, 1.0).sqrt().x.is_nan());
    }

    #[test]
    fn test_vec4_from_vec3() {
        let v3 = Vec3::new(1.0, 2.0, 3.0);
        let v4 = Vec4::from_vec3(v3, 4.0);
        assert_eq!(v4, Vec4::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_vec4_truncate() {
        let v4 = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let v3 = v4.truncate();
        assert_eq!(v3, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_vec4_dot() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(5.0, 6.0, 7.0, 8.0);
        assert!(approx_eq(a.dot(b), 70.0));
    }

    #[test]
    fn test_vec4_length() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert!(approx_eq(v.length_squared(), 30.0));
        assert!(approx_eq(v.length(), 30.0_f64.sqrt()));
    }

    #[test]
    fn test_vec4_distance() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(5.0, 6.0, 7.0, 8.0);
        assert!(approx_eq(a.distance_squared(b), 64.0));
        assert!(approx_eq(a.distance(b), 8.0));
    }

    #[test]
    fn test_vec4_normalize() {
        let n = Vec4::new(1.0, 2.0, 3.0, 4.0).normalize();
        assert!(vec4_approx_eq(
            n,
            Vec4::new(0.1825741858, 0.3651483716, 0.5477225575, 0.7302967433)
        ));
        assert!(approx_eq(n.length(), 1.0));

        let nan = Vec4::ZERO.normalize();
        assert!(nan.x.is_nan() && nan.y.is_nan() && nan.z.is_nan() && nan.w.is_nan());
    }

    #[test]
    fn test_vec4_ops() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(5.0, 6.0, 7.0, 8.0);
        assert_eq!(a + b, Vec4::new(6.0, 8.0, 10.0, 12.0));
        assert_eq!(b - a, Vec4::new(4.0, 4.0, 4.0, 4.0));
        assert_eq!(a * 2.0, Vec4::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(2.0 * a, Vec4::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(a * b, Vec4::new(5.0, 12.0, 21.0, 32.0));
        assert!(vec4_approx_eq(a / 2.0, Vec4::new(0.5, 1.0, 1.5, 2.0)));
        assert!(vec4_approx_eq(b / a, Vec4::new(5.0, 3.0, 7.0 / 3.0, 2.0)));
        assert_eq!(-a, Vec4::new(-1.0, -2.0, -3.0, -4.0));
    }

    #[test]
    fn test_vec4_lerp_and_clamp() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(5.0, 6.0, 7.0, 8.0);
        assert!(vec4_approx_eq(Vec4::lerp(a, b, 0.5), Vec4::new(3.0, 4.0, 5.0, 6.0)));
        assert!(vec4_approx_eq(Vec4::lerp(a, b, 0.0), a));
        assert!(vec4_approx_eq(Vec4::lerp(a, b, 1.0), b));

        let min = Vec4::ZERO;
        let max = Vec4::ONE;
        assert_eq!(Vec4::splat(0.5).clamp(min, max), Vec4::splat(0.5));
        assert_eq!(Vec4::splat(2.0).clamp(min, max), max);
        assert_eq!(Vec4::splat(-2.0).clamp(min, max), min);
        // When min > max, the lower bound wins.
        assert_eq!(Vec4::splat(0.5).clamp(max, min), max);
        assert_eq!(min.min(max), min);
        assert_eq!(min.max(max), max);
    }

    #[test]
    fn test_vec4_transform() {
        // A point transform picks up the translation row scaled by w.
        let m = Mat4::from_translation(Vec3::new(10.0, 20.0, 30.0));
        let p = Vec4::new(1.0, 2.0, 3.0, 1.0);
        assert!(vec4_approx_eq(p.transform(&m), Vec4::new(11.0, 22.0, 33.0, 1.0)));

        // A direction (w = 0) ignores it.
        let d = Vec4::new(1.0, 2.0, 3.0, 0.0);
        assert!(vec4_approx_eq(d.transform(&m), d));
    }

    #[test]
    fn test_vec4_rotate_passes_w_through() {
        let m = rotation_xyz_30deg();
        let q = Quaternion::from_rotation_matrix(&m);
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);

        let rotated = v.rotate(q);
        let expected = v.truncate().transform(&m);
        assert!(vec3_approx_eq(rotated.truncate(), expected));
        assert_eq!(rotated.w, 4.0);
    }

    // Layout

    #[test]
    fn test_layout_sizes() {
        assert_eq!(core::mem::size_of::<Vec2>(), 16);
        assert_eq!(core::mem::size_of::<Vec3>(), 24);
        assert_eq!(core::mem::size_of::<Vec4>(), 32);

        #[repr(C)]
        struct Vec3Pair {
            _a: Vec3,
            _b: Vec3,
        }
        #[repr(C)]
        struct Vec3PlusScalar {
            _v: Vec3,
            _s: f64,
        }
        assert_eq!(core::mem::size_of::<Vec3Pair>(), 48);
        assert_eq!(core::mem::size_of::<Vec3PlusScalar>(), 32);
    }

    #[test]
    fn test_layout_pod_bytes() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let floats: &[f64] = bytemuck::cast_slice(bytemuck::bytes_of(&v));
        assert_eq!(floats, &[1.0, 2.0, 3.0]);
    }
}
