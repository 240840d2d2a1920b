//! Math types.
//!
//! This module intentionally stays small and deterministic.
//! Screen coordinates: +x is right, +y is down.

use std::ops::{Add, AddAssign, Mul, Sub};

use serde::{Deserialize, Serialize};

/// 2D vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y
    }

    pub fn len_sq(self) -> f32 {
        self.dot(self)
    }

    /// Squared Euclidean distance to `other`.
    pub fn distance_sq(self, other: Self) -> f32 {
        (self - other).len_sq()
    }

    /// Clamps each coordinate independently into `[0, extent]`.
    pub fn clamp_to(self, extent: Self) -> Self {
        Self::new(self.x.clamp(0.0, extent.x), self.y.clamp(0.0, extent.y))
    }

    /// True when both coordinates lie within `[0, extent]`.
    pub fn within(self, extent: Self) -> bool {
        (0.0..=extent.x).contains(&self.x) && (0.0..=extent.y).contains(&self.y)
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}
