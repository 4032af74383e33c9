//! 强类型单位系统
//!
//! 使用 NewType 模式防止单位混淆。
//!
//! # 示例
//!
//! ```rust
//! use franka_control::types::{Rad, NewtonMeter};
//!
//! let error = Rad(0.5) - Rad(0.2);
//! let torque = NewtonMeter(26.7 * error.value());
//! assert!((torque.value() - 8.01).abs() < 1e-10);
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// 弧度（NewType）
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rad(pub f64);

impl Rad {
    /// 零弧度常量
    pub const ZERO: Self = Rad(0.0);

    /// 创建新的弧度值
    #[inline]
    pub const fn new(value: f64) -> Self {
        Rad(value)
    }

    /// 获取原始值
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// 转换为角度
    #[inline]
    pub fn to_deg(self) -> Deg {
        Deg(self.0.to_degrees())
    }

    /// 取绝对值
    #[inline]
    pub fn abs(self) -> Self {
        Rad(self.0.abs())
    }
}

impl fmt::Display for Rad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} rad", self.0)
    }
}

impl Add for Rad {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Rad(self.0 + rhs.0)
    }
}

impl Sub for Rad {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Rad(self.0 - rhs.0)
    }
}

impl Mul<f64> for Rad {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Rad(self.0 * rhs)
    }
}

impl Mul<Rad> for f64 {
    type Output = Rad;
    #[inline]
    fn mul(self, rhs: Rad) -> Rad {
        Rad(self * rhs.0)
    }
}

impl Neg for Rad {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Rad(-self.0)
    }
}

impl AddAssign for Rad {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Rad {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

/// 角度（NewType）
///
/// 仅用于人类可读的显示和日志，控制计算一律使用 [`Rad`]。
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deg(pub f64);

impl Deg {
    /// 创建新的角度值
    #[inline]
    pub const fn new(value: f64) -> Self {
        Deg(value)
    }

    /// 获取原始值
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// 转换为弧度
    #[inline]
    pub fn to_rad(self) -> Rad {
        Rad(self.0.to_radians())
    }
}

impl fmt::Display for Deg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}°", self.0)
    }
}

/// 牛·米（NewType）
///
/// 关节力矩的单位。
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewtonMeter(pub f64);

impl NewtonMeter {
    /// 零力矩常量
    pub const ZERO: Self = NewtonMeter(0.0);

    /// 创建新的力矩值
    #[inline]
    pub const fn new(value: f64) -> Self {
        NewtonMeter(value)
    }

    /// 获取原始值
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// 取绝对值
    #[inline]
    pub fn abs(self) -> Self {
        NewtonMeter(self.0.abs())
    }
}

impl fmt::Display for NewtonMeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} N·m", self.0)
    }
}

impl Add for NewtonMeter {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        NewtonMeter(self.0 + rhs.0)
    }
}

impl Sub for NewtonMeter {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        NewtonMeter(self.0 - rhs.0)
    }
}

impl Mul<f64> for NewtonMeter {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        NewtonMeter(self.0 * rhs)
    }
}

impl Neg for NewtonMeter {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        NewtonMeter(-self.0)
    }
}
