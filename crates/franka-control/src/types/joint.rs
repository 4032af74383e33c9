//! 关节索引和关节数组
//!
//! 提供编译期安全的关节索引，以及固定 7 元的关节数组容器。
//!
//! # 设计目标
//!
//! - **编译期安全**: 枚举索引防止越界，数组长度由类型固定
//! - **运行期校验**: 遥测/动作以切片形式到达时，`from_slice` 是唯一的
//!   维度检查点，长度不符立即报错而不是静默截断
//! - **零开销**: 编译后与直接数组访问等价
//!
//! # 示例
//!
//! ```rust
//! use franka_control::types::{Joint, JointArray, Rad};
//!
//! let positions = JointArray::new([
//!     Rad(0.0), Rad(-0.5), Rad(0.0), Rad(-2.4),
//!     Rad(0.3), Rad(3.3), Rad(0.6),
//! ]);
//!
//! // 类型安全的索引访问
//! assert_eq!(positions[Joint::J4], Rad(-2.4));
//!
//! // 从动态长度切片转换（带维度校验）
//! let raw = vec![0.0f64; 7];
//! let arr = JointArray::from_slice(&raw).unwrap();
//! assert_eq!(arr[Joint::J1], 0.0);
//! ```

use super::units::{NewtonMeter, Rad};
use crate::types::error::ControlError;
use std::fmt;
use std::ops::{Index, IndexMut};

/// 关节数量（Franka 臂为 7 自由度）
pub const JOINT_COUNT: usize = 7;

/// 关节枚举
///
/// 表示机械臂的 7 个关节，顺序与机器人底层的关节索引一致。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Joint {
    /// 关节 1（基座旋转）
    J1 = 0,
    /// 关节 2（肩部俯仰）
    J2 = 1,
    /// 关节 3（上臂旋转）
    J3 = 2,
    /// 关节 4（肘部俯仰）
    J4 = 3,
    /// 关节 5（前臂旋转）
    J5 = 4,
    /// 关节 6（腕部俯仰）
    J6 = 5,
    /// 关节 7（末端旋转）
    J7 = 6,
}

impl Joint {
    /// 所有关节的数组
    pub const ALL: [Joint; JOINT_COUNT] = [
        Joint::J1,
        Joint::J2,
        Joint::J3,
        Joint::J4,
        Joint::J5,
        Joint::J6,
        Joint::J7,
    ];

    /// 获取关节索引（0-6）
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 从索引创建关节（范围检查）
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// 获取关节名称
    pub const fn name(self) -> &'static str {
        match self {
            Joint::J1 => "J1",
            Joint::J2 => "J2",
            Joint::J3 => "J3",
            Joint::J4 => "J4",
            Joint::J5 => "J5",
            Joint::J6 => "J6",
            Joint::J7 => "J7",
        }
    }
}

impl fmt::Display for Joint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 关节数组
///
/// 固定 7 元的关节值容器，支持索引、迭代和逐关节映射。
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JointArray<T> {
    data: [T; JOINT_COUNT],
}

impl<T: Copy> Copy for JointArray<T> {}

impl<T> JointArray<T> {
    /// 创建新的关节数组
    #[inline]
    pub const fn new(data: [T; JOINT_COUNT]) -> Self {
        JointArray { data }
    }

    /// 从切片转换（唯一的运行期维度检查点）
    ///
    /// 长度不等于 [`JOINT_COUNT`] 时返回
    /// [`ControlError::DimensionMismatch`]，不做截断或填充。
    pub fn from_slice(values: &[T]) -> Result<Self, ControlError>
    where
        T: Copy,
    {
        let data: [T; JOINT_COUNT] =
            values.try_into().map_err(|_| ControlError::DimensionMismatch {
                expected: JOINT_COUNT,
                actual: values.len(),
            })?;
        Ok(JointArray { data })
    }

    /// 获取内部数组的引用
    #[inline]
    pub fn as_array(&self) -> &[T; JOINT_COUNT] {
        &self.data
    }

    /// 以切片视图访问
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// 获取内部数组（消耗 self）
    #[inline]
    pub fn into_array(self) -> [T; JOINT_COUNT] {
        self.data
    }

    /// 迭代器
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// 逐关节映射
    pub fn map<U, F>(self, f: F) -> JointArray<U>
    where
        F: FnMut(T) -> U,
    {
        JointArray::new(self.data.map(f))
    }

    /// 与另一数组逐关节合并
    pub fn map_with<U, V, F>(self, other: JointArray<U>, mut f: F) -> JointArray<V>
    where
        T: Copy,
        U: Copy,
        F: FnMut(T, U) -> V,
    {
        JointArray::new(std::array::from_fn(|i| f(self.data[i], other.data[i])))
    }
}

impl<T: Copy> JointArray<T> {
    /// 创建所有元素相同的数组
    #[inline]
    pub fn splat(value: T) -> Self {
        JointArray::new([value; JOINT_COUNT])
    }
}

impl<T: Default> Default for JointArray<T> {
    fn default() -> Self {
        JointArray::new(std::array::from_fn(|_| T::default()))
    }
}

impl<T> Index<Joint> for JointArray<T> {
    type Output = T;

    #[inline]
    fn index(&self, joint: Joint) -> &T {
        &self.data[joint.index()]
    }
}

impl<T> IndexMut<Joint> for JointArray<T> {
    #[inline]
    fn index_mut(&mut self, joint: Joint) -> &mut T {
        &mut self.data[joint.index()]
    }
}

impl<T> Index<usize> for JointArray<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for JointArray<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T> From<[T; JOINT_COUNT]> for JointArray<T> {
    #[inline]
    fn from(data: [T; JOINT_COUNT]) -> Self {
        JointArray::new(data)
    }
}

impl<T> From<JointArray<T>> for [T; JOINT_COUNT] {
    #[inline]
    fn from(arr: JointArray<T>) -> Self {
        arr.data
    }
}

impl<T> IntoIterator for JointArray<T> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, JOINT_COUNT>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a JointArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// 关节位置（弧度）
pub type JointPositions = JointArray<Rad>;

/// 关节速度（弧度/秒）
pub type JointVelocities = JointArray<Rad>;

/// 关节力矩（牛·米）
pub type JointTorques = JointArray<NewtonMeter>;
