//! 观测组装
//!
//! 每个控制节拍结束后向调用者返回的环境观测。字段顺序与原始环境
//! 的观测字典一致：关节位置、关节速度、末端位姿、彩色帧、深度帧。

use crate::camera::{ColorImage, DepthImage};
use franka_control::types::{JointPositions, JointVelocities};

/// 环境观测
#[derive(Debug, Clone)]
pub struct Observation {
    /// 关节位置
    pub q: JointPositions,
    /// 关节速度
    pub qdot: JointVelocities,
    /// 末端位姿，展平为 (x, y, z, qx, qy, qz, qw)
    pub ee_pose: [f64; 7],
    /// 彩色帧（环境未挂相机时为 None）
    pub rgb: Option<ColorImage>,
    /// 深度帧（环境未挂相机时为 None）
    pub depth: Option<DepthImage>,
}
