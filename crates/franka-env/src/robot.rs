//! 机器人服务接口
//!
//! 物理机械臂由一个外部 RPC 服务托管（回零、遥测、力矩下发都发生
//! 在那一侧）。本模块只定义该协作者的进程内抽象：环境层按控制节拍
//! 轮询遥测、下发力矩，但不关心底层传输是流式 RPC 还是共享内存。
//!
//! 遥测以 `Vec<f64>` 返回——线上数据本来就是动态长度的数组，维度
//! 校验统一发生在向 [`JointArray`] 转换的边界上。
//!
//! [`JointArray`]: franka_control::types::JointArray

use franka_control::types::{JointPositions, JointTorques};
use nalgebra::{UnitQuaternion, Vector3};
use thiserror::Error;

/// 机器人服务错误
///
/// 对环境层而言传输细节是不透明的；重试与恢复属于服务自身的契约。
#[derive(Debug, Error)]
pub enum RobotError {
    /// 传输/RPC 失败
    #[error("Robot service transport error: {0}")]
    Transport(String),
}

/// 末端位姿
///
/// 位置加姿态四元数，观测时展平为 `[x, y, z, qx, qy, qz, qw]`。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EePose {
    /// 末端位置（米）
    pub position: Vector3<f64>,
    /// 末端姿态
    pub orientation: UnitQuaternion<f64>,
}

impl EePose {
    /// 创建位姿
    pub fn new(position: Vector3<f64>, orientation: UnitQuaternion<f64>) -> Self {
        Self { position, orientation }
    }

    /// 单位位姿（原点，无旋转）
    pub fn identity() -> Self {
        Self {
            position: Vector3::zeros(),
            orientation: UnitQuaternion::identity(),
        }
    }

    /// 展平为观测向量（x, y, z, qx, qy, qz, qw）
    pub fn flatten(&self) -> [f64; 7] {
        let q = self.orientation.coords;
        [
            self.position.x,
            self.position.y,
            self.position.z,
            q.x,
            q.y,
            q.z,
            q.w,
        ]
    }
}

/// 机器人服务（外部协作者的进程内接口）
///
/// 单线程协作模型：所有方法都以 `&mut self` 同步调用，由控制循环
/// 每个节拍轮询一次。实现方负责自己的超时和重连策略。
pub trait RobotService {
    /// 当前关节位置（弧度，按关节索引序）
    fn joint_positions(&mut self) -> Result<Vec<f64>, RobotError>;

    /// 当前关节速度（弧度/秒，按关节索引序）
    fn joint_velocities(&mut self) -> Result<Vec<f64>, RobotError>;

    /// 当前末端位姿
    fn ee_pose(&mut self) -> Result<EePose, RobotError>;

    /// 把计算好的关节力矩交给底层控制器
    fn send_joint_torques(&mut self, torques: &JointTorques) -> Result<(), RobotError>;

    /// 回到给定的 home 位姿（阻塞到完成）
    fn go_home(&mut self, home: &JointPositions) -> Result<(), RobotError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ee_pose_flatten_identity() {
        let flat = EePose::identity().flatten();
        assert_eq!(flat, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_ee_pose_flatten_order() {
        let pose = EePose::new(
            Vector3::new(0.3, -0.1, 0.5),
            UnitQuaternion::from_euler_angles(0.0, 0.0, std::f64::consts::FRAC_PI_2),
        );
        let flat = pose.flatten();

        assert_eq!(&flat[..3], &[0.3, -0.1, 0.5]);
        // 绕 z 轴 90°：qz = qw = √2/2
        let half_sqrt2 = std::f64::consts::FRAC_1_SQRT_2;
        assert!((flat[5] - half_sqrt2).abs() < 1e-12);
        assert!((flat[6] - half_sqrt2).abs() < 1e-12);
    }
}
