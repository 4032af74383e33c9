//! 模拟机器人与相机（feature `mock`）
//!
//! 无硬件时的演示/测试后端：机器人是逐关节的单位惯量双积分器加
//! 粘性阻尼，相机返回固定内容的帧。不做正向运动学，末端位姿固定
//! 返回单位位姿。

use crate::camera::{CameraError, CameraService, ColorImage, DepthImage};
use crate::robot::{EePose, RobotError, RobotService};
use franka_control::types::{JOINT_COUNT, JointPositions, JointTorques};

/// 模拟机器人
///
/// 状态就是 `(q, qd)`；`send_joint_torques` 用显式欧拉做一步积分：
///
/// ```text
/// qdd[i] = torque[i] - damping * qd[i]    # 单位惯量
/// qd[i] += qdd[i] * dt
/// q[i]  += qd[i] * dt
/// ```
#[derive(Debug, Clone)]
pub struct SimRobot {
    q: [f64; JOINT_COUNT],
    qd: [f64; JOINT_COUNT],
    /// 积分步长（秒），通常取 1/控制频率
    dt: f64,
    /// 粘性阻尼系数
    damping: f64,
    last_torques: [f64; JOINT_COUNT],
}

impl SimRobot {
    /// 创建模拟机器人（初始静止在零位）
    pub fn new(dt: f64) -> Self {
        Self {
            q: [0.0; JOINT_COUNT],
            qd: [0.0; JOINT_COUNT],
            dt,
            damping: 2.0,
            last_torques: [0.0; JOINT_COUNT],
        }
    }

    /// 设置粘性阻尼系数
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// 最近一次收到的力矩指令
    pub fn last_torques(&self) -> [f64; JOINT_COUNT] {
        self.last_torques
    }
}

impl RobotService for SimRobot {
    fn joint_positions(&mut self) -> Result<Vec<f64>, RobotError> {
        Ok(self.q.to_vec())
    }

    fn joint_velocities(&mut self) -> Result<Vec<f64>, RobotError> {
        Ok(self.qd.to_vec())
    }

    fn ee_pose(&mut self) -> Result<EePose, RobotError> {
        // 没有运动学模型，固定返回单位位姿
        Ok(EePose::identity())
    }

    fn send_joint_torques(&mut self, torques: &JointTorques) -> Result<(), RobotError> {
        for i in 0..JOINT_COUNT {
            let torque = torques[i].value();
            self.last_torques[i] = torque;

            let qdd = torque - self.damping * self.qd[i];
            self.qd[i] += qdd * self.dt;
            self.q[i] += self.qd[i] * self.dt;
        }
        Ok(())
    }

    fn go_home(&mut self, home: &JointPositions) -> Result<(), RobotError> {
        // 模拟回零：直接瞬移到位并静止
        for i in 0..JOINT_COUNT {
            self.q[i] = home[i].value();
            self.qd[i] = 0.0;
        }
        Ok(())
    }
}

/// 模拟相机
///
/// 每帧返回同一张纯灰彩色图和恒定深度图。
#[derive(Debug, Clone)]
pub struct MockCamera {
    width: u32,
    height: u32,
}

impl MockCamera {
    /// 创建模拟相机
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl CameraService for MockCamera {
    fn frame(&mut self) -> Result<(ColorImage, DepthImage), CameraError> {
        let pixel_count = (self.width * self.height) as usize;
        Ok((
            ColorImage {
                width: self.width,
                height: self.height,
                pixels: vec![128; pixel_count * 3],
            },
            DepthImage {
                width: self.width,
                height: self.height,
                depths: vec![1000; pixel_count],
            },
        ))
    }
}
