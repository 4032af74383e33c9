//! RL 风格的环境包装
//!
//! 把控制原语（PD 控制器 + 节拍器）和外部服务（机器人、相机）组装
//! 成 step/reset/observe 接口。PD 策略在本进程内托管：每个 `step`
//! 就是一个完整的控制节拍——读遥测、算力矩、下发、等节拍。
//!
//! 奖励恒为 0，终止恒为 false：奖励与终止判定属于调用方的训练
//! 框架，不属于环境本体。
//!
//! # 控制循环
//!
//! ```text
//! step(action):
//!   action 非空时 -> controller.set_desired(action)
//!   q, qdot <- robot 遥测
//!   torque  <- controller.compute_torque(q, qdot)
//!   robot.send_joint_torques(torque)
//!   rate.tick()                      # 唯一会阻塞的操作
//!   返回 observe()
//! ```

use crate::camera::{CameraError, CameraService};
use crate::config::{ConfigError, EnvConfig};
use crate::observation::Observation;
use crate::robot::{RobotError, RobotService};
use franka_control::pd::{GainProfile, JointPdController};
use franka_control::rate::RateLimiter;
use franka_control::types::{ControlError, JointArray, JointPositions, NewtonMeter, Rad};
use thiserror::Error;

/// 环境错误
#[derive(Debug, Error)]
pub enum EnvError {
    /// 配置错误
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// 控制核心错误
    #[error("Control error: {0}")]
    Control(#[from] ControlError),

    /// 机器人服务错误
    #[error("Robot error: {0}")]
    Robot(#[from] RobotError),

    /// 相机服务错误
    #[error("Camera error: {0}")]
    Camera(#[from] CameraError),
}

/// 一次 step 的结果
///
/// `reward` 恒为 0.0、`done` 恒为 false——字段保留是为了和常规
/// RL 环境的返回形状对齐。
#[derive(Debug, Clone)]
pub struct StepOutcome {
    /// 本节拍结束后的观测
    pub observation: Observation,
    /// 恒为 0.0
    pub reward: f64,
    /// 恒为 false
    pub done: bool,
}

/// Franka 环境
///
/// 独占地持有控制器状态和节拍状态；单线程同步模型，所有方法在调用
/// 线程上顺序执行，只有 [`FrankaEnv::step`] 内部的节拍等待会阻塞。
pub struct FrankaEnv<R: RobotService, C: CameraService = crate::camera::NoCamera> {
    robot: R,
    camera: Option<C>,
    controller: JointPdController,
    rate: RateLimiter,
    home: JointPositions,
    gains: GainProfile,
    curr_step: u64,
}

impl<R: RobotService, C: CameraService> FrankaEnv<R, C> {
    /// 创建环境
    ///
    /// 解析配置（未知名称/坏向量在这里失败）、校验控制频率，然后
    /// 执行一次回零：机器人回到 home 位姿，PD 控制器用回零后的实际
    /// 关节位置作为初始设定点——避免第一拍就产生大误差力矩。
    ///
    /// 配置里 `camera = false` 时忽略注入的相机服务。
    pub fn new(config: &EnvConfig, robot: R, camera: Option<C>) -> Result<Self, EnvError> {
        let home = config.resolve_home()?;
        let gains = config.resolve_gains()?;
        let rate = RateLimiter::new(config.hz)?;
        let camera = if config.camera { camera } else { None };

        let mut env = Self {
            robot,
            camera,
            // 占位；rehome() 会用回零后的遥测重建
            controller: JointPdController::new(home, gains.clone()),
            rate,
            home,
            gains,
            curr_step: 0,
        };
        env.rehome()?;
        Ok(env)
    }

    /// 执行一个控制节拍
    ///
    /// `action` 非空时成为新的设定点（长度必须为 7）；随后完成一次
    /// 感知-计算-执行循环并等到节拍结束。
    pub fn step(&mut self, action: Option<&[f64]>) -> Result<StepOutcome, EnvError> {
        if let Some(action) = action {
            self.controller.set_desired(action)?;
        }

        let q = self.robot.joint_positions()?;
        let qd = self.robot.joint_velocities()?;
        let torques = self.controller.compute_torque(&q, &qd)?;
        self.robot.send_joint_torques(&torques)?;

        self.rate.tick();
        self.curr_step += 1;
        tracing::trace!(step = self.curr_step, "control tick complete");

        Ok(StepOutcome {
            observation: self.observe()?,
            reward: 0.0,
            done: false,
        })
    }

    /// 重置环境
    ///
    /// 重新回零并重建控制器（设定点状态只能通过重建来重置），步数
    /// 归零，返回新一轮的首个观测。
    pub fn reset(&mut self) -> Result<Observation, EnvError> {
        self.rehome()?;
        self.observe()
    }

    /// 组装当前观测
    pub fn observe(&mut self) -> Result<Observation, EnvError> {
        let q = JointArray::from_slice(&self.robot.joint_positions()?)?.map(Rad);
        let qdot = JointArray::from_slice(&self.robot.joint_velocities()?)?.map(Rad);
        let ee_pose = self.robot.ee_pose()?.flatten();

        let (rgb, depth) = match self.camera.as_mut() {
            Some(camera) => {
                let (color, depth) = camera.frame()?;
                (Some(color), Some(depth))
            },
            None => (None, None),
        };

        Ok(Observation { q, qdot, ee_pose, rgb, depth })
    }

    /// 关闭环境
    ///
    /// 发一帧零力矩让底层控制器松开关节。发送失败只记录告警不返回
    /// 错误——关闭路径上软降级，别让清理动作本身把调用方炸掉。
    pub fn close(&mut self) {
        let zero = JointArray::splat(NewtonMeter::ZERO);
        if let Err(e) = self.robot.send_joint_torques(&zero) {
            tracing::warn!("Failed to send zero torques on close: {e}. Continuing anyway.");
        }
    }

    /// 自环境创建/上次 reset 以来的步数
    pub fn curr_step(&self) -> u64 {
        self.curr_step
    }

    /// PD 控制器（只读）
    pub fn controller(&self) -> &JointPdController {
        &self.controller
    }

    /// 底层机器人服务
    pub fn robot_mut(&mut self) -> &mut R {
        &mut self.robot
    }

    /// 回零并重建控制器状态
    fn rehome(&mut self) -> Result<(), EnvError> {
        tracing::info!("homing robot and rebuilding PD controller");
        self.robot.go_home(&self.home)?;

        let q_raw = self.robot.joint_positions()?;
        let q = JointArray::from_slice(&q_raw)?.map(Rad);
        self.controller = JointPdController::new(q, self.gains.clone());
        self.curr_step = 0;
        Ok(())
    }
}
