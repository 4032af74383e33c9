//! # Franka Env - RL 风格的机械臂环境
//!
//! 在 `franka-control` 的控制原语之上组装一个 step/reset/observe
//! 环境：
//!
//! - [`config`] - 命名的 home 位姿表与 PD 增益表（内置 + TOML 覆盖）
//! - [`robot`] / [`camera`] - 外部机器人/相机服务的进程内接口
//! - [`observation`] - 观测组装（关节状态、末端位姿、相机帧）
//! - [`env`] - [`FrankaEnv`]：每个 step 一个控制节拍
//!
//! ## Feature Flags
//!
//! - `mock` - 无硬件的模拟机器人/相机（演示和下游测试用）
//!
//! ## 使用示例
//!
//! ```rust,no_run
//! use franka_env::{EnvConfig, FrankaEnv};
//! use franka_env::camera::NoCamera;
//! # use franka_env::robot::{EePose, RobotError, RobotService};
//! # use franka_control::types::{JointPositions, JointTorques};
//! # struct Rpc;
//! # impl RobotService for Rpc {
//! #     fn joint_positions(&mut self) -> Result<Vec<f64>, RobotError> { unimplemented!() }
//! #     fn joint_velocities(&mut self) -> Result<Vec<f64>, RobotError> { unimplemented!() }
//! #     fn ee_pose(&mut self) -> Result<EePose, RobotError> { unimplemented!() }
//! #     fn send_joint_torques(&mut self, _: &JointTorques) -> Result<(), RobotError> { unimplemented!() }
//! #     fn go_home(&mut self, _: &JointPositions) -> Result<(), RobotError> { unimplemented!() }
//! # }
//! # fn robot_rpc_client() -> Rpc { Rpc }
//!
//! let config = EnvConfig {
//!     home: "scan".to_string(),
//!     camera: false,
//!     ..Default::default()
//! };
//! let mut env = FrankaEnv::new(&config, robot_rpc_client(), None::<NoCamera>).unwrap();
//!
//! let action = [0.1, -0.5, 0.0, -2.4, 0.2, 3.3, 0.6];
//! let outcome = env.step(Some(&action)).unwrap();
//! assert_eq!(outcome.reward, 0.0);
//! ```

pub mod camera;
pub mod config;
pub mod env;
pub mod observation;
pub mod robot;

#[cfg(feature = "mock")]
pub mod mock;

pub use config::{ConfigError, EnvConfig};
pub use env::{EnvError, FrankaEnv, StepOutcome};
pub use observation::Observation;
pub use robot::{EePose, RobotError, RobotService};
