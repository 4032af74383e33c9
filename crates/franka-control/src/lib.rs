//! # Franka Control - 关节空间控制原语
//!
//! 机械臂控制栈里真正有控制内容的两个叶子组件：
//!
//! - [`rate::RateLimiter`] - 固定频率节拍器，把控制循环钉在目标频率上
//! - [`pd::JointPdController`] - 关节空间 PD 反馈力矩控制器
//!
//! 以及它们共享的基础类型（[`types`]：关节数组、单位、错误）。
//!
//! **依赖原则**: 本 crate 不依赖环境层和任何传输层——相机、RPC、
//! 观测组装都在 `franka-env`。两个组件之间除共享数据类型外没有
//! 相互依赖。
//!
//! ## 使用示例
//!
//! ```rust
//! use franka_control::{GainProfile, JointPdController, RateLimiter};
//! use franka_control::types::{JointArray, Rad};
//!
//! let mut rate = RateLimiter::new(200.0).unwrap();
//! let pd = JointPdController::new(
//!     JointArray::splat(Rad(0.0)),
//!     GainProfile::uniform(26.7, 3.3),
//! );
//!
//! // 一次控制节拍：读状态 -> 算力矩 -> 下发 -> 等节拍
//! let q = [0.0; 7];
//! let qd = [0.0; 7];
//! let _torque = pd.compute_torque(&q, &qd).unwrap();
//! rate.tick();
//! ```

pub mod pd;
pub mod rate;
pub mod types;

pub use pd::{GainProfile, JointPdController};
pub use rate::RateLimiter;
pub use types::{
    ControlError, JOINT_COUNT, Joint, JointArray, JointPositions, JointTorques, JointVelocities,
    NewtonMeter, Rad,
};
