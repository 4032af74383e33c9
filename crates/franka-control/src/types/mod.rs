//! 控制核心的基础类型
//!
//! - `joint` - 关节索引与固定 7 元关节数组
//! - `units` - 强类型单位（弧度、角度、牛·米）
//! - `error` - 控制核心错误

pub mod error;
pub mod joint;
pub mod units;

pub use error::ControlError;
pub use joint::{JOINT_COUNT, Joint, JointArray, JointPositions, JointTorques, JointVelocities};
pub use units::{Deg, NewtonMeter, Rad};
