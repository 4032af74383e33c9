//! 关节空间 PD 控制器
//!
//! 围绕一个期望关节位置做比例-微分反馈，逐关节独立计算力矩。
//!
//! # 算法
//!
//! ```text
//! torque[i] = kq[i] * (q_desired[i] - q[i]) + kqd[i] * (0 - qd[i])
//! ```
//!
//! 期望速度恒为零：比例项把关节拉向设定点，微分项把速度阻尼到零。
//! 没有积分项，没有输出钳位——关节限位与安全钳制属于机器人侧的
//! 安全层，不在本控制器的职责内。
//!
//! # 状态
//!
//! 控制器只有一个可变字段 `q_desired`。外部调用者通过
//! [`JointPdController::set_desired`] 下发新的目标位姿，而不需要
//! 重新构造增益。`compute_torque` 是其输入加当前状态的纯函数，
//! 不阻塞、无副作用。
//!
//! # 示例
//!
//! ```rust
//! use franka_control::pd::{GainProfile, JointPdController};
//! use franka_control::types::{JointArray, Rad};
//!
//! let gains = GainProfile::uniform(1.0, 1.0);
//! let home = JointArray::splat(Rad(0.0));
//! let pd = JointPdController::new(home, gains);
//!
//! let q = [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
//! let qd = [0.0; 7];
//! let torque = pd.compute_torque(&q, &qd).unwrap();
//! assert!((torque[0].value() + 1.0).abs() < 1e-12);
//! ```

use crate::types::{ControlError, JointArray, JointPositions, JointTorques, NewtonMeter, Rad};

/// PD 增益配置
///
/// 每个关节一对比例/微分增益，构造后不可变。
/// 单位：`kq` 为 Nm/rad，`kqd` 为 Nm/(rad/s)。
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GainProfile {
    /// 比例增益（逐关节）
    pub kq: JointArray<f64>,
    /// 微分增益（逐关节）
    pub kqd: JointArray<f64>,
}

impl GainProfile {
    /// 从逐关节增益数组创建
    pub const fn new(kq: JointArray<f64>, kqd: JointArray<f64>) -> Self {
        Self { kq, kqd }
    }

    /// 从切片创建（带维度校验）
    ///
    /// 增益表来自外部配置时长度是动态的，这里统一校验。
    pub fn from_slices(kq: &[f64], kqd: &[f64]) -> Result<Self, ControlError> {
        Ok(Self {
            kq: JointArray::from_slice(kq)?,
            kqd: JointArray::from_slice(kqd)?,
        })
    }

    /// 所有关节使用同一对增益
    pub fn uniform(kq: f64, kqd: f64) -> Self {
        Self {
            kq: JointArray::splat(kq),
            kqd: JointArray::splat(kqd),
        }
    }
}

/// 关节空间 PD 控制器
///
/// 持有当前的期望关节位置和一份不可变的增益配置。由创建它的
/// 控制循环独占所有权，不跨线程共享。
#[derive(Debug, Clone)]
pub struct JointPdController {
    /// 当前设定点
    q_desired: JointPositions,
    /// PD 增益（构造后不变）
    gains: GainProfile,
}

impl JointPdController {
    /// 创建控制器
    ///
    /// `initial_position` 成为初始设定点，通常取机器人当前的关节
    /// 位置，避免上电瞬间产生大误差力矩。
    pub fn new(initial_position: JointPositions, gains: GainProfile) -> Self {
        Self {
            q_desired: initial_position,
            gains,
        }
    }

    /// 当前设定点
    pub fn q_desired(&self) -> JointPositions {
        self.q_desired
    }

    /// 增益配置
    pub fn gains(&self) -> &GainProfile {
        &self.gains
    }

    /// 覆盖设定点
    ///
    /// 只做维度校验，不检查关节限位——越界目标由机器人侧的安全层
    /// 负责拒绝。
    pub fn set_desired(&mut self, q_desired: &[f64]) -> Result<(), ControlError> {
        self.q_desired = JointArray::from_slice(q_desired)?.map(Rad);
        Ok(())
    }

    /// 计算反馈力矩
    ///
    /// 输入为机器人遥测的原始切片（长度必须为 7），逐关节独立计算。
    /// 纯函数：相同的输入和状态产生相同的输出，不阻塞。
    pub fn compute_torque(
        &self,
        q_current: &[f64],
        qd_current: &[f64],
    ) -> Result<JointTorques, ControlError> {
        let q = JointArray::from_slice(q_current)?;
        let qd = JointArray::from_slice(qd_current)?;

        Ok(JointArray::new(std::array::from_fn(|i| {
            let position_error = self.q_desired[i].value() - q[i];
            NewtonMeter(self.gains.kq[i] * position_error + self.gains.kqd[i] * (0.0 - qd[i]))
        })))
    }
}
