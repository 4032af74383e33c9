//! 环境配置
//!
//! 命名的 home 位姿表和 PD 增益表，以及选择它们的 [`EnvConfig`]。
//!
//! 表有两层：编译进二进制的内置表（按任务/行为命名），和配置文件
//! 里可选的用户表（同名时遮蔽内置表）。两层都在启动时解析一次，
//! 运行期不可变。未知名字和长度不符的向量在构造期立即报错，绝不
//! 让坏配置以 NaN 的形式往下游传播。
//!
//! # 配置文件示例
//!
//! ```toml
//! home = "scan"
//! hz = 30.0
//! gains = "default"
//! camera = false
//!
//! [homes]
//! bench = [0.0, -0.5, 0.0, -2.4, 0.0, 2.0, 0.8]
//!
//! [gain_profiles.soft]
//! kq = [10.0, 10.0, 10.0, 10.0, 8.0, 8.0, 4.0]
//! kqd = [1.0, 1.0, 1.0, 1.0, 0.5, 0.5, 0.5]
//! ```

use franka_control::pd::GainProfile;
use franka_control::types::{JOINT_COUNT, JointArray, JointPositions, Rad};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// 默认控制频率（Hz）
pub const DEFAULT_CONTROL_HZ: f64 = 30.0;

// ============================================================================
// 内置表
// ============================================================================

/// 关节位置下限（弧度，Franka 出厂限位）
const JOINT_LIMITS_LOW: [f64; JOINT_COUNT] =
    [-2.8973, -1.7628, -2.8973, -3.0718, -2.8973, -0.0175, -2.8973];

/// 关节位置上限（弧度）
const JOINT_LIMITS_HIGH: [f64; JOINT_COUNT] =
    [2.8973, 1.7628, 2.8973, -0.0698, 2.8973, 3.7525, 2.8973];

/// 观测/动作空间的关节限位（低, 高）
pub fn joint_limits() -> (JointPositions, JointPositions) {
    (
        JointArray::new(JOINT_LIMITS_LOW).map(Rad),
        JointArray::new(JOINT_LIMITS_HIGH).map(Rad),
    )
}

/// 内置 home 位姿（按任务命名）
fn builtin_home(name: &str) -> Option<[f64; JOINT_COUNT]> {
    match name {
        "pour" | "scoop" | "insertion" => {
            Some([0.1828, -0.4909, -0.0093, -2.4412, 0.2554, 3.3310, 0.5905])
        },
        "zip" | "circle" => Some([-0.1337, 0.3634, -0.1395, -2.3153, 0.1478, 2.7733, -1.1784]),
        "scan" => Some([-0.2765, -0.6705, 0.1542, -2.5442, 0.1547, 2.2101, -1.0348]),
        _ => None,
    }
}

/// 内置 home 名称（演示/CLI 列表用）
pub fn builtin_home_names() -> &'static [&'static str] {
    &["pour", "scoop", "zip", "circle", "scan", "insertion"]
}

/// 内置增益表（按行为命名：柔顺录制 / 常规 / 高刚度保持）
fn builtin_gains(name: &str) -> Option<([f64; JOINT_COUNT], [f64; JOINT_COUNT])> {
    match name {
        "record" => Some(([1.0; JOINT_COUNT], [1.0; JOINT_COUNT])),
        "default" => Some((
            [26.6667, 40.0000, 33.3333, 33.3333, 23.3333, 16.6667, 6.6667],
            [3.3333, 3.3333, 3.3333, 3.3333, 1.6667, 1.6667, 1.6667],
        )),
        "stiff" => Some((
            [240.0, 360.0, 300.0, 300.0, 210.0, 150.0, 60.0],
            [30.0, 30.0, 30.0, 30.0, 15.0, 15.0, 15.0],
        )),
        _ => None,
    }
}

/// 内置增益表名称
pub fn builtin_gain_names() -> &'static [&'static str] {
    &["record", "default", "stiff"]
}

// ============================================================================
// 配置结构
// ============================================================================

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// home 名称在内置表和用户表里都不存在
    #[error("Unknown home position: {name}")]
    UnknownHome {
        /// 请求的名称
        name: String,
    },

    /// 增益表名称在内置表和用户表里都不存在
    #[error("Unknown gain profile: {name}")]
    UnknownGainProfile {
        /// 请求的名称
        name: String,
    },

    /// 用户表里的向量长度与关节数不符
    #[error("Wrong arity in {table} entry '{name}': expected {expected} values, got {actual}")]
    WrongArity {
        /// 表名（"homes" 或 "gain_profiles"）
        table: &'static str,
        /// 表项名称
        name: String,
        /// 期望长度
        expected: usize,
        /// 实际长度
        actual: usize,
    },

    /// 读配置文件失败
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// 解析配置文件失败
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// 用户增益表项
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GainTable {
    /// 比例增益（逐关节）
    pub kq: Vec<f64>,
    /// 微分增益（逐关节）
    pub kqd: Vec<f64>,
}

/// 环境配置
///
/// 启动时构造一次，运行期不可变。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    /// home 位姿名称
    pub home: String,

    /// 控制频率（Hz）
    pub hz: f64,

    /// 增益表名称
    pub gains: String,

    /// 是否在观测里带相机帧
    pub camera: bool,

    /// 用户 home 表（同名遮蔽内置表）
    pub homes: HashMap<String, Vec<f64>>,

    /// 用户增益表（同名遮蔽内置表）
    pub gain_profiles: HashMap<String, GainTable>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            home: "pour".to_string(),
            hz: DEFAULT_CONTROL_HZ,
            gains: "default".to_string(),
            camera: true,
            homes: HashMap::new(),
            gain_profiles: HashMap::new(),
        }
    }
}

impl EnvConfig {
    /// 从 TOML 文件加载
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// 解析 home 位姿
    ///
    /// 先查用户表再查内置表，未知名称和长度不符都在这里失败。
    pub fn resolve_home(&self) -> Result<JointPositions, ConfigError> {
        if let Some(values) = self.homes.get(&self.home) {
            let arr = JointArray::from_slice(values).map_err(|_| ConfigError::WrongArity {
                table: "homes",
                name: self.home.clone(),
                expected: JOINT_COUNT,
                actual: values.len(),
            })?;
            return Ok(arr.map(Rad));
        }

        builtin_home(&self.home)
            .map(|values| JointArray::new(values).map(Rad))
            .ok_or_else(|| ConfigError::UnknownHome { name: self.home.clone() })
    }

    /// 解析增益表
    pub fn resolve_gains(&self) -> Result<GainProfile, ConfigError> {
        if let Some(table) = self.gain_profiles.get(&self.gains) {
            let wrong_arity = |actual: usize| ConfigError::WrongArity {
                table: "gain_profiles",
                name: self.gains.clone(),
                expected: JOINT_COUNT,
                actual,
            };
            let kq =
                JointArray::from_slice(&table.kq).map_err(|_| wrong_arity(table.kq.len()))?;
            let kqd =
                JointArray::from_slice(&table.kqd).map_err(|_| wrong_arity(table.kqd.len()))?;
            return Ok(GainProfile::new(kq, kqd));
        }

        builtin_gains(&self.gains)
            .map(|(kq, kqd)| GainProfile::new(JointArray::new(kq), JointArray::new(kqd)))
            .ok_or_else(|| ConfigError::UnknownGainProfile { name: self.gains.clone() })
    }
}
