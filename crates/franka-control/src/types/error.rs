//! 控制核心错误类型

use thiserror::Error;

/// 控制核心错误
///
/// 控制核心只有两类失败：构造期的频率校验，和运行期的维度校验。
/// 传输/RPC 层的失败属于外部机器人服务的契约，不出现在这里。
#[derive(Debug, Error)]
pub enum ControlError {
    /// 输入向量长度与配置的关节数不符
    #[error("Dimension mismatch: expected {expected} joint values, got {actual}")]
    DimensionMismatch {
        /// 期望长度（关节数）
        expected: usize,
        /// 实际长度
        actual: usize,
    },

    /// 非法的控制频率
    #[error("Invalid control frequency: {value} Hz (must be finite and > 0)")]
    InvalidFrequency {
        /// 传入的频率值
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ControlError::DimensionMismatch { expected: 7, actual: 6 };
        assert_eq!(err.to_string(), "Dimension mismatch: expected 7 joint values, got 6");

        let err = ControlError::InvalidFrequency { value: -1.0 };
        assert!(err.to_string().contains("-1"));
    }
}
