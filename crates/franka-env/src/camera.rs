//! 相机服务接口
//!
//! 帧采集由外部相机服务完成；环境层只在组装观测时取一帧彩色图和
//! 一帧深度图，不做任何视觉处理。

use thiserror::Error;

/// 相机服务错误
#[derive(Debug, Error)]
pub enum CameraError {
    /// 采集失败
    #[error("Camera capture failed: {0}")]
    Capture(String),
}

/// 彩色图像（RGB8，行优先）
#[derive(Debug, Clone, PartialEq)]
pub struct ColorImage {
    /// 宽（像素）
    pub width: u32,
    /// 高（像素）
    pub height: u32,
    /// 像素数据，长度为 `width * height * 3`
    pub pixels: Vec<u8>,
}

/// 深度图像（毫米，行优先）
#[derive(Debug, Clone, PartialEq)]
pub struct DepthImage {
    /// 宽（像素）
    pub width: u32,
    /// 高（像素）
    pub height: u32,
    /// 深度数据，长度为 `width * height`
    pub depths: Vec<u16>,
}

/// 相机服务（外部协作者的进程内接口）
pub trait CameraService {
    /// 取一帧（彩色 + 深度）
    fn frame(&mut self) -> Result<(ColorImage, DepthImage), CameraError>;
}

/// 无相机占位类型
///
/// 不可构造（空枚举），用于没有相机的环境实例化
/// `FrankaEnv<R, NoCamera>`。
#[derive(Debug, Clone, Copy)]
pub enum NoCamera {}

impl CameraService for NoCamera {
    fn frame(&mut self) -> Result<(ColorImage, DepthImage), CameraError> {
        match *self {}
    }
}
