//! 固定频率控制节拍
//!
//! 在控制循环的两次迭代之间维持最小的墙钟间隔，把循环近似锁定在
//! 目标频率上。
//!
//! # 定时语义
//!
//! 相对截止期，而非绝对锚点：`tick()` 睡掉本周期的剩余时间，然后把
//! `last_tick` 更新为睡醒后的当前时刻。不变式是"任何一次 `tick()`
//! 返回距上一次返回至少一个周期"——超时的迭代不被补偿，长期平均
//! 频率不做保证。需要消除累积漂移的高频场景应使用绝对时间锚点，
//! 本环境 30Hz 的 POMDP 循环不需要。
//!
//! # 示例
//!
//! ```rust
//! use franka_control::rate::RateLimiter;
//! use std::time::Duration;
//!
//! let mut rate = RateLimiter::new(100.0).unwrap();
//! assert_eq!(rate.period(), Duration::from_millis(10));
//! rate.tick(); // 距构造不足 10ms 时阻塞补足
//! ```

use crate::types::ControlError;
use std::time::{Duration, Instant};

/// 控制循环节拍器
///
/// 单线程协作模型：`tick()` 是唯一会挂起的操作（阻塞睡眠，不可
/// 中断）。调用方通过不再调用 `tick()` 来停止循环。
#[derive(Debug)]
pub struct RateLimiter {
    /// 目标周期（1 / 频率），构造后不变
    period: Duration,
    /// 上一次 tick 返回的时刻
    last_tick: Instant,
}

impl RateLimiter {
    /// 创建节拍器
    ///
    /// 频率必须为有限正数，否则返回
    /// [`ControlError::InvalidFrequency`]——这里选择构造期校验而
    /// 不是把前置条件推给调用者。构造时刻记为第一个 `last_tick`。
    pub fn new(frequency_hz: f64) -> Result<Self, ControlError> {
        if !frequency_hz.is_finite() || frequency_hz <= 0.0 {
            return Err(ControlError::InvalidFrequency { value: frequency_hz });
        }

        Ok(Self {
            period: Duration::from_secs_f64(1.0 / frequency_hz),
            last_tick: Instant::now(),
        })
    }

    /// 目标周期
    pub fn period(&self) -> Duration {
        self.period
    }

    /// 等到本周期结束
    ///
    /// 距上次 tick 不足一个周期时阻塞补足剩余时间；已经超过周期则
    /// 立即返回（不做追帧睡眠）。两种情况下 `last_tick` 都更新为
    /// 睡眠之后的当前时刻。
    pub fn tick(&mut self) {
        let elapsed = self.last_tick.elapsed();
        if elapsed < self.period {
            spin_sleep::sleep(self.period - elapsed);
        } else {
            tracing::trace!(
                "control tick overran its period: elapsed {:?}, period {:?}",
                elapsed,
                self.period
            );
        }
        self.last_tick = Instant::now();
    }
}
