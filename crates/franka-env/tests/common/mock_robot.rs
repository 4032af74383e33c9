//! 脚本化的模拟机器人
//!
//! 与 `franka_env::mock::SimRobot` 不同，这里不做动力学：遥测由
//! 测试脚本直接写入共享状态，下发的力矩全部记录下来供断言。

use franka_control::types::{JointPositions, JointTorques};
use franka_env::camera::{CameraError, CameraService, ColorImage, DepthImage};
use franka_env::robot::{EePose, RobotError, RobotService};
use std::sync::{Arc, Mutex};

/// 共享的机器人状态（测试脚本可直接改写）
#[derive(Debug)]
pub struct MockRobotState {
    /// 下一次遥测返回的关节位置
    pub q: Vec<f64>,
    /// 下一次遥测返回的关节速度
    pub qd: Vec<f64>,
    /// 收到的所有力矩指令（按原始值记录）
    pub sent_torques: Vec<Vec<f64>>,
    /// go_home 被调用的次数
    pub home_calls: usize,
    /// 为 true 时所有调用返回传输错误
    pub fail_transport: bool,
}

/// 脚本化模拟机器人
///
/// Clone 共享同一份状态，测试可以在把实例交给环境之后继续通过
/// 自己持有的句柄改写遥测、检查指令。
#[derive(Debug, Clone)]
pub struct MockRobot {
    state: Arc<Mutex<MockRobotState>>,
}

impl MockRobot {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockRobotState {
                q: vec![0.0; 7],
                qd: vec![0.0; 7],
                sent_torques: Vec::new(),
                home_calls: 0,
                fail_transport: false,
            })),
        }
    }

    /// 共享状态句柄
    pub fn state(&self) -> Arc<Mutex<MockRobotState>> {
        self.state.clone()
    }
}

impl RobotService for MockRobot {
    fn joint_positions(&mut self) -> Result<Vec<f64>, RobotError> {
        let state = self.state.lock().unwrap();
        if state.fail_transport {
            return Err(RobotError::Transport("mock transport down".to_string()));
        }
        Ok(state.q.clone())
    }

    fn joint_velocities(&mut self) -> Result<Vec<f64>, RobotError> {
        let state = self.state.lock().unwrap();
        if state.fail_transport {
            return Err(RobotError::Transport("mock transport down".to_string()));
        }
        Ok(state.qd.clone())
    }

    fn ee_pose(&mut self) -> Result<EePose, RobotError> {
        Ok(EePose::identity())
    }

    fn send_joint_torques(&mut self, torques: &JointTorques) -> Result<(), RobotError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_transport {
            return Err(RobotError::Transport("mock transport down".to_string()));
        }
        state.sent_torques.push(torques.iter().map(|t| t.value()).collect());
        Ok(())
    }

    fn go_home(&mut self, home: &JointPositions) -> Result<(), RobotError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_transport {
            return Err(RobotError::Transport("mock transport down".to_string()));
        }
        state.home_calls += 1;
        state.q = home.iter().map(|r| r.value()).collect();
        state.qd = vec![0.0; 7];
        Ok(())
    }
}

/// 固定尺寸帧的测试相机
#[derive(Debug, Clone)]
pub struct TestCamera;

impl CameraService for TestCamera {
    fn frame(&mut self) -> Result<(ColorImage, DepthImage), CameraError> {
        Ok((
            ColorImage { width: 2, height: 2, pixels: vec![0; 12] },
            DepthImage { width: 2, height: 2, depths: vec![500; 4] },
        ))
    }
}
