//! # Franka CLI
//!
//! 环境的演示/诊断工具：不需要硬件，用 `franka_env::mock` 的模拟
//! 机器人把 step/reset/observe 循环完整跑一遍。
//!
//! ```bash
//! # 列出内置表
//! franka-cli homes
//! franka-cli gains
//!
//! # 用 stiff 增益在 scan 位姿附近跑 300 步
//! franka-cli run --home scan --gains stiff --steps 300
//!
//! # 从配置文件启动
//! franka-cli run --config env.toml
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use franka_control::types::Joint;
use franka_env::config::{builtin_gain_names, builtin_home_names};
use franka_env::mock::{MockCamera, SimRobot};
use franka_env::{EnvConfig, FrankaEnv};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::info;

/// Franka CLI - 环境演示工具
#[derive(Parser, Debug)]
#[command(name = "franka-cli")]
#[command(about = "Demo and diagnostics CLI for the Franka environment", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 对模拟机器人跑环境循环
    Run {
        /// 配置文件（TOML），命令行参数覆盖文件内容
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// home 位姿名称
        #[arg(long)]
        home: Option<String>,

        /// 增益表名称
        #[arg(long)]
        gains: Option<String>,

        /// 控制频率（Hz）
        #[arg(long)]
        hz: Option<f64>,

        /// 步数
        #[arg(long, default_value_t = 100)]
        steps: u64,

        /// 观测里带模拟相机帧
        #[arg(long)]
        camera: bool,
    },

    /// 列出内置 home 位姿
    Homes,

    /// 列出内置增益表
    Gains,
}

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("franka_cli=info".parse().unwrap())
                .add_directive("franka_env=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, home, gains, hz, steps, camera } => {
            run(config, home, gains, hz, steps, camera)
        },
        Commands::Homes => {
            for name in builtin_home_names() {
                println!("{name}");
            }
            Ok(())
        },
        Commands::Gains => {
            for name in builtin_gain_names() {
                println!("{name}");
            }
            Ok(())
        },
    }
}

fn run(
    config_path: Option<PathBuf>,
    home: Option<String>,
    gains: Option<String>,
    hz: Option<f64>,
    steps: u64,
    camera: bool,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => EnvConfig::load_from_file(path)?,
        None => EnvConfig::default(),
    };
    if let Some(home) = home {
        config.home = home;
    }
    if let Some(gains) = gains {
        config.gains = gains;
    }
    if let Some(hz) = hz {
        config.hz = hz;
    }
    config.camera = camera;

    // Ctrl-C 只置标志，让当前节拍跑完再退出
    let running = Arc::new(AtomicBool::new(true));
    let handler_flag = running.clone();
    ctrlc::set_handler(move || {
        handler_flag.store(false, Ordering::SeqCst);
    })?;

    info!(
        home = %config.home,
        gains = %config.gains,
        hz = config.hz,
        "starting environment against simulated robot"
    );

    let robot = SimRobot::new(1.0 / config.hz);
    let mock_camera = config.camera.then(|| MockCamera::new(64, 48));
    let mut env = FrankaEnv::new(&config, robot, mock_camera)?;

    // 朝 home 位姿本身调节（模拟器回零后误差为零，观察保持行为）
    for step in 0..steps {
        if !running.load(Ordering::SeqCst) {
            info!("interrupted, stopping after {step} steps");
            break;
        }

        let outcome = env.step(None)?;
        if step % 30 == 0 {
            let q = outcome.observation.q;
            info!(
                step,
                j1 = %q[Joint::J1],
                j4 = %q[Joint::J4],
                j7 = %q[Joint::J7],
                "tick"
            );
        }
    }

    env.close();
    info!(steps = env.curr_step(), "environment closed");
    Ok(())
}
