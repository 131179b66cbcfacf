//! Command Runner Port - 外部进程执行抽象
//!
//! 定义启动一个子进程并收集其输出的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::ffi::OsString;
use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// 进程执行错误
#[derive(Debug, Error)]
pub enum RunnerError {
    /// 程序不存在或无法启动，没有退出码
    #[error("Failed to launch `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to wait for child process: {0}")]
    Wait(#[source] std::io::Error),

    #[error("Invocation cancelled")]
    Cancelled,

    #[error("Invocation timed out after {0:?}")]
    TimedOut(Duration),
}

/// 一次进程调用
///
/// `args` 是逐个独立传给子进程的参数，不经过 shell，也不做任何引号处理。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    /// 可执行程序名或路径
    pub program: String,
    /// 参数向量
    pub args: Vec<OsString>,
    /// 截止时间，None 表示不限时
    pub timeout: Option<Duration>,
}

impl CommandInvocation {
    pub fn new(program: impl Into<String>, args: Vec<OsString>) -> Self {
        Self {
            program: program.into(),
            args,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// 进程执行结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationOutcome {
    /// 退出码（被信号终止时为 -1）
    pub exit_code: i32,
    pub start_time: DateTime<Utc>,
    pub exit_time: DateTime<Utc>,
    /// 运行时长
    pub run_time: Duration,
    /// 完整的标准输出
    pub stdout: String,
    /// 完整的标准错误
    pub stderr: String,
}

impl InvocationOutcome {
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Command Runner Port
///
/// 每次调用只启动一个子进程，不重试。
/// 实现必须在所有退出路径（含取消、超时）上释放子进程句柄。
#[async_trait]
pub trait CommandRunnerPort: Send + Sync {
    /// 执行进程并收集 stdout / stderr
    async fn run(
        &self,
        invocation: &CommandInvocation,
        cancel: &CancellationToken,
    ) -> Result<InvocationOutcome, RunnerError>;
}
