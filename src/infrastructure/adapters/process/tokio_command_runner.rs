//! Tokio Command Runner - 基于 tokio::process 的进程执行器
//!
//! 实现 CommandRunnerPort trait：
//! - 参数向量直接交给 execve，不经过 shell
//! - stdin 置空，stdout / stderr 分别完整读入内存
//! - 取消或超时时依赖 kill_on_drop 结束子进程，由 tokio 运行时回收

use async_trait::async_trait;
use chrono::Utc;
use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;

use crate::application::ports::{
    CommandInvocation, CommandRunnerPort, InvocationOutcome, RunnerError,
};

/// 被信号终止、没有退出码时使用的值
const SIGNALLED_EXIT_CODE: i32 = -1;

/// Tokio 进程执行器
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioCommandRunner;

impl TokioCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunnerPort for TokioCommandRunner {
    async fn run(
        &self,
        invocation: &CommandInvocation,
        cancel: &CancellationToken,
    ) -> Result<InvocationOutcome, RunnerError> {
        if cancel.is_cancelled() {
            return Err(RunnerError::Cancelled);
        }

        let mut command = Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let start_time = Utc::now();
        let started = Instant::now();

        let child = command.spawn().map_err(|source| RunnerError::Launch {
            program: invocation.program.clone(),
            source,
        })?;

        tracing::debug!(
            program = %invocation.program,
            pid = ?child.id(),
            "Child process spawned"
        );

        let timeout = invocation.timeout;
        let deadline = async move {
            match timeout {
                Some(after) => tokio::time::sleep(after).await,
                None => std::future::pending::<()>().await,
            }
        };

        // 分支结束时 wait_with_output 的 future 被丢弃，子进程随之被 kill
        let output = tokio::select! {
            result = child.wait_with_output() => result.map_err(RunnerError::Wait)?,
            _ = cancel.cancelled() => return Err(RunnerError::Cancelled),
            _ = deadline => return Err(RunnerError::TimedOut(timeout.unwrap_or_default())),
        };

        let run_time = started.elapsed();
        let exit_code = output.status.code().unwrap_or(SIGNALLED_EXIT_CODE);

        tracing::debug!(
            program = %invocation.program,
            exit_code,
            run_time_ms = run_time.as_millis() as u64,
            stdout_len = output.stdout.len(),
            stderr_len = output.stderr.len(),
            "Child process exited"
        );

        Ok(InvocationOutcome {
            exit_code,
            start_time,
            exit_time: Utc::now(),
            run_time,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
