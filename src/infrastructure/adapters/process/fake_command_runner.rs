//! Fake Command Runner - 用于测试的进程执行器
//!
//! 不启动任何进程：记录收到的参数向量，返回预设的结果

use async_trait::async_trait;
use chrono::Utc;
use std::ffi::OsString;
use std::sync::Mutex;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::application::ports::{
    CommandInvocation, CommandRunnerPort, InvocationOutcome, RunnerError,
};

/// 预设结果
#[derive(Debug, Clone)]
enum FakeScript {
    Exit {
        exit_code: i32,
        stdout: String,
        stderr: String,
    },
    LaunchFailure,
}

/// Fake Command Runner
///
/// 始终返回构造时配置的结果；取消令牌已触发时返回 `Cancelled`
pub struct FakeCommandRunner {
    script: FakeScript,
    invocations: Mutex<Vec<CommandInvocation>>,
}

impl FakeCommandRunner {
    fn with_script(script: FakeScript) -> Self {
        Self {
            script,
            invocations: Mutex::new(Vec::new()),
        }
    }

    /// 退出码 0，输出给定 stdout
    pub fn succeeding(stdout: impl Into<String>) -> Self {
        Self::failing(0, stdout, "")
    }

    /// 以给定退出码结束
    pub fn failing(
        exit_code: i32,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self::with_script(FakeScript::Exit {
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        })
    }

    /// 模拟程序不存在
    pub fn unlaunchable() -> Self {
        Self::with_script(FakeScript::LaunchFailure)
    }

    /// 已收到的全部调用（按顺序）
    pub fn invocations(&self) -> Vec<CommandInvocation> {
        self.invocations
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// 最近一次调用的参数向量
    pub fn last_arguments(&self) -> Option<Vec<OsString>> {
        self.invocations().pop().map(|invocation| invocation.args)
    }
}

#[async_trait]
impl CommandRunnerPort for FakeCommandRunner {
    async fn run(
        &self,
        invocation: &CommandInvocation,
        cancel: &CancellationToken,
    ) -> Result<InvocationOutcome, RunnerError> {
        self.invocations
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(invocation.clone());

        tracing::debug!(
            program = %invocation.program,
            args = invocation.args.len(),
            "FakeCommandRunner: returning scripted outcome"
        );

        if cancel.is_cancelled() {
            return Err(RunnerError::Cancelled);
        }

        match &self.script {
            FakeScript::Exit {
                exit_code,
                stdout,
                stderr,
            } => {
                let now = Utc::now();
                Ok(InvocationOutcome {
                    exit_code: *exit_code,
                    start_time: now,
                    exit_time: now,
                    run_time: Duration::ZERO,
                    stdout: stdout.clone(),
                    stderr: stderr.clone(),
                })
            }
            FakeScript::LaunchFailure => Err(RunnerError::Launch {
                program: invocation.program.clone(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("{}: command not found", invocation.program),
                ),
            }),
        }
    }
}
