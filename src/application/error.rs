//! 应用层错误定义
//!
//! 所有 say 调用统一返回的错误类型

use std::time::Duration;
use thiserror::Error;

use crate::application::ports::{InvocationOutcome, RunnerError};
use crate::domain::voice::VoiceError;

/// say 调用错误
#[derive(Debug, Error)]
pub enum SayError {
    /// 命令以非零退出码结束，携带完整的执行结果
    #[error("say command failed with exit code {}", .0.exit_code)]
    CommandFailure(Box<InvocationOutcome>),

    /// 程序无法启动（不存在、无权限等），没有退出码
    #[error("Failed to launch `{program}`: {source}")]
    ProcessLaunchFailure {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// 音色列表输出不符合预期格式
    #[error(transparent)]
    MalformedVoiceListing(#[from] VoiceError),

    #[error("say command cancelled")]
    Cancelled,

    #[error("say command timed out after {0:?}")]
    TimedOut(Duration),

    #[error("IO error: {0}")]
    Io(#[source] std::io::Error),
}

impl SayError {
    /// 获取失败命令的执行结果（仅 CommandFailure 有）
    pub fn outcome(&self) -> Option<&InvocationOutcome> {
        match self {
            Self::CommandFailure(outcome) => Some(&**outcome),
            _ => None,
        }
    }

    pub fn exit_code(&self) -> Option<i32> {
        self.outcome().map(|outcome| outcome.exit_code)
    }
}

impl From<RunnerError> for SayError {
    fn from(err: RunnerError) -> Self {
        match err {
            RunnerError::Launch { program, source } => {
                Self::ProcessLaunchFailure { program, source }
            }
            RunnerError::Wait(source) => Self::Io(source),
            RunnerError::Cancelled => Self::Cancelled,
            RunnerError::TimedOut(after) => Self::TimedOut(after),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_launch_error_maps_to_process_launch_failure() {
        let err: SayError = RunnerError::Launch {
            program: "say".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        }
        .into();

        assert!(matches!(err, SayError::ProcessLaunchFailure { ref program, .. } if program == "say"));
        assert!(err.outcome().is_none());
    }

    #[test]
    fn test_command_failure_message_includes_exit_code() {
        let now = Utc::now();
        let err = SayError::CommandFailure(Box::new(InvocationOutcome {
            exit_code: 1,
            start_time: now,
            exit_time: now,
            run_time: Duration::from_millis(5),
            stdout: String::new(),
            stderr: "voice not found\n".to_string(),
        }));

        assert_eq!(err.exit_code(), Some(1));
        assert_eq!(err.to_string(), "say command failed with exit code 1");
        assert_eq!(err.outcome().unwrap().stderr, "voice not found\n");
    }
}
