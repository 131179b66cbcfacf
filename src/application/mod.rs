//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（CommandRunner）
//! - commands: 朗读 / 写文件命令及参数构造
//! - queries: 音色列表查询
//! - invoker: 执行命令并映射结果
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod invoker;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{SayCommand, Speak, SpeakFromFile, WriteFileToFile, WriteToFile};

pub use error::SayError;

pub use invoker::{speak_sample_phrase, SayInvoker, SayInvokerConfig, DEFAULT_PROGRAM};

pub use ports::{CommandInvocation, CommandRunnerPort, InvocationOutcome, RunnerError};

pub use queries::ListVoices;
