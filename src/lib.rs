//! saykit - macOS `say` 命令的类型化封装
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Voice Context: 音色列表解析、按区域码筛选
//!
//! 应用层 (application/):
//! - Ports: CommandRunnerPort（进程执行抽象）
//! - Commands / Queries: 每种调用的参数向量构造
//! - Invoker: 执行并把退出码、输出映射为 SayError
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: TokioCommandRunner（真实进程）、FakeCommandRunner（测试用）

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::{speak_sample_phrase, SayError, SayInvoker, SayInvokerConfig};
pub use config::{load_config, AppConfig};
pub use domain::voice::{distinct_locales, filter_by_locale, parse_voice_listing, VoiceRecord};
