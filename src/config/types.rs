//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::time::Duration;

use crate::application::{SayInvokerConfig, DEFAULT_PROGRAM};

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// say 命令配置
    #[serde(default)]
    pub say: SayToolConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// say 命令配置
#[derive(Debug, Clone, Deserialize)]
pub struct SayToolConfig {
    /// 可执行程序名或路径
    #[serde(default = "default_program")]
    pub program: String,

    /// 单次调用超时（秒），0 表示不限时
    #[serde(default)]
    pub timeout_secs: u64,
}

fn default_program() -> String {
    DEFAULT_PROGRAM.to_string()
}

impl Default for SayToolConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            timeout_secs: 0,
        }
    }
}

impl SayToolConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    /// 转换为 Invoker 配置
    pub fn invoker_config(&self) -> SayInvokerConfig {
        SayInvokerConfig {
            program: self.program.clone(),
            timeout: self.timeout(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.say.program, "say");
        assert_eq!(config.say.timeout_secs, 0);
        assert_eq!(config.log.level, "info");
        assert!(!config.log.json);
    }

    #[test]
    fn test_zero_timeout_means_unlimited() {
        let config = SayToolConfig::default();
        assert_eq!(config.timeout(), None);
        assert_eq!(config.invoker_config().timeout, None);
    }

    #[test]
    fn test_invoker_config_carries_program_and_timeout() {
        let config = SayToolConfig {
            program: "/usr/bin/say".to_string(),
            timeout_secs: 15,
        };
        let invoker = config.invoker_config();
        assert_eq!(invoker.program, "/usr/bin/say");
        assert_eq!(invoker.timeout, Some(Duration::from_secs(15)));
    }
}
