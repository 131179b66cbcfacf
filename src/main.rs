//! saykit - 列出已安装的 say 音色
//!
//! 用法: `saykit [locale]`
//! 以 JSON 输出音色列表，给出 locale 时只输出该区域码（忽略大小写）的音色

use std::sync::Arc;

use saykit::config::{load_config, print_config};
use saykit::infrastructure::adapters::TokioCommandRunner;
use saykit::{distinct_locales, filter_by_locale, SayInvoker};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志（写到 stderr，stdout 只输出 JSON）
    let log_filter = format!("{},saykit={}", config.log.level, config.log.level);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);
    if config.log.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    print_config(&config);

    let runner = Arc::new(TokioCommandRunner::new());
    let invoker = SayInvoker::new(runner, config.say.invoker_config());

    let voices = invoker.list_voices().await?;
    tracing::info!(
        voices = voices.len(),
        locales = ?distinct_locales(&voices),
        "Installed voices loaded"
    );

    let output = match std::env::args().nth(1) {
        Some(locale) => serde_json::to_string_pretty(&filter_by_locale(&voices, &locale))?,
        None => serde_json::to_string_pretty(&voices)?,
    };
    println!("{}", output);

    Ok(())
}
