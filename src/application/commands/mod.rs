//! 应用层 - 命令
//!
//! 每个命令/查询都是一个值对象，知道如何把自己翻译成 `say` 的参数向量

mod speech_commands;

use std::ffi::OsString;

pub use speech_commands::*;

/// 选择音色
pub(crate) const VOICE_FLAG: &str = "-v";
/// 写入音频文件
pub(crate) const OUTPUT_FLAG: &str = "-o";
/// 从文本文件读取输入
pub(crate) const FILE_FLAG: &str = "-f";

/// 一次 `say` 调用
///
/// 参数必须是独立的 token：每个选项与其值相邻，字面文本（如有）放在最后。
pub trait SayCommand: Send + Sync {
    /// 命令名（用于日志）
    fn name(&self) -> &'static str;

    /// 生成参数向量
    fn arguments(&self) -> Vec<OsString>;
}
