//! Voice Context - Errors

use thiserror::Error;

/// 单行音色列表格式错误的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedLineReason {
    /// 名称后没有空白分隔的区域码部分
    MissingLocaleSeparator,
    /// 区域码后缺少 `#` 示例句标记
    MissingSampleMarker,
}

impl std::fmt::Display for MalformedLineReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingLocaleSeparator => write!(f, "名称后缺少空白分隔"),
            Self::MissingSampleMarker => write!(f, "缺少 '#' 示例句标记"),
        }
    }
}

#[derive(Debug, Error)]
pub enum VoiceError {
    #[error("音色列表格式错误（第 {line_number} 行，{reason}）: {line:?}")]
    MalformedListing {
        line_number: usize,
        line: String,
        reason: MalformedLineReason,
    },
}
