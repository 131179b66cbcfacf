//! Voice Context - Value Objects

use serde::Serialize;

/// 已安装音色记录
///
/// 由 `say -v ?` 输出的一行解析而来，创建后不可变。
/// `locale_code` 是引擎自带的区域标记（如 `en_US`），比较时是否忽略大小写由调用方决定。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VoiceRecord {
    name: String,
    locale_code: String,
    sample_phrase: String,
}

impl VoiceRecord {
    pub(crate) fn new(
        name: impl Into<String>,
        locale_code: impl Into<String>,
        sample_phrase: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            locale_code: locale_code.into(),
            sample_phrase: sample_phrase.into(),
        }
    }

    /// 传给 `-v` 的音色名称
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn locale_code(&self) -> &str {
        &self.locale_code
    }

    /// 演示用的示例句
    pub fn sample_phrase(&self) -> &str {
        &self.sample_phrase
    }
}

impl std::fmt::Display for VoiceRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.locale_code)
    }
}
