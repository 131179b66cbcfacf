//! 音色目录解析
//!
//! 解析 `say -v ?` 的输出，每行一个音色：
//!
//! ```text
//! Alex                en_US    # Most people recognize me by my voice.
//! ```
//!
//! 名称与区域码之间以第一段空白分隔，区域码与示例句之间以第一个 `#` 分隔。

use std::collections::HashSet;

use super::{MalformedLineReason, VoiceError, VoiceRecord};

/// 解析完整的音色列表输出
///
/// 空行被忽略，结果保持外部工具输出的顺序。
/// 任意一行格式不符都会让整个解析失败，不跳过、不猜测。
pub fn parse_voice_listing(listing: &str) -> Result<Vec<VoiceRecord>, VoiceError> {
    listing
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            parse_voice_line(line).map_err(|reason| VoiceError::MalformedListing {
                line_number: index + 1,
                line: line.to_string(),
                reason,
            })
        })
        .collect()
}

/// 解析单行
fn parse_voice_line(line: &str) -> Result<VoiceRecord, MalformedLineReason> {
    let line = line.trim();

    let (name, rest) = line
        .split_once(char::is_whitespace)
        .ok_or(MalformedLineReason::MissingLocaleSeparator)?;

    let (locale_code, sample_phrase) = rest
        .split_once('#')
        .ok_or(MalformedLineReason::MissingSampleMarker)?;

    Ok(VoiceRecord::new(
        name.trim(),
        locale_code.trim(),
        sample_phrase.trim(),
    ))
}

/// 按区域码筛选（忽略大小写），保持原顺序
///
/// 没有匹配项时返回空列表。
pub fn filter_by_locale<'a>(records: &'a [VoiceRecord], code: &str) -> Vec<&'a VoiceRecord> {
    let wanted = code.to_lowercase();
    records
        .iter()
        .filter(|record| record.locale_code().to_lowercase() == wanted)
        .collect()
}

/// 按首次出现顺序列出不重复的区域码
///
/// 与 [`filter_by_locale`] 不同，这里区分大小写：`en_US` 与 `en_us` 视为两个区域码。
pub fn distinct_locales(records: &[VoiceRecord]) -> Vec<&str> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(VoiceRecord::locale_code)
        .filter(|code| seen.insert(*code))
        .collect()
}
