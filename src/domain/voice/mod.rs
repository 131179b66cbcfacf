//! Voice Context - 音色限界上下文
//!
//! 职责:
//! - 解析已安装音色列表
//! - 按区域码筛选、去重

mod catalog;
mod errors;
mod value_objects;

pub use catalog::{distinct_locales, filter_by_locale, parse_voice_listing};
pub use errors::{MalformedLineReason, VoiceError};
pub use value_objects::VoiceRecord;
