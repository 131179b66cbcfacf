//! Voice Queries

use std::ffi::OsString;

use crate::application::commands::{SayCommand, VOICE_FLAG};

/// 列出已安装音色（`say -v ?`）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListVoices;

impl SayCommand for ListVoices {
    fn name(&self) -> &'static str {
        "list_voices"
    }

    fn arguments(&self) -> Vec<OsString> {
        vec![VOICE_FLAG.into(), "?".into()]
    }
}
