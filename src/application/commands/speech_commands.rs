//! Speech Commands - 朗读 / 写入音频文件
//!
//! 每个命令只负责生成 `say` 的参数向量，执行交给 [`SayInvoker`](crate::application::SayInvoker)。

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::{SayCommand, FILE_FLAG, OUTPUT_FLAG, VOICE_FLAG};

/// 参数结束标记
const END_OF_OPTIONS: &str = "--";

fn push_voice(args: &mut Vec<OsString>, voice: Option<&str>) {
    if let Some(voice) = voice {
        args.push(VOICE_FLAG.into());
        args.push(voice.into());
    }
}

fn push_flag(args: &mut Vec<OsString>, flag: &str, value: &Path) {
    args.push(flag.into());
    args.push(value.as_os_str().to_os_string());
}

/// 文本作为最后一个独立参数；以 `-` 开头时先加 `--`，避免被当成选项
fn push_text(args: &mut Vec<OsString>, text: &str) {
    if text.starts_with('-') {
        args.push(END_OF_OPTIONS.into());
    }
    args.push(text.into());
}

/// 朗读文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Speak {
    pub text: String,
    pub voice: Option<String>,
}

impl Speak {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice: None,
        }
    }

    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = Some(voice.into());
        self
    }
}

impl SayCommand for Speak {
    fn name(&self) -> &'static str {
        "speak"
    }

    fn arguments(&self) -> Vec<OsString> {
        let mut args = Vec::with_capacity(4);
        push_voice(&mut args, self.voice.as_deref());
        push_text(&mut args, &self.text);
        args
    }
}

/// 将文本写入音频文件（如 `.aiff`）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteToFile {
    pub text: String,
    pub output_file: PathBuf,
    pub voice: Option<String>,
}

impl WriteToFile {
    pub fn new(text: impl Into<String>, output_file: impl Into<PathBuf>) -> Self {
        Self {
            text: text.into(),
            output_file: output_file.into(),
            voice: None,
        }
    }

    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = Some(voice.into());
        self
    }
}

impl SayCommand for WriteToFile {
    fn name(&self) -> &'static str {
        "write_to_file"
    }

    fn arguments(&self) -> Vec<OsString> {
        let mut args = Vec::with_capacity(6);
        push_voice(&mut args, self.voice.as_deref());
        push_flag(&mut args, OUTPUT_FLAG, &self.output_file);
        push_text(&mut args, &self.text);
        args
    }
}

/// 朗读文本文件内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakFromFile {
    pub input_file: PathBuf,
    pub voice: Option<String>,
}

impl SpeakFromFile {
    pub fn new(input_file: impl Into<PathBuf>) -> Self {
        Self {
            input_file: input_file.into(),
            voice: None,
        }
    }

    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = Some(voice.into());
        self
    }
}

impl SayCommand for SpeakFromFile {
    fn name(&self) -> &'static str {
        "speak_from_file"
    }

    fn arguments(&self) -> Vec<OsString> {
        let mut args = Vec::with_capacity(4);
        push_flag(&mut args, FILE_FLAG, &self.input_file);
        push_voice(&mut args, self.voice.as_deref());
        args
    }
}

/// 将文本文件内容写入音频文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteFileToFile {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub voice: Option<String>,
}

impl WriteFileToFile {
    pub fn new(input_file: impl Into<PathBuf>, output_file: impl Into<PathBuf>) -> Self {
        Self {
            input_file: input_file.into(),
            output_file: output_file.into(),
            voice: None,
        }
    }

    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = Some(voice.into());
        self
    }
}

impl SayCommand for WriteFileToFile {
    fn name(&self) -> &'static str {
        "write_file_to_file"
    }

    fn arguments(&self) -> Vec<OsString> {
        let mut args = Vec::with_capacity(6);
        push_flag(&mut args, FILE_FLAG, &self.input_file);
        push_flag(&mut args, OUTPUT_FLAG, &self.output_file);
        push_voice(&mut args, self.voice.as_deref());
        args
    }
}
