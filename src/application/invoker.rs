//! Say Invoker - 执行 say 命令
//!
//! 把命令值对象翻译成一次进程调用，并把结果映射为 `Result<_, SayError>`：
//! - 退出码 0：返回 stdout
//! - 非零退出码：`SayError::CommandFailure`，携带完整执行结果
//! - 无法启动 / 取消 / 超时：各自独立的错误
//!
//! 每次调用只启动一个子进程，不重试，调用之间没有共享的可变状态。

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::application::commands::{
    SayCommand, Speak, SpeakFromFile, WriteFileToFile, WriteToFile,
};
use crate::application::error::SayError;
use crate::application::ports::{CommandInvocation, CommandRunnerPort};
use crate::application::queries::ListVoices;
use crate::domain::voice::{parse_voice_listing, VoiceRecord};

/// 默认的 say 程序
pub const DEFAULT_PROGRAM: &str = "say";

/// Invoker 配置
#[derive(Debug, Clone)]
pub struct SayInvokerConfig {
    /// 程序名或路径
    pub program: String,
    /// 单次调用的截止时间，None 表示不限时
    pub timeout: Option<Duration>,
}

impl Default for SayInvokerConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            timeout: None,
        }
    }
}

impl SayInvokerConfig {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Say Invoker
pub struct SayInvoker {
    runner: Arc<dyn CommandRunnerPort>,
    config: SayInvokerConfig,
}

impl SayInvoker {
    pub fn new(runner: Arc<dyn CommandRunnerPort>, config: SayInvokerConfig) -> Self {
        Self { runner, config }
    }

    /// 使用默认配置（程序 `say`，不限时）
    pub fn with_default_config(runner: Arc<dyn CommandRunnerPort>) -> Self {
        Self::new(runner, SayInvokerConfig::default())
    }

    pub fn config(&self) -> &SayInvokerConfig {
        &self.config
    }

    /// 执行命令，成功时返回 stdout
    pub async fn execute<C: SayCommand>(&self, command: &C) -> Result<String, SayError> {
        self.execute_cancellable(command, &CancellationToken::new())
            .await
    }

    /// 执行命令；令牌触发时结束子进程并返回 `SayError::Cancelled`
    pub async fn execute_cancellable<C: SayCommand>(
        &self,
        command: &C,
        cancel: &CancellationToken,
    ) -> Result<String, SayError> {
        let invocation = CommandInvocation::new(&self.config.program, command.arguments())
            .with_timeout(self.config.timeout);

        tracing::debug!(
            command = command.name(),
            program = %invocation.program,
            args = invocation.args.len(),
            "Invoking say"
        );

        let outcome = self.runner.run(&invocation, cancel).await?;

        if !outcome.is_success() {
            return Err(SayError::CommandFailure(Box::new(outcome)));
        }

        tracing::debug!(
            command = command.name(),
            run_time_ms = outcome.run_time.as_millis() as u64,
            "say completed"
        );

        Ok(outcome.stdout)
    }

    /// 用指定（或默认）音色朗读文本
    pub async fn speak(&self, text: &str, voice: Option<&str>) -> Result<(), SayError> {
        let mut command = Speak::new(text);
        command.voice = voice.map(str::to_string);
        self.execute(&command).await.map(drop)
    }

    /// 将文本写入音频文件
    pub async fn write_to_file(
        &self,
        text: &str,
        output_file: impl Into<PathBuf>,
        voice: Option<&str>,
    ) -> Result<(), SayError> {
        let mut command = WriteToFile::new(text, output_file);
        command.voice = voice.map(str::to_string);
        self.execute(&command).await.map(drop)
    }

    /// 朗读文本文件
    pub async fn speak_from_file(
        &self,
        input_file: impl Into<PathBuf>,
        voice: Option<&str>,
    ) -> Result<(), SayError> {
        let mut command = SpeakFromFile::new(input_file);
        command.voice = voice.map(str::to_string);
        self.execute(&command).await.map(drop)
    }

    /// 将文本文件写入音频文件
    pub async fn write_file_to_file(
        &self,
        input_file: impl Into<PathBuf>,
        output_file: impl Into<PathBuf>,
        voice: Option<&str>,
    ) -> Result<(), SayError> {
        let mut command = WriteFileToFile::new(input_file, output_file);
        command.voice = voice.map(str::to_string);
        self.execute(&command).await.map(drop)
    }

    /// 列出已安装音色
    pub async fn list_voices(&self) -> Result<Vec<VoiceRecord>, SayError> {
        self.list_voices_cancellable(&CancellationToken::new())
            .await
    }

    pub async fn list_voices_cancellable(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<VoiceRecord>, SayError> {
        let listing = self.execute_cancellable(&ListVoices, cancel).await?;
        let voices = parse_voice_listing(&listing)?;

        tracing::debug!(count = voices.len(), "Installed voices parsed");
        Ok(voices)
    }
}

/// 用音色本身朗读它的示例句
pub async fn speak_sample_phrase(invoker: &SayInvoker, voice: &VoiceRecord) -> Result<(), SayError> {
    invoker
        .speak(voice.sample_phrase(), Some(voice.name()))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::FakeCommandRunner;
    use std::ffi::OsString;

    const LISTING: &str = "\
Alex                en_US    # Most people recognize me by my voice.
Daniel              en_GB    # Hello, my name is Daniel.
Victoria            en_US    # Isn't it nice to have a computer that will talk to you?
";

    fn os(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    fn invoker(runner: &Arc<FakeCommandRunner>) -> SayInvoker {
        SayInvoker::with_default_config(runner.clone())
    }

    #[tokio::test]
    async fn test_write_to_file_with_voice_argument_vector() {
        let runner = Arc::new(FakeCommandRunner::succeeding(""));
        invoker(&runner)
            .write_to_file("hi", "out.aiff", Some("Alex"))
            .await
            .unwrap();

        let invocations = runner.invocations();
        assert_eq!(invocations.len(), 1);
        assert_eq!(invocations[0].program, "say");
        assert_eq!(invocations[0].args, os(&["-v", "Alex", "-o", "out.aiff", "hi"]));
    }

    #[tokio::test]
    async fn test_every_operation_builds_its_own_vector() {
        let runner = Arc::new(FakeCommandRunner::succeeding(""));
        let say = invoker(&runner);

        say.speak("hi", None).await.unwrap();
        say.speak_from_file("in.txt", Some("Alex")).await.unwrap();
        say.write_file_to_file("in.txt", "out.aiff", None)
            .await
            .unwrap();

        let args: Vec<_> = runner.invocations().into_iter().map(|i| i.args).collect();
        assert_eq!(
            args,
            vec![
                os(&["hi"]),
                os(&["-f", "in.txt", "-v", "Alex"]),
                os(&["-f", "in.txt", "-o", "out.aiff"]),
            ]
        );
    }

    #[tokio::test]
    async fn test_shell_significant_text_passes_as_one_token() {
        let texts = [
            "hello world",
            r#"say "quoted" words"#,
            "it's; rm -rf ~ && echo $PATH | tee `x` > out",
            "tab\tand\nnewline",
        ];
        let runner = Arc::new(FakeCommandRunner::succeeding(""));
        let say = invoker(&runner);

        for text in texts {
            say.speak(text, None).await.unwrap();
            assert_eq!(runner.last_arguments(), Some(os(&[text])));
        }
    }

    #[tokio::test]
    async fn test_list_voices_parses_stdout() {
        let runner = Arc::new(FakeCommandRunner::succeeding(LISTING));
        let voices = invoker(&runner).list_voices().await.unwrap();

        assert_eq!(runner.last_arguments(), Some(os(&["-v", "?"])));
        assert_eq!(voices.len(), 3);
        assert_eq!(voices[1].name(), "Daniel");
        assert_eq!(voices[1].locale_code(), "en_GB");
    }

    #[tokio::test]
    async fn test_list_voices_malformed_output() {
        let runner = Arc::new(FakeCommandRunner::succeeding("Alex en_US Hello\n"));
        let err = invoker(&runner).list_voices().await.unwrap_err();

        assert!(matches!(err, SayError::MalformedVoiceListing(_)));
    }

    #[tokio::test]
    async fn test_non_zero_exit_is_command_failure_with_full_output() {
        let runner = Arc::new(FakeCommandRunner::failing(1, "partial", "voice not found"));
        let err = invoker(&runner)
            .speak("hi", Some("Nobody"))
            .await
            .unwrap_err();

        let outcome = err.outcome().expect("command failure carries outcome");
        assert_eq!(outcome.exit_code, 1);
        assert_eq!(outcome.stdout, "partial");
        assert_eq!(outcome.stderr, "voice not found");
        assert!(outcome.exit_time >= outcome.start_time);
    }

    #[tokio::test]
    async fn test_launch_failure_is_distinct_from_command_failure() {
        let runner = Arc::new(FakeCommandRunner::unlaunchable());
        let err = invoker(&runner).list_voices().await.unwrap_err();

        assert!(matches!(err, SayError::ProcessLaunchFailure { .. }));
        assert!(err.exit_code().is_none());
    }

    #[tokio::test]
    async fn test_cancelled_token_surfaces_cancelled() {
        let runner = Arc::new(FakeCommandRunner::succeeding(LISTING));
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = invoker(&runner)
            .list_voices_cancellable(&cancel)
            .await
            .unwrap_err();

        assert!(matches!(err, SayError::Cancelled));
    }

    #[tokio::test]
    async fn test_configured_program_and_timeout_are_forwarded() {
        let runner = Arc::new(FakeCommandRunner::succeeding(""));
        let config = SayInvokerConfig::new("/usr/bin/say").with_timeout(Duration::from_secs(30));
        let say = SayInvoker::new(runner.clone(), config);

        say.execute(&Speak::new("hi")).await.unwrap();

        let invocations = runner.invocations();
        let invocation = &invocations[0];
        assert_eq!(invocation.program, "/usr/bin/say");
        assert_eq!(invocation.timeout, Some(Duration::from_secs(30)));
    }

    #[tokio::test]
    async fn test_speak_sample_phrase_uses_voice_name_and_phrase() {
        let runner = Arc::new(FakeCommandRunner::succeeding(LISTING));
        let say = invoker(&runner);
        let voices = say.list_voices().await.unwrap();

        speak_sample_phrase(&say, &voices[0]).await.unwrap();

        assert_eq!(
            runner.last_arguments(),
            Some(os(&["-v", "Alex", "Most people recognize me by my voice."]))
        );
    }
}
