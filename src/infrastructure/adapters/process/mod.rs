//! Process Adapter - 外部命令执行实现

mod fake_command_runner;
mod tokio_command_runner;

pub use fake_command_runner::FakeCommandRunner;
pub use tokio_command_runner::TokioCommandRunner;
