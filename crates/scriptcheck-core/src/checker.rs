//! 外部语法检查器
use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::Command;

/// 检查器正常运行后的结论
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Passed,
    /// 退出码非零；`diagnostics` 为检查器输出的原始诊断文本
    Failed { diagnostics: String },
}

/// 语法检查器抽象：输入临时文件路径，返回结论。
/// `Err` 表示检查器根本无法运行（未安装、无法启动等），与语法错误区分。
pub trait SyntaxChecker {
    fn check(&self, path: &Path) -> io::Result<CheckOutcome>;
}

/// 以子进程方式调用的检查器：`program args... <path>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandChecker {
    pub program: OsString,
    pub args: Vec<OsString>,
}

impl CommandChecker {
    pub fn new(program: impl Into<OsString>, args: impl IntoIterator<Item = impl Into<OsString>>) -> Self {
        Self { program: program.into(), args: args.into_iter().map(Into::into).collect() }
    }

    /// `node --check`：只解析不执行
    pub fn node() -> Self {
        Self::new("node", ["--check"])
    }
}

impl Default for CommandChecker {
    fn default() -> Self {
        Self::node()
    }
}

impl SyntaxChecker for CommandChecker {
    fn check(&self, path: &Path) -> io::Result<CheckOutcome> {
        // 阻塞等待子进程退出，无超时
        let output = Command::new(&self.program).args(&self.args).arg(path).output()?;

        if output.status.success() {
            return Ok(CheckOutcome::Passed);
        }

        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        let diagnostics = if stderr.trim().is_empty() {
            String::from_utf8_lossy(&output.stdout).into_owned()
        } else {
            stderr
        };
        Ok(CheckOutcome::Failed { diagnostics })
    }
}
