//! 校验选项与统计信息（模块）
use std::path::PathBuf;

/// 内置的默认输入文件（未通过配置或命令行覆盖时使用）
pub const DEFAULT_INPUT: &str = "dashboard/Costumer.html";

/// 校验选项
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// 临时文件所在目录；默认当前工作目录
    pub work_dir: PathBuf,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self { work_dir: PathBuf::from(".") }
    }
}

/// 单次运行的统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidateStats {
    pub blocks_found: usize,
    pub passed: usize,
    pub failed: usize,
    /// 检查器无法启动 / 通信失败的块数
    pub errored: usize,
}

impl ValidateStats {
    /// 所有块都通过（零个块也算通过）
    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.errored == 0
    }
}
