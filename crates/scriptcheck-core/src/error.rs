//! 错误类型
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 整次运行级别的错误（单个脚本块的失败不在此列，它们只写入报告）
#[derive(Debug, Error)]
pub enum ValidateError {
    /// 输入文件不存在、不可读或不是合法 UTF-8
    #[error("failed to read input document {}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 临时文件写入失败，无法继续检查
    #[error("failed to write temporary artifact #{index} at {}", .path.display())]
    Artifact {
        index: usize,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 报告输出失败（例如 stdout 已关闭）
    #[error("failed to write report")]
    Report(#[from] io::Error),
}

/// 配置文件错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("checker program must not be empty")]
    EmptyProgram,
}
