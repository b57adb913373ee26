//! 配置文件加载（TOML）
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::checker::CommandChecker;
use crate::error::ConfigError;

/// 默认配置文件路径（存在时才加载）
pub const DEFAULT_CONFIG_PATH: &str = "./scriptcheck.toml";

/// 检查器配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckerConfig {
    pub program: String,
    #[serde(default = "default_checker_args")]
    pub args: Vec<String>,
}

fn default_checker_args() -> Vec<String> {
    vec!["--check".to_string()]
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self { program: "node".to_string(), args: default_checker_args() }
    }
}

impl CheckerConfig {
    /// 转换为可执行的检查器；程序名为空视为配置错误
    pub fn to_checker(&self) -> Result<CommandChecker, ConfigError> {
        if self.program.trim().is_empty() {
            return Err(ConfigError::EmptyProgram);
        }
        Ok(CommandChecker::new(&self.program, &self.args))
    }
}

/// 顶层配置结构
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// 输入 HTML 文件；为空则使用内置默认值
    #[serde(default)]
    pub input: Option<PathBuf>,
    #[serde(default)]
    pub checker: CheckerConfig,
}

/// 从 TOML 文件加载配置
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let txt = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
    parse_config(&txt).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
}

fn parse_config(txt: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(txt)
}
