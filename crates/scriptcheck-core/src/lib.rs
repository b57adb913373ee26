//! 内联脚本语法校验核心库
//!
//! 设计要点：
//! - 纯文本正则扫描 `<script ...>...</script>`（大小写不敏感、非贪婪、不理解 HTML 结构）。
//! - 每个脚本块写入独立临时文件，交给外部语法检查器（默认 `node --check`）。
//! - 严格串行：同一时刻最多存在一个临时文件，作用域结束即删除。
//! - 单个块的失败（语法错误或检查器无法启动）不影响后续块；只有读取输入失败会终止整次运行。

mod artifact;
mod checker;
mod config;
mod error;
mod options;
mod report;
mod scan;
mod validate;

pub use artifact::{artifact_file_name, TempArtifact, ARTIFACT_PREFIX, ARTIFACT_SUFFIX};
pub use checker::{CheckOutcome, CommandChecker, SyntaxChecker};
pub use config::{load_config, CheckerConfig, Config, DEFAULT_CONFIG_PATH};
pub use error::{ConfigError, ValidateError};
pub use options::{CheckOptions, ValidateStats, DEFAULT_INPUT};
pub use scan::{find_script_blocks, line_number_at, ScriptBlock};
pub use validate::{load_document, validate_and_write, validate_document};
