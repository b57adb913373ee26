//! 临时文件（作用域守卫，Drop 时删除）
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const ARTIFACT_PREFIX: &str = "temp_script_";
pub const ARTIFACT_SUFFIX: &str = ".js";

/// 按序号生成临时文件名，保证同一次运行内不冲突
pub fn artifact_file_name(index: usize) -> String {
    format!("{ARTIFACT_PREFIX}{index}{ARTIFACT_SUFFIX}")
}

/// 持有一个脚本块内容的临时文件
///
/// 无论检查成功、失败还是检查器无法启动，守卫离开作用域时都会删除文件。
#[derive(Debug)]
pub struct TempArtifact {
    path: PathBuf,
    removed: bool,
}

impl TempArtifact {
    /// 在 `dir` 下写入 `temp_script_{index}.js`（已存在则覆盖）
    pub fn create(dir: &Path, index: usize, content: &str) -> io::Result<Self> {
        let path = dir.join(artifact_file_name(index));
        fs::write(&path, content.as_bytes())?;
        Ok(Self { path, removed: false })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 显式删除；文件已不存在视为成功
    pub fn remove(mut self) -> io::Result<()> {
        self.removed = true;
        remove_if_exists(&self.path)
    }
}

impl Drop for TempArtifact {
    fn drop(&mut self) {
        if self.removed {
            return;
        }
        if let Err(e) = remove_if_exists(&self.path) {
            debug!(path = %self.path.display(), error = %e, "failed to remove temporary artifact");
        }
    }
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}
