//! 校验主流程：读取 → 扫描 →（写临时文件 → 调用检查器 → 报告 → 删除）逐块串行
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::artifact::{artifact_file_name, TempArtifact};
use crate::checker::{CheckOutcome, SyntaxChecker};
use crate::error::ValidateError;
use crate::options::{CheckOptions, ValidateStats};
use crate::report;
use crate::scan::find_script_blocks;

/// 整读输入文件（必须是合法 UTF-8）
pub fn load_document(path: &Path) -> Result<String, ValidateError> {
    std::fs::read_to_string(path).map_err(|source| ValidateError::Load { path: path.to_path_buf(), source })
}

/// 读取 `input` 并将逐块校验报告写入 `out`
///
/// 读取失败直接返回错误，此时 `out` 不会有任何输出。
pub fn validate_and_write<C: SyntaxChecker>(
    input: &Path,
    out: &mut dyn Write,
    checker: &C,
    opts: &CheckOptions,
) -> Result<ValidateStats, ValidateError> {
    let document = load_document(input)?;
    info!(input = %input.display(), bytes = document.len(), "document loaded");
    validate_document(&document, out, checker, opts)
}

/// 对已加载的文档执行校验
///
/// 保证：
/// - 按文档中从左到右的顺序逐块处理，任一块失败不影响后续块；
/// - 同一时刻最多存在一个临时文件，每块处理结束前即被删除。
pub fn validate_document<C: SyntaxChecker>(
    document: &str,
    out: &mut dyn Write,
    checker: &C,
    opts: &CheckOptions,
) -> Result<ValidateStats, ValidateError> {
    let blocks = find_script_blocks(document);
    let mut stats = ValidateStats { blocks_found: blocks.len(), ..ValidateStats::default() };
    report::write_summary(out, blocks.len())?;

    for block in &blocks {
        let line = block.line_number(document);
        debug!(index = block.index, offset = block.start_offset, line, "checking script block");

        let artifact = TempArtifact::create(&opts.work_dir, block.index, &block.content).map_err(|source| {
            ValidateError::Artifact {
                index: block.index,
                path: opts.work_dir.join(artifact_file_name(block.index)),
                source,
            }
        })?;

        let written = match checker.check(artifact.path()) {
            Ok(CheckOutcome::Passed) => {
                stats.passed += 1;
                report::write_passed(out, line)
            }
            Ok(CheckOutcome::Failed { diagnostics }) => {
                stats.failed += 1;
                report::write_failed(out, line, &diagnostics)
            }
            Err(e) => {
                stats.errored += 1;
                warn!(index = block.index, line, error = %e, "syntax checker could not be run");
                report::write_invocation_error(out, line, &e)
            }
        };

        // 本轮最后一步：删除临时文件（删除失败不处理，仅记录）
        if let Err(e) = artifact.remove() {
            debug!(index = block.index, error = %e, "failed to remove temporary artifact");
        }
        written?;
    }

    info!(
        blocks_found = stats.blocks_found,
        passed = stats.passed,
        failed = stats.failed,
        errored = stats.errored,
        "validation finished"
    );
    Ok(stats)
}
