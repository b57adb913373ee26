//! 脚本块扫描（纯文本正则，不是 HTML 解析器）
use regex::Regex;
use std::sync::LazyLock;

/// `<script` + 任意属性直到 `>`，随后非贪婪捕获到第一个 `</script>`。
/// `i`：大小写不敏感；`s`：`.` 匹配换行。
const SCRIPT_PATTERN: &str = r"(?is)<script[^>]*>(.*?)</script>";

static SCRIPT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SCRIPT_PATTERN).expect("invalid script block regex"));

/// 单个脚本块
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptBlock {
    /// 在文档中的序号（从 0 开始，左到右）
    pub index: usize,
    /// 整个匹配（`<script` 处）在文档中的字节偏移
    pub start_offset: usize,
    /// 标签之间的原始文本
    pub content: String,
}

impl ScriptBlock {
    /// 近似行号：按匹配起点（而非内容起点）计算
    pub fn line_number(&self, document: &str) -> usize {
        line_number_at(document, self.start_offset)
    }
}

/// 按出现顺序返回所有不重叠的脚本块
pub fn find_script_blocks(document: &str) -> Vec<ScriptBlock> {
    SCRIPT_REGEX
        .captures_iter(document)
        .enumerate()
        .filter_map(|(index, caps)| {
            let whole = caps.get(0)?;
            let content = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            Some(ScriptBlock { index, start_offset: whole.start(), content: content.to_string() })
        })
        .collect()
}

/// `offset` 之前的 `\n` 个数 + 1；越界偏移截断到文档末尾
pub fn line_number_at(document: &str, offset: usize) -> usize {
    let end = offset.min(document.len());
    document.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() + 1
}
