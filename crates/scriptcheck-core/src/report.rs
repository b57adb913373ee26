//! 文本报告输出
use std::io::{self, Write};

pub(crate) fn write_summary(out: &mut dyn Write, count: usize) -> io::Result<()> {
    writeln!(out, "Found {count} script tags.")
}

pub(crate) fn write_passed(out: &mut dyn Write, line: usize) -> io::Result<()> {
    writeln!(out, "✅ Script at line {line} is OK.")
}

/// 失败块：标记行 + 检查器诊断原文
pub(crate) fn write_failed(out: &mut dyn Write, line: usize, diagnostics: &str) -> io::Result<()> {
    writeln!(out, "❌ Syntax error in script starting at line {line}:")?;
    writeln!(out, "{diagnostics}")
}

pub(crate) fn write_invocation_error(out: &mut dyn Write, line: usize, err: &io::Error) -> io::Result<()> {
    writeln!(out, "Error checking script at line {line}: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut dyn Write) -> io::Result<()>) -> String {
        let mut buf: Vec<u8> = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn summary_line() {
        assert_eq!(render(|o| write_summary(o, 0)), "Found 0 script tags.\n");
    }

    #[test]
    fn passed_line() {
        assert_eq!(render(|o| write_passed(o, 7)), "✅ Script at line 7 is OK.\n");
    }

    #[test]
    fn failed_block_includes_diagnostics() {
        let s = render(|o| write_failed(o, 12, "SyntaxError: Unexpected token ';'"));
        assert_eq!(s, "❌ Syntax error in script starting at line 12:\nSyntaxError: Unexpected token ';'\n");
    }

    #[test]
    fn invocation_error_line() {
        let err = io::Error::new(io::ErrorKind::NotFound, "program not found");
        let s = render(|o| write_invocation_error(o, 3, &err));
        assert_eq!(s, "Error checking script at line 3: program not found\n");
    }
}
