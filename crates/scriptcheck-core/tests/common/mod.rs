//! Shared test helpers

use scriptcheck_core::{CheckOutcome, SyntaxChecker, ARTIFACT_PREFIX, ARTIFACT_SUFFIX};
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// What the checker observed for one block
#[derive(Debug, Clone)]
pub struct Seen {
    pub file_name: String,
    pub content: String,
    /// Number of temp_script_*.js files present while checking
    pub artifacts_present: usize,
}

/// Treats any content containing "= ;" as a syntax error
pub struct FakeChecker {
    work_dir: PathBuf,
    seen: RefCell<Vec<Seen>>,
}

impl FakeChecker {
    pub fn new(work_dir: &Path) -> Self {
        Self { work_dir: work_dir.to_path_buf(), seen: RefCell::new(Vec::new()) }
    }

    pub fn seen(&self) -> Vec<Seen> {
        self.seen.borrow().clone()
    }
}

impl SyntaxChecker for FakeChecker {
    fn check(&self, path: &Path) -> io::Result<CheckOutcome> {
        let content = fs::read_to_string(path)?;
        self.seen.borrow_mut().push(Seen {
            file_name: path.file_name().unwrap().to_string_lossy().into_owned(),
            content: content.clone(),
            artifacts_present: artifacts_in(&self.work_dir).len(),
        });
        if content.contains("= ;") {
            Ok(CheckOutcome::Failed { diagnostics: "SyntaxError: Unexpected token ';'\n".to_string() })
        } else {
            Ok(CheckOutcome::Passed)
        }
    }
}

/// Leftover artifacts in `dir`
pub fn artifacts_in(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else { return Vec::new() };
    entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with(ARTIFACT_PREFIX) && n.ends_with(ARTIFACT_SUFFIX))
        })
        .collect()
}
