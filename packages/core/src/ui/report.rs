//! Results file writer.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Writes the outcome of the last command, replacing the previous one
#[derive(Debug, Clone)]
pub struct ResultWriter {
    path: PathBuf,
}

impl ResultWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the results file with `message`
    pub fn write(&self, message: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, format!("{}\n", message.trim_end()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repository::json::test_support::ScratchDir;

    #[test]
    fn test_write_overwrites_previous_result() {
        // テスト項目: 結果ファイルは追記ではなく上書きされる
        // given (前提条件):
        let dir = ScratchDir::new();
        let writer = ResultWriter::new(dir.file("results.txt"));
        writer.write("first").unwrap();

        // when (操作):
        writer.write("second").unwrap();

        // then (期待する結果):
        let content = fs::read_to_string(writer.path()).unwrap();
        assert_eq!(content, "second\n");
    }
}
