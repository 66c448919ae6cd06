use crate::config::Config;
use crate::constants::{formats::FILE_DATE, output::FILE_EXTENSION};
use crate::error::AppError;
use chrono::NaiveDate;
use std::path::PathBuf;
use tokio::fs;
use tracing::info;

/// Which of the two output files a batch of lines belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Odds,
    Results,
}

impl RecordKind {
    pub fn label(self) -> &'static str {
        match self {
            RecordKind::Odds => "odds",
            RecordKind::Results => "results",
        }
    }
}

/// Writes formatted lines to `<prefix>_<YYYY-MM-DD>.txt` in the output directory.
#[derive(Debug, Clone)]
pub struct FileWriter {
    output_dir: PathBuf,
    odds_prefix: String,
    results_prefix: String,
}

impl FileWriter {
    pub fn new(
        output_dir: impl Into<PathBuf>,
        odds_prefix: impl Into<String>,
        results_prefix: impl Into<String>,
    ) -> Self {
        Self {
            output_dir: output_dir.into(),
            odds_prefix: odds_prefix.into(),
            results_prefix: results_prefix.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.output_dir_path(),
            config.odds_file_prefix.clone(),
            config.results_file_prefix.clone(),
        )
    }

    /// File name for `kind` on `date`, e.g. `NBA_Quoten_2025-11-25.txt`.
    pub fn file_name(&self, kind: RecordKind, date: NaiveDate) -> String {
        let prefix = match kind {
            RecordKind::Odds => &self.odds_prefix,
            RecordKind::Results => &self.results_prefix,
        };
        format!("{prefix}_{}.{FILE_EXTENSION}", date.format(FILE_DATE))
    }

    pub fn path_for(&self, kind: RecordKind, date: NaiveDate) -> PathBuf {
        self.output_dir.join(self.file_name(kind, date))
    }

    /// Writes every line newline-terminated as UTF-8 and returns the path written.
    ///
    /// An existing file with the same name is overwritten. An empty slice
    /// still creates an (empty) file.
    pub async fn write(
        &self,
        kind: RecordKind,
        date: NaiveDate,
        lines: &[String],
    ) -> Result<PathBuf, AppError> {
        let path = self.path_for(kind, date);

        if !self.output_dir.as_os_str().is_empty() && !self.output_dir.exists() {
            fs::create_dir_all(&self.output_dir).await?;
        }

        let content: String = lines.iter().map(|line| format!("{line}\n")).collect();
        fs::write(&path, content).await?;

        info!(
            "Wrote {} {} lines to {}",
            lines.len(),
            kind.label(),
            path.display()
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 25).unwrap()
    }

    #[test]
    fn test_file_names_per_kind() {
        let writer = FileWriter::from_config(&Config::default());
        assert_eq!(
            writer.file_name(RecordKind::Odds, date()),
            "NBA_Quoten_2025-11-25.txt"
        );
        assert_eq!(
            writer.file_name(RecordKind::Results, date()),
            "NBA_Ergebnisse_2025-11-25.txt"
        );
    }

    #[tokio::test]
    async fn test_write_lines_newline_terminated() {
        let dir = tempdir().unwrap();
        let writer = FileWriter::new(dir.path(), "Odds", "Results");
        let lines = vec![
            "A : B 1:2".to_string(),
            "Škoda Ümlaut : C 3:4".to_string(),
        ];

        let path = writer.write(RecordKind::Results, date(), &lines).await.unwrap();
        assert_eq!(path, dir.path().join("Results_2025-11-25.txt"));

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(content, "A : B 1:2\nŠkoda Ümlaut : C 3:4\n");
    }

    #[tokio::test]
    async fn test_empty_batch_creates_empty_file() {
        let dir = tempdir().unwrap();
        let writer = FileWriter::new(dir.path(), "Odds", "Results");

        let path = writer.write(RecordKind::Odds, date(), &[]).await.unwrap();
        assert!(path.exists());
        assert_eq!(tokio::fs::read(&path).await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_existing_file_is_overwritten() {
        let dir = tempdir().unwrap();
        let writer = FileWriter::new(dir.path(), "Odds", "Results");

        writer
            .write(RecordKind::Odds, date(), &["first".to_string(), "second".to_string()])
            .await
            .unwrap();
        let path = writer
            .write(RecordKind::Odds, date(), &["third".to_string()])
            .await
            .unwrap();

        assert_eq!(tokio::fs::read_to_string(path).await.unwrap(), "third\n");
    }

    #[tokio::test]
    async fn test_missing_output_dir_is_created() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("out").join("nba");
        let writer = FileWriter::new(&nested, "Odds", "Results");

        let path = writer.write(RecordKind::Odds, date(), &[]).await.unwrap();
        assert!(nested.is_dir());
        assert!(path.starts_with(&nested));
    }
}
