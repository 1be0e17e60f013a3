//! Column series read from whitespace-delimited text files.
//!
//! Each non-blank line is one row of decimal numbers. Rows are transposed
//! into columns: the first column becomes the x axis and every further column
//! one y series. A single-column file is plotted against the row index.

use crate::error::{Error, Result};
use crate::plots::LineSeries;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// What to do when rows have different column counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RaggedPolicy {
    /// Keep only as many columns as the shortest row has.
    #[default]
    Truncate,
    /// Fail on the first row whose length differs from the first row.
    Reject,
}

/// One parsed input row.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// 1-based line number in the source file.
    pub line: usize,
    /// Parsed values, in column order.
    pub values: Vec<f64>,
}

/// All rows of one input file.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesTable {
    path: PathBuf,
    rows: Vec<Row>,
}

impl SeriesTable {
    /// Read and parse a file.
    ///
    /// # Errors
    ///
    /// [`Error::FileRead`] if the file cannot be opened or read,
    /// [`Error::Parse`] for a non-numeric token, and [`Error::RaggedRows`]
    /// under [`RaggedPolicy::Reject`].
    pub fn read(path: impl AsRef<Path>, policy: RaggedPolicy) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|source| Error::FileRead { path: path.to_path_buf(), source })?;
        Self::from_reader(BufReader::new(file), path, policy)
    }

    /// Parse rows from any buffered reader; `path` is used in diagnostics.
    pub fn from_reader<R: BufRead>(reader: R, path: &Path, policy: RaggedPolicy) -> Result<Self> {
        let mut rows: Vec<Row> = Vec::new();

        for (i, line) in reader.lines().enumerate() {
            let line_no = i + 1;
            let text = line.map_err(|source| Error::FileRead { path: path.to_path_buf(), source })?;

            let values = text
                .split_whitespace()
                .map(|token| parse_token(token, line_no, path))
                .collect::<Result<Vec<f64>>>()?;
            if values.is_empty() {
                continue;
            }

            if policy == RaggedPolicy::Reject {
                if let Some(first) = rows.first() {
                    if first.values.len() != values.len() {
                        return Err(Error::RaggedRows {
                            file: path.to_path_buf(),
                            line: line_no,
                            expected: first.values.len(),
                            found: values.len(),
                        });
                    }
                }
            }

            rows.push(Row { line: line_no, values });
        }

        let table = Self { path: path.to_path_buf(), rows };
        if table.is_ragged() {
            tracing::warn!(
                file = %path.display(),
                columns = table.column_count(),
                "rows have different lengths, truncating to the shortest"
            );
        }
        tracing::debug!(file = %path.display(), rows = table.row_count(), "read series table");
        Ok(table)
    }

    /// Source path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parsed rows in file order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of non-blank rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Columns available in every row (length of the shortest row).
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|r| r.values.len()).min().unwrap_or(0)
    }

    /// True when rows differ in length.
    #[must_use]
    pub fn is_ragged(&self) -> bool {
        let mut lengths = self.rows.iter().map(|r| r.values.len());
        match lengths.next() {
            Some(first) => lengths.any(|len| len != first),
            None => false,
        }
    }

    /// Transpose rows into columns, truncated to [`SeriesTable::column_count`].
    #[must_use]
    pub fn columns(&self) -> Vec<Vec<f64>> {
        (0..self.column_count())
            .map(|c| self.rows.iter().map(|r| r.values[c]).collect())
            .collect()
    }

    /// Line series for this table.
    ///
    /// One column plots against the row index; otherwise the first column is
    /// x and each remaining column is a y series. Series are named
    /// `<file>` or `<file>:<column>`.
    #[must_use]
    pub fn line_series(&self) -> Vec<LineSeries> {
        let columns = self.columns();
        let name = self.path.display().to_string();

        match columns.as_slice() {
            [] => Vec::new(),
            [only] => {
                let x: Vec<f64> = (0..only.len()).map(|i| i as f64).collect();
                vec![LineSeries::new(name).data(&x, only)]
            }
            [x, ys @ ..] => {
                ys.iter()
                    .enumerate()
                    .map(|(i, y)| {
                        let label =
                            if ys.len() == 1 { name.clone() } else { format!("{name}:{}", i + 1) };
                        LineSeries::new(label).data(x, y)
                    })
                    .collect()
            }
        }
    }
}

fn parse_token(token: &str, line: usize, path: &Path) -> Result<f64> {
    match token.parse::<f64>() {
        // "inf" and "nan" parse, but are not decimal numbers
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(Error::Parse { token: token.to_string(), line, file: path.to_path_buf() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str, policy: RaggedPolicy) -> Result<SeriesTable> {
        SeriesTable::from_reader(text.as_bytes(), Path::new("mem.txt"), policy)
    }

    #[test]
    fn test_rows_and_columns() {
        let table = parse("0 0\n1 1\n2 4\n", RaggedPolicy::Truncate).unwrap();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.columns(), vec![vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 4.0]]);
    }

    #[test]
    fn test_tokens_are_trimmed() {
        let table = parse("  1.5   2.5 \r\n3 4\n", RaggedPolicy::Reject).unwrap();
        assert_eq!(table.rows()[0].values, vec![1.5, 2.5]);
        assert_eq!(table.rows()[1].values, vec![3.0, 4.0]);
    }

    #[test]
    fn test_blank_lines_skipped_but_counted() {
        let table = parse("1 2\n\n3 4\n", RaggedPolicy::Reject).unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows()[1].line, 3);
    }

    #[test]
    fn test_non_numeric_token() {
        let err = parse("a b\n", RaggedPolicy::Truncate).unwrap_err();
        match err {
            Error::Parse { token, line, file } => {
                assert_eq!(token, "a");
                assert_eq!(line, 1);
                assert_eq!(file, PathBuf::from("mem.txt"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_finite_token_rejected() {
        let err = parse("1 2\n3 inf\n", RaggedPolicy::Truncate).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));
        assert!(parse("nan 1\n", RaggedPolicy::Truncate).is_err());
    }

    #[test]
    fn test_ragged_truncates_to_shortest() {
        let table = parse("0 1 2\n1 2\n2 3 4\n", RaggedPolicy::Truncate).unwrap();
        assert!(table.is_ragged());
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.columns(), vec![vec![0.0, 1.0, 2.0], vec![1.0, 2.0, 3.0]]);
    }

    #[test]
    fn test_ragged_reject_names_line() {
        let err = parse("0 1 2\n1 2 3\n2 3\n", RaggedPolicy::Reject).unwrap_err();
        assert!(matches!(err, Error::RaggedRows { line: 3, expected: 3, found: 2, .. }));
    }

    #[test]
    fn test_single_column_uses_index() {
        let series = parse("5\n7\n9\n", RaggedPolicy::Truncate).unwrap().line_series();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].x_data, vec![0.0, 1.0, 2.0]);
        assert_eq!(series[0].y_data, vec![5.0, 7.0, 9.0]);
    }

    #[test]
    fn test_multi_column_shares_x() {
        let series = parse("0 1 10\n1 2 20\n", RaggedPolicy::Truncate).unwrap().line_series();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].x_data, vec![0.0, 1.0]);
        assert_eq!(series[1].y_data, vec![10.0, 20.0]);
        assert_eq!(series[1].name, "mem.txt:2");
    }

    #[test]
    fn test_timestamp_columns_keep_full_precision() {
        let text = "1700000000 1\n1700000050 2\n1700000100 3\n";
        let series = parse(text, RaggedPolicy::Truncate).unwrap().line_series();
        let x = &series[0].x_data;
        assert_ne!(x[0], x[1]);
        assert_eq!(x, &vec![1_700_000_000.0, 1_700_000_050.0, 1_700_000_100.0]);
    }

    #[test]
    fn test_empty_table_has_no_series() {
        let table = parse("\n\n", RaggedPolicy::Reject).unwrap();
        assert_eq!(table.row_count(), 0);
        assert!(table.columns().is_empty());
        assert!(table.line_series().is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = SeriesTable::read("/no/such/series.txt", RaggedPolicy::Truncate).unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
    }
}
