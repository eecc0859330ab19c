//! Plain-text workspace files.
//!
//! Each matrix is written as a `name rows cols` header, one line per row,
//! and a blank separator line. Values use the shortest representation that
//! parses back to the same `f64`, so a save/load cycle is exact.

use std::fs;
use std::io::{Read, Write};

use gauss_linalg::Matrix;
use tracing::info;

use crate::config::WorkspaceConfig;
use crate::error::{WorkspaceError, WorkspaceResult};
use crate::workspace::Workspace;

/// Whitespace-separated tokens tagged with their 1-based line.
struct Tokens<'a> {
    inner: Box<dyn Iterator<Item = (usize, &'a str)> + 'a>,
    last_line: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        let inner = text
            .lines()
            .enumerate()
            .flat_map(|(i, line)| line.split_whitespace().map(move |tok| (i + 1, tok)));
        Self {
            inner: Box::new(inner),
            last_line: 0,
        }
    }

    fn next_token(&mut self) -> Option<(usize, &'a str)> {
        let item = self.inner.next();
        if let Some((line, _)) = item {
            self.last_line = line;
        }
        item
    }

    fn parse_next<T: std::str::FromStr>(&mut self, what: &str) -> WorkspaceResult<T> {
        let (line, tok) = self.next_token().ok_or_else(|| WorkspaceError::Parse {
            line: self.last_line,
            reason: format!("unexpected end of input, expected {what}"),
        })?;
        tok.parse().map_err(|_| WorkspaceError::Parse {
            line,
            reason: format!("invalid {what} {tok:?}"),
        })
    }
}

impl Workspace {
    /// Writes every matrix in name order.
    ///
    /// # Errors
    /// [`WorkspaceError::Io`] if the writer fails.
    pub fn write_to(&self, mut writer: impl Write) -> WorkspaceResult<()> {
        for (name, matrix) in self {
            writeln!(writer, "{name} {} {}", matrix.rows(), matrix.cols())?;
            for i in 0..matrix.rows() {
                for value in matrix.row(i) {
                    write!(writer, "{value} ")?;
                }
                writeln!(writer)?;
            }
            writeln!(writer)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Parses a workspace previously written by [`Workspace::write_to`].
    ///
    /// # Errors
    /// [`WorkspaceError::Io`] if reading fails, [`WorkspaceError::Parse`] for
    /// malformed content, [`WorkspaceError::Matrix`] for invalid dimensions.
    pub fn read_from(mut reader: impl Read) -> WorkspaceResult<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;

        let mut tokens = Tokens::new(&text);
        let mut workspace = Self::new();
        while let Some((_, name)) = tokens.next_token() {
            let rows: usize = tokens.parse_next("row count")?;
            let cols: usize = tokens.parse_next("column count")?;
            let mut matrix = Matrix::new(rows, cols)?;
            for i in 0..rows {
                for j in 0..cols {
                    let value: f64 = tokens.parse_next("value")?;
                    matrix[(i, j)] = value;
                }
            }
            workspace.insert(name, matrix)?;
        }
        Ok(workspace)
    }

    /// Saves to `file_name` inside the configured directory, creating the
    /// directory if needed.
    ///
    /// # Errors
    /// [`WorkspaceError::Io`] on any filesystem failure.
    pub fn save(&self, config: &WorkspaceConfig, file_name: &str) -> WorkspaceResult<()> {
        fs::create_dir_all(&config.directory)?;
        let path = config.path_for(file_name);
        let file = fs::File::create(&path)?;
        self.write_to(std::io::BufWriter::new(file))?;
        info!(path = %path.display(), matrices = self.len(), "saved workspace");
        Ok(())
    }

    /// Replaces the contents with those of `file_name` in the configured
    /// directory.
    ///
    /// The file is parsed completely before anything is replaced. If loading
    /// fails the workspace is left empty.
    ///
    /// # Errors
    /// Any error of [`Workspace::read_from`], or [`WorkspaceError::Io`] if the
    /// file cannot be opened.
    pub fn load(&mut self, config: &WorkspaceConfig, file_name: &str) -> WorkspaceResult<()> {
        let path = config.path_for(file_name);
        let loaded = fs::File::open(&path)
            .map_err(WorkspaceError::from)
            .and_then(|file| Self::read_from(std::io::BufReader::new(file)));
        match loaded {
            Ok(workspace) => {
                *self = workspace;
                info!(path = %path.display(), matrices = self.len(), "loaded workspace");
                Ok(())
            }
            Err(err) => {
                self.clear();
                Err(err)
            }
        }
    }
}
