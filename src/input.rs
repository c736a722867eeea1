use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("could not read file {}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not read from stdin")]
    Stdin(#[source] io::Error),
    #[error("no data source given, use -p, -f or pipe data into stdin")]
    Missing,
}

/// Where the puzzle data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Lines separated by `;`, straight from the command line.
    Inline(String),
    File(PathBuf),
    Stdin,
}

impl Source {
    /// Picks a source from the command line flags, preferring inline data
    /// over a file over piped stdin.
    pub fn select(params: Option<String>, file: Option<PathBuf>) -> Result<Source, InputError> {
        match (params, file) {
            (Some(params), _) => Ok(Source::Inline(params)),
            (None, Some(path)) => Ok(Source::File(path)),
            (None, None) if !atty::is(atty::Stream::Stdin) => Ok(Source::Stdin),
            (None, None) => Err(InputError::Missing),
        }
    }

    pub fn read_lines(&self) -> Result<Vec<String>, InputError> {
        let lines = match self {
            Source::Inline(params) => split_inline(params),
            Source::File(path) => {
                let text = fs::read_to_string(path).map_err(|source| InputError::File {
                    path: path.clone(),
                    source,
                })?;
                split_text(&text)
            }
            Source::Stdin => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .map_err(InputError::Stdin)?;
                split_text(&text)
            }
        };

        debug!(source = ?self, lines = lines.len(), "input loaded");
        Ok(lines)
    }
}

pub fn split_inline(params: &str) -> Vec<String> {
    params.split(';').map(str::to_string).collect()
}

/// One trailing newline is dropped, so a file ending in a blank line keeps
/// it. Carriage returns before a newline are dropped too.
pub fn split_text(text: &str) -> Vec<String> {
    let text = text.strip_suffix('\n').unwrap_or(text);
    let text = text.strip_suffix('\r').unwrap_or(text);

    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_lines() {
        assert_eq!(split_inline("L68;L30;R48"), vec!["L68", "L30", "R48"]);
        assert_eq!(split_inline("3-5;;1"), vec!["3-5", "", "1"]);
    }

    #[test]
    fn text_lines() {
        assert_eq!(split_text("a\nb\n"), vec!["a", "b"]);
        assert_eq!(split_text("a\r\nb\r\n"), vec!["a", "b"]);
        assert_eq!(split_text("a\n\n"), vec!["a", ""]);
        assert_eq!(split_text("  1 \n"), vec!["  1 "]);
    }

    #[test]
    fn flags_win_over_stdin() {
        assert_eq!(
            Source::select(Some("1;2".into()), Some("x.txt".into())).unwrap(),
            Source::Inline("1;2".into())
        );
        assert_eq!(
            Source::select(None, Some("x.txt".into())).unwrap(),
            Source::File("x.txt".into())
        );
    }
}
