use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::annotator::annotate;
use crate::content::{ContentItem, PagesGenerator};
use crate::error::{AnnotationError, Result};
use crate::hooks::{register, Signals};

const ANSI_COLOR_RED: &str = "\x1b[31m";
const ANSI_COLOR_RESET: &str = "\x1b[0m";

/// Path argument standing for stdin
pub const STDIN_PATH: &str = "-";

/// Where annotated documents come from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// Maps command line path arguments to inputs; no arguments means stdin
    pub fn from_args(paths: &[PathBuf]) -> Vec<Input> {
        if paths.is_empty() {
            return vec![Input::Stdin];
        }

        paths
            .iter()
            .map(|path| {
                if path.as_os_str() == STDIN_PATH {
                    Input::Stdin
                } else {
                    Input::File(path.clone())
                }
            })
            .collect()
    }

    pub fn read(&self) -> Result<String> {
        match self {
            Input::Stdin => {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .map_err(|e| AnnotationError::io(STDIN_PATH, e))?;
                Ok(buffer)
            }
            Input::File(path) => read_document(path),
        }
    }
}

pub fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| AnnotationError::io(path, e))
}

/// Replaces `path` with `contents` atomically.
///
/// The data goes to a temporary file next to `path` first, so a failed
/// write never leaves a truncated document behind.
pub fn write_document(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(|e| AnnotationError::io(path, e))?;
    file.write_all(contents.as_bytes()).map_err(|e| AnnotationError::io(path, e))?;
    file.persist(path).map_err(|e| AnnotationError::io(path, e.error))?;

    Ok(())
}

/// Loads each file as a content item remembering where it came from
pub fn load_content_items(paths: &[PathBuf]) -> Result<Vec<ContentItem>> {
    paths
        .iter()
        .map(|path| Ok(ContentItem::new(read_document(path)?).with_source_path(path)))
        .collect()
}

/// Writes items back to their source files, skipping items without one
pub fn store_content_items(items: &[ContentItem]) -> Result<()> {
    for item in items {
        match &item.source_path {
            Some(path) => write_document(path, &item.rendered_body)?,
            None => tracing::warn!("Skipping content item without a source path"),
        }
    }
    Ok(())
}

/// Annotates the given files in place, running them through the page hook
///
/// # Returns
///
/// Number of files rewritten
pub fn annotate_files_in_place(paths: &[PathBuf]) -> Result<usize> {
    let mut generator = PagesGenerator {
        pages: load_content_items(paths)?,
        ..Default::default()
    };

    let mut signals = Signals::new();
    register(&mut signals);
    signals.send_page_generator_finalized(&mut generator);

    store_content_items(&generator.pages)?;

    let count = generator.pages.len();
    tracing::info!("Annotated {} file(s) in place", count);
    Ok(count)
}

/// Reads and annotates every input in order, concatenating the results
///
/// Nothing is returned unless all inputs could be read.
pub fn annotate_inputs(inputs: &[Input]) -> Result<String> {
    let mut result = String::new();
    for input in inputs {
        result.push_str(&annotate(&input.read()?));
    }
    Ok(result)
}

/// Prints an error message to stderr, in red when stderr is a terminal
pub fn print_error_message(msg: &str, no_color: bool) {
    if !no_color && atty::is(atty::Stream::Stderr) {
        eprintln!("{ANSI_COLOR_RED}{msg}{ANSI_COLOR_RESET}");
    } else {
        eprintln!("{msg}");
    }
}
