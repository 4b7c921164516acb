use crate::models::WikiPage;
use crate::parsing::{ParsedPage, ZimParser};
use log::debug;
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid notebook directory: {0}")]
    InvalidNotebookDir(String),
}

/// Read a wiki page and return its content
pub fn read_page(relative_path: &RelativePath, notebook_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(notebook_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write converted output, creating parent directories as needed
pub fn write_output(
    relative_path: &RelativePath,
    output_root: &Path,
    content: &str,
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(output_root);

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Scan for page files in the notebook directory
pub fn scan_wiki_pages(notebook_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !notebook_root.exists() {
        return Err(IoError::InvalidNotebookDir(
            "notebook directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(notebook_root, &mut files)?;
    files.sort();
    Ok(files)
}

/// List every page of the notebook as a [`WikiPage`] relative to its root
pub fn list_pages(notebook_root: &Path) -> Result<Vec<WikiPage>, IoError> {
    let files = scan_wiki_pages(notebook_root)?;
    Ok(files
        .iter()
        .filter_map(|file| file.strip_prefix(notebook_root).ok())
        .filter_map(|relative| RelativePathBuf::from_path(relative).ok())
        .map(WikiPage::new)
        .collect())
}

/// Read one page and convert it
pub fn convert_page(
    page: &WikiPage,
    notebook_root: &Path,
    root_path: &str,
) -> Result<ParsedPage, IoError> {
    let text = read_page(page.relative_path(), notebook_root)?;
    let mut parser = ZimParser::new();
    let bbcode = parser.parse_text_to_bbcode(&text, root_path);
    debug!(
        "converted {} ({} metadata keys)",
        page.relative_path(),
        parser.extracted_data().len()
    );
    Ok(ParsedPage {
        bbcode,
        metadata: parser.extracted_data().clone(),
    })
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == WikiPage::EXTENSION
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_notebook_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidNotebookDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
