use relative_path::{RelativePath, RelativePathBuf};

/// A Zim page file with a relative path and display-friendly names
#[derive(Debug, Clone, PartialEq)]
pub struct WikiPage {
    relative_path: RelativePathBuf,
    display_name: String,
    display_path: String,
}

impl WikiPage {
    /// Extension of page files inside a notebook
    pub const EXTENSION: &'static str = "txt";

    /// Create a new WikiPage from a relative path
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let display_name = Self::extract_display_name(&relative_path);
        let display_path = Self::strip_extension(relative_path.as_str()).replace('_', " ");

        Self {
            relative_path,
            display_name,
            display_path,
        }
    }

    /// Create from a relative path string
    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    /// Get the relative path
    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Page title: file name without extension, underscores shown as spaces
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Relative path without extension, underscores shown as spaces
    pub fn display_path(&self) -> &str {
        &self.display_path
    }

    /// Zim page link name, e.g. `Tools:Data Editor` for `Tools/Data_Editor.txt`
    pub fn page_name(&self) -> String {
        self.display_path.replace('/', ":")
    }

    /// Path of the converted page, same location with a new extension
    pub fn output_path(&self, extension: &str) -> RelativePathBuf {
        self.relative_path.with_extension(extension)
    }

    fn strip_extension(name: &str) -> &str {
        name.strip_suffix(".txt").unwrap_or(name)
    }

    fn extract_display_name(path: &RelativePath) -> String {
        path.file_name()
            .map(Self::strip_extension)
            .unwrap_or("Untitled")
            .replace('_', " ")
    }
}

impl From<RelativePathBuf> for WikiPage {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for WikiPage {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_drop_extension_and_underscores() {
        let page = WikiPage::from("Tools/Data_Editor.txt");
        assert_eq!(page.display_name(), "Data Editor");
        assert_eq!(page.display_path(), "Tools/Data Editor");
        assert_eq!(page.page_name(), "Tools:Data Editor");
    }

    #[test]
    fn output_path_swaps_extension() {
        let page = WikiPage::from("Tools/Data_Editor.txt");
        assert_eq!(page.output_path("bbcode").as_str(), "Tools/Data_Editor.bbcode");
    }

    #[test]
    fn empty_path_is_untitled() {
        assert_eq!(WikiPage::from("").display_name(), "Untitled");
    }
}
