//! Mock board client for running without the live endpoint.
//!
//! Loads saved results pages from a directory and serves them as if they
//! were live responses.

use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use super::error::FetchError;
use super::source::BoardSource;

/// Mock board client that serves saved HTML pages.
///
/// Pages are keyed by `(group_id, stop_id)`. Identifiers come from
/// directory and file names, so either may contain any character a file
/// name can.
#[derive(Debug, Clone)]
pub struct MockBoardClient {
    boards: HashMap<(String, String), String>,
}

impl MockBoardClient {
    /// Create a new mock client by loading saved pages from a directory.
    ///
    /// Expects one subdirectory per group holding one file per stop:
    /// `{data_dir}/{group_id}/{stop_id}.html`. Files at the top level and
    /// non-`.html` files are ignored.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, FetchError> {
        let data_dir = data_dir.as_ref();
        let mut boards = HashMap::new();

        for group_dir in read_entries(data_dir)? {
            if !group_dir.is_dir() {
                continue;
            }
            let group_id = file_name(&group_dir, group_dir.file_name())?;

            for path in read_entries(&group_dir)? {
                if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("html") {
                    continue;
                }
                let stop_id = file_name(&path, path.file_stem())?;

                let html = std::fs::read_to_string(&path).map_err(|e| FetchError::MockData {
                    message: format!("failed to read {:?}: {}", path, e),
                })?;

                boards.insert((group_id.clone(), stop_id), html);
            }
        }

        if boards.is_empty() {
            return Err(FetchError::MockData {
                message: format!("no mock board files found in {:?}", data_dir),
            });
        }

        Ok(Self { boards })
    }

    /// Build a mock client from in-memory pages.
    pub fn from_pages<I, G, S, H>(pages: I) -> Self
    where
        I: IntoIterator<Item = (G, S, H)>,
        G: Into<String>,
        S: Into<String>,
        H: Into<String>,
    {
        let boards = pages
            .into_iter()
            .map(|(g, s, h)| ((g.into(), s.into()), h.into()))
            .collect();
        Self { boards }
    }

    /// List the `(group_id, stop_id)` pairs with a saved page.
    pub fn available_boards(&self) -> Vec<(String, String)> {
        let mut keys: Vec<_> = self.boards.keys().cloned().collect();
        keys.sort();
        keys
    }
}

/// Paths of the entries of a directory.
fn read_entries(dir: &Path) -> Result<Vec<PathBuf>, FetchError> {
    let entries = std::fs::read_dir(dir).map_err(|e| FetchError::MockData {
        message: format!("failed to read mock data directory {:?}: {}", dir, e),
    })?;

    entries
        .map(|entry| {
            entry.map(|e| e.path()).map_err(|e| FetchError::MockData {
                message: format!("failed to read directory entry: {}", e),
            })
        })
        .collect()
}

/// A path component as an identifier; non-UTF-8 names are an error.
fn file_name(path: &Path, name: Option<&OsStr>) -> Result<String, FetchError> {
    name.and_then(|s| s.to_str())
        .map(str::to_string)
        .ok_or_else(|| FetchError::MockData {
            message: format!("invalid mock board name: {:?}", path),
        })
}

impl BoardSource for MockBoardClient {
    async fn fetch(&self, stop_id: &str, group_id: &str) -> Result<String, FetchError> {
        self.boards
            .get(&(group_id.to_string(), stop_id.to_string()))
            .cloned()
            .ok_or_else(|| FetchError::Api {
                status: 404,
                message: format!("no mock board for group {group_id} stop {stop_id}"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_board(dir: &Path, group_id: &str, stop_id: &str, html: &str) {
        let group_dir = dir.join(group_id);
        std::fs::create_dir_all(&group_dir).unwrap();
        std::fs::write(group_dir.join(format!("{stop_id}.html")), html).unwrap();
    }

    fn key(group_id: &str, stop_id: &str) -> (String, String) {
        (group_id.to_string(), stop_id.to_string())
    }

    #[test]
    fn load_mock_dir() {
        let dir = tempdir().unwrap();
        write_board(dir.path(), "G1", "S1", "<p>one</p>");
        write_board(dir.path(), "G1", "S2", "<p>two</p>");
        std::fs::write(dir.path().join("G1").join("notes.txt"), "ignored").unwrap();
        std::fs::write(dir.path().join("README.html"), "ignored").unwrap();

        let client = MockBoardClient::new(dir.path()).unwrap();
        assert_eq!(client.available_boards(), vec![key("G1", "S1"), key("G1", "S2")]);
    }

    #[test]
    fn ids_may_contain_underscores() {
        let dir = tempdir().unwrap();
        write_board(dir.path(), "G_1", "S_1", "<p/>");
        write_board(dir.path(), "G", "1_S_1", "<p/>");

        let client = MockBoardClient::new(dir.path()).unwrap();
        assert_eq!(
            client.available_boards(),
            vec![key("G", "1_S_1"), key("G_1", "S_1")]
        );
    }

    #[test]
    fn empty_dir_is_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            MockBoardClient::new(dir.path()),
            Err(FetchError::MockData { .. })
        ));
    }

    #[test]
    fn top_level_pages_only_is_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("G1_S1.html"), "<p/>").unwrap();
        assert!(MockBoardClient::new(dir.path()).is_err());
    }

    #[test]
    fn missing_dir_is_error() {
        assert!(MockBoardClient::new("/nonexistent/mock/boards").is_err());
    }

    #[tokio::test]
    async fn serves_saved_page() {
        let client = MockBoardClient::from_pages([("G1", "S1", "<p>one</p>")]);
        assert_eq!(client.fetch("S1", "G1").await.unwrap(), "<p>one</p>");
    }

    #[tokio::test]
    async fn unknown_board_returns_error() {
        let client = MockBoardClient::from_pages([("G1", "S1", "<p>one</p>")]);

        // Swapped identifiers must not match.
        let result = client.fetch("G1", "S1").await;
        assert!(matches!(result, Err(FetchError::Api { status: 404, .. })));
    }
}
