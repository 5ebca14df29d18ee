//! URL pool: the rotating set of playback candidates.
//!
//! The pool is a plain newline-delimited text file. Each non-blank line
//! (after trimming) is one URL. It is re-read at the start of every
//! playback session and never mutated.

use rand::seq::SliceRandom;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("cannot read URL file {path}: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no URLs found in {path}")]
    Empty { path: PathBuf },
}

/// Load the URL pool from a newline-delimited file.
///
/// Blank lines are skipped; surrounding whitespace is trimmed. File order
/// is preserved but nothing depends on it. Duplicates are allowed.
pub fn load(path: &Path) -> Result<Vec<String>, PoolError> {
    let data = fs::read_to_string(path).map_err(|source| PoolError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let urls: Vec<String> = data
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if urls.is_empty() {
        return Err(PoolError::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok(urls)
}

/// Uniform random choice with replacement. The same URL may repeat
/// consecutively; that is fine for a rotation pool.
pub fn pick_random(urls: &[String]) -> Option<&str> {
    urls.choose(&mut rand::thread_rng()).map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_pool(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_trims_and_skips_blank_lines() {
        let file = write_pool("  https://a.example/1  \n\n\nhttps://a.example/2\n   \n");
        let urls = load(file.path()).unwrap();
        assert_eq!(urls, vec!["https://a.example/1", "https://a.example/2"]);
    }

    #[test]
    fn load_fails_on_blank_only_file() {
        let file = write_pool("\n   \n\t\n");
        match load(file.path()) {
            Err(PoolError::Empty { .. }) => {}
            other => panic!("expected Empty, got {:?}", other),
        }
    }

    #[test]
    fn load_fails_on_missing_file() {
        let result = load(Path::new("/nonexistent/showtime_test_urls.txt"));
        match result {
            Err(PoolError::Unavailable { .. }) => {}
            other => panic!("expected Unavailable, got {:?}", other),
        }
    }

    #[test]
    fn pick_random_single_url_always_returned() {
        let urls = vec!["https://only.example/video".to_string()];
        for _ in 0..50 {
            assert_eq!(pick_random(&urls), Some("https://only.example/video"));
        }
    }

    #[test]
    fn pick_random_empty_pool_is_none() {
        assert_eq!(pick_random(&[]), None);
    }

    #[test]
    fn pick_random_stays_inside_pool() {
        let urls = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        for _ in 0..50 {
            let picked = pick_random(&urls).unwrap();
            assert!(urls.iter().any(|u| u == picked));
        }
    }
}
