//! Core download description.
//!
//! A [`Download`] binds one requested URL to the file name it will be saved
//! under. The URL is kept verbatim: malformed or empty entries are accepted
//! here and only fail once their task tries to build a request.
//!
//! # Examples
//!
//! ```rust
//! use bulkfetch::download::Download;
//!
//! let download = Download::from("http://host/assets/app.js");
//! assert_eq!(download.filename, "app.js");
//!
//! // Query strings are not stripped.
//! let download = Download::from("http://host/lib.js?v=2");
//! assert_eq!(download.filename, "lib.js?v=2");
//! ```

use crate::error::{Error, Result};

use reqwest::Url;

/// Represents a file to be downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    /// URL of the file to download, as it was supplied.
    pub url: String,
    /// File name used to save the file on disk.
    pub filename: String,
}

impl Download {
    /// Creates a new [`Download`] whose file name is derived from the URL.
    pub fn new(url: &str) -> Self {
        Self {
            url: String::from(url),
            filename: String::from(derive_filename(url)),
        }
    }

    /// Creates a new [`Download`] with an explicit file name.
    pub fn with_filename(url: &str, filename: &str) -> Self {
        Self {
            url: String::from(url),
            filename: String::from(filename),
        }
    }

    /// Parse the URL for the request.
    pub fn parse_url(&self) -> Result<Url> {
        Url::parse(&self.url).map_err(|e| {
            Error::InvalidUrl(format!("The url \"{}\" cannot be parsed: {}", self.url, e))
        })
    }
}

impl From<&str> for Download {
    fn from(value: &str) -> Self {
        Download::new(value)
    }
}

impl From<String> for Download {
    fn from(value: String) -> Self {
        Download::new(&value)
    }
}

impl From<&String> for Download {
    fn from(value: &String) -> Self {
        Download::new(value)
    }
}

/// Returns everything after the last `/` of `url`.
///
/// No percent-decoding, no query stripping. A string without any `/` is
/// returned whole, and a URL ending in `/` yields an empty name.
pub fn derive_filename(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_filename_last_segment() {
        assert_eq!(derive_filename("http://host/a/b/c.js"), "c.js");
        assert_eq!(derive_filename("https://cdn.example.com/x.min.js"), "x.min.js");
    }

    #[test]
    fn test_derive_filename_keeps_query_and_encoding() {
        assert_eq!(derive_filename("http://host/a%20b.js?v=1"), "a%20b.js?v=1");
    }

    #[test]
    fn test_derive_filename_edge_cases() {
        assert_eq!(derive_filename("no-slashes"), "no-slashes");
        assert_eq!(derive_filename("http://host/dir/"), "");
        assert_eq!(derive_filename(""), "");
    }

    #[test]
    fn test_parse_url() {
        let download = Download::new("http://host/a.js");
        assert_eq!(download.parse_url().unwrap().path(), "/a.js");

        let download = Download::new("not a url");
        match download.parse_url() {
            Err(Error::InvalidUrl(msg)) => assert!(msg.contains("not a url")),
            other => panic!("Expected InvalidUrl, got {:?}", other),
        }
    }

    #[test]
    fn test_with_filename() {
        let download = Download::with_filename("http://host/a.js", "renamed.js");
        assert_eq!(download.url, "http://host/a.js");
        assert_eq!(download.filename, "renamed.js");
    }
}
