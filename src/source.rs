//! Reading the URL list.
//!
//! One URL per line, in input order. Lines are only stripped of their
//! terminator: empty lines are passed through and will fail later, when
//! their download tries to build a request.
//!
//! # Examples
//!
//! ```rust
//! use bulkfetch::source::read_urls;
//!
//! # #[tokio::main]
//! # async fn main() -> std::io::Result<()> {
//! let input: &[u8] = b"http://host/a.js\r\nhttp://host/b.js\n";
//! let urls = read_urls(input).await?;
//! assert_eq!(urls, vec!["http://host/a.js", "http://host/b.js"]);
//! # Ok(())
//! # }
//! ```

use crate::error::{Error, Result};

use std::io;
use std::path::PathBuf;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::debug;

/// Where the URL list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A text file.
    File(PathBuf),
    /// The standard input stream.
    Stdin,
}

impl Source {
    /// Map a command line argument to a source; `-` means standard input.
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "-" => Source::Stdin,
            path => Source::File(PathBuf::from(path)),
        }
    }

    /// Human readable name of the source, used in error messages.
    pub fn origin(&self) -> String {
        match self {
            Source::File(path) => path.display().to_string(),
            Source::Stdin => "<stdin>".to_string(),
        }
    }

    /// Read every line of the source.
    ///
    /// Any open or read error is returned; a partially read list is never
    /// handed back.
    pub async fn read(&self) -> Result<Vec<String>> {
        let urls = match self {
            Source::File(path) => {
                debug!("Opening URL list {:?}", path);
                match File::open(path).await {
                    Ok(file) => read_urls(BufReader::new(file)).await,
                    Err(e) => Err(e),
                }
            }
            Source::Stdin => read_urls(BufReader::new(tokio::io::stdin())).await,
        };

        urls.map_err(|source| Error::Source {
            origin: self.origin(),
            source,
        })
    }
}

/// Collect the lines of `reader`, with `\n` or `\r\n` removed.
pub async fn read_urls<R>(reader: R) -> io::Result<Vec<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut urls = Vec::new();
    while let Some(line) = lines.next_line().await? {
        urls.push(line);
    }
    debug!("Read {} URLs", urls.len());
    Ok(urls)
}
