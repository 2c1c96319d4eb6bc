use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::site::Site;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed sitemap in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub fn parse(contents: &str) -> serde_json::Result<Vec<Site>> {
    serde_json::from_str(contents)
}

/// Reads the sitemap at `path`. A missing file is not an error: the page is
/// simply rendered without any columns.
pub fn load(path: &Path) -> Result<Vec<Site>, LoadError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no sitemap, rendering empty page");
            return Ok(vec![]);
        }
        Err(source) => {
            return Err(LoadError::Read {
                path: path.into(),
                source,
            })
        }
    };

    let sites = parse(&contents).map_err(|source| LoadError::Parse {
        path: path.into(),
        source,
    })?;

    tracing::debug!(path = %path.display(), sites = sites.len(), "loaded sitemap");

    Ok(sites)
}
