use std::path::{Path, PathBuf};

use crate::{
    config::Config,
    records::{self, LoadError},
    site::Site,
};

/// The site home and its configuration.
#[derive(Debug, Clone)]
pub struct Context {
    pub home: PathBuf,
    pub config: Config,
}

impl Context {
    pub fn new(home: PathBuf) -> anyhow::Result<Self> {
        let config = Config::load(&home)?;

        Ok(Self { home, config })
    }

    pub fn absolute<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.home.join(path.as_ref())
    }

    pub fn input_path(&self) -> PathBuf {
        self.absolute(&self.config.input)
    }

    pub fn load_sites(&self) -> Result<Vec<Site>, LoadError> {
        records::load(&self.input_path())
    }
}
