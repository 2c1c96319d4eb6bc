use std::{
    fs::{self, create_dir_all, remove_dir_all},
    path::{Path, PathBuf},
};

use anyhow::bail;
use tera::Tera;
use walkdir::WalkDir;

use crate::{context::Context, render::render_site};

/// Directory the `build` command writes the finished site into.
pub struct Output {
    dir: PathBuf,
}

impl Output {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn clean(&self) -> anyhow::Result<()> {
        if self.dir.exists() {
            remove_dir_all(&self.dir)?;
        }
        create_dir_all(&self.dir)?;
        Ok(())
    }

    /// Refuses output directories that would swallow the site's own sources
    /// when cleaned, or that live inside a directory being copied.
    fn ensure_disjoint(&self, context: &Context) -> anyhow::Result<()> {
        create_dir_all(&self.dir)?;
        let output = self.dir.canonicalize()?;

        let home = context.home.canonicalize()?;
        if home.starts_with(&output) {
            bail!(
                "output directory {} contains the site home {}",
                self.dir.display(),
                context.home.display()
            );
        }

        let sources = [
            context.absolute(&context.config.static_dir),
            context.absolute(&context.config.assets_dir),
            context.input_path(),
        ];

        for source in sources.iter().filter(|s| s.exists()) {
            let source = source.canonicalize()?;
            if source.starts_with(&output) || output.starts_with(&source) {
                bail!(
                    "output directory {} overlaps {}",
                    self.dir.display(),
                    source.display()
                );
            }
        }

        Ok(())
    }

    fn create_dir(&self, path: &Path) -> anyhow::Result<()> {
        Ok(fs::create_dir_all(self.dir.join(path))?)
    }

    fn copy(&self, file: &Path, path: &Path) -> anyhow::Result<()> {
        path.parent().map(|p| self.create_dir(p)).transpose()?;

        fs::copy(file, self.dir.join(path))?;

        Ok(())
    }

    fn write(&self, path: &Path, contents: &str) -> anyhow::Result<()> {
        path.parent().map(|p| self.create_dir(p)).transpose()?;

        fs::write(self.dir.join(path), contents)?;

        Ok(())
    }

    /// Copies every file below `source` into the output, under `prefix`.
    fn copy_tree(&self, source: &Path, prefix: &Path) -> anyhow::Result<usize> {
        if !source.is_dir() {
            tracing::debug!(source = %source.display(), "nothing to copy");
            return Ok(0);
        }

        let mut copied = 0;

        for entry in WalkDir::new(source) {
            let entry = entry?;

            if !entry.file_type().is_file() {
                continue;
            }

            let relative = prefix.join(entry.path().strip_prefix(source)?);
            tracing::trace!(file = %relative.display(), "copying to output");
            self.copy(entry.path(), &relative)?;
            copied += 1;
        }

        Ok(copied)
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct BuildStats {
    pub files: usize,
}

/// Renders `index.html` and lays out the static files and assets beside it.
pub fn build(context: &Context, tera: &Tera, output: &Output) -> anyhow::Result<BuildStats> {
    // render first so a bad sitemap leaves the previous output alone
    let html = render_site(context, tera)?;

    output.ensure_disjoint(context)?;
    output.clean()?;

    let mut stats = BuildStats::default();

    stats.files += output.copy_tree(&context.absolute(&context.config.static_dir), Path::new(""))?;
    stats.files += output.copy_tree(
        &context.absolute(&context.config.assets_dir),
        Path::new(&context.config.assets_dir),
    )?;

    output.write(Path::new("index.html"), &html)?;
    stats.files += 1;

    tracing::info!(output = %output.dir.display(), files = stats.files, "build finished");

    Ok(stats)
}
