use serde::Serialize;

use crate::{config::Config, section, site::Site, tile::Tile};

#[derive(Serialize, Debug)]
pub struct Column {
    pub name: String,
    pub tiles: Vec<Tile>,
}

/// Template context for `index.html`.
#[derive(Serialize, Debug)]
pub struct Page {
    pub title: String,
    pub columns: Vec<Column>,
}

impl Page {
    pub fn new(config: &Config, sites: &[Site]) -> Self {
        let columns = section::group(sites)
            .into_iter()
            .map(|section| Column {
                name: section.name.to_string(),
                tiles: section
                    .sites
                    .into_iter()
                    .map(|site| Tile::new(site, &config.image_prefix))
                    .collect(),
            })
            .collect();

        Self {
            title: config.title.clone(),
            columns,
        }
    }

    pub fn tile_count(&self) -> usize {
        self.columns.iter().map(|c| c.tiles.len()).sum()
    }
}
