use serde::Serialize;

use crate::site::Site;

/// Everything the `tile.html` template needs for one site.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Tile {
    pub classes: String,
    pub crop: String,
    pub thumb: String,
    pub name: String,
    pub destination: String,
    pub url: String,
}

impl Tile {
    pub fn new(site: &Site, image_prefix: &str) -> Self {
        let base = image_base(&site.images, image_prefix);

        Self {
            classes: classes(site).join(" "),
            crop: format!("{base}/crop.png"),
            thumb: format!("{base}/thumb.png"),
            name: site.name.clone(),
            destination: site.destination.clone(),
            url: site.url.clone(),
        }
    }
}

pub fn classes(site: &Site) -> Vec<String> {
    let mut classes = vec!["site".to_string()];

    if site.is_redirect() {
        classes.push("redirect".to_string());
    }

    if let Some(code) = site.error_code() {
        // a code with whitespace would otherwise split into several classes
        let code = code.split_whitespace().collect::<Vec<_>>().join("-");
        classes.push(format!("error{code}"));
    }

    classes
}

/// Absolute image locations are used as-is, anything else lives under the
/// local assets directory.
pub fn image_base(images: &str, image_prefix: &str) -> String {
    if images.to_ascii_lowercase().contains("http://") {
        images.to_string()
    } else {
        format!("{image_prefix}{images}")
    }
}
