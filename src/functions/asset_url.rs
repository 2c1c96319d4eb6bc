use std::collections::HashMap;

/// `asset_url(path="css/default.css")`, prefixing the configured base path.
pub struct AssetUrl {
    base_path: String,
}

impl AssetUrl {
    pub fn new(base_path: &str) -> Self {
        AssetUrl {
            base_path: base_path.to_string(),
        }
    }

    fn join(&self, path: &str) -> String {
        let path = path.trim();

        if self.base_path.is_empty() {
            return path.to_string();
        }

        format!(
            "{}/{}",
            self.base_path.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl tera::Function for AssetUrl {
    fn call(&self, args: &HashMap<String, tera::Value>) -> tera::Result<tera::Value> {
        let path = args
            .get("path")
            .cloned()
            .map(tera::from_value::<String>)
            .transpose()?
            .ok_or("asset_url: missing path")?;

        Ok(tera::to_value(self.join(&path))?)
    }

    fn is_safe(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_without_base_path() {
        assert_eq!(AssetUrl::new("").join("css/default.css"), "css/default.css");
    }

    #[test]
    fn joins_base_path() {
        let url = AssetUrl::new("/sitemap/");
        assert_eq!(url.join("css/default.css"), "/sitemap/css/default.css");
        assert_eq!(url.join("/js/app.js"), "/sitemap/js/app.js");
    }

    #[test]
    fn missing_path_argument_errors() {
        let url = AssetUrl::new("");
        assert!(tera::Function::call(&url, &HashMap::new()).is_err());
    }
}
