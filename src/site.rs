use std::fmt;

use serde::Deserialize;

/// One entry of the sitemap JSON, as written by the crawler.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Site {
    pub section: String,
    pub images: String,
    pub name: String,
    pub url: String,
    pub destination: String,
    #[serde(default)]
    pub redir: Option<Scalar>,
    #[serde(default)]
    pub error: Option<Scalar>,
}

impl Site {
    pub fn is_redirect(&self) -> bool {
        self.redir.as_ref().is_some_and(Scalar::is_truthy)
    }

    /// The error code as it should appear in a class name, if the site failed.
    pub fn error_code(&self) -> Option<String> {
        self.error
            .as_ref()
            .filter(|e| e.is_truthy())
            .map(|e| e.to_string())
    }
}

/// A loosely typed JSON scalar. The crawler is not strict about whether flags
/// are booleans, status codes or strings.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl Scalar {
    pub fn is_truthy(&self) -> bool {
        match self {
            Scalar::Bool(b) => *b,
            Scalar::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
            Scalar::Text(s) => !s.is_empty() && s != "0",
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(true) => f.write_str("1"),
            Scalar::Bool(false) => Ok(()),
            Scalar::Number(n) => match n.as_f64() {
                Some(v) if n.is_f64() && v.fract() == 0.0 => write!(f, "{v:.0}"),
                _ => write!(f, "{n}"),
            },
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_site(extra: &str) -> Site {
        let json = format!(
            r#"{{"section": "news", "images": "a", "name": "A", "url": "a.com",
                "destination": "http://a.com"{extra}}}"#
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn missing_flags_are_falsy() {
        let site = parse_site("");
        assert!(!site.is_redirect());
        assert_eq!(site.error_code(), None);
    }

    #[test]
    fn null_flags_are_falsy() {
        let site = parse_site(r#", "redir": null, "error": null"#);
        assert!(!site.is_redirect());
        assert_eq!(site.error_code(), None);
    }

    #[test]
    fn numeric_error_code() {
        let site = parse_site(r#", "redir": true, "error": 404"#);
        assert!(site.is_redirect());
        assert_eq!(site.error_code().as_deref(), Some("404"));

        let float = parse_site(r#", "error": 404.0"#);
        assert_eq!(float.error_code().as_deref(), Some("404"));

        let fraction = parse_site(r#", "error": 1.5"#);
        assert_eq!(fraction.error_code().as_deref(), Some("1.5"));
    }

    #[test]
    fn false_and_zero_are_falsy() {
        let zero = parse_site(r#", "redir": 0, "error": false"#);
        assert!(!zero.is_redirect());
        assert_eq!(zero.error_code(), None);

        let zero_text = parse_site(r#", "error": "0""#);
        assert_eq!(zero_text.error_code(), None);

        let empty = parse_site(r#", "error": """#);
        assert_eq!(empty.error_code(), None);
    }

    #[test]
    fn true_error_renders_as_one() {
        let site = parse_site(r#", "error": true"#);
        assert_eq!(site.error_code().as_deref(), Some("1"));
    }

    #[test]
    fn text_error_is_kept() {
        let site = parse_site(r#", "redir": "yes", "error": "timeout""#);
        assert!(site.is_redirect());
        assert_eq!(site.error_code().as_deref(), Some("timeout"));
    }

    #[test]
    fn crawler_fields_are_ignored() {
        let site = parse_site(
            r#", "title": "A", "cname": "a", "source": "feed", "template": null,
               "metadata": {"title": "A", "description": null}"#,
        );
        assert_eq!(site.name, "A");
    }

    #[test]
    fn missing_required_field_fails() {
        let result = serde_json::from_str::<Site>(r#"{"section": "news"}"#);
        assert!(result.is_err());
    }
}
