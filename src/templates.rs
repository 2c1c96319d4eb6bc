use tera::Tera;

use crate::{context::Context, functions::asset_url::AssetUrl};

const BUILTIN_TEMPLATES: [(&str, &str); 3] = [
    ("index.html", include_str!("../templates/index.html")),
    ("column.html", include_str!("../templates/column.html")),
    ("tile.html", include_str!("../templates/tile.html")),
];

/// Like `tera::escape_html`, but leaves `/` alone so URLs in attributes stay
/// readable.
pub fn escape_html(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#x27;"),
            _ => output.push(c),
        }
    }
    output
}

fn builtin() -> anyhow::Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_templates(BUILTIN_TEMPLATES)?;
    Ok(tera)
}

/// Builtin templates, with any same-named file in the site's templates
/// directory taking precedence.
pub fn setup_template_engine(context: &Context) -> anyhow::Result<Tera> {
    let template_dir = context.absolute(&context.config.templates_dir);

    let mut tera = if template_dir.is_dir() {
        Tera::new(&template_dir.join("**").join("*").to_string_lossy())?
    } else {
        Tera::default()
    };

    tera.extend(&builtin()?)?;
    tera.set_escape_fn(escape_html);
    tera.register_function("asset_url", AssetUrl::new(&context.config.base_path));

    tracing::debug!(
        templates = ?tera.get_template_names().collect::<Vec<_>>(),
        "loaded templates"
    );

    Ok(tera)
}
