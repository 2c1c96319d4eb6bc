use tera::Tera;

use crate::{context::Context, page::Page, site::Site};

/// Renders the full page for an already loaded set of sites.
pub fn render_page(context: &Context, tera: &Tera, sites: &[Site]) -> anyhow::Result<String> {
    let page = Page::new(&context.config, sites);

    tracing::debug!(
        columns = page.columns.len(),
        tiles = page.tile_count(),
        "rendering page"
    );

    let mut ctx = tera::Context::new();
    ctx.insert("page", &page);

    Ok(tera.render("index.html", &ctx)?)
}

/// Reads the sitemap from disk and renders it. A malformed sitemap fails the
/// whole render.
pub fn render_site(context: &Context, tera: &Tera) -> anyhow::Result<String> {
    let sites = context.load_sites()?;
    render_page(context, tera, &sites)
}
