use anyhow::Result;
use tera::Tera;

/// Registers the embedded page templates.
/// Templates ship inside the binary, so the service needs no runtime asset
/// directory. Partials must be registered before the pages that include them.
pub fn build_templates() -> Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        (
            "partials/page_title.html",
            include_str!("../../templates/partials/page_title.html"),
        ),
        (
            "partials/orders_table.html",
            include_str!("../../templates/partials/orders_table.html"),
        ),
        ("orders.html", include_str!("../../templates/orders.html")),
    ])?;
    Ok(tera)
}
