use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;
use tera::Tera;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct OrdersPageQuery {
    pub user_id: String,
}

/// GET /orders
/// Page shell only: composes the title block and the order-table widget.
/// All order fetching, filtering, and pagination belongs to the widget.
pub async fn handle_order_history(
    State(state): State<AppState>,
    Query(params): Query<OrdersPageQuery>,
) -> Result<Html<String>, AppError> {
    Ok(Html(render_order_history(
        &state.templates,
        &params.user_id,
    )?))
}

fn render_order_history(templates: &Tera, user_id: &str) -> Result<String, AppError> {
    let mut ctx = tera::Context::new();
    ctx.insert("title", "Order history");
    ctx.insert("user_id", user_id);
    Ok(templates.render("orders.html", &ctx)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::templates::build_templates;

    #[test]
    fn page_shell_composes_title_and_widget() {
        let templates = build_templates().unwrap();
        let html = render_order_history(&templates, "u1").unwrap();
        assert!(html.contains("<h1>Order history</h1>"));
        assert!(html.contains("<orders-table"));
        assert!(html.contains(r#"data-user-id="u1""#));
    }

    #[test]
    fn widget_parameter_is_escaped() {
        let templates = build_templates().unwrap();
        let html = render_order_history(&templates, r#""><script>"#).unwrap();
        assert!(!html.contains("<script>"));
    }
}
