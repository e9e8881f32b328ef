pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::users;
use crate::views;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/users/activity",
            post(users::handlers::handle_activity_check),
        )
        .route("/orders", get(views::handlers::handle_order_history))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::templates::build_templates;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use sqlx::postgres::PgPoolOptions;
    use std::sync::Arc;
    use tower::ServiceExt;

    // Lazy pool: no connection is made until a query runs, and the routes
    // exercised here never touch the database.
    fn test_state() -> AppState {
        let db = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/unused")
            .unwrap();
        AppState {
            db,
            templates: Arc::new(build_templates().unwrap()),
        }
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let app = build_router(test_state());
        let res = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn orders_page_renders_shell() {
        let app = build_router(test_state());
        let res = app
            .oneshot(
                Request::get("/orders?user_id=u1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("Order history"));
        assert!(html.contains(r#"data-user-id="u1""#));
    }
}
