//! HTTP 服务模块
//!
//! 组装表格路由、健康检查路由以及通用中间件。

pub mod table_service;

use std::time::Duration;

use axum::{Router, http::StatusCode, middleware};
use tableex_shared::observability::middleware as obs_middleware;
use tower_http::{compression::CompressionLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::state::AppState;

pub use table_service::{health_routes, table_routes};

/// 构建完整应用路由
///
/// 中间件自内向外：超时 → 压缩 → tower-http 追踪 → 请求指标 → 请求 ID
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .merge(table_routes())
        .merge(health_routes())
        .layer(timeout_layer(request_timeout))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(obs_middleware::http_tracing))
        .layer(middleware::from_fn(obs_middleware::request_id))
        .with_state(state)
}

/// 请求超时层：超时返回 408
fn timeout_layer(request_timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, request_timeout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_slow_request_times_out_with_408() {
        let app = Router::new()
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    "late"
                }),
            )
            .layer(timeout_layer(Duration::from_millis(20)));

        let response = app
            .oneshot(Request::builder().uri("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    }
}
