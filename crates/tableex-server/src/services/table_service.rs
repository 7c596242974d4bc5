//! 表格服务
//!
//! 提供表格页面渲染与表格操作的 HTTP 接口。
//! 共享表格只读，列重排等变换返回新的表格而不修改状态。

use axum::{
    Json, Router,
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use tableex_shared::observability::metrics;
use tracing::{debug, info, warn};

use crate::error::{Result, ServerError};
use crate::models::{BoxSelection, CellPos, CellRange, Direction, Table};
use crate::state::AppState;

// ============================================================================
// 请求/响应 DTO
// ============================================================================

/// 选区文本查询参数
///
/// 未提供终点时视为单格选区
#[derive(Debug, Deserialize)]
pub struct SelectionQuery {
    pub anchor_row: usize,
    pub anchor_column: usize,
    pub focus_row: Option<usize>,
    pub focus_column: Option<usize>,
}

impl SelectionQuery {
    fn selection(&self) -> BoxSelection {
        let anchor = CellPos::new(self.anchor_row, self.anchor_column);
        let focus = CellPos::new(
            self.focus_row.unwrap_or(self.anchor_row),
            self.focus_column.unwrap_or(self.anchor_column),
        );
        BoxSelection::new(anchor, focus)
    }
}

/// 键盘移动选区请求
#[derive(Debug, Deserialize)]
pub struct StepSelectionRequest {
    pub selection: BoxSelection,
    pub direction: Direction,
    /// 是否扩展选区（相当于按住 Shift）
    #[serde(default)]
    pub extend: bool,
    /// 是否直接移动到边缘（相当于按住 Ctrl）
    #[serde(default)]
    pub to_edge: bool,
}

/// 选区响应
#[derive(Debug, Serialize, Deserialize)]
pub struct SelectionResponse {
    pub selection: BoxSelection,
    pub range: CellRange,
}

/// 列重排请求
#[derive(Debug, Deserialize)]
pub struct MoveColumnRequest {
    pub from: usize,
    pub to: usize,
}

/// 健康检查响应
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: String,
}

/// 就绪检查响应
#[derive(Debug, Serialize)]
struct ReadinessResponse {
    status: &'static str,
    rows: usize,
    columns: usize,
}

// ============================================================================
// 路由定义
// ============================================================================

/// 构建表格服务路由
pub fn table_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/api/table", get(get_table))
        .route("/api/table/selection", get(selection_text))
        .route("/api/table/selection/step", post(step_selection))
        .route("/api/table/columns/move", post(move_column))
}

/// 构建健康检查路由
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
}

// ============================================================================
// 路由处理器
// ============================================================================

/// 渲染表格页面
///
/// GET /
async fn index(State(state): State<AppState>) -> Result<Html<String>> {
    match state.renderer.render_index(&state.table) {
        Ok(html) => {
            metrics::record_table_render("ok");
            debug!(bytes = html.len(), "表格页面渲染完成");
            Ok(Html(html))
        }
        Err(e) => {
            metrics::record_table_render("error");
            Err(e)
        }
    }
}

/// 获取原始表格数据
///
/// GET /api/table
async fn get_table(State(state): State<AppState>) -> Json<Table> {
    Json(state.table.as_ref().clone())
}

/// 获取框选区域的 TSV 文本
///
/// GET /api/table/selection?anchor_row=0&anchor_column=0&focus_row=2&focus_column=3
async fn selection_text(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<SelectionQuery>, ServerError>,
) -> Result<impl IntoResponse> {
    let selection = query.selection();
    let text = state.table.selection_text(&selection).inspect_err(|e| {
        warn!(?selection, error = %e, "选区越界");
    })?;

    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], text))
}

/// 按键盘方向移动选区
///
/// POST /api/table/selection/step
async fn step_selection(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<StepSelectionRequest>, ServerError>,
) -> Result<Json<SelectionResponse>> {
    state.table.ensure_contains(req.selection.anchor)?;
    state.table.ensure_contains(req.selection.focus)?;

    let selection = req.selection.step(
        req.direction,
        req.extend,
        req.to_edge,
        state.table.rows(),
        state.table.columns(),
    );

    Ok(Json(SelectionResponse {
        range: selection.range(),
        selection,
    }))
}

/// 返回列重排后的表格
///
/// POST /api/table/columns/move
async fn move_column(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<MoveColumnRequest>, ServerError>,
) -> Result<Json<Table>> {
    info!(from = req.from, to = req.to, "列重排");
    let moved = state.table.move_column(req.from, req.to)?;
    Ok(Json(moved))
}

/// 存活探针
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: state.service_name.to_string(),
    })
}

/// 就绪探针：返回当前服务的表格尺寸
async fn readiness_check(State(state): State<AppState>) -> Json<ReadinessResponse> {
    Json(ReadinessResponse {
        status: "ready",
        rows: state.table.rows(),
        columns: state.table.columns(),
    })
}
