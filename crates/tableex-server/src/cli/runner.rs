//! 命令执行器
//!
//! 负责执行各 CLI 子命令的具体逻辑。

use std::fs;
use std::io::Write as _;
use std::time::Duration;

use anyhow::{Context, Result};
use tableex_shared::config::{AppConfig, TableConfig};
use tableex_shared::observability;
use tokio::net::TcpListener;
use tracing::info;

use super::commands::OutputFormat;
use crate::generators::TableGenerator;
use crate::models::Table;
use crate::services::build_router;
use crate::state::AppState;

/// 服务名，用于加载服务特定配置与端口环境变量
pub const SERVICE_NAME: &str = "tableex-server";

/// 命令执行器
///
/// 封装全局参数和各命令的执行逻辑，简化 main 函数的复杂度。
pub struct CommandRunner {
    config_dir: String,
    log_level: Option<String>,
}

impl CommandRunner {
    /// 创建命令执行器
    pub fn new(config_dir: String, log_level: Option<String>) -> Self {
        Self {
            config_dir,
            log_level,
        }
    }

    /// 加载配置并应用命令行覆盖
    pub fn load_config(
        &self,
        port: Option<u16>,
        rows: Option<usize>,
        columns: Option<usize>,
    ) -> Result<AppConfig> {
        let mut config =
            AppConfig::load_from(SERVICE_NAME, &self.config_dir).context("加载配置失败")?;

        if let Some(port) = port {
            config.server.port = port;
        }
        if let Some(rows) = rows {
            config.table.rows = rows;
        }
        if let Some(columns) = columns {
            config.table.columns = columns;
        }

        config.validate().context("配置校验失败")?;
        Ok(config)
    }

    /// 执行 serve 命令
    ///
    /// 生成表格并启动 HTTP 服务，收到关闭信号后优雅退出。
    pub async fn run_serve(
        &self,
        port: Option<u16>,
        rows: Option<usize>,
        columns: Option<usize>,
    ) -> Result<()> {
        let config = self.load_config(port, rows, columns)?;

        let obs_config = config
            .observability
            .clone()
            .with_service_name(&config.service_name)
            .with_log_level(self.log_level.as_deref());
        let _guard = observability::init(&obs_config).await?;

        info!(
            environment = %config.environment,
            rows = config.table.rows,
            columns = config.table.columns,
            "启动表格服务"
        );

        let generator = TableGenerator::new(config.table);
        let state =
            AppState::from_generator(&generator, &config.service_name).context("初始化应用状态失败")?;

        let app = build_router(
            state,
            Duration::from_secs(config.server.request_timeout_secs),
        );

        let listener = TcpListener::bind(config.server_addr())
            .await
            .context("绑定端口失败")?;

        info!("表格服务已启动: http://{}", config.server_addr());
        info!("可用端点:");
        info!("  GET  / - 表格页面");
        info!("  GET  /api/table - 表格 JSON");
        info!("  GET  /api/table/selection - 选区文本");
        info!("  POST /api/table/selection/step - 键盘移动选区");
        info!("  POST /api/table/columns/move - 列重排");
        info!("  GET  /health, /ready - 健康检查");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("服务器运行失败")?;

        info!("表格服务已停止");
        Ok(())
    }

    /// 执行 generate 命令
    ///
    /// 生成表格后输出到文件或标准输出。
    pub fn run_generate(
        &self,
        rows: usize,
        columns: usize,
        format: OutputFormat,
        output: Option<String>,
    ) -> Result<()> {
        let obs_config = observability::ObservabilityConfig::default()
            .with_service_name(SERVICE_NAME)
            .with_log_level(self.log_level.as_deref().or(Some("warn")));
        observability::tracing::init(&obs_config)?;

        let table = TableGenerator::new(TableConfig::new(rows, columns))
            .generate()
            .context("生成表格失败")?;
        let content = Self::format_table(&table, format)?;

        if let Some(ref path) = output {
            let mut file = fs::File::create(path).context("创建输出文件失败")?;
            file.write_all(content.as_bytes()).context("写入文件失败")?;
            info!(path = %path, rows, columns, "表格已写入文件");
        } else {
            println!("{}", content);
        }

        Ok(())
    }

    /// 按格式序列化表格
    pub fn format_table(table: &Table, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(table).context("序列化表格失败")
            }
            OutputFormat::Tsv => Ok(table.to_tsv()),
        }
    }
}

/// 监听关闭信号
///
/// 收到 Ctrl+C 或 SIGTERM 后返回，触发 axum 的优雅关闭流程。
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("注册 Ctrl+C 处理器失败");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("注册 SIGTERM 处理器失败")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown..."),
        _ = terminate => info!("Received SIGTERM, initiating graceful shutdown..."),
    }
}

// ============================================================================
// 单元测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::generate;
    use tableex_shared::config::DEFAULT_COLUMNS;

    fn runner_with_missing_config() -> CommandRunner {
        let dir = std::env::temp_dir().join(format!("tableex-runner-{}", uuid::Uuid::new_v4()));
        CommandRunner::new(dir.to_string_lossy().into_owned(), None)
    }

    #[test]
    fn test_load_config_applies_overrides() {
        let runner = runner_with_missing_config();
        let config = runner.load_config(Some(9001), Some(4), Some(2)).unwrap();

        assert_eq!(config.server.port, 9001);
        assert_eq!(config.table, TableConfig::new(4, 2));
    }

    #[test]
    fn test_load_config_rejects_zero_override() {
        let runner = runner_with_missing_config();
        assert!(runner.load_config(None, Some(0), None).is_err());
    }

    #[test]
    fn test_load_config_override_replaces_zero_from_file() {
        let dir = std::env::temp_dir().join(format!("tableex-runner-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("default.toml"), "[table]\nrows = 0\n").unwrap();
        let runner = CommandRunner::new(dir.to_string_lossy().into_owned(), None);

        let config = runner.load_config(None, Some(4), None).unwrap();
        assert_eq!(config.table.rows, 4);
        assert_eq!(config.table.columns, DEFAULT_COLUMNS);

        // 没有覆盖时仍然拒绝文件中的 0
        assert!(runner.load_config(None, None, None).is_err());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_format_table_json() {
        let json = CommandRunner::format_table(&generate(1, 2), OutputFormat::Json).unwrap();
        let table: Table = serde_json::from_str(&json).unwrap();
        assert_eq!(table.header, vec!["header0", "header1"]);
        assert_eq!(table.body, vec![vec!["data[0,0]", "data[0,1]"]]);
    }

    #[test]
    fn test_format_table_tsv() {
        let tsv = CommandRunner::format_table(&generate(2, 2), OutputFormat::Tsv).unwrap();
        assert_eq!(
            tsv,
            "header0\theader1\ndata[0,0]\tdata[0,1]\ndata[1,0]\tdata[1,1]"
        );
    }
}
