//! 配置管理模块
//!
//! 支持多格式配置文件加载，环境变量覆盖，以及类型安全的配置访问。

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::error::{Result, TableexError};
use crate::observability::ObservabilityConfig;

/// 默认行数
pub const DEFAULT_ROWS: usize = 256;

/// 默认列数
pub const DEFAULT_COLUMNS: usize = 16;

/// 表格维度配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub rows: usize,
    pub columns: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
        }
    }
}

impl TableConfig {
    /// 创建指定维度的配置
    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// 校验维度
    ///
    /// 生成函数本身对 0 是全函数（返回空结构），
    /// 但对外服务的表格不允许退化，因此在配置层拒绝 0。
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 {
            return Err(TableexError::InvalidDimension {
                field: "rows",
                value: self.rows,
            });
        }
        if self.columns == 0 {
            return Err(TableexError::InvalidDimension {
                field: "columns",
                value: self.columns,
            });
        }
        Ok(())
    }
}

/// 服务配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// 单个请求的超时时间（秒）
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            request_timeout_secs: 30,
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub service_name: String,
    pub environment: String,
    pub server: ServerConfig,
    pub table: TableConfig,
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// 从指定目录加载配置
    ///
    /// 加载顺序（后加载的会覆盖先加载的同名配置项）：
    /// 1. {config_dir}/default.toml（默认配置）
    /// 2. {config_dir}/{environment}.toml（环境特定配置）
    /// 3. {config_dir}/{service_name}.toml（服务特定配置）
    /// 4. 环境变量（TABLEEX_ 前缀，层级用双下划线，如 TABLEEX_TABLE__ROWS -> table.rows）
    /// 5. 服务特定端口环境变量（如 TABLEEX_SERVER_PORT）
    ///
    /// 这里不做维度校验，调用方应用命令行覆盖后再调用 [`AppConfig::validate`]。
    pub fn load_from(service_name: &str, config_dir: impl AsRef<Path>) -> Result<Self> {
        let config_dir = config_dir.as_ref();
        let env = std::env::var("TABLEEX_ENV").unwrap_or_else(|_| "development".to_string());

        let mut config: Self = Self::builder(service_name, &env, config_dir)?
            .build()?
            .try_deserialize()?;

        if let Some(port) = Self::get_service_port_from_env(service_name) {
            config.server.port = port;
        }

        Ok(config)
    }

    fn builder(
        service_name: &str,
        env: &str,
        config_dir: &Path,
    ) -> std::result::Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError>
    {
        Ok(Config::builder()
            .set_default("service_name", service_name)?
            .set_default("environment", env)?
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            .add_source(File::from(config_dir.join(format!("{}.toml", env))).required(false))
            .add_source(
                File::from(config_dir.join(format!("{}.toml", service_name))).required(false),
            )
            .add_source(
                Environment::with_prefix("TABLEEX")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            ))
    }

    /// 从环境变量获取服务特定端口
    ///
    /// 将 "tableex-server" 转换为 "TABLEEX_SERVER_PORT"
    fn get_service_port_from_env(service_name: &str) -> Option<u16> {
        std::env::var(Self::service_port_env_name(service_name))
            .ok()
            .and_then(|v| v.parse().ok())
    }

    fn service_port_env_name(service_name: &str) -> String {
        format!("{}_PORT", service_name.to_uppercase().replace('-', "_"))
    }

    /// 校验配置
    pub fn validate(&self) -> Result<()> {
        self.table.validate()
    }

    /// 获取服务地址
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.table.rows, 256);
        assert_eq!(config.table.columns, 16);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_server_addr() {
        let config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(config.server_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_table_config_rejects_zero() {
        let err = TableConfig::new(0, 16).validate().unwrap_err();
        assert!(matches!(
            err,
            TableexError::InvalidDimension {
                field: "rows",
                value: 0
            }
        ));

        let err = TableConfig::new(4, 0).validate().unwrap_err();
        assert!(matches!(
            err,
            TableexError::InvalidDimension {
                field: "columns",
                ..
            }
        ));

        assert!(TableConfig::new(1, 1).validate().is_ok());
    }

    #[test]
    fn test_service_port_env_name() {
        assert_eq!(
            AppConfig::service_port_env_name("tableex-server"),
            "TABLEEX_SERVER_PORT"
        );
        assert_eq!(
            AppConfig::service_port_env_name("my-custom-service"),
            "MY_CUSTOM_SERVICE_PORT"
        );
    }

    #[test]
    fn test_load_from_missing_dir_uses_defaults() {
        let dir = std::env::temp_dir().join(format!("tableex-missing-{}", uuid::Uuid::new_v4()));
        let config = AppConfig::load_from("config-test-missing", &dir).unwrap();

        assert_eq!(config.service_name, "config-test-missing");
        assert_eq!(config.table, TableConfig::default());
    }

    #[test]
    fn test_load_from_file_overrides() {
        let dir = std::env::temp_dir().join(format!("tableex-config-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("default.toml"),
            "[table]\nrows = 8\n\n[server]\nport = 9100\n",
        )
        .unwrap();

        let config = AppConfig::load_from("config-test-file", &dir).unwrap();
        assert_eq!(config.table.rows, 8);
        assert_eq!(config.table.columns, DEFAULT_COLUMNS);
        assert_eq!(config.server.port, 9100);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_from_defers_dimension_check() {
        let dir = std::env::temp_dir().join(format!("tableex-zero-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("default.toml"), "[table]\ncolumns = 0\n").unwrap();

        let config = AppConfig::load_from("config-test-zero", &dir).unwrap();
        assert_eq!(config.table.columns, 0);

        let err = config.validate().unwrap_err();
        assert_eq!(err.code(), "INVALID_DIMENSION");

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
