//! CLI 命令定义
//!
//! 使用 clap derive 宏定义命令行接口结构。

use clap::{Parser, Subcommand, ValueEnum};

/// 表格服务命令行工具
#[derive(Parser, Debug)]
#[command(name = "tableex")]
#[command(version, about = "合成表格页面服务")]
#[command(propagate_version = true)]
pub struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)，未指定时使用配置文件
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// 配置文件目录
    #[arg(long, default_value = "config", env = "CONFIG_DIR")]
    pub config_dir: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// 子命令枚举
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 启动 HTTP 服务
    ///
    /// 启动时按配置生成一次表格，之后所有请求共享同一份只读数据。
    Serve {
        /// 服务端口（覆盖配置文件）
        #[arg(short, long)]
        port: Option<u16>,

        /// 行数（覆盖配置文件）
        #[arg(long)]
        rows: Option<usize>,

        /// 列数（覆盖配置文件）
        #[arg(long)]
        columns: Option<usize>,
    },

    /// 生成表格并输出
    Generate {
        /// 行数
        #[arg(short, long, default_value = "256")]
        rows: usize,

        /// 列数
        #[arg(short, long, default_value = "16")]
        columns: usize,

        /// 输出格式
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// 输出到文件，默认写到标准输出
        #[arg(short, long)]
        output: Option<String>,
    },
}

/// 表格输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `{"header": [...], "body": [[...]]}`
    Json,
    /// 制表符分隔，首行为表头
    Tsv,
}

// ============================================================================
// 单元测试
// ============================================================================
