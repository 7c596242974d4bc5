//! tableex CLI
//!
//! 表格服务的命令行入口点，提供服务启动与表格生成功能。

use clap::Parser;
use tableex_server::cli::{Cli, CommandRunner, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 日志在各子命令内按各自的配置初始化
    let runner = CommandRunner::new(cli.config_dir, cli.log_level);

    match cli.command {
        Commands::Serve {
            port,
            rows,
            columns,
        } => {
            runner.run_serve(port, rows, columns).await?;
        }
        Commands::Generate {
            rows,
            columns,
            format,
            output,
        } => {
            runner.run_generate(rows, columns, format, output)?;
        }
    }

    Ok(())
}
