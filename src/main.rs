// ==========================================
// SWIFT 代码登记服务 - HTTP 主入口
// ==========================================
// 技术栈: axum + Rust + SQLite
// ==========================================

use anyhow::Context;
use swift_code_registry::{build_router, logging, AppConfig, AppState};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", swift_code_registry::APP_NAME);
    tracing::info!("系统版本: {}", swift_code_registry::VERSION);
    tracing::info!("==================================================");

    let config = AppConfig::from_env().context("读取启动配置失败")?;
    let bind_addr = config.bind_addr;
    tracing::info!("使用数据库: {}", config.db_path);

    let app_state = AppState::new(config).context("无法初始化AppState")?;
    let app = build_router(app_state);

    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("无法监听地址 {}", bind_addr))?;
    tracing::info!("HTTP 服务已启动: http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP 服务异常退出")?;

    tracing::info!("HTTP 服务已停止");
    Ok(())
}

/// 等待 Ctrl+C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("监听退出信号失败: {}", e);
    }
}
