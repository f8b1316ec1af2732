// ==========================================
// SWIFT 代码登记服务 - 日志初始化
// ==========================================
// 后端: tracing-subscriber（fmt + EnvFilter）
// 过滤: RUST_LOG 优先，未设置时使用 DEFAULT_DIRECTIVES
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 默认过滤指令：本服务 info，HTTP 请求追踪（TraceLayer）debug
pub const DEFAULT_DIRECTIVES: &str = "info,tower_http=debug";

/// 测试默认过滤指令
const TEST_DIRECTIVES: &str = "debug";

/// 构造过滤器：RUST_LOG 可解析时使用它，否则回退到给定指令
fn env_filter_or(default_directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives))
}

/// 初始化服务日志（HTTP 服务与命令行导入共用）
///
/// # 示例
/// ```no_run
/// // RUST_LOG=swift_code_registry=trace 可覆盖默认过滤
/// swift_code_registry::logging::init();
/// ```
pub fn init() {
    fmt()
        .with_env_filter(env_filter_or(DEFAULT_DIRECTIVES))
        .with_target(true)
        .with_line_number(true)
        .init();
}

/// 测试日志：输出交给测试框架捕获，可重复调用
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(env_filter_or(TEST_DIRECTIVES))
        .with_test_writer()
        .try_init();
}
