//! Elementa Site Server - 多租户餐厅营销站点
//!
//! # 架构概述
//!
//! 本模块是营销站点服务器的主入口，提供以下核心功能：
//!
//! - **租户路由** (`tenancy`): 子域名解析与请求重写
//! - **页面渲染** (`pages`): 服务端渲染的站点页面
//! - **表单接口** (`api`): 联系与订座的线索采集接口
//! - **内容客户端** (`cms-client` crate): 上游 CMS 的 GraphQL 客户端
//!
//! # 模块结构
//!
//! ```text
//! site-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── tenancy/       # 子域名解析、重写中间件
//! ├── middleware/    # 请求日志
//! ├── pages/         # 页面路由和处理器
//! ├── api/           # 表单提交接口
//! ├── render/        # 模板引擎
//! └── utils/         # 工具函数
//! ```

pub mod api;
pub mod core;
pub mod middleware;
pub mod pages;
pub mod render;
pub mod tenancy;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use render::Renderer;
pub use tenancy::{base_domain, resolve_subdomain, rewrite_path, strip_port, tenant_url};
pub use utils::{AppError, AppResponse, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and initialize logging from the environment.
pub fn setup_environment() -> anyhow::Result<()> {
    // .env is optional; real deployments configure via the environment
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), None, log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ________                          __
   / ____/ /__  ____ ___  ___  ____  / /_____ _
  / __/ / / _ \/ __ `__ \/ _ \/ __ \/ __/ __ `/
 / /___/ /  __/ / / / / /  __/ / / / /_/ /_/ /
/_____/_/\___/_/ /_/ /_/\___/_/ /_/\__/\__,_/
    "#
    );
}
