/// 服务器配置 - 站点服务器的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3001 | HTTP 服务端口 |
/// | API_URL | http://localhost:3000 | CMS 基础地址 (媒体文件) |
/// | GRAPHQL_ENDPOINT | {API_URL}/api/graphql | CMS GraphQL 端点 |
/// | ENVIRONMENT | development | 运行环境 |
/// | REQUEST_TIMEOUT_MS | 30000 | 上游请求超时(毫秒) |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 GRAPHQL_ENDPOINT=https://cms.example.com/api/graphql cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP 服务端口
    pub http_port: u16,
    /// CMS 基础地址，用于构造媒体文件 URL
    pub api_url: String,
    /// CMS GraphQL 端点
    pub graphql_endpoint: String,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 上游请求超时时间 (毫秒)
    pub request_timeout_ms: u64,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        let api_url =
            std::env::var("API_URL").unwrap_or_else(|_| "http://localhost:3000".into());
        let graphql_endpoint = std::env::var("GRAPHQL_ENDPOINT")
            .unwrap_or_else(|_| format!("{}/api/graphql", api_url.trim_end_matches('/')));

        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
            api_url,
            graphql_endpoint,
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(graphql_endpoint: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.graphql_endpoint = graphql_endpoint.into();
        config.http_port = http_port;
        config
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
