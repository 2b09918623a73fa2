use cms_client::CmsClient;

use crate::core::Config;
use crate::render::Renderer;

/// 服务器状态 - 持有所有服务的共享引用
///
/// ServerState 在启动时构造一次，然后以浅拷贝注入到每个请求处理器。
/// 其中 CMS 客户端与模板环境内部都是 `Arc`，克隆成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | cms | CmsClient | 上游 CMS GraphQL 客户端 |
/// | renderer | Renderer | minijinja 模板环境 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 上游内容客户端
    pub cms: CmsClient,
    /// 模板渲染器
    pub renderer: Renderer,
}

impl ServerState {
    /// 创建服务器状态
    pub fn initialize(config: &Config) -> Self {
        let cms =
            CmsClient::with_timeout_ms(config.graphql_endpoint.clone(), config.request_timeout_ms);

        Self {
            config: config.clone(),
            cms,
            renderer: Renderer::new(),
        }
    }
}
