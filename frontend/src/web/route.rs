//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖于 DOM 或 web_sys，
//! 路由映射和守卫规则都可以直接单元测试。

use std::fmt::Display;

const LOCATIONS_PREFIX: &str = "/locations/";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    #[default]
    Home,
    Login,
    Register,
    Locations,
    CreateLocation,
    LocationDetails(String),
    Profile,
    /// 页面未找到（总是重定向到首页）
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举（忽略查询串和末尾斜杠）
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        match path {
            "/" => Self::Home,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/locations" => Self::Locations,
            "/locations/new" => Self::CreateLocation,
            "/profile" => Self::Profile,
            _ => match path.strip_prefix(LOCATIONS_PREFIX) {
                Some(id) if !id.is_empty() && !id.contains('/') => {
                    Self::LocationDetails(id.to_string())
                }
                _ => Self::NotFound,
            },
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Self::Home | Self::NotFound => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::Locations => "/locations".to_string(),
            Self::CreateLocation => "/locations/new".to_string(),
            Self::LocationDetails(id) => format!("{LOCATIONS_PREFIX}{id}"),
            Self::Profile => "/profile".to_string(),
        }
    }

    /// 已登录时是否应离开该页面
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// 路由守卫：返回应重定向到的路由
    pub fn redirect_for(&self, is_authenticated: bool) -> Option<AppRoute> {
        if *self == Self::NotFound {
            return Some(Self::Home);
        }
        if is_authenticated && self.should_redirect_when_authenticated() {
            return Some(Self::auth_success_redirect());
        }
        None
    }

    pub fn auth_success_redirect() -> Self {
        Self::Home
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}
