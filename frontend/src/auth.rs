//! 认证模块
//!
//! `AuthService` 基于注入的 API 客户端管理会话生命周期：
//! 从存储恢复、登录/注册时建立、登出时清除。纯 Rust，可直接单元测试。
//!
//! `AuthContext` 用信号包装它，通过 Leptos context 提供给组件树。
//! 路由服务只看到注入的登录信号，与认证模块解耦。

use huzzah_shared::{AuthResponse, LoginCredentials, RegisterInput, User};
use leptos::prelude::*;

use crate::api::ApiClient;
use crate::error::ClientResult;

/// 认证状态
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    /// 缓存的用户资料（只持久化 token，刷新后为 `None`）
    pub user: Option<User>,
    pub is_authenticated: bool,
}

impl AuthState {
    pub fn signed_in(user: User) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
        }
    }

    fn restored() -> Self {
        Self {
            user: None,
            is_authenticated: true,
        }
    }

    /// 已登录且资料已知
    ///
    /// 仅凭 token 恢复的会话没有资料，登录/注册页对它保持可达。
    pub fn has_profile(&self) -> bool {
        self.is_authenticated && self.user.is_some()
    }
}

#[derive(Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// 从已保存的 token 恢复会话
    pub fn restore(&self) -> AuthState {
        if self.client.tokens().get().is_some() {
            log::info!("session restored from stored token");
            AuthState::restored()
        } else {
            AuthState::default()
        }
    }

    pub async fn register(&self, input: &RegisterInput) -> ClientResult<AuthState> {
        let response = self.client.auth().register(input).await?;
        Ok(self.establish(response))
    }

    pub async fn login(&self, credentials: &LoginCredentials) -> ClientResult<AuthState> {
        let response = self.client.auth().login(credentials).await?;
        Ok(self.establish(response))
    }

    pub fn logout(&self) -> AuthState {
        self.client.tokens().clear();
        log::info!("signed out");
        AuthState::default()
    }

    fn establish(&self, response: AuthResponse) -> AuthState {
        let AuthResponse { token, user } = response;
        if !self.client.tokens().set(&token) {
            log::warn!("token could not be persisted; session ends with this tab");
        }
        log::info!("signed in as {}", user.username);
        AuthState::signed_in(user)
    }
}

/// 认证上下文（通过 context 共享）
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: RwSignal<AuthState>,
    service: StoredValue<AuthService>,
}

impl AuthContext {
    pub fn new(service: AuthService) -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
            service: StoredValue::new(service),
        }
    }

    /// 加载持久化的会话，启动时调用一次
    pub fn init(&self) {
        let restored = self.service.with_value(AuthService::restore);
        self.state.set(restored);
    }

    pub fn client(&self) -> ApiClient {
        self.service.with_value(|s| s.client().clone())
    }

    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_authenticated))
    }

    /// 注入路由服务的守卫信号，见 [`AuthState::has_profile`]
    pub fn has_profile_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(AuthState::has_profile))
    }

    pub fn service(&self) -> AuthService {
        self.service.get_value()
    }

    /// 登录/注册成功后发布新会话
    pub fn set_session(&self, next: AuthState) {
        self.state.set(next);
    }

    pub fn logout(&self) {
        let next = self.service.with_value(AuthService::logout);
        self.state.set(next);
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{API, TestHarness, auth_response_json, location_json};
    use crate::web::route::AppRoute;
    use huzzah_shared::protocol::HttpMethod;
    use serde_json::json;

    fn credentials() -> LoginCredentials {
        LoginCredentials {
            email: "u1@example.com".into(),
            password: "hunter2".into(),
        }
    }

    #[test]
    fn test_restore_without_token_is_anonymous() {
        let h = TestHarness::new();
        let service = AuthService::new(h.client.clone());
        assert_eq!(service.restore(), AuthState::default());
    }

    #[test]
    fn test_restore_with_token_is_authenticated() {
        let h = TestHarness::new();
        h.client.tokens().set("persisted");
        let state = AuthService::new(h.client.clone()).restore();
        assert!(state.is_authenticated);
        assert!(state.user.is_none());
    }

    #[tokio::test]
    async fn test_login_stores_token_and_next_call_carries_it() {
        let h = TestHarness::new();
        h.transport.mock_response(
            HttpMethod::Post,
            &format!("{API}/auth/login"),
            200,
            auth_response_json("jwt-123", "u1"),
        );
        h.transport.mock_response(
            HttpMethod::Get,
            &format!("{API}/locations"),
            200,
            json!([location_json("l1", "City", "Ravnica")]),
        );
        let service = AuthService::new(h.client.clone());

        let state = service.login(&credentials()).await.unwrap();

        assert!(state.is_authenticated);
        assert_eq!(state.user.unwrap().id, "u1");
        assert_eq!(h.stored_token().as_deref(), Some("jwt-123"));

        h.client.locations().get_all().await.unwrap();
        let next = h.transport.last_request().unwrap();
        assert_eq!(next.header("Authorization"), Some("Bearer jwt-123"));
    }

    #[tokio::test]
    async fn test_register_establishes_session() {
        let h = TestHarness::new();
        h.transport.mock_response(
            HttpMethod::Post,
            &format!("{API}/auth/register"),
            201,
            auth_response_json("fresh", "u9"),
        );
        let input = RegisterInput {
            username: "minsc".into(),
            email: "minsc@example.com".into(),
            password: "boo".into(),
            character_name: "Minsc".into(),
            character_class: "Ranger".into(),
            character_race: "Human".into(),
        };

        let state = AuthService::new(h.client.clone())
            .register(&input)
            .await
            .unwrap();

        assert_eq!(state.user.map(|u| u.id).as_deref(), Some("u9"));
        assert_eq!(h.stored_token().as_deref(), Some("fresh"));
    }

    #[tokio::test]
    async fn test_failed_login_leaves_state_untouched() {
        let h = TestHarness::new();
        h.transport.mock_response(
            HttpMethod::Post,
            &format!("{API}/auth/login"),
            401,
            json!({ "message": "Invalid credentials" }),
        );

        let err = AuthService::new(h.client.clone())
            .login(&credentials())
            .await
            .unwrap_err();

        assert!(err.is_unauthorized());
        assert_eq!(h.stored_token(), None);
    }

    #[tokio::test]
    async fn test_logout_clears_memory_and_storage() {
        let h = TestHarness::new();
        h.transport.mock_response(
            HttpMethod::Post,
            &format!("{API}/auth/login"),
            200,
            auth_response_json("jwt-123", "u1"),
        );
        let service = AuthService::new(h.client.clone());
        service.login(&credentials()).await.unwrap();

        let state = service.logout();

        assert!(!state.is_authenticated);
        assert!(state.user.is_none());
        assert_eq!(h.stored_token(), None);
        assert_eq!(service.restore(), AuthState::default());
    }

    #[tokio::test]
    async fn test_restored_session_can_reach_login_again() {
        let h = TestHarness::new();
        h.client.tokens().set("persisted");
        h.transport.mock_response(
            HttpMethod::Post,
            &format!("{API}/auth/login"),
            200,
            auth_response_json("renewed", "u1"),
        );
        let service = AuthService::new(h.client.clone());

        let restored = service.restore();
        assert!(restored.is_authenticated);
        assert!(!restored.has_profile());
        assert_eq!(AppRoute::Login.redirect_for(restored.has_profile()), None);
        assert_eq!(AppRoute::Register.redirect_for(restored.has_profile()), None);

        let renewed = service.login(&credentials()).await.unwrap();
        assert!(renewed.has_profile());
        assert_eq!(
            AppRoute::Login.redirect_for(renewed.has_profile()),
            Some(AppRoute::Home)
        );
        assert_eq!(h.stored_token().as_deref(), Some("renewed"));
    }

    #[tokio::test]
    async fn test_context_logout_reads_false_immediately() {
        let owner = Owner::new();
        owner.set();

        let h = TestHarness::new();
        h.transport.mock_response(
            HttpMethod::Post,
            &format!("{API}/auth/login"),
            200,
            auth_response_json("jwt-123", "u1"),
        );
        let ctx = AuthContext::new(AuthService::new(h.client.clone()));
        let is_authenticated = ctx.is_authenticated_signal();
        let has_profile = ctx.has_profile_signal();

        let session = ctx.service().login(&credentials()).await.unwrap();
        ctx.set_session(session);
        assert!(is_authenticated.get_untracked());
        assert!(has_profile.get_untracked());

        ctx.logout();

        assert!(!is_authenticated.get_untracked());
        assert!(!has_profile.get_untracked());
        assert!(ctx.state.get_untracked().user.is_none());
        assert_eq!(h.stored_token(), None);
    }

    #[test]
    fn test_context_init_restores_token_session() {
        let owner = Owner::new();
        owner.set();

        let h = TestHarness::new();
        h.client.tokens().set("persisted");
        let ctx = AuthContext::new(AuthService::new(h.client.clone()));
        assert!(!ctx.is_authenticated_signal().get_untracked());

        ctx.init();

        assert!(ctx.is_authenticated_signal().get_untracked());
        assert!(!ctx.has_profile_signal().get_untracked());
    }
}
