//! 路由服务 - 核心引擎
//!
//! 基于 History API 和信号的路由服务。所有导航走同一条路径：
//! 解析 -> 守卫 -> push/replace 历史记录 -> 更新路由信号。
//! 登录信号由外部注入，路由层不依赖认证模块。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
            log::warn!("[Router] pushState failed: {e:?}");
        }
    }
}

fn replace_history_state(path: &str) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(path)) {
            log::warn!("[Router] replaceState failed: {e:?}");
        }
    }
}

#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    signed_in: Signal<bool>,
}

impl RouterService {
    fn new(signed_in: Signal<bool>) -> Self {
        let requested = AppRoute::from_path(&current_path());
        let initial = match requested.redirect_for(signed_in.get_untracked()) {
            Some(redirect) => {
                replace_history_state(&redirect.to_path());
                redirect
            }
            None => requested,
        };
        let (current_route, set_route) = signal(initial);

        Self {
            current_route,
            set_route,
            signed_in,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 导航到指定 path（经过路由守卫）
    pub fn navigate(&self, path: &str) {
        self.navigate_to_route(AppRoute::from_path(path), true);
    }

    pub fn go(&self, route: AppRoute) {
        self.navigate_to_route(route, true);
    }

    fn navigate_to_route(&self, target: AppRoute, use_push: bool) {
        let is_auth = self.signed_in.get_untracked();

        // 重定向使用 replace，不在历史记录中留下不可达的 URL
        let (route, use_push) = match target.redirect_for(is_auth) {
            Some(redirect) => {
                log::debug!("[Router] {target} redirected to {redirect}");
                (redirect, false)
            }
            None => (target, use_push),
        };

        let path = route.to_path();
        if use_push {
            push_history_state(&path);
        } else {
            replace_history_state(&path);
        }
        self.set_route.set(route);
    }

    /// 浏览器前进/后退
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let signed_in = self.signed_in;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());
            match target.redirect_for(signed_in.get_untracked()) {
                Some(redirect) => {
                    replace_history_state(&redirect.to_path());
                    set_route.set(redirect);
                }
                None => set_route.set(target),
            }
        });

        if let Some(window) = web_sys::window() {
            if let Err(e) = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
            {
                log::error!("[Router] failed to register popstate listener: {e:?}");
            }
        }

        // 监听器与页面同生命周期
        closure.forget();
    }

    /// 登录状态变化时离开登录/注册页
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let signed_in = self.signed_in;

        Effect::new(move |_| {
            let is_auth = signed_in.get();
            let route = current_route.get_untracked();
            if let Some(redirect) = route.redirect_for(is_auth) {
                log::info!("[Router] auth state changed, leaving {route}");
                push_history_state(&redirect.to_path());
                set_route.set(redirect);
            }
        });
    }
}

fn provide_router(signed_in: Signal<bool>) -> RouterService {
    let router = RouterService::new(signed_in);
    router.init_popstate_listener();
    router.setup_auth_redirect();
    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// 组件
// ============================================================================

/// 路由器组件：向子组件提供路由服务
#[component]
pub fn Router(signed_in: Signal<bool>, children: Children) -> impl IntoView {
    provide_router(signed_in);
    children()
}

/// 路由出口：渲染当前路由对应的视图
#[component]
pub fn RouterOutlet(matcher: fn(AppRoute) -> AnyView) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 应用内链接，不刷新页面
#[component]
pub fn Link(
    #[prop(into)] to: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let target = to.clone();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate(&target);
    };

    view! {
        <a href=to class=class on:click=on_click>
            {children()}
        </a>
    }
}
