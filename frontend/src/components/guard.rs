use crate::{
    api::Role,
    state::auth::{use_session, AuthState},
};
use leptos::*;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Render,
    RedirectToLogin,
    RedirectToDashboard,
}

impl GateDecision {
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            GateDecision::Render => None,
            GateDecision::RedirectToLogin => Some(LOGIN_PATH),
            GateDecision::RedirectToDashboard => Some(DASHBOARD_PATH),
        }
    }
}

/// Decides whether a protected view may render. Roles are parsed through
/// `normalize_key`, so membership here is already case-insensitive.
pub fn evaluate_gate(state: &AuthState, allowed: Option<&[Role]>) -> GateDecision {
    let Some(user) = state.current_user() else {
        return GateDecision::RedirectToLogin;
    };
    match allowed {
        Some(roles) if !roles.contains(&user.role) => {
            let listed = roles.iter().map(|r| r.as_str()).collect::<Vec<_>>().join(", ");
            log::warn!(
                "Access denied: role \"{}\" not in allowed list [{}]",
                user.role,
                listed
            );
            GateDecision::RedirectToDashboard
        }
        _ => GateDecision::Render,
    }
}

pub fn navigate_to(path: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.location().set_href(path);
    }
}

#[component]
pub fn RequireRole(
    children: ChildrenFn,
    #[prop(optional)] allowed: Option<Vec<Role>>,
) -> impl IntoView {
    let auth = use_session().state();
    let allowed = store_value(allowed);
    let decision =
        create_memo(move |_| allowed.with_value(|roles| evaluate_gate(&auth.get(), roles.as_deref())));
    create_effect(move |_| {
        if let Some(target) = decision.get().redirect_target() {
            navigate_to(target);
        }
    });
    view! {
        <Show when=move || decision.get() == GateDecision::Render>
            {children()}
        </Show>
    }
}

/// Sends the browser elsewhere as soon as it mounts. Used for routes that
/// only exist to bounce, such as the catch-all.
#[component]
pub fn RedirectTo(#[prop(into)] path: String) -> impl IntoView {
    create_effect(move |_| navigate_to(&path));
}
