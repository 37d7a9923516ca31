use crate::{
    components::guard::{navigate_to, LOGIN_PATH},
    config,
    state::auth::{use_session, AuthState, Session},
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

const PUBLIC_LINKS: [NavLink; 2] = [
    NavLink { label: "Home", href: "/" },
    NavLink { label: "Gallery", href: "/#gallery" },
];

const PRIVATE_LINKS: [NavLink; 3] = [
    NavLink { label: "Dashboard", href: "/dashboard" },
    NavLink { label: "Log Work", href: "/log-work" },
    NavLink { label: "Reports", href: "/reports" },
];

const ADMIN_LINKS: [NavLink; 1] = [NavLink { label: "Users", href: "/admin/users" }];

/// Links visible for the given session, in display order.
pub fn nav_links(state: &AuthState) -> Vec<NavLink> {
    let mut links = PUBLIC_LINKS.to_vec();
    if state.current_user().is_some() {
        links.extend(PRIVATE_LINKS);
    }
    if state.is_admin() {
        links.extend(ADMIN_LINKS);
    }
    links
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let auth = session.state();
    let (menu_open, set_menu_open) = create_signal(false);
    let organization = config::current().organization_name().to_string();
    let links = create_memo(move |_| nav_links(&auth.get()));
    let user_name = move || {
        auth.get()
            .current_user()
            .map(|u| u.username.clone())
            .unwrap_or_default()
    };
    let user_role = move || {
        auth.get()
            .current_user()
            .map(|u| u.role.to_string())
            .unwrap_or_default()
    };
    let signed_in = move || auth.get().current_user().is_some();

    let session = store_value(session);
    let on_logout = move |_| {
        set_menu_open.set(false);
        session.with_value(Session::logout);
        navigate_to(LOGIN_PATH);
    };
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <nav class="bg-white border-b sticky top-0 z-50 no-print">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between h-16">
                    <a href="/" class="flex items-center space-x-2">
                        <div class="w-10 h-10 bg-indigo-600 rounded-lg flex items-center justify-center text-white font-bold text-xl">
                            "W"
                        </div>
                        <span class="text-xl font-bold tracking-tight text-indigo-900 hidden sm:block">
                            {organization}
                        </span>
                    </a>
                    <div class="hidden md:flex items-center space-x-4">
                        {move || {
                            links
                                .get()
                                .into_iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href
                                            class="px-3 py-2 rounded-md text-sm font-medium text-slate-600 hover:text-indigo-600 hover:bg-slate-50"
                                        >
                                            {link.label}
                                        </a>
                                    }
                                })
                                .collect_view()
                        }}
                        <Show
                            when=signed_in
                            fallback=|| {
                                view! {
                                    <a
                                        href="/login"
                                        class="ml-4 px-4 py-2 bg-indigo-600 text-white rounded-lg text-sm font-medium hover:bg-indigo-700"
                                    >
                                        "Sign In"
                                    </a>
                                }
                            }
                        >
                            <div class="flex items-center space-x-4 ml-4 pl-4 border-l">
                                <div class="text-right leading-none">
                                    <div class="text-sm font-semibold text-slate-900">{user_name}</div>
                                    <div class="text-xs text-slate-500">{user_role}</div>
                                </div>
                                <button
                                    class="p-2 text-slate-400 hover:text-red-500"
                                    title="Sign Out"
                                    on:click=on_logout
                                >
                                    <i class="fas fa-sign-out-alt"></i>
                                </button>
                            </div>
                        </Show>
                    </div>
                    <div class="md:hidden flex items-center">
                        <button
                            type="button"
                            class="p-2 text-slate-600"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get()
                            aria-controls="mobile-nav"
                        >
                            <i class=move || {
                                if menu_open.get() { "fas fa-times text-xl" } else { "fas fa-bars text-xl" }
                            }></i>
                        </button>
                    </div>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <div id="mobile-nav" class="md:hidden bg-white border-b">
                    <div class="px-2 pt-2 pb-3 space-y-1">
                        {move || {
                            links
                                .get()
                                .into_iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href
                                            class="block px-3 py-2 rounded-md text-base font-medium text-slate-600 hover:text-indigo-600 hover:bg-slate-50"
                                            on:click=move |_| set_menu_open.set(false)
                                        >
                                            {link.label}
                                        </a>
                                    }
                                })
                                .collect_view()
                        }}
                        <Show
                            when=signed_in
                            fallback=move || {
                                view! {
                                    <a
                                        href="/login"
                                        class="block px-3 py-2 rounded-md text-base font-medium text-indigo-600 hover:bg-indigo-50"
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        "Sign In"
                                    </a>
                                }
                            }
                        >
                            <button
                                class="block w-full text-left px-3 py-2 rounded-md text-base font-medium text-red-600 hover:bg-red-50"
                                on:click=on_logout
                            >
                                "Sign Out"
                            </button>
                        </Show>
                    </div>
                </div>
            </Show>
        </nav>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let organization = config::current().organization_name().to_string();
    view! {
        <footer class="bg-slate-900 text-white py-6 text-center text-sm no-print">
            <p>{format!("\u{a9} 2024 {organization} Field Operations Monitoring. All Rights Reserved.")}</p>
        </footer>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col">
            <Navbar/>
            <main class="flex-grow">{children()}</main>
            <Footer/>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-indigo-600"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-red-50 text-red-600 p-3 rounded-lg text-sm font-medium flex items-center">
            <i class="fas fa-exclamation-circle mr-2"></i>
            <p>{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-emerald-50 text-emerald-700 p-3 rounded-lg text-sm font-medium flex items-center">
            <i class="fas fa-check-circle mr-2"></i>
            <p>{message}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Role, User};

    fn labels(state: &AuthState) -> Vec<&'static str> {
        nav_links(state).into_iter().map(|l| l.label).collect()
    }

    #[test]
    fn signed_out_sees_public_links_only() {
        assert_eq!(labels(&AuthState::default()), vec!["Home", "Gallery"]);
    }

    #[test]
    fn staff_see_private_links_without_users() {
        let state = AuthState::signed_in(User::new("ravi", Role::Frp));
        assert_eq!(
            labels(&state),
            vec!["Home", "Gallery", "Dashboard", "Log Work", "Reports"]
        );
    }

    #[test]
    fn admin_also_sees_users_link() {
        let state = AuthState::signed_in(User::builtin_admin());
        assert_eq!(labels(&state).last(), Some(&"Users"));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::User;
    use crate::test_support::helpers::{provide_session, staff_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn navbar_shows_user_and_role() {
        let html = render_to_string(move || {
            provide_session(Some(staff_user()));
            view! { <Navbar /> }
        });
        assert!(html.contains("ravi"));
        assert!(html.contains("CRP"));
        assert!(html.contains("Log Work"));
        assert!(!html.contains("/admin/users"));
    }

    #[test]
    fn navbar_offers_sign_out_when_signed_in() {
        let html = render_to_string(move || {
            provide_session(Some(staff_user()));
            view! { <Navbar /> }
        });
        assert!(html.contains("Sign Out"));
        assert!(!html.contains("Sign In"));
    }

    #[test]
    fn navbar_offers_sign_in_when_signed_out() {
        let html = render_to_string(move || {
            provide_session(None);
            view! { <Navbar /> }
        });
        assert!(html.contains("Sign In"));
        assert!(!html.contains("Dashboard"));
    }

    #[test]
    fn layout_wraps_children_with_footer() {
        let html = render_to_string(move || {
            provide_session(Some(User::builtin_admin()));
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains("child"));
        assert!(html.contains("/admin/users"));
        assert!(html.contains("Wassan Vikarabad Field Operations Monitoring"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="error" />
                    <SuccessMessage message="ok" />
                </div>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("error"));
        assert!(html.contains("ok"));
    }
}
