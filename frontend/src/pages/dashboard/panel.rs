use crate::{
    pages::dashboard::{admin::AdminDashboard, staff::StaffDashboard},
    state::auth::use_session,
};
use leptos::*;

/// Admins get the consolidated monitor; everyone else their own month.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_session().state();
    move || {
        let state = auth.get();
        match state.current_user() {
            Some(user) if user.is_admin() => view! { <AdminDashboard /> }.into_view(),
            Some(user) => view! { <StaffDashboard username=user.username.clone() /> }.into_view(),
            None => ().into_view(),
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::User;
    use crate::test_support::helpers::{mock_repository, provide_session, staff_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn admin_sees_operations_monitor() {
        let html = render_to_string(|| {
            provide_context(mock_repository());
            provide_session(Some(User::builtin_admin()));
            view! { <DashboardPage /> }
        });
        assert!(html.contains("Operations Monitor"));
    }

    #[test]
    fn staff_see_their_own_dashboard() {
        let html = render_to_string(|| {
            provide_context(mock_repository());
            provide_session(Some(staff_user()));
            view! { <DashboardPage /> }
        });
        assert!(html.contains("Welcome, ravi"));
        assert!(!html.contains("Operations Monitor"));
    }
}
