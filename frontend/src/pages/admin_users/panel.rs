use crate::repository::use_repository;
use leptos::*;

use super::{
    components::{
        form::{RegisterUserForm, RegistrationNotice},
        list::UserList,
        role_summary::RoleSummary,
    },
    layout::AdminUsersFrame,
    view_model::use_admin_users_view_model,
};

/// Admin-only; the route guard keeps everyone else out.
#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let vm = use_admin_users_view_model();
    let time_zone = use_repository().client().time_zone();
    let users = Signal::derive(move || vm.users_resource.get());
    let loaded_users = Signal::derive(move || users.get().unwrap_or_default());

    view! {
        <AdminUsersFrame form_open=vm.form_open>
            <RoleSummary users=loaded_users />
            <RegistrationNotice messages=vm.messages />
            <Show when=move || vm.form_open.get()>
                <RegisterUserForm
                    form_state=vm.form
                    messages=vm.messages
                    register_action=vm.register_action
                />
            </Show>
            <UserList users=users time_zone=time_zone />
        </AdminUsersFrame>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::mock_repository;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_role_summary_and_collapsed_form() {
        let html = render_to_string(|| {
            provide_context(mock_repository());
            view! { <AdminUsersPage /> }
        });
        assert!(html.contains("User Management"));
        assert!(html.contains("Cluster FRP"));
        assert!(html.contains("Project Staff"));
        assert!(!html.contains("Create New Staff Account"));
        assert!(html.contains("Fetching user list"));
    }
}
