use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::{AnalysisClient, Role},
    components::{
        guard::{RedirectTo, RequireRole},
        layout::Layout,
    },
    config,
    pages::{
        admin_users::AdminUsersPage, dashboard::DashboardPage, home::HomePage,
        log_work::LogWorkPage, login::LoginPage, reports::ReportsPage,
    },
    repository::FieldLogRepository,
    state::auth::SessionProvider,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/dashboard",
    "/log-work",
    "/reports",
    "/admin/users",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/dashboard", "/log-work", "/reports", "/admin/users"];

pub const ADMIN_ROUTE_PATHS: &[&str] = &["/admin/users"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    let cfg = config::current();
    provide_meta_context();
    provide_context(FieldLogRepository::new());
    provide_context(AnalysisClient::from_config(&cfg));
    let title = format!("{} Field Monitoring", cfg.organization_name());
    view! {
        <Title text=title />
        <SessionProvider>
            <Router>
                <Layout>
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/login" view=LoginPage/>
                        <Route path="/dashboard" view=ProtectedDashboard/>
                        <Route path="/log-work" view=ProtectedLogWork/>
                        <Route path="/reports" view=ProtectedReports/>
                        <Route path="/admin/users" view=ProtectedAdminUsers/>
                        <Route path="/*any" view=|| view! { <RedirectTo path="/"/> }/>
                    </Routes>
                </Layout>
            </Router>
        </SessionProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireRole><DashboardPage/></RequireRole> }
}

#[component]
fn ProtectedLogWork() -> impl IntoView {
    view! { <RequireRole allowed=Role::ALL.to_vec()><LogWorkPage/></RequireRole> }
}

#[component]
fn ProtectedReports() -> impl IntoView {
    view! { <RequireRole><ReportsPage/></RequireRole> }
}

#[component]
fn ProtectedAdminUsers() -> impl IntoView {
    view! { <RequireRole allowed=vec![Role::Admin]><AdminUsersPage/></RequireRole> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn protected_and_public_routes_partition_all() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        let protected: HashSet<&str> = PROTECTED_ROUTE_PATHS.iter().copied().collect();
        let public: HashSet<&str> = PUBLIC_ROUTE_PATHS.iter().copied().collect();
        assert!(protected.is_disjoint(&public));
        assert_eq!(&protected | &public, all);
    }

    #[test]
    fn admin_routes_are_protected() {
        for path in ADMIN_ROUTE_PATHS {
            assert!(
                PROTECTED_ROUTE_PATHS.contains(path),
                "admin path is not protected: {}",
                path
            );
        }
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}
