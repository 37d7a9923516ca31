use leptos::*;

mod panel;
pub mod utils;

pub use panel::ReportPanel;

#[component]
pub fn ReportsPage() -> impl IntoView {
    view! { <ReportPanel /> }
}
