use leptos::*;
use leptos_router::use_query_map;

mod panel;
pub mod utils;

pub use panel::LogWorkPanel;

/// Reads `?date=YYYY-MM-DD` (set when a calendar day is clicked) and hands
/// it to the form.
#[component]
pub fn LogWorkPage() -> impl IntoView {
    let query = use_query_map();
    let initial_date = query.with_untracked(|q| utils::parse_initial_date(q.get("date").map(String::as_str)));
    view! { <LogWorkPanel initial_date=initial_date /> }
}
