use crate::{api::User, pages::admin_users::utils::role_counts};
use leptos::*;

#[component]
pub fn RoleSummary(users: Signal<Vec<User>>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 md:grid-cols-5 gap-4 mb-8">
            {move || {
                role_counts(&users.get())
                    .into_iter()
                    .map(|(role, count)| {
                        view! {
                            <div class="bg-white p-4 rounded-2xl border shadow-sm">
                                <div class="text-[10px] font-bold text-slate-400 uppercase mb-1">{role.as_str()}</div>
                                <div class="text-xl font-bold text-slate-900">{count}</div>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
