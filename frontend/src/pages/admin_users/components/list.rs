use crate::{
    api::User,
    pages::admin_users::utils::{created_on, initial, role_badge_class},
};
use chrono_tz::Tz;
use leptos::*;

const HEADER_CLASS: &str = "px-6 py-5 text-xs font-bold text-slate-400 uppercase tracking-widest";

fn user_row(user: User, time_zone: Tz) -> impl IntoView {
    let badge = format!(
        "text-[10px] font-bold px-2.5 py-1 rounded-full border {}",
        role_badge_class(user.role)
    );
    let created = created_on(&user, time_zone);
    view! {
        <tr class="hover:bg-slate-50/50">
            <td class="px-6 py-4">
                <div class="flex items-center">
                    <div class="w-8 h-8 rounded-full bg-slate-100 flex items-center justify-center text-slate-500 mr-3 text-xs font-bold">
                        {initial(&user.username)}
                    </div>
                    <span class="text-sm font-bold text-slate-900">{user.username.clone()}</span>
                </div>
            </td>
            <td class="px-6 py-4">
                <span class=badge>{user.role.as_str()}</span>
            </td>
            <td class="px-6 py-4 text-sm text-slate-500 font-medium">{created}</td>
        </tr>
    }
}

#[component]
pub fn UserList(users: Signal<Option<Vec<User>>>, time_zone: Tz) -> impl IntoView {
    let body = move || match users.get() {
        None => view! {
            <tr>
                <td colspan="3" class="py-20 text-center">
                    <i class="fas fa-circle-notch fa-spin text-3xl text-indigo-600"></i>
                    <p class="mt-2 text-slate-500 text-sm">"Fetching user list from Spreadsheet..."</p>
                </td>
            </tr>
        }
        .into_view(),
        Some(list) if list.is_empty() => view! {
            <tr>
                <td colspan="3" class="py-20 text-center text-slate-400 text-sm italic">
                    "No users found in the spreadsheet."
                </td>
            </tr>
        }
        .into_view(),
        Some(list) => list
            .into_iter()
            .map(|user| user_row(user, time_zone))
            .collect_view(),
    };

    view! {
        <div class="bg-white rounded-3xl shadow-sm border overflow-hidden">
            <div class="overflow-x-auto">
                <table class="w-full text-left">
                    <thead>
                        <tr class="bg-slate-50/50 border-b">
                            <th class=HEADER_CLASS>"Username"</th>
                            <th class=HEADER_CLASS>"Staff Role"</th>
                            <th class=HEADER_CLASS>"Created On"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-slate-100">{body}</tbody>
                </table>
            </div>
        </div>
    }
}
