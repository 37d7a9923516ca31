use crate::{
    components::{calendar::Calendar, layout::LoadingSpinner},
    pages::dashboard::{
        components::{ActivityBreakdown, MonthSelect, RecentLogs, StatusCountCards, YearSelect},
        repository::{load_admin_overview, AdminOverview},
        utils::{activity_breakdown, latest_first, StatusCounts},
    },
    repository::use_repository,
    utils::{
        calendar::{logs_in_month, year_options, CalendarGrid},
        time::today_in_app_tz,
    },
};
use chrono::Datelike;
use leptos::*;

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let repo = use_repository();
    let time_zone = repo.client().time_zone();
    let today = today_in_app_tz();
    let year = create_rw_signal(today.year());
    let month = create_rw_signal(today.month());
    let selected_user = create_rw_signal(None::<String>);

    let overview = create_resource(
        || (),
        move |_| {
            let repo = repo.clone();
            async move { load_admin_overview(&repo).await }
        },
    );

    // Falls back to the first listed user until the admin picks one.
    let active_user = create_memo(move |_| {
        selected_user.get().or_else(|| {
            overview
                .get()
                .and_then(|o: AdminOverview| o.default_user())
        })
    });
    let user_logs = create_memo(move |_| {
        let all = overview.get().map(|o| o.logs).unwrap_or_default();
        match active_user.get() {
            Some(user) => logs_in_month(&all, year.get(), month.get(), Some(&user), time_zone),
            None => Vec::new(),
        }
    });
    let user_count = move || overview.get().map(|o| o.users.len()).unwrap_or(0);

    view! {
        <div class="max-w-7xl mx-auto px-4 py-8">
            <div class="flex flex-col md:flex-row justify-between items-start md:items-center mb-8 gap-4">
                <div>
                    <h1 class="text-3xl font-bold text-slate-900">"Operations Monitor"</h1>
                    <p class="text-slate-500">"Consolidated view of field staff attendance and activities."</p>
                </div>
                <div class="flex space-x-3">
                    <a href="/admin/users" class="px-6 py-2.5 bg-emerald-600 text-white rounded-xl font-bold hover:bg-emerald-700 flex items-center">
                        <i class="fas fa-user-plus mr-2"></i>
                        "Add New User"
                    </a>
                    <a href="/log-work" class="px-6 py-2.5 bg-indigo-600 text-white rounded-xl font-bold hover:bg-indigo-700">
                        <i class="fas fa-plus mr-2"></i>
                        "Log Work"
                    </a>
                </div>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-4 gap-8">
                <div class="lg:col-span-1 space-y-6">
                    <div class="bg-white p-6 rounded-2xl shadow-sm border space-y-4">
                        <h3 class="font-bold text-slate-900 uppercase text-xs tracking-wider border-b pb-2">"Filter View"</h3>
                        <div>
                            <label class="block text-xs font-bold text-slate-500 mb-2">"Staff Member"</label>
                            <select
                                class="w-full px-4 py-2 border rounded-xl"
                                on:change=move |ev| selected_user.set(Some(event_target_value(&ev)))
                            >
                                {move || {
                                    overview
                                        .get()
                                        .map(|o| o.users)
                                        .unwrap_or_default()
                                        .into_iter()
                                        .map(|user| {
                                            let name = user.username;
                                            let is_active = active_user.get().as_deref() == Some(name.as_str());
                                            view! {
                                                <option value=name.clone() selected=is_active>{name.clone()}</option>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </select>
                        </div>
                        <div class="grid grid-cols-2 gap-2">
                            <div>
                                <label class="block text-xs font-bold text-slate-500 mb-2">"Month"</label>
                                <MonthSelect month=month />
                            </div>
                            <div>
                                <label class="block text-xs font-bold text-slate-500 mb-2">"Year"</label>
                                <YearSelect year=year options=year_options(today.year()) />
                            </div>
                        </div>
                    </div>

                    <div class="bg-white p-6 rounded-2xl shadow-sm border space-y-4">
                        <h3 class="font-bold text-slate-900 uppercase text-xs tracking-wider">"Summary Stats"</h3>
                        {move || view! { <StatusCountCards counts=StatusCounts::from_logs(&user_logs.get()) /> }}
                        <div class="pt-2 border-t flex justify-between items-center">
                            <span class="text-sm font-bold text-slate-900">"Total Users"</span>
                            <a href="/admin/users" class="font-bold text-indigo-600 hover:underline">{user_count}</a>
                        </div>
                    </div>

                    <div class="bg-slate-900 text-white p-6 rounded-2xl shadow-xl">
                        <h3 class="font-bold uppercase text-xs tracking-widest text-slate-400 mb-4">"Quick Actions"</h3>
                        <a href="/admin/users" class="w-full py-3 bg-white/10 hover:bg-white/20 rounded-xl flex items-center justify-center font-bold mb-3">
                            <i class="fas fa-users-cog mr-2 text-indigo-400"></i>
                            "Manage Users"
                        </a>
                        <a href="/reports" class="w-full py-3 bg-white/10 hover:bg-white/20 rounded-xl flex items-center justify-center font-bold">
                            <i class="fas fa-chart-pie mr-2 text-emerald-400"></i>
                            "View Reports"
                        </a>
                    </div>
                </div>

                <div class="lg:col-span-3 space-y-8">
                    <div class="bg-white rounded-2xl shadow-sm border p-6">
                        <h2 class="text-xl font-bold text-slate-900 mb-6">
                            {move || format!("Attendance for {}", active_user.get().unwrap_or_default())}
                        </h2>
                        {move || match overview.get() {
                            None => view! { <LoadingSpinner /> }.into_view(),
                            Some(_) => {
                                CalendarGrid::build(year.get(), month.get(), &user_logs.get(), time_zone)
                                    .map(|grid| view! { <Calendar grid=grid /> })
                                    .into_view()
                            }
                        }}
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                        {move || view! { <ActivityBreakdown breakdown=activity_breakdown(&user_logs.get()) /> }}
                        {move || {
                            view! {
                                <RecentLogs logs=latest_first(&user_logs.get(), time_zone) time_zone=time_zone />
                            }
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}
