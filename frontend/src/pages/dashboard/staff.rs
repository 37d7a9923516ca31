use crate::{
    components::{
        calendar::Calendar,
        guard::navigate_to,
        layout::LoadingSpinner,
    },
    pages::dashboard::{
        components::{AiInsightsPanel, StatusCountCards},
        utils::{log_work_href, StatusCounts},
    },
    repository::use_repository,
    utils::{
        calendar::{shift_month, CalendarGrid},
        time::{month_name, today_in_app_tz},
    },
};
use chrono::{Datelike, NaiveDate};
use leptos::*;

#[component]
pub fn StaffDashboard(#[prop(into)] username: String) -> impl IntoView {
    let repo = use_repository();
    let time_zone = repo.client().time_zone();
    let today = today_in_app_tz();
    let year = create_rw_signal(today.year());
    let month = create_rw_signal(today.month());

    let owner = username.clone();
    let logs = create_resource(
        move || (year.get(), month.get()),
        move |(y, m)| {
            let repo = repo.clone();
            let owner = owner.clone();
            async move { repo.list_logs_for_user(&owner, m, y).await }
        },
    );
    let month_logs = Signal::derive(move || logs.get().unwrap_or_default());

    let step = move |delta: i32| {
        let (y, m) = shift_month(year.get_untracked(), month.get_untracked(), delta);
        year.set(y);
        month.set(m);
    };
    let on_day_click = Callback::new(|date: NaiveDate| navigate_to(&log_work_href(date)));

    view! {
        <div class="max-w-7xl mx-auto px-4 py-8">
            <div class="flex flex-col md:flex-row justify-between items-start md:items-center mb-8 gap-4">
                <div>
                    <h1 class="text-3xl font-bold text-slate-900">{format!("Welcome, {username}")}</h1>
                    <p class="text-slate-500">"Track your attendance and manage work logs here."</p>
                </div>
                <a
                    href="/log-work"
                    class="px-6 py-2.5 bg-indigo-600 text-white rounded-xl font-bold hover:bg-indigo-700"
                >
                    <i class="fas fa-plus mr-2"></i>
                    "Log Work"
                </a>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                <div class="lg:col-span-2 space-y-8">
                    {move || view! { <StatusCountCards counts=StatusCounts::from_logs(&month_logs.get()) /> }}
                    <div class="bg-white rounded-2xl shadow-sm border p-6">
                        <div class="flex justify-between items-center mb-6">
                            <h2 class="text-xl font-bold text-slate-900">"Calendar View"</h2>
                            <div class="flex space-x-2 items-center">
                                <button class="p-2 hover:bg-slate-100 rounded-lg" title="Previous month" on:click=move |_| step(-1)>
                                    <i class="fas fa-chevron-left text-slate-400"></i>
                                </button>
                                <span class="font-bold text-slate-700 min-w-[120px] text-center">
                                    {move || format!("{} {}", month_name(month.get()), year.get())}
                                </span>
                                <button class="p-2 hover:bg-slate-100 rounded-lg" title="Next month" on:click=move |_| step(1)>
                                    <i class="fas fa-chevron-right text-slate-400"></i>
                                </button>
                            </div>
                        </div>
                        {move || match logs.get() {
                            None => view! { <LoadingSpinner /> }.into_view(),
                            Some(loaded) => {
                                CalendarGrid::build(year.get(), month.get(), &loaded, time_zone)
                                    .map(|grid| view! { <Calendar grid=grid on_day_click=on_day_click /> })
                                    .into_view()
                            }
                        }}
                    </div>
                </div>

                <div class="space-y-8">
                    <div class="bg-white p-6 rounded-2xl shadow-sm border">
                        <h3 class="text-lg font-bold text-slate-900 mb-4">"Quick Links"</h3>
                        <a
                            href="/reports"
                            class="w-full text-left px-4 py-3 bg-slate-50 hover:bg-indigo-50 rounded-xl flex items-center"
                        >
                            <div class="w-10 h-10 bg-indigo-100 text-indigo-600 rounded-lg flex items-center justify-center mr-3">
                                <i class="fas fa-file-alt"></i>
                            </div>
                            <div>
                                <div class="font-bold text-slate-900">"Workdone Report"</div>
                                <div class="text-xs text-slate-500">"Generate monthly report"</div>
                            </div>
                        </a>
                    </div>
                    <AiInsightsPanel logs=month_logs username=username.clone() />
                </div>
            </div>
        </div>
    }
}
