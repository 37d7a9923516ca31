use crate::{
    api::WorkLog,
    pages::dashboard::{
        repository::use_analysis_client,
        utils::{bar_percent, ActivityCount, StatusCounts},
    },
    utils::time::{format_day_month_year, month_name},
};
use chrono_tz::Tz;
use leptos::*;

#[component]
pub fn StatusCountCards(counts: StatusCounts) -> impl IntoView {
    view! {
        <div class="grid grid-cols-3 gap-4">
            <div class="bg-emerald-50 border border-emerald-100 p-4 rounded-2xl">
                <div class="text-sm font-bold text-emerald-700 uppercase">"Working"</div>
                <div class="text-2xl font-black text-emerald-900">{counts.working}</div>
            </div>
            <div class="bg-rose-50 border border-rose-100 p-4 rounded-2xl">
                <div class="text-sm font-bold text-rose-700 uppercase">"Leave"</div>
                <div class="text-2xl font-black text-rose-900">{counts.leave}</div>
            </div>
            <div class="bg-amber-50 border border-amber-100 p-4 rounded-2xl">
                <div class="text-sm font-bold text-amber-700 uppercase">"Holiday"</div>
                <div class="text-2xl font-black text-amber-900">{counts.holiday}</div>
            </div>
        </div>
    }
}

#[component]
pub fn MonthSelect(month: RwSignal<u32>) -> impl IntoView {
    view! {
        <select
            class="w-full px-4 py-2 border rounded-xl text-sm"
            on:change=move |ev| {
                if let Ok(value) = event_target_value(&ev).parse::<u32>() {
                    month.set(value);
                }
            }
        >
            {(1..=12u32)
                .map(|m| {
                    view! {
                        <option value=m.to_string() selected=move || month.get() == m>
                            {month_name(m)}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

#[component]
pub fn YearSelect(year: RwSignal<i32>, options: Vec<i32>) -> impl IntoView {
    view! {
        <select
            class="w-full px-4 py-2 border rounded-xl text-sm"
            on:change=move |ev| {
                if let Ok(value) = event_target_value(&ev).parse::<i32>() {
                    year.set(value);
                }
            }
        >
            {options
                .into_iter()
                .map(|y| {
                    view! {
                        <option value=y.to_string() selected=move || year.get() == y>
                            {y}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

#[component]
pub fn ActivityBreakdown(breakdown: Vec<ActivityCount>) -> impl IntoView {
    let max = breakdown.iter().map(|a| a.count).max().unwrap_or(0);
    let body = if breakdown.is_empty() {
        view! {
            <div class="h-32 flex items-center justify-center text-slate-400 text-sm italic">
                "No activity data recorded this month"
            </div>
        }
        .into_view()
    } else {
        breakdown
            .into_iter()
            .map(|entry| {
                view! {
                    <div>
                        <div class="flex justify-between text-xs font-semibold text-slate-600">
                            <span>{entry.activity}</span>
                            <span>{entry.count}</span>
                        </div>
                        <div class="h-2 bg-slate-100 rounded-full">
                            <div
                                class="h-2 bg-indigo-600 rounded-full"
                                style=format!("width: {}%", bar_percent(entry.count, max))
                            ></div>
                        </div>
                    </div>
                }
            })
            .collect_view()
    };
    view! {
        <div class="bg-white p-6 rounded-2xl shadow-sm border">
            <h3 class="font-bold text-slate-900 mb-6">"Activity Breakdown"</h3>
            <div class="space-y-3">{body}</div>
        </div>
    }
}

#[component]
pub fn RecentLogs(logs: Vec<WorkLog>, time_zone: Tz) -> impl IntoView {
    let empty = logs.is_empty();
    let rows = logs
        .into_iter()
        .map(|log| {
            let date = log
                .calendar_date(time_zone)
                .map(format_day_month_year)
                .unwrap_or_else(|| log.date.clone());
            view! {
                <div class="p-3 bg-slate-50 rounded-xl border-l-4 border-indigo-500">
                    <div class="flex justify-between">
                        <span class="text-xs font-bold text-indigo-700">{date}</span>
                        <span class="text-[10px] uppercase font-bold text-slate-400">{log.village}</span>
                    </div>
                    <div class="text-sm font-semibold text-slate-900 mt-1">{log.activity}</div>
                </div>
            }
        })
        .collect_view();
    view! {
        <div class="bg-white p-6 rounded-2xl shadow-sm border overflow-hidden">
            <h3 class="font-bold text-slate-900 mb-4">"Latest Logs"</h3>
            <div class="space-y-3 overflow-y-auto max-h-64">
                {if empty {
                    view! { <div class="text-center py-10 text-slate-400 text-sm">"No recent logs."</div> }
                        .into_view()
                } else {
                    rows
                }}
            </div>
        </div>
    }
}

/// Summary of the visible month's logs from the AI service. The button is
/// disabled while a request is in flight.
#[component]
pub fn AiInsightsPanel(
    #[prop(into)] logs: Signal<Vec<WorkLog>>,
    #[prop(into)] username: String,
) -> impl IntoView {
    let client = use_analysis_client();
    let analysis = create_rw_signal(None::<String>);
    let analyze = create_action(move |input: &(Vec<WorkLog>, String)| {
        let client = client.clone();
        let (logs, username) = input.clone();
        async move { client.analyze_work_logs(&logs, &username).await }
    });
    let pending = analyze.pending();

    create_effect(move |_| {
        if let Some(text) = analyze.value().get() {
            analysis.set(Some(text));
        }
    });

    let has_logs = move || logs.with(|l| !l.is_empty());
    let on_analyze = move |_| {
        if pending.get_untracked() {
            return;
        }
        analyze.dispatch((logs.get_untracked(), username.clone()));
    };

    view! {
        <div class="bg-indigo-900 text-white p-6 rounded-2xl shadow-xl overflow-hidden relative">
            <h3 class="text-lg font-bold mb-4 flex items-center">
                <i class="fas fa-magic mr-2 text-indigo-400"></i>
                "AI Performance Insights"
            </h3>
            {move || match analysis.get() {
                Some(text) => {
                    view! {
                        <div class="text-sm leading-relaxed text-indigo-100 bg-white/10 p-4 rounded-xl">
                            <p class="whitespace-pre-line">{text}</p>
                            <button
                                class="mt-4 block text-xs font-bold uppercase tracking-wider text-indigo-300 hover:text-white"
                                on:click=move |_| analysis.set(None)
                            >
                                "Refresh Analysis"
                            </button>
                        </div>
                    }
                        .into_view()
                }
                None => {
                    let on_analyze = on_analyze.clone();
                    view! {
                        <div class="text-center py-6">
                            <p class="text-sm text-indigo-200 mb-6">
                                "Let AI analyze your logs to provide personalized feedback and suggestions."
                            </p>
                            <button
                                class="px-6 py-2 bg-white text-indigo-900 rounded-lg font-bold text-sm hover:bg-indigo-50 disabled:opacity-50"
                                disabled=move || pending.get() || !has_logs()
                                on:click=on_analyze
                            >
                                {move || if pending.get() { "Analyzing..." } else { "Analyze My Work" }}
                            </button>
                            <Show when=move || !has_logs()>
                                <p class="mt-2 text-[10px] text-indigo-300 italic">
                                    "No logs available for this month to analyze."
                                </p>
                            </Show>
                        </div>
                    }
                        .into_view()
                }
            }}
        </div>
    }
}
