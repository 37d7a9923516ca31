use crate::{
    api::WorkStatus,
    utils::calendar::{CalendarDay, CalendarGrid},
};
use chrono::NaiveDate;
use leptos::*;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

fn status_badge_class(status: WorkStatus) -> &'static str {
    match status {
        WorkStatus::Working => "bg-emerald-500 text-white",
        WorkStatus::Leave => "bg-rose-500 text-white",
        WorkStatus::Holiday => "bg-amber-500 text-white",
    }
}

#[component]
pub fn Calendar(
    grid: CalendarGrid,
    #[prop(optional, into)] on_day_click: Option<Callback<NaiveDate>>,
) -> impl IntoView {
    let blanks = (0..grid.first_weekday_offset)
        .map(|_| view! { <div class="h-24 sm:h-32 border-b border-r bg-slate-50/50"></div> })
        .collect_view();
    let days = grid
        .days
        .into_iter()
        .map(|day| view! { <CalendarCell day=day on_click=on_day_click /> })
        .collect_view();

    view! {
        <div class="bg-white rounded-xl shadow-sm border overflow-hidden">
            <div class="grid grid-cols-7 border-b">
                {WEEKDAYS
                    .iter()
                    .map(|name| {
                        view! {
                            <div class="py-3 text-center text-xs font-bold text-slate-500 uppercase tracking-wider">
                                {*name}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="grid grid-cols-7">{blanks} {days}</div>
        </div>
    }
}

#[component]
fn CalendarCell(day: CalendarDay, on_click: Option<Callback<NaiveDate>>) -> impl IntoView {
    let date = day.date;
    let number_class = match day.log.as_ref() {
        Some(log) => format!(
            "text-sm font-medium w-7 h-7 flex items-center justify-center rounded-full {}",
            status_badge_class(log.status)
        ),
        None => "text-sm font-medium w-7 h-7 flex items-center justify-center rounded-full text-slate-700"
            .to_string(),
    };
    let details = day.log.map(|log| {
        view! {
            <div class="hidden sm:block">
                <span class="text-[10px] font-bold uppercase text-slate-400">
                    {log.status.short_label()}
                </span>
            </div>
            <div class="mt-2 space-y-1">
                <div class="text-[10px] font-semibold text-slate-800 truncate" title=log.village.clone()>
                    {log.village.clone()}
                </div>
                <div class="text-[10px] text-slate-500 line-clamp-2" title=log.activity.clone()>
                    {log.activity.clone()}
                </div>
            </div>
        }
    });

    view! {
        <div
            class="h-24 sm:h-32 border-b border-r p-2 hover:bg-slate-50 cursor-pointer relative"
            data-date=date.format("%Y-%m-%d").to_string()
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.call(date);
                }
            }
        >
            <span class=number_class>{day.day}</span>
            {details}
        </div>
    }
}
