use crate::{
    config,
    pages::{
        dashboard::components::{MonthSelect, YearSelect},
        reports::utils::{padding_rows, report_rows, report_title, ReportRow},
    },
    repository::use_repository,
    state::auth::use_session,
    utils::{
        calendar::year_options,
        period::ReportingPeriod,
        time::{format_day_month_year, month_name, today_in_app_tz},
    },
};
use chrono::Datelike;
use leptos::*;

fn print_report() {
    match web_sys::window() {
        Some(window) => {
            if let Err(err) = window.print() {
                log::error!("Print dialog failed to open: {:?}", err);
            }
        }
        None => log::warn!("No window available to print from"),
    }
}

fn info_field(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="flex items-center">
            <span class="font-bold w-32 uppercase">{label}</span>
            <span class="border-b border-black flex-1 px-2 font-medium uppercase">{value}</span>
        </div>
    }
}

fn row_view(row: ReportRow) -> impl IntoView {
    view! {
        <tr class="min-h-[40px]">
            <td class="text-center border border-black py-2 px-2 font-bold">{row.serial}</td>
            <td class="text-center border border-black py-2 px-2">{row.date}</td>
            <td class="border border-black py-2 px-2 uppercase text-[11px]">{row.village}</td>
            <td class="border border-black py-2 px-2 text-[11px] font-semibold">{row.activity}</td>
            <td class="border border-black py-2 px-2 text-[11px] leading-relaxed">{row.work_done}</td>
        </tr>
    }
}

fn blank_row() -> impl IntoView {
    view! {
        <tr class="h-10">
            <td class="border border-black"></td>
            <td class="border border-black"></td>
            <td class="border border-black"></td>
            <td class="border border-black"></td>
            <td class="border border-black"></td>
        </tr>
    }
}

/// Printable monthly work-done report for the signed-in user.
#[component]
pub fn ReportPanel() -> impl IntoView {
    let repo = use_repository();
    let time_zone = repo.client().time_zone();
    let auth_state = use_session().state();
    let today = today_in_app_tz();
    let (default_year, default_month) = ReportingPeriod::containing(today)
        .map(|period| (period.year, period.month))
        .unwrap_or((today.year(), today.month()));
    let year = create_rw_signal(default_year);
    let month = create_rw_signal(default_month);

    let owner = Signal::derive(move || {
        auth_state
            .get()
            .current_user()
            .map(|user| user.username.clone())
            .unwrap_or_default()
    });
    let designation = Signal::derive(move || {
        auth_state
            .get()
            .current_user()
            .map(|user| user.role.to_string())
            .unwrap_or_else(|| "-".to_string())
    });

    let logs = create_resource(
        move || (owner.get(), year.get(), month.get()),
        move |(username, y, m)| {
            let repo = repo.clone();
            async move {
                let Some(period) = ReportingPeriod::for_month(y, m) else {
                    log::warn!("No reporting period for {m}/{y}");
                    return Vec::new();
                };
                period.collect_logs(&repo.list_all_logs().await, &username, time_zone)
            }
        },
    );

    let office = config::current().office_location().to_string();

    let table_body = move || {
        let loaded = logs.get();
        let rows = loaded
            .as_deref()
            .map(|logs| report_rows(logs, time_zone))
            .unwrap_or_default();
        let blanks = padding_rows(rows.len());
        let placeholder = rows.is_empty().then(|| {
            let message = if loaded.is_none() {
                "Processing data..."
            } else {
                "No entries found for this reporting period."
            };
            view! {
                <tr>
                    <td colspan="5" class="py-20 text-center text-slate-400 italic border border-black">
                        {message}
                    </td>
                </tr>
            }
        });
        view! {
            {placeholder}
            {rows.into_iter().map(row_view).collect_view()}
            {(0..blanks).map(|_| blank_row()).collect_view()}
        }
    };

    view! {
        <div class="max-w-7xl mx-auto px-4 py-8">
            <div class="flex flex-col md:flex-row justify-between items-start md:items-center mb-8 no-print gap-4">
                <div>
                    <h1 class="text-3xl font-bold text-slate-900">"Work Done Report"</h1>
                    <p class="text-slate-500 italic">"Generate your monthly work summary for submission."</p>
                </div>
                <button
                    class="px-8 py-3 bg-indigo-600 text-white rounded-xl font-bold hover:bg-indigo-700 flex items-center"
                    on:click=move |_| print_report()
                >
                    <i class="fas fa-file-pdf mr-2 text-xl"></i>
                    "Download PDF / Print"
                </button>
            </div>

            <div class="bg-white p-6 rounded-2xl shadow-sm border mb-8 no-print">
                <div class="flex flex-wrap gap-6">
                    <div class="flex-1 min-w-[200px]">
                        <label class="block text-xs font-bold text-slate-500 uppercase mb-2">"Month"</label>
                        <MonthSelect month=month />
                    </div>
                    <div class="flex-1 min-w-[200px]">
                        <label class="block text-xs font-bold text-slate-500 uppercase mb-2">"Year"</label>
                        <YearSelect year=year options=year_options(today.year()) />
                    </div>
                </div>
            </div>

            <div class="bg-white p-12 border shadow-2xl print:shadow-none print:border-none print-area mx-auto max-w-[210mm] min-h-[297mm] text-black">
                <div class="text-center pt-6 border-b-2 border-slate-800 pb-2 mb-8">
                    <h1 class="text-2xl font-black tracking-widest text-slate-900 uppercase">
                        {move || report_title(month_name(month.get()), year.get())}
                    </h1>
                </div>

                <div class="grid grid-cols-2 gap-x-12 gap-y-4 mb-8 text-[14px]">
                    {move || {
                        let name = owner.get();
                        info_field("Name:", if name.is_empty() { "-".to_string() } else { name })
                    }}
                    {info_field("Date:", format_day_month_year(today))}
                    {move || info_field("Designation:", designation.get())}
                    {info_field("Location:", office)}
                </div>

                <table class="report-table w-full border-2 border-black">
                    <thead>
                        <tr class="bg-slate-50">
                            <th class="w-[60px] text-center border-2 border-black py-3 px-2 font-black text-xs">"S.NO"</th>
                            <th class="w-[120px] text-center border-2 border-black py-3 px-2 font-black text-xs">"DATE"</th>
                            <th class="w-[150px] border-2 border-black py-3 px-2 font-black text-xs">"VILLAGE"</th>
                            <th class="w-[180px] border-2 border-black py-3 px-2 font-black text-xs">"ACTIVITY"</th>
                            <th class="border-2 border-black py-3 px-2 font-black text-xs">"WORK DONE DETAILS"</th>
                        </tr>
                    </thead>
                    <tbody>{table_body}</tbody>
                </table>

                <div class="mt-20 flex justify-between px-8">
                    <div class="w-64 text-center border-t border-black pt-2">
                        <span class="text-[10px] font-black uppercase tracking-widest">"Employee Signature"</span>
                    </div>
                    <div class="w-64 text-center border-t border-black pt-2">
                        <span class="text-[10px] font-black uppercase tracking-widest">"Authorized Signatory"</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{mock_repository, provide_session, staff_user};
    use crate::test_support::ssr::{escape_text, render_to_string};

    #[test]
    fn renders_header_for_signed_in_user() {
        let html = render_to_string(|| {
            provide_context(mock_repository());
            provide_session(Some(staff_user()));
            view! { <ReportPanel /> }
        });
        assert!(html.contains("Work Done Report"));
        assert!(html.contains("MONTHLY WORK DONE REPORT"));
        assert!(html.contains("ravi"));
        assert!(html.contains("CRP"));
        assert!(html.contains("VIKARABAD"));
        assert!(html.contains(&escape_text(&format_day_month_year(today_in_app_tz()))));
        assert!(html.contains("Employee Signature"));
        assert!(html.contains("Processing data..."));
        assert_eq!(html.matches("\"h-10\"").count(), 15);
    }
}
