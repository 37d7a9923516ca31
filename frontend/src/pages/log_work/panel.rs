use crate::{
    api::{WorkLogDraft, WorkStatus, WriteReceipt},
    components::{
        guard::{navigate_to, DASHBOARD_PATH, LOGIN_PATH},
        layout::ErrorMessage,
    },
    pages::log_work::utils::{self, LogWorkFormState},
    repository::use_repository,
    state::auth::use_session,
    utils::{
        geolocation::{current_location, LocationStatus},
        time::today_in_app_tz,
    },
};
use chrono::NaiveDate;
use gloo_timers::callback::Timeout;
use leptos::{ev::SubmitEvent, *};

const REDIRECT_DELAY_MS: u32 = 2_000;
const INPUT_CLASS: &str =
    "w-full px-4 py-2 border rounded-xl outline-none focus:ring-2 focus:ring-indigo-500";
const LABEL_CLASS: &str = "block text-sm font-bold text-slate-700 mb-2 uppercase tracking-wide";

#[component]
pub fn LogWorkPanel(#[prop(default = None)] initial_date: Option<NaiveDate>) -> impl IntoView {
    let repo = use_repository();
    let auth_state = use_session().state();
    let form = LogWorkFormState::new(initial_date.unwrap_or_else(today_in_app_tz));
    let locating = create_rw_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (submitted, set_submitted) = create_signal(false);

    create_effect(move |_| {
        spawn_local(async move {
            let location = current_location().await;
            form.location.set(location);
            locating.set(false);
        });
    });

    let submit_action = create_action(move |draft: &WorkLogDraft| {
        let repo = repo.clone();
        let draft = draft.clone();
        async move { repo.submit_log(draft).await }
    });
    let pending = submit_action.pending();

    create_effect(move |_| match submit_action.value().get() {
        Some(Some(receipt)) => {
            if receipt == WriteReceipt::Dispatched {
                log::info!("Work log dispatched to the sheet");
            }
            set_submitted.set(true);
            Timeout::new(REDIRECT_DELAY_MS, || navigate_to(DASHBOARD_PATH)).forget();
        }
        Some(None) => set_error.set(Some(utils::SUBMIT_FAILED_MESSAGE.to_string())),
        None => {}
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let Some(username) = auth_state
            .get_untracked()
            .current_user()
            .map(|user| user.username.clone())
        else {
            navigate_to(LOGIN_PATH);
            return;
        };
        match form.to_draft(&username) {
            Ok(draft) => {
                set_error.set(None);
                submit_action.dispatch(draft);
            }
            Err(msg) => set_error.set(Some(msg)),
        }
    };

    let location_status =
        move || LocationStatus::from_lookup(locating.get(), form.location.get().as_deref());

    let status_buttons = move || {
        WorkStatus::ALL
            .into_iter()
            .map(|status| {
                view! {
                    <button
                        type="button"
                        class=move || utils::status_button_class(status, form.status.get() == status)
                        on:click=move |_| form.status.set(status)
                    >
                        {status.as_str()}
                    </button>
                }
            })
            .collect_view()
    };

    let work_fields = move || {
        view! {
            <div class="space-y-6">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <div>
                        <label class=LABEL_CLASS>"Village Name"</label>
                        <input
                            type="text"
                            required
                            class=INPUT_CLASS
                            placeholder="E.g. Tandur"
                            prop:value=form.village
                            on:input=move |ev| form.village.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class=LABEL_CLASS>"Activity Type"</label>
                        <input
                            type="text"
                            required
                            class=INPUT_CLASS
                            placeholder="E.g. Soil Testing"
                            prop:value=form.activity
                            on:input=move |ev| form.activity.set(event_target_value(&ev))
                        />
                    </div>
                </div>
                <div>
                    <label class=LABEL_CLASS>"Detailed Description"</label>
                    <textarea
                        required
                        rows="4"
                        class=INPUT_CLASS
                        placeholder="Describe your work done today in detail..."
                        prop:value=form.work_details
                        on:input=move |ev| form.work_details.set(event_target_value(&ev))
                    ></textarea>
                </div>
            </div>
        }
    };

    let reason_field = move || {
        let status = form.status.get();
        view! {
            <div>
                <label class=LABEL_CLASS>{format!("Reason for {status}")}</label>
                <textarea
                    required
                    rows="3"
                    class=INPUT_CLASS
                    placeholder=format!("Please explain why you are taking a {status}...")
                    prop:value=form.reason
                    on:input=move |ev| form.reason.set(event_target_value(&ev))
                ></textarea>
            </div>
        }
    };

    view! {
        <Show
            when=move || !submitted.get()
            fallback=|| {
                view! {
                    <div class="max-w-md mx-auto mt-20 p-10 bg-white rounded-3xl shadow-xl border text-center">
                        <div class="w-20 h-20 bg-emerald-100 text-emerald-600 rounded-full flex items-center justify-center mx-auto mb-6 text-4xl">
                            <i class="fas fa-check"></i>
                        </div>
                        <h2 class="text-2xl font-bold text-slate-900">"Work Logged Successfully!"</h2>
                        <p class="text-slate-500 mt-2">"Redirecting you back to dashboard..."</p>
                    </div>
                }
            }
        >
            <div class="max-w-2xl mx-auto px-4 py-12">
                <div class="bg-white rounded-3xl shadow-xl border overflow-hidden">
                    <div class="bg-indigo-600 px-8 py-6 text-white flex justify-between items-center">
                        <div>
                            <h1 class="text-2xl font-bold">"New Work Entry"</h1>
                            <p class="opacity-80">"Log your daily activities and field movements."</p>
                        </div>
                        <div
                            class="text-[10px] font-bold px-2 py-1 rounded bg-white/20 flex items-center"
                            class:animate-pulse=move || location_status() == LocationStatus::Locating
                        >
                            <i class=move || {
                                if location_status() == LocationStatus::Ready {
                                    "fas fa-map-marker-alt mr-1 text-emerald-400"
                                } else {
                                    "fas fa-map-marker-alt mr-1 text-rose-300"
                                }
                            }></i>
                            {move || location_status().label()}
                        </div>
                    </div>

                    <form class="p-8 space-y-6" on:submit=on_submit>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                            <div>
                                <label class=LABEL_CLASS>"Work Status"</label>
                                <div class="flex space-x-2">{status_buttons}</div>
                            </div>
                            <div>
                                <label class=LABEL_CLASS>"Date"</label>
                                <input
                                    type="date"
                                    required
                                    class=INPUT_CLASS
                                    prop:value=form.date
                                    on:input=move |ev| form.date.set(event_target_value(&ev))
                                />
                            </div>
                        </div>

                        {move || {
                            if form.status.get() == WorkStatus::Working {
                                work_fields().into_view()
                            } else {
                                reason_field().into_view()
                            }
                        }}

                        {move || error.get().map(|msg| view! { <ErrorMessage message=msg /> })}

                        <div class="pt-6 border-t flex space-x-4">
                            <a
                                href=DASHBOARD_PATH
                                class="flex-1 py-3 px-4 border border-slate-300 rounded-xl text-slate-600 font-bold text-center hover:bg-slate-50"
                            >
                                "Cancel"
                            </a>
                            <button
                                type="submit"
                                class="flex-[2] py-3 px-4 bg-indigo-600 text-white rounded-xl font-bold hover:bg-indigo-700 disabled:opacity-70"
                                disabled=move || pending.get()
                            >
                                {move || if pending.get() { "Submitting..." } else { "Submit Log" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
