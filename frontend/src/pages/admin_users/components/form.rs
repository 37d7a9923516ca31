use crate::{
    api::{NewUser, Role},
    components::layout::{ErrorMessage, SuccessMessage},
    pages::admin_users::utils::{MessageState, UserFormState, FIELDS_REQUIRED_MESSAGE},
};
use leptos::{ev, *};

const FIELD_CLASS: &str = "w-full px-4 py-3 border border-slate-200 rounded-xl outline-none focus:ring-2 focus:ring-indigo-500 bg-slate-50";
const LABEL_CLASS: &str = "block text-xs font-bold text-slate-500 uppercase mb-2 tracking-wider";

#[component]
pub fn RegisterUserForm(
    form_state: RwSignal<UserFormState>,
    messages: RwSignal<MessageState>,
    register_action: Action<NewUser, Result<String, String>>,
) -> impl IntoView {
    let pending = register_action.pending();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        messages.update(MessageState::clear);
        let current = form_state.get_untracked();
        if !current.is_valid() {
            messages.update(|state| state.set_error(FIELDS_REQUIRED_MESSAGE));
            return;
        }
        register_action.dispatch(current.to_request());
    };

    view! {
        <div class="bg-white p-8 rounded-3xl shadow-xl border border-indigo-100 mb-8">
            <div class="flex items-center mb-6">
                <div class="w-10 h-10 bg-indigo-100 text-indigo-600 rounded-lg flex items-center justify-center mr-3">
                    <i class="fas fa-id-card"></i>
                </div>
                <h2 class="text-xl font-bold text-slate-800">"Create New Staff Account"</h2>
            </div>

            <form class="grid grid-cols-1 md:grid-cols-4 gap-6 items-end" on:submit=on_submit>
                <div>
                    <label class=LABEL_CLASS>"Username / Full Name"</label>
                    <input
                        type="text"
                        required
                        class=FIELD_CLASS
                        placeholder="e.g. Ramesh Kumar"
                        prop:value=move || form_state.get().username
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form_state.update(|state| state.username = value);
                        }
                    />
                </div>
                <div>
                    <label class=LABEL_CLASS>"Login Password"</label>
                    <input
                        type="password"
                        required
                        class=FIELD_CLASS
                        placeholder="Assign a password"
                        prop:value=move || form_state.get().password
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form_state.update(|state| state.password = value);
                        }
                    />
                </div>
                <div>
                    <label class=LABEL_CLASS>"Staff Category"</label>
                    <select
                        class=FIELD_CLASS
                        on:change=move |ev| match Role::try_from(event_target_value(&ev)) {
                            Ok(role) => form_state.update(|state| state.role = role),
                            Err(err) => log::warn!("Ignoring role selection: {err}"),
                        }
                    >
                        {Role::ALL
                            .into_iter()
                            .map(|role| {
                                view! {
                                    <option
                                        value=role.as_str()
                                        selected=move || form_state.get().role == role
                                    >
                                        {role.as_str()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <button
                    type="submit"
                    disabled=move || pending.get()
                    class="py-3 px-4 bg-emerald-600 text-white rounded-xl font-bold hover:bg-emerald-700 disabled:opacity-70"
                >
                    {move || if pending.get() { "Adding..." } else { "Save Account" }}
                </button>
            </form>
            {move || {
                messages.get().error.map(|message| {
                    view! {
                        <div class="mt-4">
                            <ErrorMessage message=message />
                        </div>
                    }
                })
            }}
            <p class="mt-4 text-xs text-slate-400 italic">
                "Note: New accounts will be immediately added to the \"Users\" tab in your Google Spreadsheet."
            </p>
        </div>
    }
}

/// Shown above the list once the form has closed after a successful add.
#[component]
pub fn RegistrationNotice(messages: RwSignal<MessageState>) -> impl IntoView {
    move || {
        messages.get().success.map(|message| {
            view! {
                <div class="mb-8">
                    <SuccessMessage message=message />
                </div>
            }
        })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn notice_is_empty_until_a_user_is_added() {
        let html = render_to_string(move || {
            let messages = create_rw_signal(MessageState::default());
            view! { <RegistrationNotice messages=messages /> }
        });
        assert!(!html.contains("fa-check-circle"));
    }

    #[test]
    fn notice_shows_latest_success_message() {
        let html = render_to_string(move || {
            let messages = create_rw_signal(MessageState::default());
            messages.update(|m| m.set_success("User ravi added"));
            messages.update(|m| m.set_success("User meena added"));
            view! { <RegistrationNotice messages=messages /> }
        });
        assert!(html.contains("User meena added"));
        assert!(!html.contains("User ravi added"));
    }
}
