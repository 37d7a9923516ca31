use crate::{
    components::{
        guard::{navigate_to, DASHBOARD_PATH},
        layout::ErrorMessage,
    },
    config,
    pages::login::utils,
    state::auth::{self, use_session, Credentials},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let auth_state = use_session().state();
    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let login_action = auth::use_login_action();
    let pending = login_action.pending();

    create_effect(move |_| {
        if auth_state.get().current_user().is_some() {
            navigate_to(DASHBOARD_PATH);
        }
    });

    create_effect(move |_| {
        if let Some(Err(err)) = login_action.value().get() {
            set_error.set(Some(err));
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let uname = username.get_untracked();
        let pword = password.get_untracked();
        if let Err(msg) = utils::validate_credentials(&uname, &pword) {
            set_error.set(Some(msg));
            return;
        }
        set_error.set(None);
        login_action.dispatch(Credentials {
            username: uname.trim().to_string(),
            password: pword,
        });
    };

    let cfg = config::current();
    let organization = cfg.organization_name().to_string();
    let show_demo = cfg.is_mock_mode();

    view! {
        <div class="min-h-full flex items-center justify-center py-12 px-4 sm:px-6 lg:px-8 bg-slate-50">
            <div class="max-w-md w-full space-y-8 bg-white p-10 rounded-3xl shadow-xl border">
                <div class="text-center">
                    <div class="mx-auto h-16 w-16 bg-indigo-600 rounded-2xl flex items-center justify-center text-white text-3xl font-bold">
                        "W"
                    </div>
                    <h2 class="mt-6 text-3xl font-extrabold text-slate-900">"Sign in to your account"</h2>
                    <p class="mt-2 text-sm text-slate-600">{format!("{organization} Field Monitoring System")}</p>
                </div>
                <form class="mt-8 space-y-6" on:submit=on_submit>
                    <div class="space-y-4">
                        <div>
                            <label for="username" class="block text-sm font-medium text-slate-700 mb-1">"Username"</label>
                            <input
                                id="username"
                                type="text"
                                required
                                class="block w-full px-4 py-3 border border-slate-300 rounded-xl sm:text-sm"
                                placeholder="Enter your username"
                                prop:value=username
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label for="password" class="block text-sm font-medium text-slate-700 mb-1">"Password"</label>
                            <input
                                id="password"
                                type="password"
                                required
                                class="block w-full px-4 py-3 border border-slate-300 rounded-xl sm:text-sm"
                                placeholder="Enter your password"
                                prop:value=password
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                            />
                        </div>
                    </div>
                    {move || error.get().map(|msg| view! { <ErrorMessage message=msg /> })}
                    <button
                        type="submit"
                        class="w-full flex justify-center py-3 px-4 text-sm font-bold rounded-xl text-white bg-indigo-600 hover:bg-indigo-700 disabled:opacity-70"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Signing In..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || show_demo>
                    <div class="mt-6 p-4 bg-indigo-50 rounded-xl">
                        <h4 class="text-xs font-bold text-indigo-800 uppercase mb-2">"Demo Credentials"</h4>
                        <div class="text-xs text-indigo-600">
                            <div>"Username: " <strong>"admin"</strong></div>
                            <div>"Password: " <strong>"admin"</strong></div>
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_session;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_form_with_demo_hint_in_mock_mode() {
        let html = render_to_string(|| {
            provide_session(None);
            view! { <LoginPanel /> }
        });
        assert!(html.contains("Sign in to your account"));
        assert!(html.contains("Wassan Vikarabad Field Monitoring System"));
        assert!(html.contains("Demo Credentials"));
    }
}
