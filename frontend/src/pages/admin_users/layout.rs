use leptos::*;

#[component]
pub fn AdminUsersFrame(form_open: RwSignal<bool>, children: Children) -> impl IntoView {
    view! {
        <div class="max-w-7xl mx-auto px-4 py-8">
            <div class="flex flex-col md:flex-row justify-between items-start md:items-center mb-8 gap-4">
                <div>
                    <h1 class="text-3xl font-bold text-slate-900">"User Management"</h1>
                    <p class="text-slate-500">"Add staff accounts and manage system access levels."</p>
                </div>
                <button
                    type="button"
                    class=move || {
                        if form_open.get() {
                            "px-6 py-3 rounded-xl font-bold flex items-center bg-slate-200 text-slate-700"
                        } else {
                            "px-6 py-3 rounded-xl font-bold flex items-center bg-indigo-600 text-white hover:bg-indigo-700"
                        }
                    }
                    on:click=move |_| form_open.update(|open| *open = !*open)
                >
                    <i class=move || if form_open.get() { "fas fa-times mr-2" } else { "fas fa-user-plus mr-2" }></i>
                    {move || if form_open.get() { "Cancel" } else { "Register New Staff" }}
                </button>
            </div>
            {children()}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn frame_renders_header_and_children() {
        let html = render_to_string(move || {
            let open = create_rw_signal(false);
            view! {
                <AdminUsersFrame form_open=open>
                    <div>{"child"}</div>
                </AdminUsersFrame>
            }
        });
        assert!(html.contains("User Management"));
        assert!(html.contains("Register New Staff"));
        assert!(html.contains("child"));
    }
}
