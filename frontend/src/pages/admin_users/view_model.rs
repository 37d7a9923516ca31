use super::{
    repository::AdminUsersRepository,
    utils::{added_message, MessageState, UserFormState},
};
use crate::{
    api::{NewUser, User},
    repository::use_repository,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct AdminUsersViewModel {
    pub form_open: RwSignal<bool>,
    pub form: RwSignal<UserFormState>,
    pub messages: RwSignal<MessageState>,
    pub users_reload: RwSignal<u32>,
    pub users_resource: Resource<u32, Vec<User>>,
    pub register_action: Action<NewUser, Result<String, String>>,
}

pub fn use_admin_users_view_model() -> AdminUsersViewModel {
    let repository = AdminUsersRepository::new_with_repository(use_repository());

    let form_open = create_rw_signal(false);
    let form = create_rw_signal(UserFormState::default());
    let messages = create_rw_signal(MessageState::default());
    let users_reload = create_rw_signal(0u32);

    let repo_for_resource = repository.clone();
    let users_resource = create_resource(
        move || users_reload.get(),
        move |_reload| {
            let repo = repo_for_resource.clone();
            async move { repo.fetch_users().await }
        },
    );

    let repo_for_register = repository;
    let register_action = create_action(move |payload: &NewUser| {
        let repo = repo_for_register.clone();
        let payload = payload.clone();
        async move { repo.register_user(payload).await }
    });

    create_effect(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(username) => {
                    messages.update(|state| state.set_success(added_message(&username)));
                    form.update(UserFormState::reset);
                    form_open.set(false);
                    users_reload.update(|value| *value = value.wrapping_add(1));
                }
                Err(err) => messages.update(|state| state.set_error(err)),
            }
        }
    });

    AdminUsersViewModel {
        form_open,
        form,
        messages,
        users_reload,
        users_resource,
        register_action,
    }
}
