use chrono_tz::Tz;

use crate::{
    api::{NewUser, Role, User},
    utils::time::parse_calendar_date,
};

pub const FIELDS_REQUIRED_MESSAGE: &str = "Please fill in all fields.";
pub const ADD_FAILED_MESSAGE: &str = "Failed to add user. Please check your connection.";

pub fn added_message(username: &str) -> String {
    format!("User '{username}' added successfully to the 'Users' sheet!")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFormState {
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl Default for UserFormState {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            role: Role::Crp,
        }
    }
}

impl UserFormState {
    pub fn is_valid(&self) -> bool {
        !(self.username.trim().is_empty() || self.password.is_empty())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_request(&self) -> NewUser {
        NewUser {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
            role: self.role,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl MessageState {
    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
        self.error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.success = None;
    }
}

pub fn role_badge_class(role: Role) -> &'static str {
    match role {
        Role::Admin => "bg-purple-100 text-purple-700 border-purple-200",
        Role::ClusterFrp => "bg-blue-100 text-blue-700 border-blue-200",
        Role::Frp => "bg-indigo-100 text-indigo-700 border-indigo-200",
        Role::Crp => "bg-emerald-100 text-emerald-700 border-emerald-200",
        Role::ProjectStaff => "bg-amber-100 text-amber-700 border-amber-200",
    }
}

/// Head-count per role, in `Role::ALL` order.
pub fn role_counts(users: &[User]) -> Vec<(Role, usize)> {
    Role::ALL
        .into_iter()
        .map(|role| (role, users.iter().filter(|u| u.role == role).count()))
        .collect()
}

/// "5 Mar 2024", or "---" when the sheet has no usable creation date.
pub fn created_on(user: &User, tz: Tz) -> String {
    user.created_date
        .as_deref()
        .and_then(|raw| parse_calendar_date(raw, tz))
        .map(|date| date.format("%-d %b %Y").to_string())
        .unwrap_or_else(|| "---".to_string())
}

pub fn initial(username: &str) -> String {
    username
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TZ: Tz = chrono_tz::Asia::Kolkata;

    #[test]
    fn form_defaults_to_crp_and_needs_both_fields() {
        let mut state = UserFormState::default();
        assert_eq!(state.role, Role::Crp);
        assert!(!state.is_valid());

        state.username = "  ".into();
        state.password = "pw".into();
        assert!(!state.is_valid());

        state.username = " lakshmi ".into();
        state.role = Role::ProjectStaff;
        assert!(state.is_valid());
        let request = state.to_request();
        assert_eq!(request.username, "lakshmi");
        assert_eq!(request.role, Role::ProjectStaff);

        state.reset();
        assert_eq!(state, UserFormState::default());
    }

    #[test]
    fn message_state_keeps_one_kind() {
        let mut state = MessageState::default();
        state.set_error("NG");
        assert!(state.error.is_some());
        assert!(state.success.is_none());

        state.set_success("OK");
        assert!(state.success.is_some());
        assert!(state.error.is_none());

        state.clear();
        assert_eq!(state, MessageState::default());
    }

    #[test]
    fn counts_every_role_including_empty_ones() {
        let users = vec![
            User::builtin_admin(),
            User::new("ravi", Role::Crp),
            User::new("sita", Role::Crp),
        ];
        let counts = role_counts(&users);
        assert_eq!(counts.len(), Role::ALL.len());
        assert!(counts.contains(&(Role::Admin, 1)));
        assert!(counts.contains(&(Role::Crp, 2)));
        assert!(counts.contains(&(Role::Frp, 0)));
    }

    #[test]
    fn created_on_formats_or_dashes() {
        let mut user = User::new("ravi", Role::Crp);
        assert_eq!(created_on(&user, TZ), "---");
        user.created_date = Some("2024-03-04T20:00:00.000Z".into());
        assert_eq!(created_on(&user, TZ), "5 Mar 2024");
        user.created_date = Some("garbage".into());
        assert_eq!(created_on(&user, TZ), "---");
    }

    #[test]
    fn initial_is_upper_case_first_letter() {
        assert_eq!(initial("ravi"), "R");
        assert_eq!(initial(""), "");
    }
}
