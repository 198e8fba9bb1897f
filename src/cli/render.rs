//! Text rendering of the view state.

use crate::api::UserRecord;
use crate::core::{App, ViewState};

const MISSING: &str = "-";

/// Renders the current state. A failure replaces the list entirely.
pub fn render(view: &ViewState) -> String {
    match view {
        ViewState::Loading => String::from("Loading users...\n"),
        ViewState::Loaded(users) => users.iter().map(render_user).collect(),
        ViewState::Failed(e) => format!("Error: {e}\n"),
    }
}

/// One-line header shown before each fetch.
pub fn render_header(app: &App) -> String {
    format!("[{}] {}\n", app.base_url, app.status_message)
}

fn render_user(user: &UserRecord) -> String {
    let id = user
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "?".to_string());
    let city = user.address.as_ref().and_then(|a| a.city.as_deref());
    let company = user.company.as_ref().and_then(|c| c.name.as_deref());

    let mut out = format!("#{id} {}", user.display_name());
    if let Some(username) = user.username.as_deref() {
        out.push_str(&format!(" (@{username})"));
    }
    out.push('\n');
    out.push_str(&format!(
        "    {}\n    {} | {} | {}\n",
        user.email.as_deref().unwrap_or(MISSING),
        company.unwrap_or(MISSING),
        city.unwrap_or(MISSING),
        user.website.as_deref().unwrap_or(MISSING),
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Address, Company, FetchError};
    use crate::test_support::{sample_users, test_app};

    #[test]
    fn test_render_loading() {
        assert_eq!(render(&ViewState::Loading), "Loading users...\n");
    }

    #[test]
    fn test_render_failure_has_no_list() {
        let out = render(&ViewState::Failed(FetchError::NoConnectivity));
        assert_eq!(out, "Error: no internet connection\n");
    }

    #[test]
    fn test_render_keeps_list_order() {
        let out = render(&ViewState::Loaded(sample_users(&[3, 1])));
        let first = out.find("#3 ").unwrap();
        let second = out.find("#1 ").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_render_full_user() {
        let user = UserRecord {
            id: Some(1),
            name: Some("Leanne Graham".to_string()),
            username: Some("Bret".to_string()),
            email: Some("Sincere@april.biz".to_string()),
            address: Some(Address {
                city: Some("Gwenborough".to_string()),
                ..Default::default()
            }),
            website: Some("hildegard.org".to_string()),
            company: Some(Company {
                name: Some("Romaguera-Crona".to_string()),
                ..Default::default()
            }),
        };
        assert_eq!(
            render_user(&user),
            "#1 Leanne Graham (@Bret)\n    Sincere@april.biz\n    Romaguera-Crona | Gwenborough | hildegard.org\n"
        );
    }

    #[test]
    fn test_render_sparse_user() {
        let out = render_user(&UserRecord::default());
        assert_eq!(out, "#? (unnamed)\n    -\n    - | - | -\n");
    }

    #[test]
    fn test_render_header() {
        let app = test_app();
        assert_eq!(render_header(&app), "[http://test.invalid] Loading users...\n");
    }
}
