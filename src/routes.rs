//! Pages and Access Rules
//!
//! Which page to show for a requested page and the current auth state.

use crate::models::{UserProfile, UserType};

/// Everything the app can show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Auth,
    Restaurant(String),
    Orders,
    Profile,
    Delivery,
    Admin,
}

/// Who may open a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    SignedIn,
    Only(UserType),
}

impl Page {
    pub fn access(&self) -> Access {
        match self {
            Page::Home | Page::Auth => Access::Public,
            Page::Restaurant(_) | Page::Orders | Page::Profile => Access::SignedIn,
            Page::Delivery => Access::Only(UserType::Delivery),
            Page::Admin => Access::Only(UserType::Admin),
        }
    }
}

/// Auth as seen by the views
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    /// Restoring a saved session
    #[default]
    Loading,
    SignedOut,
    SignedIn(UserProfile),
}

impl AuthState {
    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            AuthState::SignedIn(user) => Some(user),
            _ => None,
        }
    }
}

/// Outcome of the access check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Loading,
    Show(Page),
}

/// Apply the access rules.
///
/// Home is role-dependent: admins land on the admin console and drivers on
/// their dashboard. Pages that need an account send signed-out users to
/// Auth; role-restricted pages send other roles back to their Home.
pub fn resolve(requested: &Page, auth: &AuthState) -> Resolved {
    match (requested, auth) {
        (Page::Home, AuthState::SignedIn(user)) => Resolved::Show(home_for(user.role())),
        (Page::Home, _) => Resolved::Show(Page::Home),
        (Page::Auth, AuthState::SignedIn(user)) => Resolved::Show(home_for(user.role())),
        (Page::Auth, _) => Resolved::Show(Page::Auth),
        (_, AuthState::Loading) => Resolved::Loading,
        (_, AuthState::SignedOut) => Resolved::Show(Page::Auth),
        (page, AuthState::SignedIn(user)) => match page.access() {
            Access::Only(role) if role != user.role() => Resolved::Show(home_for(user.role())),
            _ => Resolved::Show(page.clone()),
        },
    }
}

fn home_for(role: UserType) -> Page {
    match role {
        UserType::Admin => Page::Admin,
        UserType::Delivery => Page::Delivery,
        UserType::Customer => Page::Home,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn signed_in(role: Option<UserType>) -> AuthState {
        AuthState::SignedIn(UserProfile {
            id: "u1".to_string(),
            email: "u1@example.com".to_string(),
            full_name: "U One".to_string(),
            phone: None,
            address: None,
            created_at: Utc::now(),
            user_type: role,
            is_online: None,
            vehicle_type: None,
        })
    }

    fn show(page: Page) -> Resolved {
        Resolved::Show(page)
    }

    #[test]
    fn test_home_by_role() {
        assert_eq!(resolve(&Page::Home, &AuthState::Loading), show(Page::Home));
        assert_eq!(resolve(&Page::Home, &AuthState::SignedOut), show(Page::Home));
        assert_eq!(resolve(&Page::Home, &signed_in(None)), show(Page::Home));
        assert_eq!(resolve(&Page::Home, &signed_in(Some(UserType::Admin))), show(Page::Admin));
        assert_eq!(resolve(&Page::Home, &signed_in(Some(UserType::Delivery))), show(Page::Delivery));
    }

    #[test]
    fn test_signed_in_pages() {
        let restaurant = Page::Restaurant("r1".to_string());
        for page in [restaurant.clone(), Page::Orders, Page::Profile] {
            assert_eq!(resolve(&page, &AuthState::Loading), Resolved::Loading);
            assert_eq!(resolve(&page, &AuthState::SignedOut), show(Page::Auth));
            assert_eq!(resolve(&page, &signed_in(None)), show(page.clone()));
            assert_eq!(resolve(&page, &signed_in(Some(UserType::Admin))), show(page.clone()));
        }
    }

    #[test]
    fn test_role_pages() {
        assert_eq!(resolve(&Page::Admin, &AuthState::SignedOut), show(Page::Auth));
        assert_eq!(resolve(&Page::Admin, &signed_in(None)), show(Page::Home));
        assert_eq!(resolve(&Page::Admin, &signed_in(Some(UserType::Delivery))), show(Page::Delivery));
        assert_eq!(resolve(&Page::Admin, &signed_in(Some(UserType::Admin))), show(Page::Admin));

        assert_eq!(resolve(&Page::Delivery, &AuthState::Loading), Resolved::Loading);
        assert_eq!(resolve(&Page::Delivery, &signed_in(Some(UserType::Customer))), show(Page::Home));
        assert_eq!(resolve(&Page::Delivery, &signed_in(Some(UserType::Admin))), show(Page::Admin));
        assert_eq!(resolve(&Page::Delivery, &signed_in(Some(UserType::Delivery))), show(Page::Delivery));
    }

    #[test]
    fn test_auth_page_redirects_signed_in() {
        assert_eq!(resolve(&Page::Auth, &AuthState::SignedOut), show(Page::Auth));
        assert_eq!(resolve(&Page::Auth, &AuthState::Loading), show(Page::Auth));
        assert_eq!(resolve(&Page::Auth, &signed_in(None)), show(Page::Home));
    }
}
