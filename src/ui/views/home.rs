//! Staff home page.

use crate::store::AuthState;
use crate::ui::viewmodel::HomeViewModel;

pub const HOME_TITLE: &str = "Staff Home";

/// Notice shown to signed-in accounts without a staff role.
pub const STAFF_ONLY_TEXT: &str = "Staff access required";

/// Whether the session belongs to an account without a staff role.
///
/// Anonymous and pending sessions are not denied; they have no role yet.
#[must_use]
pub fn staff_access_denied(auth: &AuthState) -> bool {
    auth.user().is_some_and(|user| !user.role.is_staff())
}

/// Builds the home page body from the session slice.
///
/// ```
/// use staff_portal::store::AuthState;
/// use staff_portal::ui::views::staff_home;
///
/// let vm = staff_home(&AuthState::Anonymous);
/// assert_eq!(vm.title, "Staff Home");
/// assert_eq!(vm.subtitle, "Not signed in");
/// ```
#[must_use]
pub fn staff_home(auth: &AuthState) -> HomeViewModel {
    let subtitle = match auth {
        AuthState::Authenticated(user) if !user.role.is_staff() => STAFF_ONLY_TEXT.to_string(),
        AuthState::Authenticated(user) => format!("Welcome, {}", user.display_name()),
        AuthState::Authenticating => "Signing in...".to_string(),
        AuthState::Failed { reason } => format!("Sign-in failed: {reason}"),
        AuthState::Anonymous => "Not signed in".to_string(),
    };

    HomeViewModel {
        title: HOME_TITLE.to_string(),
        subtitle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Role, User};

    #[test]
    fn greets_signed_in_user() {
        let user = User::new("u1", Role::Staff).with_name("Jane", "Doe");
        let vm = staff_home(&AuthState::Authenticated(user));
        assert_eq!(vm.subtitle, "Welcome, Jane Doe");
    }

    #[test]
    fn non_staff_accounts_are_turned_away() {
        let student = AuthState::Authenticated(User::new("s9", Role::Student));
        assert_eq!(staff_home(&student).subtitle, "Staff access required");
        assert!(staff_access_denied(&student));

        let admin = AuthState::Authenticated(User::new("a1", Role::Administrator));
        assert!(!staff_access_denied(&admin));
        assert!(!staff_access_denied(&AuthState::Anonymous));
    }

    #[test]
    fn reports_failed_sign_in() {
        let vm = staff_home(&AuthState::Failed {
            reason: "Bad credentials".to_string(),
        });
        assert_eq!(vm.subtitle, "Sign-in failed: Bad credentials");
    }
}
