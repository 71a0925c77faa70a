//! Navigation bar shared by every page.

use crate::app::Page;
use crate::store::AuthState;
use crate::ui::viewmodel::{NavTab, NavbarInfo};

pub const PORTAL_TITLE: &str = "Staff Portal";

#[must_use]
pub fn navbar(auth: &AuthState, active: Page) -> NavbarInfo {
    let user_label = auth.user().map_or_else(
        || "Not signed in".to_string(),
        |user| {
            if user.role.is_staff() {
                format!("{} ({})", user.display_name(), user.role)
            } else {
                format!("{} ({}, no staff access)", user.display_name(), user.role)
            }
        },
    );

    NavbarInfo {
        title: PORTAL_TITLE.to_string(),
        tabs: Page::ALL
            .iter()
            .map(|page| NavTab {
                label: page.label().to_string(),
                active: *page == active,
            })
            .collect(),
        user_label,
    }
}
