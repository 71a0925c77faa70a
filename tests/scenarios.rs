//! End-to-end scenarios through the public API: store, handler and renderer.

use staff_portal::domain::{MessageKind, Role, StudentRecord, User};
use staff_portal::store::{Action, AuthAction, AuthState, AuthStatus, Store};
use staff_portal::ui::helpers::strip_ansi;
use staff_portal::ui::viewmodel::{PageBody, TableStatus};
use staff_portal::{handle_event, initialize, Config, Effect, Event, Page};
use std::collections::BTreeMap;
use std::sync::Arc;

fn staff_user() -> User {
    User::new("u1", Role::Staff).with_name("Jane", "Doe")
}

#[test]
fn login_success_from_anonymous() {
    let mut store = Store::default();
    let before = store.snapshot();
    assert_eq!(before.auth().status(), AuthStatus::Anonymous);

    assert!(store.dispatch(AuthAction::LoginSucceeded(staff_user())));

    let after = store.snapshot();
    assert_eq!(after.auth().status(), AuthStatus::Authenticated);
    assert_eq!(after.auth().user(), Some(&staff_user()));
    assert!(Arc::ptr_eq(&before.message, &after.message));
}

#[test]
fn logout_from_authenticated() {
    let mut store = Store::default();
    store.dispatch(AuthAction::LoginSucceeded(staff_user()));

    assert!(store.dispatch(AuthAction::Logout));
    assert_eq!(*store.snapshot().auth, AuthState::Anonymous);
    assert!(store.snapshot().auth().user().is_none());
}

#[test]
fn reports_table_with_one_student() {
    let mut state = initialize(&Config::default()).unwrap();

    let (_, effects) = handle_event(&mut state, &Event::ShowReports).unwrap();
    assert_eq!(effects, vec![Effect::FetchStudents]);
    handle_event(
        &mut state,
        &Event::StudentsLoaded(vec![StudentRecord::new("S1", 88.0, "A")]),
    )
    .unwrap();

    let vm = state.compute_viewmodel(80);
    let PageBody::Reports(reports) = vm.body else {
        panic!("expected the reports page");
    };
    assert_eq!(reports.table.status, TableStatus::Rows);
    assert_eq!(reports.table.rows.len(), 1);
    let cells: Vec<&str> = reports.table.rows[0]
        .cells
        .iter()
        .map(|c| c.text.as_str())
        .collect();
    assert_eq!(cells, vec!["S1", "88", "A"]);

    let frame = strip_ansi(&staff_portal::ui::render(&state, 24, 80));
    assert!(!frame.contains("Loading..."));
}

#[test]
fn piped_actions_drive_the_session() {
    let mut state = initialize(&Config::default()).unwrap();

    let login = Action::from_json(
        r#"{"type": "auth/loginSucceeded", "user": {"id": "u1", "role": "staff", "firstName": "Jane", "lastName": "Doe"}}"#,
    )
    .unwrap();
    handle_event(&mut state, &Event::Dispatch(login)).unwrap();
    assert!(strip_ansi(&staff_portal::ui::render(&state, 24, 80)).contains("Jane Doe (Staff)"));

    let failed = Action::from_json(r#"{"type": "auth/loginFailed", "reason": "expired"}"#).unwrap();
    let (render, _) = handle_event(&mut state, &Event::Dispatch(failed)).unwrap();
    assert!(!render);
    assert!(state.store.snapshot().auth().is_authenticated());

    handle_event(&mut state, &Event::Logout).unwrap();
    assert_eq!(state.page, Page::Home);
    assert!(strip_ansi(&staff_portal::ui::render(&state, 24, 80)).contains("Not signed in"));
}

#[test]
fn failed_sign_in_is_reported() {
    let mut state = initialize(&Config::default()).unwrap();
    handle_event(&mut state, &Event::Dispatch(AuthAction::LoginRequested.into())).unwrap();
    handle_event(
        &mut state,
        &Event::Dispatch(
            AuthAction::LoginFailed {
                reason: "Bad credentials".to_string(),
            }
            .into(),
        ),
    )
    .unwrap();

    let snapshot = state.store.snapshot();
    assert_eq!(snapshot.auth().status(), AuthStatus::Failed);
    let latest = snapshot.messages().latest().unwrap();
    assert_eq!(latest.kind, MessageKind::Error);
    assert_eq!(latest.text, "Bad credentials");
}

#[test]
fn sorting_filtering_and_paging_through_reports() {
    let mut config_map = BTreeMap::new();
    config_map.insert("page_size".to_string(), "2".to_string());
    let mut state = initialize(&Config::from_zellij(&config_map)).unwrap();

    handle_event(&mut state, &Event::ShowReports).unwrap();
    handle_event(
        &mut state,
        &Event::StudentsLoaded(vec![
            StudentRecord::new("S3", 71.5, "B"),
            StudentRecord::new("S1", 88.0, "A"),
            StudentRecord::new("S2", 64.0, "A"),
        ]),
    )
    .unwrap();

    handle_event(&mut state, &Event::SortBy(1)).unwrap();
    handle_event(&mut state, &Event::SortBy(1)).unwrap();
    let first_ids = |state: &staff_portal::AppState| -> Vec<String> {
        match state.compute_viewmodel(80).body {
            PageBody::Reports(r) => r.table.rows.iter().map(|row| row.cells[0].text.clone()).collect(),
            PageBody::Home(_) | PageBody::Restricted(_) => vec![],
        }
    };
    assert_eq!(first_ids(&state), vec!["S1", "S3"]);

    handle_event(&mut state, &Event::NextPage).unwrap();
    assert_eq!(first_ids(&state), vec!["S2"]);

    handle_event(&mut state, &Event::SearchMode).unwrap();
    for c in "b".chars() {
        handle_event(&mut state, &Event::Char(c)).unwrap();
    }
    assert_eq!(state.table.page, 0);
    assert_eq!(first_ids(&state), vec!["S3"]);
}

#[test]
fn zero_capacity_config_fails_at_startup() {
    let mut config_map = BTreeMap::new();
    config_map.insert("message_capacity".to_string(), "0".to_string());
    assert!(initialize(&Config::from_zellij(&config_map)).is_err());
}
