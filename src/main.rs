//! Zellij plugin wrapper and entry point.
//!
//! Thin layer between the `staff_portal` library and the Zellij plugin API:
//! translates host events into library `Event`s, executes the returned
//! `Effect`s and prints rendered frames.
//!
//! # Event Mapping
//!
//! - `Key` → page, table and search events (see below)
//! - pipe `portal::action` → `Event::Dispatch` with the decoded action
//! - pipe `portal::students` → `Event::StudentsLoaded`
//! - `RunCommandResult` of the students command → `StudentsLoaded` / `StudentsFailed`
//!
//! # Keybindings
//!
//! Normal mode:
//! - `Tab`: Next page
//! - `h` / `r`: Home / Reports
//! - `n`/`Right`, `p`/`Left`: Next / previous table page
//! - `1` `2` `3`: Sort by column, again to reverse
//! - `/`: Filter reports
//! - `R`: Reload students
//! - `x`: Dismiss notifications
//! - `L`: Sign out
//! - `Esc`: Clear filter
//! - `q`: Close
//!
//! Search mode:
//! - any character: Edit filter
//! - `Enter`: Keep filter, leave search
//! - `Esc`: Clear filter, leave search

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
use plugin::State;

#[cfg(target_family = "wasm")]
register_plugin!(State);

/// The plugin only runs inside Zellij's WASM runtime.
#[cfg(not(target_family = "wasm"))]
fn main() {
    eprintln!(
        "staff-portal {} is a Zellij plugin; build it for wasm32-wasip1 and load it from a layout",
        env!("CARGO_PKG_VERSION")
    );
}

#[cfg(target_family = "wasm")]
mod plugin {
    use std::collections::BTreeMap;
    use zellij_tile::prelude::*;

    use staff_portal::domain::StudentRecord;
    use staff_portal::store::Action;
    use staff_portal::ui::datatable::DEFAULT_PAGE_SIZE;
    use staff_portal::{handle_event, AppState, Config, Effect, Event, InputMode, Store, Theme};

    /// Pipe carrying one JSON-encoded store action.
    const ACTION_PIPE: &str = "portal::action";

    /// Pipe carrying a JSON array of student records.
    const STUDENTS_PIPE: &str = "portal::students";

    /// Context key tagging our `run_command` calls.
    const COMMAND_CONTEXT_KEY: &str = "staff_portal";
    const STUDENTS_COMMAND: &str = "students";

    pub struct State {
        app: AppState,
        students_command: Vec<String>,
    }

    impl Default for State {
        fn default() -> Self {
            Self {
                app: AppState::new(Store::default(), Theme::default(), DEFAULT_PAGE_SIZE),
                students_command: Vec::new(),
            }
        }
    }

    impl ZellijPlugin for State {
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            staff_portal::observability::init_tracing(&config);

            let _guard = tracing::debug_span!("plugin_load").entered();

            match staff_portal::initialize(&config) {
                Ok(app) => self.app = app,
                Err(e) => {
                    tracing::error!(error = %e, "invalid configuration, closing plugin");
                    close_self();
                    return;
                }
            }
            self.students_command = config.students_command;

            request_permission(&[
                PermissionType::ReadApplicationState,
                PermissionType::ChangeApplicationState,
                PermissionType::RunCommands,
                PermissionType::ReadCliPipes,
            ]);

            subscribe(&[
                EventType::Key,
                EventType::RunCommandResult,
                EventType::PermissionRequestResult,
            ]);

            tracing::debug!("plugin load complete");
        }

        fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
            let _guard = tracing::debug_span!("plugin_update").entered();

            let our_event = match event {
                zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                    Some(event) => event,
                    None => return false,
                },
                zellij_tile::prelude::Event::RunCommandResult(exit_code, stdout, stderr, context) => {
                    match Self::map_command_result_event(exit_code, &stdout, &stderr, &context) {
                        Some(event) => event,
                        None => return false,
                    }
                }
                zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                    tracing::debug!(granted = matches!(status, PermissionStatus::Granted), "permission result");
                    return false;
                }
                _ => return false,
            };

            self.apply(&our_event)
        }

        fn pipe(&mut self, pipe_message: PipeMessage) -> bool {
            let _guard = tracing::debug_span!("plugin_pipe", name = %pipe_message.name).entered();

            let Some(payload) = pipe_message.payload.as_deref() else {
                tracing::debug!("pipe message without payload ignored");
                return false;
            };

            let event = match pipe_message.name.as_str() {
                ACTION_PIPE => match Action::from_json(payload) {
                    Ok(action) => Event::Dispatch(action),
                    Err(e) => {
                        tracing::warn!(error = %e, "rejected inbound action");
                        return false;
                    }
                },
                STUDENTS_PIPE => match StudentRecord::list_from_json(payload) {
                    Ok(students) => Event::StudentsLoaded(students),
                    Err(e) => Event::StudentsFailed {
                        error: e.to_string(),
                    },
                },
                other => {
                    tracing::debug!(name = %other, "ignoring unknown pipe");
                    return false;
                }
            };

            self.apply(&event)
        }

        fn render(&mut self, rows: usize, cols: usize) {
            print!("{}", staff_portal::ui::render(&self.app, rows, cols));
        }
    }

    impl State {
        fn apply(&mut self, event: &Event) -> bool {
            match handle_event(&mut self.app, event) {
                Ok((should_render, effects)) => {
                    tracing::debug!(
                        effect_count = effects.len(),
                        should_render,
                        "event handled"
                    );
                    for effect in effects {
                        self.execute_effect(effect);
                    }
                    should_render
                }
                Err(e) => {
                    tracing::warn!(error = %e, "error handling event");
                    false
                }
            }
        }

        fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
            tracing::debug!(bare_key = ?key.bare_key, "key event");

            if self.app.input_mode == InputMode::Search {
                return match key.bare_key {
                    BareKey::Esc => Some(Event::ExitSearch),
                    BareKey::Enter => Some(Event::ConfirmSearch),
                    BareKey::Backspace => Some(Event::Backspace),
                    BareKey::Char(c) => Some(Event::Char(c)),
                    _ => None,
                };
            }

            Some(match key.bare_key {
                BareKey::Tab => Event::NextTab,
                BareKey::Char('h') => Event::ShowHome,
                BareKey::Char('r') => Event::ShowReports,
                BareKey::Char('R') => Event::StudentsRequested,
                BareKey::Char('n') | BareKey::Right => Event::NextPage,
                BareKey::Char('p') | BareKey::Left => Event::PrevPage,
                BareKey::Char(c @ '1'..='9') => Event::SortBy(c as usize - '1' as usize),
                BareKey::Char('/') => Event::SearchMode,
                BareKey::Char('x') => Event::DismissMessages,
                BareKey::Char('L') => Event::Logout,
                BareKey::Esc => Event::ExitSearch,
                BareKey::Char('q') => Event::CloseFocus,
                _ => return None,
            })
        }

        fn map_command_result_event(
            exit_code: Option<i32>,
            stdout: &[u8],
            stderr: &[u8],
            context: &BTreeMap<String, String>,
        ) -> Option<Event> {
            if context.get(COMMAND_CONTEXT_KEY).map(String::as_str) != Some(STUDENTS_COMMAND) {
                return None;
            }
            tracing::debug!(exit_code = ?exit_code, stdout_len = stdout.len(), "students command finished");

            if exit_code != Some(0) {
                let error = String::from_utf8_lossy(stderr).trim().to_string();
                return Some(Event::StudentsFailed {
                    error: if error.is_empty() {
                        format!("students command exited with {exit_code:?}")
                    } else {
                        error
                    },
                });
            }

            Some(
                match StudentRecord::list_from_json(&String::from_utf8_lossy(stdout)) {
                    Ok(students) => Event::StudentsLoaded(students),
                    Err(e) => Event::StudentsFailed {
                        error: e.to_string(),
                    },
                },
            )
        }

        #[tracing::instrument(level = "debug", skip(self))]
        fn execute_effect(&mut self, effect: Effect) {
            match effect {
                Effect::CloseFocus => hide_self(),
                Effect::FetchStudents => {
                    if self.students_command.is_empty() {
                        tracing::debug!("no students command configured, waiting for pipe");
                        return;
                    }
                    let argv: Vec<&str> = self.students_command.iter().map(String::as_str).collect();
                    let mut context = BTreeMap::new();
                    context.insert(COMMAND_CONTEXT_KEY.to_string(), STUDENTS_COMMAND.to_string());
                    run_command(&argv, context);
                }
            }
        }
    }
}
