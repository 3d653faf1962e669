//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the open
//! dialog and the focused control.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::error::TrackerResult;
use crate::storage::KeyValueStore;

use super::app::{ActiveDialog, App, Focus};
use super::event::Event;
use super::widgets::TextInput;

/// Handle an incoming event
pub fn handle_event<S: KeyValueStore>(app: &mut App<'_, S>, event: Event) -> TrackerResult<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event<S: KeyValueStore>(app: &mut App<'_, S>, key: KeyEvent) -> TrackerResult<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match key.code {
        KeyCode::Tab => {
            app.focus_next();
            return Ok(());
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return Ok(());
        }
        _ => {}
    }

    match app.focus {
        Focus::List => handle_list_key(app, key),
        Focus::Search => handle_search_key(app, key),
        field => handle_form_key(app, field, key),
    }
}

/// Keys while a dialog is open
fn handle_dialog_key<S: KeyValueStore>(app: &mut App<'_, S>, key: KeyEvent) -> TrackerResult<()> {
    match app.active_dialog {
        ActiveDialog::Alert(_) => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                app.close_dialog();
            }
            Ok(())
        }
        ActiveDialog::Budget => match key.code {
            KeyCode::Esc => {
                app.close_dialog();
                Ok(())
            }
            KeyCode::Enter => app.submit_budget(),
            _ => {
                edit_input(&mut app.budget_input, key);
                Ok(())
            }
        },
        ActiveDialog::None => Ok(()),
    }
}

/// Keys while a form field has focus
fn handle_form_key<S: KeyValueStore>(
    app: &mut App<'_, S>,
    field: Focus,
    key: KeyEvent,
) -> TrackerResult<()> {
    match key.code {
        KeyCode::Enter => app.submit_form(),
        KeyCode::Esc => {
            app.set_focus(Focus::List);
            Ok(())
        }
        KeyCode::Down if field != Focus::Date => {
            app.focus_next();
            Ok(())
        }
        KeyCode::Up if field != Focus::Name => {
            app.focus_prev();
            Ok(())
        }
        _ => {
            if let Some(input) = app.form.input_mut(field) {
                edit_input(input, key);
            }
            Ok(())
        }
    }
}

/// Keys while the search box has focus; the list narrows as you type
fn handle_search_key<S: KeyValueStore>(app: &mut App<'_, S>, key: KeyEvent) -> TrackerResult<()> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Down => app.set_focus(Focus::List),
        _ => {
            if edit_input(&mut app.search, key) {
                app.search_changed();
            }
        }
    }
    Ok(())
}

/// Keys while the expense list has focus
fn handle_list_key<S: KeyValueStore>(app: &mut App<'_, S>, key: KeyEvent) -> TrackerResult<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),

        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),

        KeyCode::Char('a') | KeyCode::Char('n') => app.set_focus(Focus::Name),
        KeyCode::Char('/') => app.set_focus(Focus::Search),

        KeyCode::Char('e') | KeyCode::Enter => app.edit_selected()?,
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected()?,

        KeyCode::Char('f') => app.cycle_category_filter(),
        KeyCode::Char('x') => app.export(),
        KeyCode::Char('b') => app.open_budget_dialog(),
        KeyCode::Char('t') => app.toggle_theme()?,

        _ => {}
    }
    Ok(())
}

/// Apply an editing key to a text input; returns whether the text changed
fn edit_input(input: &mut TextInput, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.insert(c);
            true
        }
        KeyCode::Backspace => {
            input.backspace();
            true
        }
        KeyCode::Delete => {
            input.delete();
            true
        }
        KeyCode::Left => {
            input.move_left();
            false
        }
        KeyCode::Right => {
            input.move_right();
            false
        }
        KeyCode::Home => {
            input.move_start();
            false
        }
        KeyCode::End => {
            input.move_end();
            false
        }
        _ => false,
    }
}
