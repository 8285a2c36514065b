//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! focus and dialog state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, App, Focus};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
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
            app.focus_previous();
            return Ok(());
        }
        _ => {}
    }

    match app.focus {
        Focus::Salary => handle_salary_key(app, key),
        Focus::RuleSelector | Focus::Sliders => {
            if handle_global_key(app, key) {
                return Ok(());
            }
            if app.focus == Focus::RuleSelector {
                handle_rule_selector_key(app, key)
            } else {
                handle_slider_key(app, key)
            }
        }
    }
}

/// Keys that work outside the salary field; returns true if handled
fn handle_global_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Char('s') => app.set_focus(Focus::Salary),
        KeyCode::Esc => app.clear_status(),
        _ => return false,
    }
    true
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                app.close_dialog();
            }
        }
        ActiveDialog::None => {}
    }
    Ok(())
}

fn handle_rule_selector_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => app.select_previous_rule(),
        KeyCode::Char('l') | KeyCode::Right => app.select_next_rule(),
        KeyCode::Char('1') => app.select_rule(0),
        KeyCode::Char('2') => app.select_rule(1),
        KeyCode::Char('3') => app.select_rule(2),
        KeyCode::Enter | KeyCode::Char(' ') => app.select_rule(app.selected_rule_index),
        KeyCode::Down | KeyCode::Char('j') if app.rule_mode().is_custom() => {
            app.set_focus(Focus::Sliders)
        }
        _ => {}
    }
    Ok(())
}

fn handle_slider_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('k') | KeyCode::Up => {
            if app.selected_category_index == 0 {
                app.set_focus(Focus::RuleSelector);
            } else {
                app.move_category_up();
            }
        }
        KeyCode::Char('j') | KeyCode::Down => app.move_category_down(),
        KeyCode::Char('h') | KeyCode::Left => app.nudge_selected_category(-1),
        KeyCode::Char('l') | KeyCode::Right => app.nudge_selected_category(1),
        KeyCode::Char('0') | KeyCode::Home => app.set_selected_category(0),
        KeyCode::End => app.set_selected_category(100),
        _ => {}
    }
    Ok(())
}

fn handle_salary_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
        app.set_focus(Focus::RuleSelector);
        return Ok(());
    }

    let form = &mut app.salary_form;
    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => form.clear(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => form.insert(c),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Delete => form.delete(),
        KeyCode::Left => form.input.move_left(),
        KeyCode::Right => form.input.move_right(),
        KeyCode::Home => form.input.move_start(),
        KeyCode::End => form.input.move_end(),
        _ => {}
    }
    Ok(())
}
