//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! It owns the session's rule manager; the rule used for the chart is the one
//! most recently announced by the manager through its observer channel.

use std::sync::mpsc;

use crate::config::settings::Settings;
use crate::models::{AllocationRule, Category, CategoryAllocation, RuleMode};
use crate::services::{allocate, RuleManager};

use super::form::SalaryForm;

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    RuleSelector,
    Sliders,
    Salary,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Which panel is focused
    pub focus: Focus,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Highlighted option in the rule selector
    pub selected_rule_index: usize,

    /// Highlighted slider in custom mode
    pub selected_category_index: usize,

    /// Net salary input
    pub salary_form: SalaryForm,

    /// Status message to display
    pub status_message: Option<String>,

    rule_manager: RuleManager,
    rule_events: mpsc::Receiver<(RuleMode, AllocationRule)>,
    rule_mode: RuleMode,
    budget_rule: AllocationRule,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings) -> Self {
        let mut rule_manager = RuleManager::with_preset(settings.default_preset);
        let (sender, rule_events) = mpsc::channel();
        rule_manager.subscribe(move |mode: RuleMode, rule: &AllocationRule| {
            // The receiver lives as long as the app; a closed channel only
            // happens during teardown.
            let _ = sender.send((mode, *rule));
        });

        let rule_mode = rule_manager.mode();
        let selected_rule_index = RuleMode::ALL
            .iter()
            .position(|m| *m == rule_mode)
            .unwrap_or(0);

        Self {
            settings,
            should_quit: false,
            focus: Focus::default(),
            active_dialog: ActiveDialog::default(),
            selected_rule_index,
            selected_category_index: 0,
            salary_form: SalaryForm::new().with_symbol(&settings.currency_symbol),
            status_message: None,
            budget_rule: rule_manager.rule(),
            rule_mode,
            rule_manager,
            rule_events,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// The rule the chart is drawn with
    pub fn budget_rule(&self) -> AllocationRule {
        self.budget_rule
    }

    pub fn rule_mode(&self) -> RuleMode {
        self.rule_mode
    }

    pub fn selected_category(&self) -> Category {
        Category::ALL[self.selected_category_index.min(Category::ALL.len() - 1)]
    }

    /// Current split, or `None` while there is no valid salary
    pub fn allocation(&self) -> Option<[CategoryAllocation; 3]> {
        self.salary_form
            .income()
            .map(|income| allocate(income, &self.budget_rule))
    }

    /// Apply rule changes announced by the rule manager
    pub fn sync_rule(&mut self) {
        while let Ok((mode, rule)) = self.rule_events.try_recv() {
            self.rule_mode = mode;
            self.budget_rule = rule;
        }
    }

    /// Select the rule option at `index` in the selector
    pub fn select_rule(&mut self, index: usize) {
        let index = index.min(RuleMode::ALL.len() - 1);
        self.selected_rule_index = index;
        let mode = RuleMode::ALL[index];
        let rule = self.rule_manager.select(mode);
        self.set_status(format!("{} ({})", mode.label(), rule));
        self.sync_rule();
    }

    pub fn select_previous_rule(&mut self) {
        let index = self.selected_rule_index.saturating_sub(1);
        self.select_rule(index);
    }

    pub fn select_next_rule(&mut self) {
        let index = (self.selected_rule_index + 1).min(RuleMode::ALL.len() - 1);
        self.select_rule(index);
    }

    /// Move the selected slider by whole steps
    pub fn nudge_selected_category(&mut self, steps: i32) {
        let category = self.selected_category();
        self.rule_manager.nudge_category(category, steps);
        self.sync_rule();
    }

    /// Set the selected slider to a raw value
    pub fn set_selected_category(&mut self, raw: i32) {
        let category = self.selected_category();
        self.rule_manager.adjust_category(category, raw);
        self.sync_rule();
    }

    pub fn move_category_up(&mut self) {
        self.selected_category_index = self.selected_category_index.saturating_sub(1);
    }

    pub fn move_category_down(&mut self) {
        if self.selected_category_index < Category::ALL.len() - 1 {
            self.selected_category_index += 1;
        }
    }

    /// Panels reachable with Tab; sliders only exist in custom mode
    fn focus_order(&self) -> Vec<Focus> {
        if self.rule_mode.is_custom() {
            vec![Focus::RuleSelector, Focus::Sliders, Focus::Salary]
        } else {
            vec![Focus::RuleSelector, Focus::Salary]
        }
    }

    /// Move focus, blurring the salary field when it is left
    pub fn set_focus(&mut self, focus: Focus) {
        if self.focus == Focus::Salary && focus != Focus::Salary {
            self.salary_form.on_blur();
        }
        self.focus = focus;
        self.salary_form.input.focused = focus == Focus::Salary;
    }

    pub fn focus_next(&mut self) {
        let order = self.focus_order();
        let position = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.set_focus(order[(position + 1) % order.len()]);
    }

    pub fn focus_previous(&mut self) {
        let order = self.focus_order();
        let position = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.set_focus(order[(position + order.len() - 1) % order.len()]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Preset;

    #[test]
    fn test_new_app_uses_default_preset() {
        let settings = Settings {
            default_preset: Preset::SeventyFiveTenFifteen,
            ..Settings::default()
        };
        let app = App::new(&settings);
        assert_eq!(app.budget_rule().as_array(), [75, 10, 15]);
        assert_eq!(app.selected_rule_index, 1);
        assert!(app.allocation().is_none());
    }

    #[test]
    fn test_rule_changes_reach_the_chart_rule() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        app.select_rule(1);
        assert_eq!(app.budget_rule().as_array(), [75, 10, 15]);

        app.select_rule(2);
        assert!(app.rule_mode().is_custom());
        assert_eq!(app.budget_rule().as_array(), [75, 10, 15]);

        app.set_selected_category(53);
        assert_eq!(app.budget_rule().as_array(), [55, 20, 25]);
    }

    #[test]
    fn test_sliders_only_focusable_in_custom_mode() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        app.focus_next();
        assert_eq!(app.focus, Focus::Salary);

        app.set_focus(Focus::RuleSelector);
        app.select_rule(2);
        app.focus_next();
        assert_eq!(app.focus, Focus::Sliders);
    }

    #[test]
    fn test_leaving_salary_touches_the_field() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        app.set_focus(Focus::Salary);
        app.focus_next();
        assert_eq!(
            app.salary_form.error().map(|e| e.message()),
            Some("Salary is required")
        );
    }

    #[test]
    fn test_allocation_follows_salary_and_rule() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        for c in "5000".chars() {
            app.salary_form.insert(c);
        }
        let allocation = app.allocation().unwrap();
        assert_eq!(allocation[0].money().cents(), 250000);

        app.select_rule(1);
        let allocation = app.allocation().unwrap();
        assert_eq!(allocation[0].money().cents(), 375000);
    }
}
