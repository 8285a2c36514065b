//! Allocation rule manager
//!
//! Holds the active rule and how it was chosen. Presets replace the rule
//! wholesale; in custom mode a single category is edited and the change is
//! redistributed over the other two so the total stays at 100.
//!
//! The manager is a plain value owned by whoever drives the session (a CLI
//! invocation or the TUI app). Observers registered with
//! [`RuleManager::subscribe`] are called synchronously with every resolved
//! rule, never with an intermediate one.

use std::fmt;

use crate::models::rule::FULL_ALLOCATION;
use crate::models::{AllocationRule, Category, Preset, RuleMode};

/// Custom percentages move in steps of this size
pub const STEP: i32 = 5;

const MAX_PERCENT: i32 = FULL_ALLOCATION as i32;

/// Receives every rule the manager settles on
pub trait RuleObserver {
    fn rule_changed(&mut self, mode: RuleMode, rule: &AllocationRule);
}

impl<F> RuleObserver for F
where
    F: FnMut(RuleMode, &AllocationRule),
{
    fn rule_changed(&mut self, mode: RuleMode, rule: &AllocationRule) {
        self(mode, rule)
    }
}

/// Result of redistributing a single category edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redistribution {
    /// The rule after redistribution and the corrective pass
    pub rule: AllocationRule,
    /// The edited category's value after snapping
    pub snapped: u8,
    /// How far the total is from 100; zero unless the corrective pass failed
    pub residual: i32,
}

impl Redistribution {
    pub fn is_balanced(&self) -> bool {
        self.residual == 0
    }
}

/// Round to the nearest multiple of [`STEP`], halves toward positive infinity
fn round_to_step(value: f64) -> i32 {
    ((value / STEP as f64) + 0.5).floor() as i32 * STEP
}

/// Clamp a raw slider value to 0-100 and snap it to the step grid
pub fn snap_percentage(raw: i32) -> i32 {
    round_to_step(f64::from(raw.clamp(0, MAX_PERCENT)))
}

/// Set `category` to `raw` (snapped) and spread the difference over the
/// other categories.
///
/// The first other category receives the difference split evenly and rounded
/// to the step grid; the last one receives whatever remains, so the total is
/// exact before clamping. If clamping breaks the total, the residual is put
/// on the first other category that can absorb it while staying in 0-100.
pub fn redistribute(rule: &AllocationRule, category: Category, raw: i32) -> Redistribution {
    let snapped = snap_percentage(raw);
    let mut values = rule.as_array().map(i32::from);
    let others = category.others();

    let delta = values[category.index()] - snapped;
    values[category.index()] = snapped;

    if delta != 0 {
        let mut remaining = delta;
        for (position, other) in others.iter().enumerate() {
            let slot = &mut values[other.index()];
            if position == others.len() - 1 {
                *slot += remaining;
            } else {
                let share = round_to_step(delta as f64 / (others.len() - position) as f64);
                *slot += share;
                remaining -= share;
            }
            *slot = (*slot).clamp(0, MAX_PERCENT);
        }
    }

    let total: i32 = values.iter().sum();
    if total != MAX_PERCENT {
        let diff = MAX_PERCENT - total;
        let absorber = others
            .iter()
            .find(|other| (0..=MAX_PERCENT).contains(&(values[other.index()] + diff)));
        if let Some(other) = absorber {
            values[other.index()] += diff;
        }
    }

    let residual = MAX_PERCENT - values.iter().sum::<i32>();
    Redistribution {
        rule: AllocationRule::from_clamped(values),
        snapped: snapped as u8,
        residual,
    }
}

/// Session-owned rule state machine
pub struct RuleManager {
    mode: RuleMode,
    rule: AllocationRule,
    observers: Vec<Box<dyn RuleObserver>>,
}

impl RuleManager {
    /// Start with the 50/30/20 preset
    pub fn new() -> Self {
        Self::with_preset(Preset::default())
    }

    /// Start with the given preset
    pub fn with_preset(preset: Preset) -> Self {
        Self {
            mode: RuleMode::Preset(preset),
            rule: preset.rule(),
            observers: Vec::new(),
        }
    }

    pub fn mode(&self) -> RuleMode {
        self.mode
    }

    pub fn rule(&self) -> AllocationRule {
        self.rule
    }

    /// Register an observer for every future rule change
    pub fn subscribe(&mut self, observer: impl RuleObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Switch to a preset, replacing the current percentages
    pub fn select_preset(&mut self, preset: Preset) -> AllocationRule {
        self.mode = RuleMode::Preset(preset);
        self.rule = preset.rule();
        tracing::debug!(preset = preset.id(), rule = %self.rule, "preset selected");
        self.notify();
        self.rule
    }

    /// Switch to custom mode, starting from the current percentages
    pub fn select_custom(&mut self) -> AllocationRule {
        self.mode = RuleMode::Custom;
        tracing::debug!(rule = %self.rule, "custom rule selected");
        self.notify();
        self.rule
    }

    /// Switch to custom mode with an explicit, already checked split
    pub fn load_custom(&mut self, rule: AllocationRule) -> AllocationRule {
        self.mode = RuleMode::Custom;
        self.rule = rule;
        tracing::debug!(rule = %self.rule, "custom rule loaded");
        self.notify();
        self.rule
    }

    /// Select any mode; presets reset the percentages, custom keeps them
    pub fn select(&mut self, mode: RuleMode) -> AllocationRule {
        match mode {
            RuleMode::Preset(preset) => self.select_preset(preset),
            RuleMode::Custom => self.select_custom(),
        }
    }

    /// Edit one category in custom mode
    ///
    /// Outside custom mode the rule is left alone and returned unchanged.
    pub fn adjust_category(&mut self, category: Category, raw: i32) -> AllocationRule {
        if !self.mode.is_custom() {
            tracing::debug!(
                category = category.key(),
                mode = self.mode.id(),
                "ignoring adjustment outside custom mode"
            );
            return self.rule;
        }

        let outcome = redistribute(&self.rule, category, raw);
        if !outcome.is_balanced() {
            tracing::error!(
                category = category.key(),
                raw,
                rule = %outcome.rule,
                residual = outcome.residual,
                "redistribution left the rule unbalanced"
            );
        }

        tracing::debug!(
            category = category.key(),
            raw,
            snapped = outcome.snapped,
            rule = %outcome.rule,
            "category adjusted"
        );
        self.rule = outcome.rule;
        self.notify();
        self.rule
    }

    /// Move one category a step up or down
    pub fn nudge_category(&mut self, category: Category, steps: i32) -> AllocationRule {
        let current = i32::from(self.rule.get(category));
        self.adjust_category(category, current.saturating_add(steps.saturating_mul(STEP)))
    }

    fn notify(&mut self) {
        let (mode, rule) = (self.mode, self.rule);
        for observer in &mut self.observers {
            observer.rule_changed(mode, &rule);
        }
    }
}

impl Default for RuleManager {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RuleManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleManager")
            .field("mode", &self.mode)
            .field("rule", &self.rule)
            .field("observers", &self.observers.len())
            .finish()
    }
}
