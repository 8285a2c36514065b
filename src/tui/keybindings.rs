//! Keybinding definitions
//!
//! Every shortcut the handler understands, grouped by the panel it applies
//! to. The help dialog is rendered from this table.

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active everywhere except while typing a salary
    Global,
    /// Rule selector focused
    RuleSelector,
    /// Custom sliders focused
    Sliders,
    /// Salary field focused
    Salary,
}

impl KeyContext {
    pub const ALL: [KeyContext; 4] = [
        KeyContext::Global,
        KeyContext::RuleSelector,
        KeyContext::Sliders,
        KeyContext::Salary,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Global => "Global Keys",
            Self::RuleSelector => "Select Budget Rule",
            Self::Sliders => "Custom Sliders",
            Self::Salary => "Net Salary",
        }
    }
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// Keys as shown to the user
    pub keys: &'static str,
    /// Description of what the key does
    pub description: &'static str,
    /// Context where this keybinding is active
    pub context: KeyContext,
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    Keybinding {
        keys: "q / Ctrl+c",
        description: "Quit",
        context: KeyContext::Global,
    },
    Keybinding {
        keys: "?",
        description: "Show/hide help",
        context: KeyContext::Global,
    },
    Keybinding {
        keys: "Tab / Shift+Tab",
        description: "Next/previous panel",
        context: KeyContext::Global,
    },
    Keybinding {
        keys: "s",
        description: "Jump to net salary",
        context: KeyContext::Global,
    },
    Keybinding {
        keys: "h/l or ←/→",
        description: "Previous/next rule",
        context: KeyContext::RuleSelector,
    },
    Keybinding {
        keys: "1 / 2 / 3",
        description: "50/30/20, 75/10/15, Custom",
        context: KeyContext::RuleSelector,
    },
    Keybinding {
        keys: "j/k or ↓/↑",
        description: "Choose category",
        context: KeyContext::Sliders,
    },
    Keybinding {
        keys: "h/l or ←/→",
        description: "Decrease/increase by 5%",
        context: KeyContext::Sliders,
    },
    Keybinding {
        keys: "0 / Home, End",
        description: "Set category to 0% / 100%",
        context: KeyContext::Sliders,
    },
    Keybinding {
        keys: "Type",
        description: "Edit the amount",
        context: KeyContext::Salary,
    },
    Keybinding {
        keys: "Enter / Esc",
        description: "Confirm and leave the field",
        context: KeyContext::Salary,
    },
    Keybinding {
        keys: "Ctrl+u",
        description: "Clear the field",
        context: KeyContext::Salary,
    },
];

/// Keybindings for one context, in table order
pub fn bindings_for(context: KeyContext) -> impl Iterator<Item = &'static Keybinding> {
    KEYBINDINGS.iter().filter(move |k| k.context == context)
}
