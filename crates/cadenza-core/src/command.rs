//! Session commands and custom layout buttons.

use serde::{Deserialize, Serialize};

use crate::wire::Extras;

/// A single command the session understands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionCommand {
    /// Well-known command code, or 0 for a custom command.
    pub code: i32,
    /// Action name for custom commands.
    #[serde(default)]
    pub custom_action: Option<String>,
    /// Command-defined extra data.
    #[serde(default)]
    pub extras: Option<Extras>,
}

impl SessionCommand {
    /// Code used by custom (peer-defined) commands.
    pub const CODE_CUSTOM: i32 = 0;

    /// Create a well-known command from its code.
    #[must_use]
    pub fn from_code(code: i32) -> Self {
        Self {
            code,
            custom_action: None,
            extras: None,
        }
    }

    /// Create a custom command with an action name.
    #[must_use]
    pub fn custom(action: impl Into<String>) -> Self {
        Self {
            code: Self::CODE_CUSTOM,
            custom_action: Some(action.into()),
            extras: None,
        }
    }
}

/// The set of commands a session currently allows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionCommandGroup {
    /// Allowed commands, unordered.
    pub commands: Vec<SessionCommand>,
}

impl SessionCommandGroup {
    /// Whether the group contains a command with the given code.
    #[must_use]
    pub fn has_code(&self, code: i32) -> bool {
        self.commands.iter().any(|c| c.code == code)
    }
}

/// A button in a session-defined custom layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandButton {
    /// Command fired when the button is pressed, absent for placeholders.
    #[serde(default)]
    pub command: Option<SessionCommand>,
    /// Label shown to the user.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Icon resource name, if any.
    #[serde(default)]
    pub icon: Option<String>,
    /// Whether the button is currently actionable.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_has_code() {
        let group = SessionCommandGroup {
            commands: vec![SessionCommand::from_code(10), SessionCommand::from_code(11)],
        };
        assert!(group.has_code(10));
        assert!(!group.has_code(12));
    }

    #[test]
    fn test_custom_command() {
        let cmd = SessionCommand::custom("app.jump_to_chapter");
        assert_eq!(cmd.code, SessionCommand::CODE_CUSTOM);
        assert_eq!(cmd.custom_action.as_deref(), Some("app.jump_to_chapter"));
    }

    #[test]
    fn test_button_enabled_by_default() {
        let button: CommandButton = serde_json::from_value(serde_json::json!({
            "display_name": "Skip"
        }))
        .unwrap();
        assert!(button.enabled);
        assert!(button.command.is_none());
    }
}
