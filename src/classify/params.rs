use regex::Regex;

use crate::foundation::error::{ConvertError, ConvertResult};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Run configuration for one conversion.
///
/// Hosts persist this however they like; omitted JSON fields fall back to the
/// stock defaults below. Pattern strings are opaque user-supplied regexes,
/// compiled once per run by [`CompiledPatterns::compile`].
pub struct ConvertParams {
    /// Folder the filesystem store writes sprites under.
    pub save_folder: String,
    /// Font name attached to every text widget.
    pub default_font: String,
    /// Legacy label pattern. Reserved: text widgets are detected by their
    /// rich-text payload, so no classifier rule consumes this.
    pub label_pattern: String,
    /// Button group and role patterns.
    pub button: ButtonPatterns,
    /// Toggle group and role patterns.
    pub toggle: TogglePatterns,
}

impl Default for ConvertParams {
    fn default() -> Self {
        Self {
            save_folder: "assets/ui".to_string(),
            default_font: String::new(),
            label_pattern: "label_.*".to_string(),
            button: ButtonPatterns::default(),
            toggle: TogglePatterns::default(),
        }
    }
}

impl ConvertParams {
    /// Parse parameters from JSON, filling omitted fields with stock defaults.
    pub fn from_json(json: &str) -> ConvertResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| ConvertError::config(format!("parse convert params: {e}")))
    }

    /// Serialize parameters to pretty JSON for host-side persistence.
    pub fn to_json(&self) -> ConvertResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ConvertError::config(format!("serialize convert params: {e}")))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Patterns selecting and role-labelling button groups.
pub struct ButtonPatterns {
    /// Matches the group name and the sibling names eligible for consumption.
    pub pattern: String,
    /// Pressed-state role.
    pub pressed: String,
    /// Highlighted-state role.
    pub highlighted: String,
    /// Disabled-state role.
    pub disabled: String,
}

impl Default for ButtonPatterns {
    fn default() -> Self {
        Self {
            pattern: ".*button.*".to_string(),
            pressed: ".*pressed".to_string(),
            highlighted: ".*highlighted".to_string(),
            disabled: ".*disabled".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Patterns selecting and role-labelling toggle groups.
pub struct TogglePatterns {
    /// Matches the group name and the sibling names eligible for consumption.
    pub pattern: String,
    /// Background-graphic role.
    pub background: String,
    /// Checkmark-graphic role.
    pub checkmark: String,
}

impl Default for TogglePatterns {
    fn default() -> Self {
        Self {
            pattern: ".*toggle.*".to_string(),
            background: ".*background".to_string(),
            checkmark: ".*checkmark".to_string(),
        }
    }
}

#[derive(Clone, Debug)]
/// All configured patterns, compiled once per run.
pub struct CompiledPatterns {
    /// Compiled label pattern; validated with the rest but consumed by no rule.
    pub label: Regex,
    pub button: CompiledButtonPatterns,
    pub toggle: CompiledTogglePatterns,
}

#[derive(Clone, Debug)]
/// Compiled button group and role patterns.
pub struct CompiledButtonPatterns {
    pub pattern: Regex,
    pub pressed: Regex,
    pub highlighted: Regex,
    pub disabled: Regex,
}

#[derive(Clone, Debug)]
/// Compiled toggle group and role patterns.
pub struct CompiledTogglePatterns {
    pub pattern: Regex,
    pub background: Regex,
    pub checkmark: Regex,
}

impl CompiledPatterns {
    /// Compile every configured pattern up front.
    ///
    /// Any compile failure is fatal before the conversion touches the scene
    /// or the sprite store.
    pub fn compile(params: &ConvertParams) -> ConvertResult<Self> {
        Ok(Self {
            label: compile_one("label", &params.label_pattern)?,
            button: CompiledButtonPatterns {
                pattern: compile_one("button", &params.button.pattern)?,
                pressed: compile_one("button pressed", &params.button.pressed)?,
                highlighted: compile_one("button highlighted", &params.button.highlighted)?,
                disabled: compile_one("button disabled", &params.button.disabled)?,
            },
            toggle: CompiledTogglePatterns {
                pattern: compile_one("toggle", &params.toggle.pattern)?,
                background: compile_one("toggle background", &params.toggle.background)?,
                checkmark: compile_one("toggle checkmark", &params.toggle.checkmark)?,
            },
        })
    }
}

fn compile_one(what: &str, pattern: &str) -> ConvertResult<Regex> {
    Regex::new(pattern)
        .map_err(|e| ConvertError::config(format!("invalid {what} pattern '{pattern}': {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/classify/params.rs"]
mod tests;
