//! Rule presets for common configurations.

use crate::{
    ButtonBackgroundNotifier, ButtonShapeHstackOuter, ButtonShapeSingle, ButtonShapeVstackOuter,
    FeedbackSound, FocusShape, NavigationBarTitleSize, NavigationTitleLength,
    OrnamentBorderlessButton, OrnamentSystem, OrnamentVisibility, OrnamentWidth,
    SidebarInitiallyVisible, TabItemLabel, ToggleButtonStyle, TooManyTabs,
};
use viewlint_core::RuleBox;

/// Preset configurations for viewlint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// The rules that are sensible on by default.
    Recommended,
    /// Every rule, including the opt-in audit rules.
    Complete,
}

impl Preset {
    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        match self {
            Self::Recommended => recommended_rules(),
            Self::Complete => complete_rules(),
        }
    }

    /// Resolves a preset from its configuration name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "recommended" => Some(Self::Recommended),
            "complete" => Some(Self::Complete),
            _ => None,
        }
    }
}

/// Returns the recommended set of rules.
///
/// Everything except the opt-in audit rules, which need explicit
/// enablement via configuration to run at all.
#[must_use]
pub fn recommended_rules() -> Vec<RuleBox> {
    vec![
        Box::new(ButtonShapeHstackOuter::new()),
        Box::new(ButtonShapeVstackOuter::new()),
        Box::new(FeedbackSound::new()),
        Box::new(FocusShape::new()),
        Box::new(NavigationTitleLength::new()),
        Box::new(OrnamentBorderlessButton::new()),
        Box::new(OrnamentVisibility::new()),
        Box::new(SidebarInitiallyVisible::new()),
        Box::new(TabItemLabel::new()),
        Box::new(ToggleButtonStyle::new()),
        Box::new(TooManyTabs::new()),
    ]
}

/// Returns every rule, audits included.
///
/// The opt-in rules still only run when the configuration enables them;
/// registering them here just makes them available.
#[must_use]
pub fn complete_rules() -> Vec<RuleBox> {
    let mut rules = recommended_rules();
    rules.extend([
        Box::new(ButtonBackgroundNotifier::new()) as RuleBox,
        Box::new(ButtonShapeSingle::new()),
        Box::new(NavigationBarTitleSize::new()),
        Box::new(OrnamentSystem::new()),
        Box::new(OrnamentWidth::new()),
    ]);
    rules
}
