//! Symmetric hover effects expressed as inline style declarations.

use crate::consts::{ACCENT_CYAN, ACCENT_CYAN_DARK, ACCENT_PURPLE, ACCENT_PURPLE_DARK, SKILL_HIGHLIGHT};

#[cfg(test)]
#[path = "hover_test.rs"]
mod hover_test;

/// Whether the pointer is over an element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering,
}

impl HoverState {
    #[must_use]
    pub fn is_hovering(self) -> bool {
        self == Self::Hovering
    }
}

/// One style property with its idle and hovered values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoverRule {
    pub property: &'static str,
    pub idle: &'static str,
    pub hover: &'static str,
}

/// A set of properties switched together on hover-enter and hover-leave.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoverEffect {
    rules: &'static [HoverRule],
}

impl HoverEffect {
    #[must_use]
    pub const fn new(rules: &'static [HoverRule]) -> Self {
        Self { rules }
    }

    /// `(property, value)` pairs to apply for `state`.
    pub fn declarations(self, state: HoverState) -> impl Iterator<Item = (&'static str, &'static str)> {
        self.rules.iter().map(move |rule| {
            let value = if state.is_hovering() { rule.hover } else { rule.idle };
            (rule.property, value)
        })
    }
}

/// Profile picture: slight zoom and a cyan glow.
pub const PROFILE_GLOW: HoverEffect = HoverEffect::new(&[
    HoverRule { property: "transform", idle: "scale(1)", hover: "scale(1.05)" },
    HoverRule { property: "filter", idle: "none", hover: "drop-shadow(0 0 10px #00bcd4)" },
]);

/// Skill cards: translucent cyan background.
pub const SKILL_HIGHLIGHT_EFFECT: HoverEffect = HoverEffect::new(&[HoverRule {
    property: "background-color",
    idle: "transparent",
    hover: SKILL_HIGHLIGHT,
}]);

/// Fun-fact button background.
pub const FACT_BUTTON_HOVER: HoverEffect = HoverEffect::new(&[HoverRule {
    property: "background",
    idle: ACCENT_PURPLE,
    hover: ACCENT_PURPLE_DARK,
}]);

/// Copy-email button background outside its success window.
pub const COPY_BUTTON_HOVER: HoverEffect = HoverEffect::new(&[HoverRule {
    property: "background",
    idle: ACCENT_CYAN,
    hover: ACCENT_CYAN_DARK,
}]);
