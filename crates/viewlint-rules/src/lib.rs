//! # viewlint-rules
//!
//! Built-in style rules for viewlint.
//!
//! Each rule is a small configuration value over the generic core engine:
//! an entry predicate, a set of modifier specifications, and a traversal
//! policy. Rules report at the coarsest matching node and prune subtrees
//! that are already compliant.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | VL001 | `button-background-notifier` | Flags every button for a background audit (opt-in) |
//! | VL002 | `button-shape-single` | Free-standing buttons should be circular or pill-shaped (opt-in) |
//! | VL003 | `button-shape-hstack-outer` | Button HStacks need stack-level pill shaping |
//! | VL004 | `button-shape-vstack-outer` | Button VStacks need stack-level rounded-rectangle shaping |
//! | VL005 | `feedback-sound` | Tap gestures should play a feedback sound |
//! | VL006 | `focus-shape` | Tap gestures need a content shape and hover effect |
//! | VL007 | `navigation-bar-title-size` | Flags navigation titles for a display-mode audit (opt-in) |
//! | VL008 | `navigation-title-length` | Navigation titles over 15 characters |
//! | VL009 | `ornament-borderless-button` | Buttons in ornaments should be borderless |
//! | VL010 | `ornament-system` | Flags ornaments that could be system bars (opt-in) |
//! | VL011 | `ornament-visibility` | Ornaments should not be hidden |
//! | VL012 | `ornament-width` | Flags ornaments/toolbars for a width audit (opt-in) |
//! | VL013 | `sidebar-initially-visible` | Sidebars should be visible on first presentation |
//! | VL014 | `tab-item-label` | Tab items need a labeled, non-empty title |
//! | VL015 | `too-many-tabs` | At most 8 tab items per view |
//! | VL016 | `toggle-button-style` | Black-on-white styling is reserved for toggles |
//!
//! ## Usage
//!
//! ```ignore
//! use viewlint_core::Linter;
//! use viewlint_rules::{FeedbackSound, FocusShape};
//!
//! let linter = Linter::builder()
//!     .rule(FeedbackSound::new())
//!     .rule(FocusShape::new())
//!     .build();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod button_background_notifier;
mod button_shape_hstack_outer;
mod button_shape_single;
mod button_shape_vstack_outer;
mod common;
mod feedback_sound;
mod focus_shape;
mod navigation_bar_title_size;
mod navigation_title_length;
mod ornament_borderless_button;
mod ornament_system;
mod ornament_visibility;
mod ornament_width;
mod presets;
mod sidebar_initially_visible;
mod tab_item_label;
mod toggle_button_style;
mod too_many_tabs;

pub use button_background_notifier::ButtonBackgroundNotifier;
pub use button_shape_hstack_outer::ButtonShapeHstackOuter;
pub use button_shape_single::ButtonShapeSingle;
pub use button_shape_vstack_outer::ButtonShapeVstackOuter;
pub use feedback_sound::FeedbackSound;
pub use focus_shape::FocusShape;
pub use navigation_bar_title_size::NavigationBarTitleSize;
pub use navigation_title_length::NavigationTitleLength;
pub use ornament_borderless_button::OrnamentBorderlessButton;
pub use ornament_system::OrnamentSystem;
pub use ornament_visibility::OrnamentVisibility;
pub use ornament_width::OrnamentWidth;
pub use presets::{complete_rules, recommended_rules, Preset};
pub use sidebar_initially_visible::SidebarInitiallyVisible;
pub use tab_item_label::TabItemLabel;
pub use toggle_button_style::ToggleButtonStyle;
pub use too_many_tabs::TooManyTabs;

/// Re-export core types for convenience.
pub use viewlint_core::{Rule, Severity, Violation};
