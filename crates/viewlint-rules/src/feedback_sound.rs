//! Rule requiring a feedback sound for tap gestures.
//!
//! Spatial interfaces have no haptic channel, so a tap handler should play
//! an audible confirmation. The closure inspection is substring-based: any
//! occurrence of a system-sound call inside the handler counts as
//! compliant, even inside a conditional.

use crate::common::is_view_root;
use viewlint_core::matcher;
use viewlint_core::walker::{self, Decision};
use viewlint_core::{
    ArgumentSpec, ModifierSpec, Node, Rule, Severity, Tree, Violation, ViolationTemplate,
};

/// Rule code for feedback-sound.
pub const CODE: &str = "VL005";

/// Rule name for feedback-sound.
pub const NAME: &str = "feedback-sound";

/// Reports tap gestures whose handler does not play a sound.
#[derive(Debug, Clone)]
pub struct FeedbackSound {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for FeedbackSound {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackSound {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for FeedbackSound {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "A feedback sound should be provided when using onTapGesture"
    }

    fn check(&self, tree: &Tree) -> Vec<Violation> {
        if !is_view_root(tree) {
            return Vec::new();
        }
        let specs = tap_gesture_specs();
        let template = ViolationTemplate::new(CODE, NAME, self.severity, self.description());
        walker::collect(
            tree,
            tree.root(),
            |_, node| {
                if has_tap_gesture_without_sound(node, &specs) {
                    Decision::Report
                } else {
                    Decision::Descend
                }
            },
            &template,
        )
    }
}

fn tap_gesture_specs() -> Vec<ModifierSpec> {
    vec![ModifierSpec::new("onTapGesture")
        .argument(ArgumentSpec::named("count").optional())
        .argument(ArgumentSpec::named("perform").optional())]
}

/// True if the node carries `onTapGesture` and its handler plays no sound.
///
/// A handler whose content cannot be extracted (labeled-argument form)
/// counts as silent; the user has to restructure or justify it.
fn has_tap_gesture_without_sound(node: &Node, specs: &[ModifierSpec]) -> bool {
    if !matcher::matches(node, specs) {
        return false;
    }
    match matcher::single_unnamed_argument_of(node, "onTapGesture") {
        Some(handler) => !plays_sound(handler),
        None => true,
    }
}

fn plays_sound(handler: &str) -> bool {
    if handler.contains("AudioServicesPlaySystemSound") {
        return true;
    }
    handler.contains("AVAudioPlayer(contentsOf:") && handler.contains(".play()")
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewlint_core::{Node, TreeBuilder};

    fn view_with_leaf(signature: &str) -> Tree {
        let mut builder =
            TreeBuilder::new(Node::structure("MyView").with_offset(0).with_inherited("View"));
        builder.push_child(builder.root(), Node::call(signature).with_offset(42));
        builder.finish()
    }

    fn check(tree: &Tree) -> Vec<Violation> {
        FeedbackSound::new().check(tree)
    }

    #[test]
    fn silent_tap_gesture_triggers() {
        let tree = view_with_leaf("Text(\"Hello\").onTapGesture { print(\"hello\") }");
        let violations = check(&tree);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].offset, 42);
        assert_eq!(violations[0].code, CODE);
    }

    #[test]
    fn system_sound_in_handler_is_compliant() {
        let tree =
            view_with_leaf("Text(\"Hello\").onTapGesture { AudioServicesPlaySystemSound(1104) }");
        assert!(check(&tree).is_empty());
    }

    #[test]
    fn audio_player_in_handler_is_compliant() {
        let tree = view_with_leaf(
            "Text(\"Hello\").onTapGesture { try? AVAudioPlayer(contentsOf: url).play() }",
        );
        assert!(check(&tree).is_empty());
    }

    #[test]
    fn labeled_perform_argument_triggers() {
        // The handler is not extractable as a single unnamed argument.
        let tree =
            view_with_leaf("Text(\"Hello\").onTapGesture(count: 1, perform: { play() })");
        assert_eq!(check(&tree).len(), 1);
    }

    #[test]
    fn no_tap_gesture_is_compliant() {
        let tree = view_with_leaf("Text(\"Hello\").padding()");
        assert!(check(&tree).is_empty());
    }

    #[test]
    fn non_view_roots_are_ignored() {
        let mut builder = TreeBuilder::new(Node::structure("Helper").with_offset(0));
        builder.push_child(
            builder.root(),
            Node::call("Text(\"x\").onTapGesture { print(\"x\") }").with_offset(9),
        );
        assert!(check(&builder.finish()).is_empty());
    }

    #[test]
    fn nested_silent_tap_gesture_is_found() {
        let mut builder =
            TreeBuilder::new(Node::structure("MyView").with_offset(0).with_inherited("View"));
        let stack = builder.push_child(builder.root(), Node::call("VStack").with_offset(10));
        builder.push_child(
            stack,
            Node::call("Image(\"icon\").onTapGesture { open() }").with_offset(30),
        );
        let violations = check(&builder.finish());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].offset, 30);
    }
}
