//! Specifications describing the shape of a modifier invocation.
//!
//! A [`ModifierSpec`] names one invocation and lists its expected arguments
//! in order. Rules hand a set of alternative specifications to the matcher,
//! which accepts a node when at least one alternative is satisfied.

/// How an argument's textual value is compared against accepted values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// The value must equal one accepted value exactly.
    #[default]
    Exact,
    /// The value must start with one accepted value.
    ///
    /// Used to accept both a bare symbolic constant (`.capsule`) and its
    /// qualified spelling (`ButtonBorderShape.capsule`), or a value with a
    /// method chain appended (`Color.white.opacity(0.5)`).
    Prefix,
}

/// Describes one positional or labeled argument of a modifier invocation.
#[derive(Debug, Clone)]
pub struct ArgumentSpec {
    name: String,
    required: bool,
    accepted_values: Vec<String>,
    match_mode: MatchMode,
}

impl ArgumentSpec {
    /// Creates an unnamed (positional) argument specification.
    ///
    /// Arguments are required by default; use [`ArgumentSpec::optional`] for
    /// arguments that may be absent (e.g. trailing closures).
    #[must_use]
    pub fn unnamed() -> Self {
        Self::named("")
    }

    /// Creates a labeled argument specification.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
            accepted_values: Vec::new(),
            match_mode: MatchMode::Exact,
        }
    }

    /// Marks the argument as skippable when absent.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Restricts the argument to the given accepted values.
    ///
    /// An empty list (the default) accepts any value, which expresses
    /// "must — or may — be present, content irrelevant".
    #[must_use]
    pub fn accepting<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accepted_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Switches value comparison to prefix matching.
    #[must_use]
    pub fn prefix_match(mut self) -> Self {
        self.match_mode = MatchMode::Prefix;
        self
    }

    /// Returns the argument label; empty for positional arguments.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if the argument must be present.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Returns the accepted values; empty means any value is accepted.
    #[must_use]
    pub fn accepted_values(&self) -> &[String] {
        &self.accepted_values
    }

    /// Returns the value comparison mode.
    #[must_use]
    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    /// Returns true if `value` satisfies this specification's constraints.
    #[must_use]
    pub fn accepts(&self, value: &str) -> bool {
        if self.accepted_values.is_empty() {
            return true;
        }
        self.accepted_values.iter().any(|accepted| match self.match_mode {
            MatchMode::Exact => value == accepted,
            MatchMode::Prefix => value.starts_with(accepted.as_str()),
        })
    }
}

/// A named invocation shape: identifier plus ordered argument specs.
///
/// Order corresponds to the invocation's expected argument order; the
/// matcher never reorders arguments but skips a non-required argument that
/// is absent.
#[derive(Debug, Clone)]
pub struct ModifierSpec {
    name: String,
    arguments: Vec<ArgumentSpec>,
}

impl ModifierSpec {
    /// Creates a specification for the invocation identifier `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    /// Appends an argument specification.
    #[must_use]
    pub fn argument(mut self, spec: ArgumentSpec) -> Self {
        self.arguments.push(spec);
        self
    }

    /// Returns the invocation identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the ordered argument specifications.
    #[must_use]
    pub fn arguments(&self) -> &[ArgumentSpec] {
        &self.arguments
    }
}
