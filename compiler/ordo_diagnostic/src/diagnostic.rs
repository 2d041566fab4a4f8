//! Core diagnostic types and the message template for each code.

use std::fmt;

use ordo_ir::Span;

use crate::DiagnosticCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A labeled span with a message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Label {
    pub span: Span,
    pub message: String,
    /// Whether this is the main location of the problem.
    pub is_primary: bool,
}

impl Label {
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
            is_primary: false,
        }
    }
}

/// A generation-time diagnostic.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub severity: Severity,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
    /// Human-readable fixes.
    pub help: Vec<String>,
}

impl Diagnostic {
    fn new_with_severity(code: DiagnosticCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
            help: Vec::new(),
        }
    }

    #[cold]
    pub fn error(code: DiagnosticCode) -> Self {
        Self::new_with_severity(code, Severity::Error)
    }

    #[cold]
    pub fn warning(code: DiagnosticCode) -> Self {
        Self::new_with_severity(code, Severity::Warning)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }

    /// Get the primary span (first primary label's span).
    pub fn primary_span(&self) -> Option<Span> {
        self.labels.iter().find(|l| l.is_primary).map(|l| l.span)
    }

    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.code, self.message)?;

        for label in &self.labels {
            let marker = if label.is_primary { "-->" } else { "   " };
            write!(f, "\n  {} {:?}: {}", marker, label.span, label.message)?;
        }

        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }

        for help in &self.help {
            write!(f, "\n  = help: {help}")?;
        }

        Ok(())
    }
}

/// Create a "static target type" diagnostic.
pub fn static_target_type(type_name: &str, span: Span) -> Diagnostic {
    let code = DiagnosticCode::StaticTargetTypeError;
    Diagnostic::error(code)
        .with_message(format!(
            "cannot generate property comparisons for `{type_name}`: the type has no instances"
        ))
        .with_label(span, "uninhabited type")
        .with_note(code.description())
}

/// Create an "invalid type argument" diagnostic.
pub fn invalid_type_argument(type_name: &str, argument: &str, reason: &str, span: Span) -> Diagnostic {
    let code = DiagnosticCode::InvalidTypeArgumentError;
    Diagnostic::error(code)
        .with_message(format!(
            "`{argument}` is not a usable comparison target for `{type_name}`: {reason}"
        ))
        .with_label(span, "invalid target")
        .with_note(code.description())
        .with_help(format!(
            "name `{type_name}` itself, or remove the `target` argument"
        ))
}

/// Create a "generated method collides with an existing member" diagnostic.
pub fn method_collision(
    type_name: &str,
    method: &str,
    member_span: Span,
    type_span: Span,
) -> Diagnostic {
    let code = DiagnosticCode::GetComparisonMethodCollisionError;
    Diagnostic::error(code)
        .with_message(format!(
            "`{type_name}` already declares a member named `{method}`"
        ))
        .with_label(member_span, format!("`{method}` declared here"))
        .with_secondary_label(type_span, "comparison generation requested here")
        .with_note(code.description())
        .with_help("rename the member, or pick another name with `#[comparison(method = \"...\")]`")
}

/// Create a "no comparable property found" diagnostic.
pub fn no_comparable_property(type_name: &str, span: Span) -> Diagnostic {
    let code = DiagnosticCode::NoComparablePropertyFoundWarning;
    Diagnostic::warning(code)
        .with_message(format!("no comparable property found on `{type_name}`"))
        .with_label(span, "no property of this type can be ordered")
        .with_note(code.description())
        .with_help(
            "mark fields whose types implement `Ord` with `#[comparison(ordered)]`, \
             or `PartialOrd` with `#[comparison(partially_ordered)]`",
        )
}

/// Create a "duplicate property name" diagnostic.
pub fn duplicate_property_name(
    type_name: &str,
    name: &str,
    first: Span,
    second: Span,
) -> Diagnostic {
    let code = DiagnosticCode::DuplicatePropertyNameError;
    Diagnostic::error(code)
        .with_message(format!(
            "property `{name}` is declared more than once on `{type_name}`"
        ))
        .with_label(second, "duplicate property")
        .with_secondary_label(first, "first declared here")
        .with_note(code.description())
}

/// Create an "invalid property name" diagnostic.
pub fn invalid_property_name(type_name: &str, name: &str, span: Span) -> Diagnostic {
    let code = DiagnosticCode::InvalidPropertyNameError;
    Diagnostic::error(code)
        .with_message(format!(
            "`{name}` is not a valid property name on `{type_name}`"
        ))
        .with_label(span, "invalid name")
        .with_note(code.description())
}
