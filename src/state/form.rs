//! Form validation state.
//!
//! All validation happens at submit time; nothing persists between attempts
//! beyond the field values themselves. Submission never triggers any
//! external action. Inline errors are the feedback policy: each failing
//! field gets a message rendered next to it (replacing any prior one), and
//! focus moves to the first failing field. A successful submit resets every
//! field and shows a notice that removes itself after a fixed delay.

use std::time::Duration;

use crate::page::{FieldKind, FieldSpec, FormSpec};

/// How long the success notice stays up.
const SUCCESS_NOTICE: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct FieldState {
    pub spec: FieldSpec,
    pub value: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All checks passed; the form was reset.
    Accepted,
    /// At least one field failed; focus moved to the first failing one.
    Rejected { first_invalid: usize },
}

/// State for one validated form.
#[derive(Debug, Clone)]
pub struct FormState {
    pub title: String,
    fields: Vec<FieldState>,
    /// Field the cursor is on.
    pub focused_field: usize,
    success_remaining: Option<Duration>,
}

impl FormState {
    /// Builds the form from its page section; `None` without any fields.
    pub fn new(spec: &FormSpec) -> Option<Self> {
        if spec.fields.is_empty() {
            return None;
        }
        Some(Self {
            title: spec.title.clone(),
            fields: spec
                .fields
                .iter()
                .map(|f| FieldState {
                    spec: f.clone(),
                    value: String::new(),
                    error: None,
                })
                .collect(),
            focused_field: 0,
            success_remaining: None,
        })
    }

    pub fn fields(&self) -> &[FieldState] {
        &self.fields
    }

    pub fn success_visible(&self) -> bool {
        self.success_remaining.is_some()
    }

    pub fn focus_field(&mut self, index: usize) {
        if index < self.fields.len() {
            self.focused_field = index;
        }
    }

    pub fn focus_next_field(&mut self) {
        if self.focused_field + 1 < self.fields.len() {
            self.focused_field += 1;
        }
    }

    pub fn focus_prev_field(&mut self) {
        if self.focused_field > 0 {
            self.focused_field -= 1;
        }
    }

    pub fn input_char(&mut self, c: char) {
        self.fields[self.focused_field].value.push(c);
    }

    pub fn backspace(&mut self) {
        self.fields[self.focused_field].value.pop();
    }

    /// Runs the full validation pass over every field.
    ///
    /// Prior errors are cleared first so repeated attempts never stack
    /// duplicate messages.
    pub fn submit(&mut self) -> SubmitOutcome {
        for field in &mut self.fields {
            field.error = None;
        }

        let mut first_invalid = None;
        for (i, field) in self.fields.iter_mut().enumerate() {
            let value = field.value.trim();
            if field.spec.required && value.is_empty() {
                field.error = Some("This field is required".into());
            } else if field.spec.kind == FieldKind::Email
                && !value.is_empty()
                && !is_valid_email(value)
            {
                field.error = Some("Please enter a valid email address".into());
            }
            if field.error.is_some() && first_invalid.is_none() {
                first_invalid = Some(i);
            }
        }

        match first_invalid {
            Some(index) => {
                self.focused_field = index;
                SubmitOutcome::Rejected {
                    first_invalid: index,
                }
            }
            None => {
                for field in &mut self.fields {
                    field.value.clear();
                }
                self.focused_field = 0;
                self.success_remaining = Some(SUCCESS_NOTICE);
                SubmitOutcome::Accepted
            }
        }
    }

    /// Counts down the success notice; it removes itself once elapsed.
    pub fn tick(&mut self, dt: Duration) {
        if let Some(remaining) = self.success_remaining {
            self.success_remaining = remaining.checked_sub(dt);
        }
    }
}

/// A deliberately simple email shape check: exactly one `@` with
/// non-whitespace on both sides and at least one `.` after the `@`.
pub fn is_valid_email(value: &str) -> bool {
    let mut parts = value.split('@');
    let local = parts.next().unwrap_or_default();
    let Some(domain) = parts.next() else {
        return false;
    };
    if parts.next().is_some() {
        return false;
    }
    !local.is_empty()
        && !domain.is_empty()
        && !value.chars().any(char::is_whitespace)
        && domain.contains('.')
}
