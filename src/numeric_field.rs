//! Text state of a numeric input bound to one parameter field.
//!
//! The field shows its bound value with three decimals. Editing replaces the
//! text; a commit either yields the parsed value or reverts the text to the
//! last displayed value when it does not parse to a finite number.

use tracing::debug;

use crate::data_types::ParameterField;

pub fn format_value(value: f64) -> String {
    format!("{:.3}", value)
}

#[derive(Clone, Debug, PartialEq)]
pub struct NumericField {
    field: ParameterField,
    value: f64,
    text: String,
    focused: bool,
}

impl NumericField {
    pub fn new(field: ParameterField, value: f64) -> Self {
        Self {
            field,
            value,
            text: format_value(value),
            focused: false,
        }
    }

    pub fn field(&self) -> ParameterField {
        self.field
    }

    pub fn label(&self) -> &'static str {
        self.field.label()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Refreshes the bound value. The text is left alone while the user is typing.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
        if !self.focused {
            self.text = format_value(value);
        }
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Accepts characters that can appear in a float literal.
    pub fn insert(&mut self, input: &str) {
        self.text.extend(
            input
                .chars()
                .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')),
        );
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Drops the edit and shows the bound value again.
    pub fn revert(&mut self) {
        self.focused = false;
        self.text = format_value(self.value);
    }

    /// Ends editing. Returns the value to hand to the chart, or `None` after
    /// reverting an unparsable or non-finite entry.
    pub fn commit(&mut self) -> Option<f64> {
        self.focused = false;
        match self.text.trim().parse::<f64>() {
            Ok(parsed) if parsed.is_finite() => Some(parsed),
            _ => {
                debug!(field = %self.field, text = %self.text, "reverting invalid input");
                self.text = format_value(self.value);
                None
            }
        }
    }
}
