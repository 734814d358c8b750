use super::console::Console;
use super::session::{Session, SessionError};
use crate::models::{Field, FieldValue};

/// Prompt shown before every free-form value.
pub(super) const VALUE_PROMPT: &str = "\t: ";
/// The only answer that lets an update or removal go ahead.
const CONFIRM_TOKEN: &str = "y";

fn field_menu() -> String {
    let mut menu = String::from("\n");
    for field in Field::ALL {
        menu.push_str(&format!("    {} - {}\n", field.key(), field.label()));
    }
    menu.push_str("\n        : ");
    menu
}

impl<C: Console> Session<'_, C> {
    /// Ask which column to work with until a listed letter comes back.
    pub(super) fn select_field(&mut self) -> Result<Field, SessionError> {
        let menu = field_menu();
        loop {
            let answer = self.ask(&menu)?;
            if let Some(field) = Field::from_key(&answer) {
                return Ok(field);
            }
            self.console.error(
                "\nInvalid input entered. Let's try that again. Type the corresponding letter and hit enter: ",
            )?;
        }
    }

    /// Ask for a value of `field` until it parses. Text fields accept anything.
    pub(super) fn read_value(&mut self, field: Field) -> Result<FieldValue, SessionError> {
        self.read_until(field, |raw| field.parse_value(raw))
    }

    pub(super) fn read_quantity(&mut self) -> Result<i64, SessionError> {
        self.read_until(Field::Quantity, |raw| raw.trim().parse().ok())
    }

    fn read_until<T>(
        &mut self,
        field: Field,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T, SessionError> {
        loop {
            let answer = self.ask(VALUE_PROMPT)?;
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }
            self.console.error(&format!(
                "\nInvalid input entered for {field}. Please re-enter a value."
            ))?;
        }
    }

    /// `true` only for an exact `y`; anything else means no.
    pub(super) fn confirm(&mut self, prompt: &str) -> Result<bool, SessionError> {
        let answer = self.ask(prompt)?;
        Ok(answer.trim() == CONFIRM_TOKEN)
    }
}
