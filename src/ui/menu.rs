use log::info;

use super::console::Console;
use super::session::{Session, SessionError};

const MAIN_MENU: &str = "
To interact with the database, type the letter that corresponds to what you
would like to do and hit enter.

    a - add a new record
    s - search for a record
    u - update a record
    r - remove a record
    e - exit

        : ";

const RETURN_PROMPT: &str = "\nTo go back to main menu, hit enter. ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Add,
    Search,
    Update,
    Remove,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "a" => Some(MenuChoice::Add),
            "s" => Some(MenuChoice::Search),
            "u" => Some(MenuChoice::Update),
            "r" => Some(MenuChoice::Remove),
            "e" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Where to go after an operation finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Menu,
    Exit,
}

impl<C: Console> Session<'_, C> {
    /// Main menu loop. Returns when the user picks exit or declines to go back
    /// to the menu; storage errors inside an operation are reported and the
    /// loop carries on.
    pub(super) fn navigate(&mut self) -> Result<(), SessionError> {
        loop {
            let answer = self.ask(MAIN_MENU)?;
            let outcome = match MenuChoice::parse(&answer) {
                Some(MenuChoice::Add) => self.add_record(),
                Some(MenuChoice::Search) => self.search_records(),
                Some(MenuChoice::Update) => self.update_record(),
                Some(MenuChoice::Remove) => self.remove_record(),
                Some(MenuChoice::Exit) => {
                    info!("event=menu module=ui status=exit_selected");
                    return Ok(());
                }
                None => {
                    self.console.error("Invalid input entered.")?;
                    Ok(())
                }
            };

            match outcome {
                Ok(()) => {}
                Err(SessionError::Store(err)) => self.report_store_error(&err)?,
                Err(err) => return Err(err),
            }

            if self.after_operation()? == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Only an empty answer leads back to the menu.
    fn after_operation(&mut self) -> Result<Flow, SessionError> {
        let answer = self.ask(RETURN_PROMPT)?;
        Ok(if answer.is_empty() {
            Flow::Menu
        } else {
            Flow::Exit
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_letters_ignore_case_and_padding() {
        assert_eq!(MenuChoice::parse(" A "), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse("s"), Some(MenuChoice::Search));
        assert_eq!(MenuChoice::parse("U"), Some(MenuChoice::Update));
        assert_eq!(MenuChoice::parse("r\t"), Some(MenuChoice::Remove));
        assert_eq!(MenuChoice::parse("e"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("add"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }
}
