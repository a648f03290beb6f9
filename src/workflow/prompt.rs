//! The seam between the selection workflow and whatever presents choices to
//! the user. The binary plugs in the console implementation; tests drive the
//! workflow headlessly with a scripted one.

use crate::workflow::error::SelectionError;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;

/// Presents an enumerated list of choices and blocks until the user commits
/// to one.
pub trait Prompter {
    /// Returns `Ok(Some(index))` for a confirmed choice, `Ok(None)` when the
    /// user cancels the picker. The first item is the default highlight.
    fn select(&mut self, title: &str, items: &[String]) -> Result<Option<usize>, SelectionError>;
}

/// Terminal prompter backed by `dialoguer`'s select widget.
#[derive(Debug, Default)]
pub struct ConsolePrompter;

impl Prompter for ConsolePrompter {
    fn select(&mut self, title: &str, items: &[String]) -> Result<Option<usize>, SelectionError> {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(title)
            .items(items)
            .default(0)
            .interact_opt()?;
        Ok(choice)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::VecDeque;

    /// A prompter that answers from a prepared script. Picks are matched by
    /// substring against the offered items; an exhausted script cancels,
    /// which ends the app loop like a user quit.
    pub(crate) struct ScriptedPrompter {
        script: VecDeque<Answer>,
        pub prompts: Vec<String>,
    }

    pub(crate) enum Answer {
        Pick(&'static str),
        Cancel,
    }

    impl ScriptedPrompter {
        pub(crate) fn new(script: impl IntoIterator<Item = Answer>) -> Self {
            Self {
                script: script.into_iter().collect(),
                prompts: Vec::new(),
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn select(
            &mut self,
            title: &str,
            items: &[String],
        ) -> Result<Option<usize>, SelectionError> {
            self.prompts.push(title.to_string());
            match self.script.pop_front() {
                Some(Answer::Pick(needle)) => {
                    let index = items
                        .iter()
                        .position(|item| item.contains(needle))
                        .unwrap_or_else(|| panic!("no item matching '{needle}' in {items:?}"));
                    Ok(Some(index))
                }
                Some(Answer::Cancel) | None => Ok(None),
            }
        }
    }
}
