//! Interactive selection of expanded repositories and secrets.

use std::io::{self, IsTerminal};

use dialoguer::theme::ColorfulTheme;
use dialoguer::MultiSelect;

use crate::core::resolve::Selector;
use crate::error::{Error, Result};

/// Multi-select prompt with every item preselected.
#[derive(Debug, Clone, Copy, Default)]
pub struct Prompt;

impl Selector for Prompt {
    fn select(&self, prompt: &str, items: &[String]) -> Result<Vec<String>> {
        if !io::stdin().is_terminal() {
            return Err(Error::Cancelled(
                "cannot confirm selection without a terminal".to_string(),
            ));
        }

        let defaults = vec![true; items.len()];
        let chosen = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(items)
            .defaults(&defaults)
            .interact_opt()
            .map_err(|e| Error::Cancelled(format!("invalid selection: {}", e)))?;

        match chosen {
            Some(indices) => Ok(indices.into_iter().map(|i| items[i].clone()).collect()),
            None => Err(Error::Cancelled("selection cancelled".to_string())),
        }
    }
}
