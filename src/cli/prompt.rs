use crate::error::Result;
use dialoguer::Confirm;

/// Asks a yes/no question, defaulting to "no". `skip` answers "yes" without asking.
pub fn confirm(skip: bool, prompt: String) -> Result<bool> {
    if skip {
        return Ok(true);
    }

    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}
