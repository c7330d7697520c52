//! Username screening run before account creation

use log::info;
use crate::filter::ContentGate;

pub const USERNAME_REJECTED: &str
  = "username contains inappropriate content";

/// Reject usernames the content gate flags
pub fn check_username(gate: &ContentGate, username: &str)
  -> Result<(), crate::error::Error>
{   if gate.contains_violation(username)
    {   info!("Username blocked for inappropriate content: {}", username);
        return Err(crate::error::Error::Validation(
          USERNAME_REJECTED.to_string()
        ));
    }
    Ok(())
}
