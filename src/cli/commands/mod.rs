pub mod menu;
pub mod pick;

use crate::Result;

/// Common trait for the non-interactive command handlers
pub trait CommandHandler {
    /// Execute the command
    fn execute(&self) -> Result<()>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}
