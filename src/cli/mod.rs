mod context;
mod flags;
pub mod prompts;

use context::{CliError, Context};

pub use flags::CliFlags;

/// Run the CLI with parsed flags.
pub fn run(flags: CliFlags) -> Result<(), CliError> {
    Context::new(flags).run()
}
