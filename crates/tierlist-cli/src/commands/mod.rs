//! Command implementations.

pub mod item;
pub mod library;
pub mod reset;
pub mod settings;
pub mod show;
pub mod templates;
pub mod tier;
pub mod transfer;

pub use self::item::execute_item;
pub use self::library::execute_library;
pub use self::reset::execute_reset;
pub use self::settings::execute_settings;
pub use self::show::execute_show;
pub use self::templates::execute_templates;
pub use self::tier::execute_tier;
pub use self::transfer::{execute_export, execute_import};

use crate::error::Result;
use crate::output::Formatter;
use std::io::{self, BufRead, Write};

/// Ask for a yes/no confirmation on stdin.
///
/// Prints a cancellation notice and returns `false` unless the answer is `y`.
pub(crate) fn confirm(prompt: &str, formatter: &Formatter) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut response = String::new();
    io::stdin().lock().read_line(&mut response)?;

    if response.trim().eq_ignore_ascii_case("y") {
        Ok(true)
    } else {
        println!("{}", formatter.info("Operation cancelled"));
        Ok(false)
    }
}
