pub(crate) mod build;
pub(crate) mod read;
pub(crate) mod sites;

use std::io::{self, Write};
use std::process;

use palmtree_core::CalendarError;

use crate::{report_error, OutputFormat};

/// Report `msg` and exit with status 1.
pub(crate) fn fail(msg: &str, output: OutputFormat, quiet: bool) -> ! {
    report_error(msg, output, quiet);
    process::exit(1);
}

/// Write a tree to stdout in the calendar layout, followed by a newline.
pub(crate) fn print_tree<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), CalendarError> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    palmtree_core::write(value, &mut lock)?;
    writeln!(lock)?;
    Ok(())
}
