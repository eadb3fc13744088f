use std::fs::File;
use std::path::Path;

use palmtree_core::CalendarDocument;

use crate::commands::{fail, print_tree};
use crate::OutputFormat;

pub(crate) fn cmd_read(file: &Path, output: OutputFormat, quiet: bool) {
    let input = match File::open(file) {
        Ok(f) => f,
        Err(e) => fail(
            &format!("error reading file '{}': {}", file.display(), e),
            output,
            quiet,
        ),
    };

    let doc = match CalendarDocument::from_reader(input) {
        Ok(d) => d,
        Err(e) => fail(
            &format!("error parsing JSON in '{}': {}", file.display(), e),
            output,
            quiet,
        ),
    };

    match output {
        OutputFormat::Text => {
            if quiet {
                return;
            }
            println!("{} top-level keys", doc.len());
            for key in doc.as_map().keys() {
                println!("  {}", key);
            }
            let missing = doc.missing_keys();
            if !missing.is_empty() {
                println!("missing calendar keys: {}", missing.join(", "));
            }
        }
        OutputFormat::Json => {
            if let Err(e) = print_tree(&doc) {
                fail(&format!("error writing document: {}", e), output, quiet);
            }
        }
    }
}
