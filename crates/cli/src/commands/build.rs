use std::io::{self, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::commands::fail;
use crate::manifest::CalendarManifest;
use crate::OutputFormat;

pub(crate) fn cmd_build(
    manifest_path: &Path,
    out: Option<&Path>,
    output: OutputFormat,
    quiet: bool,
) {
    let manifest = match CalendarManifest::load(manifest_path) {
        Ok(m) => m,
        Err(e) => fail(&e.to_string(), output, quiet),
    };

    let base_dir = manifest_path.parent().unwrap_or_else(|| Path::new("."));
    let builder = match manifest.into_builder(base_dir) {
        Ok(b) => b,
        Err(e) => fail(&e.to_string(), output, quiet),
    };
    let calendar_id = builder.id();

    match out {
        Some(path) => {
            // Write beside the target and rename over it, so a failed build
            // never leaves a truncated calendar behind.
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let mut tmp = match NamedTempFile::new_in(dir) {
                Ok(f) => f,
                Err(e) => fail(
                    &format!("error creating '{}': {}", path.display(), e),
                    output,
                    quiet,
                ),
            };
            let written = builder.build(BufWriter::new(tmp.as_file_mut()));
            // `fail` exits without running destructors, so the temporary
            // file is removed explicitly on every error path.
            let result = match written {
                Ok(_) => tmp.persist(path).map(drop).map_err(|e| e.error.to_string()),
                Err(e) => {
                    let _ = tmp.close();
                    Err(e.to_string())
                }
            };
            if let Err(e) = result {
                fail(
                    &format!("error writing '{}': {}", path.display(), e),
                    output,
                    quiet,
                );
            }
            if !quiet {
                match output {
                    OutputFormat::Text => {
                        println!("wrote calendar {} to {}", calendar_id, path.display());
                    }
                    OutputFormat::Json => {
                        let json = serde_json::json!({
                            "calendarId": calendar_id.to_string(),
                            "path": path.display().to_string(),
                        });
                        println!("{}", json);
                    }
                }
            }
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            let result = builder
                .build(&mut lock)
                .and_then(|_| writeln!(lock).map_err(Into::into));
            if let Err(e) = result {
                fail(&format!("error writing calendar: {}", e), output, quiet);
            }
        }
    }
}
