use std::fs;
use std::path::Path;

use palmtree_core::sites::from_geojson_str;
use serde_json::Value;

use crate::commands::{fail, print_tree};
use crate::OutputFormat;

pub(crate) fn cmd_sites(file: &Path, output: OutputFormat, quiet: bool) {
    let text = match fs::read_to_string(file) {
        Ok(s) => s,
        Err(e) => fail(
            &format!("error reading file '{}': {}", file.display(), e),
            output,
            quiet,
        ),
    };

    let tree = match from_geojson_str(&text) {
        Ok(t) => t,
        Err(e) => fail(&format!("'{}': {}", file.display(), e), output, quiet),
    };

    match output {
        OutputFormat::Text => {
            if quiet {
                return;
            }
            let features = tree
                .get("features")
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or_default();
            println!("{} features", features.len());
            for (i, feature) in features.iter().enumerate() {
                let kind = feature
                    .get("geometry")
                    .and_then(|g| g.get("type"))
                    .and_then(Value::as_str)
                    .unwrap_or("no geometry");
                println!("  {}: {}", i, kind);
            }
        }
        OutputFormat::Json => {
            if let Err(e) = print_tree(&tree) {
                fail(&format!("error writing sites: {}", e), output, quiet);
            }
        }
    }
}
