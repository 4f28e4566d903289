//! SpecPatcher: rewrite the `servers` section of an OpenAPI JSON document.
//!
//! The input document is treated as an open mapping; nothing is validated
//! against the OpenAPI schema. The only mutation is at the top level:
//!
//! ```json
//! "servers": [
//!   {
//!     "url": "http://host.docker.internal:80/dev-deployment-qx33gh3495",
//!     "description": "BAMOE Canvas Server"
//!   }
//! ]
//! ```
//!
//! Every other key passes through untouched, in its original order
//! (serde_json's preserve_order keeps the parse order of the map).

use crate::error::PatchError;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Conventional input/output paths when none are given on the command line.
pub const DEFAULT_INPUT: &str = "openapi.json";
pub const DEFAULT_OUTPUT: &str = "openapi-fixed.json";

/// The one server the patched spec advertises. Deployment-specific but fixed;
/// the CLI deliberately does not expose it.
pub const SERVER_URL: &str = "http://host.docker.internal:80/dev-deployment-qx33gh3495";
pub const SERVER_DESCRIPTION: &str = "BAMOE Canvas Server";

/// A single entry of the OpenAPI `servers` array.
#[derive(Debug, Clone, Serialize)]
pub struct ServerEntry {
    pub url: String,
    pub description: String,
}

impl ServerEntry {
    pub fn canvas_server() -> Self {
        Self {
            url: SERVER_URL.to_string(),
            description: SERVER_DESCRIPTION.to_string(),
        }
    }
}

/// Replace (or create) the top-level `servers` key with a one-element array
/// holding `entry`. Updating in place keeps the key's original position when
/// the input already had one; a fresh key lands at the end of the map.
pub fn inject_servers(doc: &mut Value, entry: &ServerEntry) -> Result<(), serde_json::Error> {
    let servers = Value::Array(vec![serde_json::to_value(entry)?]);

    // Caller guarantees the document is an object.
    if let Value::Object(map) = doc {
        map.insert("servers".to_string(), servers);
    }
    Ok(())
}

/// Run the whole transformation: read `input`, patch the document, write the
/// pretty-printed result to `output`, and confirm on stdout.
///
/// The input file is never modified; the output file is truncated/created.
/// Any failure leaves no partially cleaned-up state behind.
pub fn patch_file(input: &Path, output: &Path) -> Result<(), PatchError> {
    let text = fs::read_to_string(input).map_err(|source| PatchError::NotFound {
        path: input.to_path_buf(),
        source,
    })?;

    let mut doc: Value = serde_json::from_str(&text).map_err(|source| PatchError::Parse {
        path: input.to_path_buf(),
        source: Some(source),
    })?;

    if !doc.is_object() {
        return Err(PatchError::Parse {
            path: input.to_path_buf(),
            source: None,
        });
    }

    let entry = ServerEntry::canvas_server();
    inject_servers(&mut doc, &entry).map_err(|source| PatchError::Parse {
        path: input.to_path_buf(),
        source: Some(source),
    })?;

    // serde_json's pretty printer indents with 2 spaces.
    let rendered = serde_json::to_string_pretty(&doc).map_err(|source| PatchError::Parse {
        path: input.to_path_buf(),
        source: Some(source),
    })?;

    fs::write(output, rendered).map_err(|source| PatchError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    println!("✅ Fixed OpenAPI spec saved to {}", output.display());
    println!("   Added server URL: {}", SERVER_URL);

    Ok(())
}
