/// Input retrieval
///
/// A missing or unreadable source is not fatal: it is logged and the run
/// continues with empty text.
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// Read the whole input source, or return an empty string
pub fn read_input(path: Option<&Path>) -> String {
    let Some(path) = path else {
        debug!("No input source given");
        return String::new();
    };

    match fs::read_to_string(path) {
        Ok(text) => {
            debug!("Read {} bytes from {:?}", text.len(), path);
            text
        }
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            String::new()
        }
    }
}
