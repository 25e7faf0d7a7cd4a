use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::FameError;

/// Short label for a source: its final path segment truncated at the first `.`.
///
/// ```
/// use std::path::Path;
/// use fameframe_core::mnemonics::derive_mnemonic;
///
/// assert_eq!(derive_mnemonic(Path::new("/data/us/gdp.v2.db")), "gdp");
/// ```
#[must_use]
pub fn derive_mnemonic(path: &Path) -> String {
    let file = path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    match file.split_once('.') {
        Some((stem, _)) => stem.to_string(),
        None => file,
    }
}

/// Assign one unique label per source.
///
/// Explicit mnemonics are used verbatim. Otherwise labels are derived with
/// [`derive_mnemonic`]; names shared by several sources get a zero-based
/// numeric suffix in source order, skipping any suffix that would collide
/// with another source's label.
///
/// # Errors
/// Returns `InvalidArg` when explicit mnemonics do not match the number of
/// sources.
pub fn assign_mnemonics(
    paths: &[PathBuf],
    explicit: Option<Vec<String>>,
) -> Result<Vec<String>, FameError> {
    if let Some(names) = explicit {
        if names.len() != paths.len() {
            return Err(FameError::InvalidArg(format!(
                "{} mnemonics given for {} sources",
                names.len(),
                paths.len()
            )));
        }
        return Ok(names);
    }

    let derived: Vec<String> = paths.iter().map(|p| derive_mnemonic(p)).collect();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for name in &derived {
        *counts.entry(name.as_str()).or_default() += 1;
    }
    let mut taken: HashSet<String> = derived
        .iter()
        .filter(|n| counts[n.as_str()] == 1)
        .cloned()
        .collect();

    let mut next_suffix: HashMap<&str, usize> = HashMap::new();
    let mut out = Vec::with_capacity(derived.len());
    for name in &derived {
        if counts[name.as_str()] == 1 {
            out.push(name.clone());
            continue;
        }
        let n = next_suffix.entry(name.as_str()).or_default();
        let mut candidate = format!("{name}{n}");
        while taken.contains(&candidate) {
            *n += 1;
            candidate = format!("{name}{n}");
        }
        *n += 1;
        taken.insert(candidate.clone());
        out.push(candidate);
    }
    Ok(out)
}
