//! Staging of document units into the output tree.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{Error, Result};

/// A document unit: a named subdirectory expected to contain a document
/// file named after itself plus the configured extension.
#[derive(Debug, Clone)]
pub struct DocUnit {
    /// Directory name of the unit.
    pub name: String,
    /// Full path of the unit directory.
    pub path: PathBuf,
}

/// Discover document units: the immediate subdirectories of `root`, sorted
/// lexicographically by name. Non-directory entries are ignored.
pub fn discover_units(root: &Path) -> Result<Vec<DocUnit>> {
    let mut units = Vec::new();

    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            // Lossy conversion keeps non-UTF-8 directory names processable;
            // the replacement character only affects log messages.
            let name = entry.file_name().to_string_lossy().into_owned();
            units.push(DocUnit { name, path });
        }
    }

    units.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(units)
}

/// Copy every document unit under `source_root` into `output_root`,
/// preserving unit names. Returns the staged units in processing order.
///
/// A failed copy aborts staging; partially copied content is left in place.
pub fn stage_units(source_root: &Path, output_root: &Path) -> Result<Vec<DocUnit>> {
    let units = discover_units(source_root)?;

    for unit in &units {
        info!("Copying document unit '{}' to output", unit.name);

        let dest = output_root.join(&unit.name);
        copy_dir_recursive(&unit.path, &dest).map_err(|e| Error::UnitCopy {
            unit: unit.name.clone(),
            path: dest.clone(),
            source: e,
        })?;
    }

    Ok(units)
}

/// Recursively copy `src` into `dst`. Existing directories are merged and
/// existing files overwritten.
fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dst)?;

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());

        if entry.path().is_dir() {
            copy_dir_recursive(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn test_discover_units_sorted_and_dirs_only() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("beta")).unwrap();
        fs::create_dir(root.path().join("alpha")).unwrap();
        touch(&root.path().join("stray.txt"));

        let units = discover_units(root.path()).unwrap();
        let names: Vec<_> = units.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["alpha", "beta"]);
    }

    #[test]
    fn test_discover_units_empty_root() {
        let root = TempDir::new().unwrap();
        assert!(discover_units(root.path()).unwrap().is_empty());
    }

    #[test]
    fn test_stage_units_copies_nested_content() {
        let source = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();

        let unit = source.path().join("manual");
        fs::create_dir_all(unit.join("figures")).unwrap();
        touch(&unit.join("manual.tex"));
        touch(&unit.join("figures/diagram.png"));
        touch(&source.path().join("notes.txt"));

        let staged = stage_units(source.path(), output.path()).unwrap();
        assert_eq!(staged.len(), 1);

        assert!(output.path().join("manual/manual.tex").is_file());
        assert!(output.path().join("manual/figures/diagram.png").is_file());
        assert!(!output.path().join("notes.txt").exists());
    }

    #[test]
    fn test_stage_units_merges_into_existing_unit() {
        let source = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();

        let unit = source.path().join("guide");
        fs::create_dir(&unit).unwrap();
        fs::write(unit.join("guide.tex"), b"new").unwrap();

        let existing = output.path().join("guide");
        fs::create_dir(&existing).unwrap();
        fs::write(existing.join("guide.tex"), b"old").unwrap();
        touch(&existing.join("leftover.aux"));

        stage_units(source.path(), output.path()).unwrap();

        // Files overwritten, unrelated content untouched
        assert_eq!(fs::read(existing.join("guide.tex")).unwrap(), b"new");
        assert!(existing.join("leftover.aux").exists());
    }
}
