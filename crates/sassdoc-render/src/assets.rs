//! Copying of theme assets.

use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

/// Copy the tree under `source` into `dest`, creating directories as needed.
///
/// Returns the number of files copied. A missing `source` copies nothing.
pub fn copy_tree(source: &Path, dest: &Path) -> io::Result<usize> {
    if !source.exists() {
        tracing::warn!("Theme has no assets directory at {}", source.display());
        return Ok(0);
    }

    let mut copied = 0;

    for entry in WalkDir::new(source).follow_links(true) {
        let entry = entry.map_err(io::Error::other)?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(io::Error::other)?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }

    tracing::debug!("Copied {} asset files to {}", copied, dest.display());

    Ok(copied)
}

/// Write in-memory files, given as `(relative path, contents)`, under `dest`.
///
/// Returns the number of files written.
pub fn write_files(files: &[(&str, &str)], dest: &Path) -> io::Result<usize> {
    for (relative, contents) in files {
        let target = dest.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, contents)?;
    }

    tracing::debug!("Wrote {} bundled asset files to {}", files.len(), dest.display());

    Ok(files.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn copies_nested_files_verbatim() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("assets");
        let dest = temp.path().join("out/assets");

        fs::create_dir_all(source.join("css")).unwrap();
        fs::write(source.join("css/main.css"), "body { margin: 0; }").unwrap();
        fs::write(source.join("logo.svg"), "<svg/>").unwrap();

        let copied = copy_tree(&source, &dest).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(
            fs::read_to_string(dest.join("css/main.css")).unwrap(),
            "body { margin: 0; }"
        );
        assert!(dest.join("logo.svg").is_file());
    }

    #[test]
    fn writes_in_memory_files() {
        let temp = tempdir().unwrap();
        let dest = temp.path().join("assets");

        let written = write_files(&[("css/a.css", "a {}"), ("b.js", "")], &dest).unwrap();

        assert_eq!(written, 2);
        assert_eq!(fs::read_to_string(dest.join("css/a.css")).unwrap(), "a {}");
        assert!(dest.join("b.js").is_file());
    }

    #[test]
    fn missing_source_copies_nothing() {
        let temp = tempdir().unwrap();
        let copied = copy_tree(&temp.path().join("nope"), &temp.path().join("out")).unwrap();
        assert_eq!(copied, 0);
    }
}
