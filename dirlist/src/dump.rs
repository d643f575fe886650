//! The ensure-directory → list → render → write pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info};

use crate::listing::list_entries;
use crate::render::pformat;

/// Canonical output paths for a target root.
#[derive(Debug, Clone)]
pub struct DumpPaths {
    pub root: PathBuf,
    pub output_dir: PathBuf,
    pub listing_path: PathBuf,
}

impl DumpPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let output_dir = root.join("output");
        let listing_path = output_dir.join("pformat.txt");
        Self {
            root,
            output_dir,
            listing_path,
        }
    }
}

/// Outcome of a dump, consumed by logging and tests only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpReport {
    pub entry_count: usize,
    pub listing_path: PathBuf,
}

/// Snapshot the direct entries of `root` into `<root>/output/pformat.txt`.
///
/// The `output` directory is created before the listing is taken, so it
/// appears in the very listing that is then written into it. The output file
/// is truncated and fully rewritten on every run. Any filesystem failure
/// aborts the whole operation; there is no partial-success mode.
pub fn dump_listing(root: &Path) -> Result<DumpReport> {
    let paths = DumpPaths::new(root);
    ensure_output_dir(&paths.output_dir)?;

    let entries = list_entries(&paths.root)?;
    debug!(count = entries.len(), "listed directory entries");

    let rendered = pformat(&entries);
    fs::write(&paths.listing_path, &rendered)
        .with_context(|| format!("write listing {}", paths.listing_path.display()))?;
    info!(
        path = %paths.listing_path.display(),
        entries = entries.len(),
        "wrote directory listing"
    );

    Ok(DumpReport {
        entry_count: entries.len(),
        listing_path: paths.listing_path,
    })
}

fn ensure_output_dir(path: &Path) -> Result<()> {
    if path.exists() && !path.is_dir() {
        return Err(anyhow!(
            "output path {} exists but is not a directory",
            path.display()
        ));
    }
    fs::create_dir_all(path).with_context(|| format!("create directory {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn read_listing(root: &Path) -> String {
        fs::read_to_string(DumpPaths::new(root).listing_path).expect("read listing")
    }

    /// Two files and no prior `output/`: the fresh `output` directory appears
    /// in its own listing alongside the files.
    #[test]
    fn dump_lists_files_and_the_fresh_output_dir() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::write(temp.path().join("a.txt"), "").expect("write a.txt");
        fs::write(temp.path().join("b.txt"), "").expect("write b.txt");

        let report = dump_listing(temp.path()).expect("dump");
        assert_eq!(report.entry_count, 3);

        let rendered = read_listing(temp.path());
        assert!(rendered.starts_with('[') && rendered.ends_with(']'));
        for name in ["'a.txt'", "'b.txt'", "'output'"] {
            assert_eq!(rendered.matches(name).count(), 1, "missing {name}");
        }
    }

    #[test]
    fn dump_of_empty_directory_lists_only_output() {
        let temp = tempfile::tempdir().expect("tempdir");
        let report = dump_listing(temp.path()).expect("dump");
        assert_eq!(report.entry_count, 1);
        assert_eq!(read_listing(temp.path()), "['output']");
    }

    #[test]
    fn second_run_succeeds_with_existing_output_dir() {
        let temp = tempfile::tempdir().expect("tempdir");
        dump_listing(temp.path()).expect("first dump");
        dump_listing(temp.path()).expect("second dump");
    }

    #[test]
    fn stale_listing_is_fully_replaced() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = DumpPaths::new(temp.path());
        fs::create_dir(&paths.output_dir).expect("create output");
        fs::write(&paths.listing_path, "stale text that must disappear").expect("write stale");

        dump_listing(temp.path()).expect("dump");

        let rendered = read_listing(temp.path());
        assert!(!rendered.contains("stale text"));
        assert_eq!(rendered, "['output']");
    }

    #[test]
    fn nested_entries_do_not_appear() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::create_dir(temp.path().join("sub")).expect("create sub");
        fs::write(temp.path().join("sub").join("nested.txt"), "").expect("write nested");

        dump_listing(temp.path()).expect("dump");

        let rendered = read_listing(temp.path());
        assert!(rendered.contains("'sub'"));
        assert!(!rendered.contains("nested.txt"));
    }

    #[test]
    fn regular_file_occupying_output_path_is_fatal() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::write(temp.path().join("output"), "not a directory").expect("write collision");

        let err = dump_listing(temp.path()).unwrap_err();
        assert!(err.to_string().contains("not a directory"));
        assert!(!DumpPaths::new(temp.path()).listing_path.exists());
    }

    #[test]
    fn report_names_the_listing_path() {
        let temp = tempfile::tempdir().expect("tempdir");
        let report = dump_listing(temp.path()).expect("dump");
        assert_eq!(
            report.listing_path,
            temp.path().join("output").join("pformat.txt")
        );
    }
}
