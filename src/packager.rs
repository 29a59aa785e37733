//! Project directory packaging.
//!
//! Walks a source tree and writes every non-empty regular file into a single
//! zip archive under its path relative to the source root. Deployment
//! archives are all-or-nothing: any traversal or write error aborts the run
//! and the destination file's contents are unspecified to the caller.

use crate::result::Result;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// One-shot packager producing a zip archive from a directory tree.
///
/// The archive writer is created inside [`pack`](Self::pack) and owned
/// exclusively by it. `pack` consumes the packager, so a single archive can
/// never gain a second writer; entries are always written sequentially.
pub struct Packager {
    src: PathBuf,
    dest: PathBuf,
}

impl Packager {
    pub fn new<S: Into<PathBuf>, D: Into<PathBuf>>(src: S, dest: D) -> Self {
        Self {
            src: src.into(),
            dest: dest.into(),
        }
    }

    /// Package the source directory into the destination archive.
    ///
    /// The destination is created (truncating any existing file) before the
    /// walk begins. Directories are traversed but never emitted as entries;
    /// symlinks and other non-regular entries are skipped, as are
    /// zero-length files, which carry no deployment payload. Entry names use
    /// forward slashes whatever the host separator, keeping archives
    /// portable.
    ///
    /// Any error aborts the whole operation. The destination file stays on
    /// disk, possibly truncated; callers must not consume it after a failed
    /// pack. All file and writer handles are released on every exit path.
    ///
    /// Entry names are rendered lossily for non-UTF-8 paths.
    pub fn pack(self) -> Result<()> {
        let src = self.src.canonicalize()?;
        let file = File::create(&self.dest)?;
        // The destination exists now, so its canonical spelling resolves.
        // Walked paths are canonical too (the root is, and symlinked
        // directories are never followed), so the comparison below holds
        // for any spelling of the destination, relative or `..`-laden.
        let dest = self.dest.canonicalize()?;
        let mut zip = ZipWriter::new(file);
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated)
            .unix_permissions(0o644);

        for entry in WalkDir::new(&src) {
            let entry = entry?;
            // The archive itself may live under the tree being packaged.
            if entry.path() == dest {
                continue;
            }
            if !entry.file_type().is_file() {
                continue;
            }
            if entry.metadata()?.len() == 0 {
                continue;
            }

            zip.start_file(entry_name(&src, entry.path()), options)?;
            let mut f = File::open(entry.path())?;
            io::copy(&mut f, &mut zip)?;
        }

        zip.finish()?;
        Ok(())
    }
}

/// Archive name for `path` relative to `root`, joined with `/`.
fn entry_name(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
