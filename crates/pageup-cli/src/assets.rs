//! Static asset copying.

use std::fs;
use std::io;
use std::path::Path;

/// Copy a static asset tree into the output directory.
///
/// An existing destination is removed first so stale files from a
/// previous build never survive.
pub fn copy_static(src: &Path, dst: &Path) -> io::Result<()> {
    if dst.exists() {
        fs::remove_dir_all(dst)?;
    }
    copy_tree(src, dst)
}

fn copy_tree(src: &Path, dst: &Path) -> io::Result<()> {
    fs::create_dir_all(dst)?;

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let source = entry.path();
        let dest = dst.join(entry.file_name());

        if source.is_dir() {
            copy_tree(&source, &dest)?;
        } else {
            println!("Copying {} -> {}", source.display(), dest.display());
            fs::copy(&source, &dest)?;
        }
    }

    Ok(())
}
