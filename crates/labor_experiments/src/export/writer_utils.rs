use std::fs::File;
use std::path::Path;

use anyhow::{bail, Context, Result};

pub(crate) fn ensure_not_empty<T>(items: &[T]) -> Result<()> {
    if items.is_empty() {
        bail!("No results to export");
    }

    Ok(())
}

pub(crate) fn create_output_file(path: impl AsRef<Path>) -> Result<File> {
    let path = path.as_ref();
    File::create(path).with_context(|| format!("creating {}", path.display()))
}
