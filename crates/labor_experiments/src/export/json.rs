use std::fs::File;

use anyhow::Result;
use serde::Serialize;

pub(crate) fn export_to_json_impl<T: Serialize + ?Sized>(items: &T, file: File) -> Result<()> {
    serde_json::to_writer_pretty(file, items)?;
    Ok(())
}
