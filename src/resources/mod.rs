//! Asset loading.
//!
//! Assets resolve relative to the working directory's `assets/` folder, the
//! layout `build.rs` also stages next to the build output.

pub mod font;
pub mod image;

use std::path::PathBuf;

use anyhow::{Context as _, Result};

fn asset_path(file_name: &str) -> PathBuf {
    std::path::Path::new("./").join("assets").join(file_name)
}

pub fn load_binary(file_name: &str) -> Result<Vec<u8>> {
    let path = asset_path(file_name);
    std::fs::read(&path).with_context(|| format!("could not read asset {}", path.display()))
}
