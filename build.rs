use std::env;
use std::path::PathBuf;

use anyhow::*;
use fs_extra::copy_items;
use fs_extra::dir::CopyOptions;

// Stages the assets/ directory (cubemap faces, terrain maps, fonts) into
// OUT_DIR so demos can also run from the build output directory.
fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=assets/*");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let assets = manifest_dir.join("assets");
    if assets.exists() {
        let out_dir = env::var("OUT_DIR")?;
        let mut copy_options = CopyOptions::new();
        copy_options.overwrite = true;
        copy_items(&[assets], out_dir, &copy_options)?;
    }

    Ok(())
}
