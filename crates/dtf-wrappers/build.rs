use std::{io::Write, path::Path};

use ethers::prelude::Abigen;
use eyre::{eyre, Result};
use heck::ToSnakeCase;

/// Collects the `(path, contract name)` pairs of every ABI file in the
/// provided directory. The contract name is the file stem.
fn get_abis(abi_path: &Path) -> Result<Vec<(String, String)>> {
    let mut abis = Vec::new();
    for entry in std::fs::read_dir(abi_path)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let source = path
            .to_str()
            .ok_or_else(|| eyre!("non utf-8 abi path: {:?}", path))?
            .to_string();
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| eyre!("invalid abi file name: {:?}", path))?
            .to_string();
        abis.push((source, name));
    }
    Ok(abis)
}

fn main() -> Result<()> {
    // Re-run this script whenever the build script itself or an ABI changes.
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=abi/");

    // If there is an existing `wrappers` module, remove it. Then prepare to
    // re-write these files.
    let root = Path::new(std::env!("CARGO_MANIFEST_DIR"));
    let generated = root.join("src/wrappers");
    if generated.exists() {
        std::fs::remove_dir_all(&generated)?;
    }
    std::fs::create_dir_all(&generated)?;
    let mut mod_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(generated.join("mod.rs"))?;

    // Generate a wrapper for each ABI. Sorting keeps the mod file stable
    // across builds.
    let mut abis = get_abis(&root.join("abi"))?;
    abis.sort_by(|a, b| a.1.cmp(&b.1));
    for (source, name) in abis {
        let target = name.to_snake_case();
        Abigen::new(&name, source)?
            .add_derive("serde::Serialize")?
            .add_derive("serde::Deserialize")?
            .generate()?
            .write_to_file(generated.join(format!("{}.rs", target)))?;

        writeln!(mod_file, "pub mod {};", target)?;
    }

    Ok(())
}
