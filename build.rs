#![allow(clippy::style)]

extern crate autocfg;

use std::env;
use std::path::PathBuf;


fn main() -> std::io::Result<()> {
    let ac = autocfg::new();
    ac.emit_rustc_version(1, 70);

    let outdir = match std::env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };
    let outdir_path = PathBuf::from(outdir);

    write_default_decimals(&outdir_path, "default_decimals.rs")?;
    Ok(())
}

/// Create default_decimals.rs, containing definition of constant DEFAULT_DECIMALS
fn write_default_decimals(outdir_path: &PathBuf, filename: &str) -> std::io::Result<()>
{
    let default_decimals = env::var("RUST_FIXDECIMAL_DEFAULT_DECIMALS")
        .map(|s| s.parse::<std::num::NonZeroU32>().expect("$RUST_FIXDECIMAL_DEFAULT_DECIMALS must be an integer > 0"))
        .map(|nz_num| nz_num.get())
        .unwrap_or(40u32);

    let default_decimals_rs_path = outdir_path.join(filename);

    let default_decimals = format!("const DEFAULT_DECIMALS: usize = {};", default_decimals);

    // Rewriting the file if it already exists with the same contents
    // would force a rebuild.
    match std::fs::read_to_string(&default_decimals_rs_path) {
        Ok(existing_contents) if existing_contents == default_decimals => {},
        _ => {
            std::fs::write(&default_decimals_rs_path, default_decimals)
                    .expect("Could not write fixdecimal default-decimals file");
        }
    };

    println!("cargo:rerun-if-changed={}", default_decimals_rs_path.display());
    println!("cargo:rerun-if-env-changed={}", "RUST_FIXDECIMAL_DEFAULT_DECIMALS");

    Ok(())
}
