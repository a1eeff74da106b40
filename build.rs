// Build script for glu-bridge
//
// The native library is only linked when the `glu` feature is enabled. Without
// it the crate has no native dependency and sessions are driven through any
// `TessBackend`/`NurbsBackend` implementation.

use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    if env::var_os("CARGO_FEATURE_GLU").is_none() {
        return;
    }

    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    match target_os.as_str() {
        "macos" => println!("cargo:rustc-link-lib=framework=OpenGL"),
        "windows" => println!("cargo:rustc-link-lib=glu32"),
        _ => println!("cargo:rustc-link-lib=GLU"),
    }
}
