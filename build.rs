use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    // Only the RP2350 firmware link needs the memory layout; host builds
    // (tests, mocks) skip it.
    let target = env::var("TARGET").unwrap_or_default();
    if target.starts_with("thumbv8m") {
        let out = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
        fs::write(out.join("memory.x"), include_bytes!("memory.x"))
            .expect("failed to write memory.x to OUT_DIR");
        println!("cargo:rustc-link-search={}", out.display());
    }

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}
