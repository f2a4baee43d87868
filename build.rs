use std::{env, fs, path::PathBuf};

fn main() {
    // Stage memory.x for the Pico 1 target so the linker can find it.
    let target = env::var("TARGET").unwrap();
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    if target.starts_with("thumbv6m") {
        let memory_x = fs::read_to_string("memory.x").expect("Failed to read memory.x");
        let dest = out_dir.join("memory.x");
        fs::write(&dest, memory_x).expect("Failed to write memory.x");
        println!("cargo:rustc-link-search={}", out_dir.display());
        println!("cargo:rerun-if-changed=memory.x");
    }
}
