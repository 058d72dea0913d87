use std::path::Path;
use std::{env, fs};

// Ships the per-profile config next to the binary so the program can load
// <exe dir>/cosmetiq.toml at startup.
fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let profile = env::var("PROFILE").unwrap();

    let target_dir = Path::new(&out_dir).ancestors().nth(3).unwrap();
    fs::create_dir_all(target_dir).expect("Failed to create target directory");

    let profile_config = format!("cosmetiq.{}.toml", profile);
    fs::copy(&profile_config, target_dir.join("cosmetiq.toml"))
        .unwrap_or_else(|e| panic!("Failed to copy {}: {}", profile_config, e));

    println!("cargo:rerun-if-changed={}", profile_config);
}
