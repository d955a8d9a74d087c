use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

/// Version of `package` as locked in `Cargo.lock`, if any.
fn locked_version(lock: &str, package: &str) -> Option<String> {
    let name_line = format!("name = \"{}\"", package);
    let mut lines = lock.lines().map(str::trim);
    lines.find(|l| *l == name_line)?;
    lines
        .next()?
        .strip_prefix("version = \"")?
        .strip_suffix('"')
        .map(str::to_string)
}

fn main() {
    let output = Command::new(env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string()))
        .arg("--version")
        .output()
        .expect("Failed to execute rustc");
    let rustc_version = String::from_utf8_lossy(&output.stdout);

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let lock_path = Path::new(&manifest_dir).join("Cargo.lock");
    let yaml_parser = fs::read_to_string(&lock_path)
        .ok()
        .and_then(|lock| locked_version(&lock, "yaml-rust2"))
        .map_or_else(|| "yaml-rust2".to_string(), |v| format!("yaml-rust2 {}", v));

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("rustc_version.rs");
    fs::write(
        &dest_path,
        format!(
            "pub const RUSTC_VERSION: &str = {:?};\npub const YAML_PARSER: &str = {:?};\n",
            rustc_version.trim_end(),
            yaml_parser
        ),
    )
    .unwrap();
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={}", lock_path.display());
}
