use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    // Rerun on any source edit so the id changes with every rebuilt binary.
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed=build.rs");

    let build_id = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "dev".to_string());
    println!(
        "cargo:rustc-env=ACTIVITIES_BUILD_ID={}-{}",
        env!("CARGO_PKG_VERSION"),
        build_id
    );
}
