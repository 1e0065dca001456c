//! Embeds an incrementing build number and a UTC timestamp so the startup
//! banner can identify exactly which build produced a summary.

use std::fs;
use std::path::Path;

fn main() {
    // Rerun on source changes only, not on every invocation
    println!("cargo:rerun-if-changed=src");

    let counter_path = Path::new("build_number.txt");

    let previous: u64 = if counter_path.exists() {
        fs::read_to_string(counter_path)
            .unwrap_or_else(|_| "0".to_string())
            .trim()
            .parse()
            .unwrap_or(0)
    } else {
        0
    };

    let build_number = previous + 1;
    fs::write(counter_path, build_number.to_string())
        .expect("Failed to write build number file");

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");

    println!("cargo:rustc-env=LARDER_BUILD_NUMBER={}", build_number);
    println!("cargo:rustc-env=LARDER_BUILD_TIMESTAMP={}", timestamp);
}
