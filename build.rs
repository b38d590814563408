use chrono::Datelike;

fn main() {
    // Capture the current timestamp as the build time
    let now = chrono::Utc::now();
    println!("cargo:rustc-env=BUILD_TIME={}", now.to_rfc3339());

    // The footer year comes from here so server and hydrated renders agree
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
