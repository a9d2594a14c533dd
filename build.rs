use chrono::Datelike;

fn main() {
    // Footer copyright year, read through env! in config.rs
    let build_year = chrono::Utc::now().year();
    println!("cargo:rustc-env=BUILD_YEAR={}", build_year);

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
