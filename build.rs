fn main() {
    // Stamped into `curvekit::BUILD_DATE` and printed by the session binary.
    let build_date = chrono::Utc::now().format("%Y-%m-%d").to_string();
    println!("cargo:rustc-env=BUILD_DATE={}", build_date);
    println!("cargo:rerun-if-changed=Cargo.toml");
}
