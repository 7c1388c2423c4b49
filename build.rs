use std::env;

fn main() {
    // `cfg(target_pointer_width)` in here would describe the host, not the target.
    let width = env::var("CARGO_CFG_TARGET_POINTER_WIDTH").unwrap_or_default();
    let forced = env::var_os("CARGO_FEATURE_U32").is_some() || env::var_os("CARGO_FEATURE_U64").is_some();

    if !forced {
        match width.as_str() {
            "64" => println!("cargo:rustc-cfg=feature=\"u64\""),
            _ => println!("cargo:rustc-cfg=feature=\"u32\""),
        }
    }
    println!("cargo:rerun-if-changed=build.rs");
}
