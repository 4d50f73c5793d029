use std::env;

/// Library search path used when `VGSHAPES_LIB_DIR` is unset. This is where
/// Raspberry Pi firmware packages install the Broadcom GPU userland.
const DEFAULT_LIB_DIR: &str = "/opt/vc/lib";

const NATIVE_LIBS: &[&str] = &["shapes", "brcmOpenVG", "brcmEGL", "brcmGLESv2", "bcm_host", "jpeg", "m"];

fn main() {
    println!("cargo:rerun-if-env-changed=VGSHAPES_LIB_DIR");
    println!("cargo:rerun-if-changed=build.rs");

    if env::var_os("CARGO_FEATURE_OPENVG").is_none() {
        return;
    }

    let dir = env::var("VGSHAPES_LIB_DIR").unwrap_or_else(|_| DEFAULT_LIB_DIR.to_owned());
    println!("cargo:rustc-link-search=native={dir}");
    for lib in NATIVE_LIBS {
        println!("cargo:rustc-link-lib={lib}");
    }
}
