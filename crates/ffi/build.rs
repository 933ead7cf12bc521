use std::env;
use std::path::PathBuf;

/// Header written at the workspace root for C and C++ consumers
const HEADER_NAME: &str = "UnitConvertFFI.h";

fn main() {
    let crate_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let header = PathBuf::from(&crate_dir).join("../..").join(HEADER_NAME);

    cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_language(cbindgen::Language::C)
        .with_include_guard("UNIT_CONVERT_FFI_H")
        .with_documentation(true)
        .with_pragma_once(false)
        .generate()
        .expect("Unable to generate C bindings")
        .write_to_file(header);

    // Only the exported functions and the error code enum end up in the header
    println!("cargo:rerun-if-changed=src/lib.rs");
    println!("cargo:rerun-if-changed=src/error.rs");
}
