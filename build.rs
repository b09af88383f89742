use std::fs;
use std::process::Command;

fn main() {
    println!("cargo::rerun-if-changed=wasm/src");
    println!("cargo::rerun-if-changed=wasm/Cargo.toml");
    let compilation_path = "target-wasm";
    let pkg_path = "public/static/pkg";
    let profile = std::env::var("PROFILE").unwrap();
    let profile = profile.as_str();
    let wasm_file_path =
        &format!("{compilation_path}/wasm32-unknown-unknown/{profile}/wasm_wedding_site.wasm");
    if !compile_wasm(compilation_path, profile) {
        println!(
            "cargo::warning=wasm32 toolchain unavailable, keeping the plain-HTML RSVP form only"
        );
        return;
    }
    delete_entity(pkg_path);
    generate_bindings(wasm_file_path, pkg_path);
}

/// The form collector is progressive enhancement: when the wasm target or
/// wasm-bindgen is missing, the page falls back to its plain-HTML mailto form.
fn compile_wasm(compilation_path: &str, profile: &str) -> bool {
    let target_dir = format!("--target-dir={compilation_path}");
    let mut build_args = vec![
        "build",
        "--target=wasm32-unknown-unknown",
        target_dir.as_str(),
        "--manifest-path=./wasm/Cargo.toml",
    ];
    if profile == "release" {
        build_args.push("--release");
    }
    match Command::new("cargo").args(build_args).output() {
        Ok(output) => output.status.success(),
        Err(_) => false,
    }
}

/// Generate JS & TS bindings
fn generate_bindings(wasm_file_path: &str, pkg_path: &str) {
    let out_dir_param = format!("--out-dir={pkg_path}");
    let wasm_bindgen_args = ["--target=web", out_dir_param.as_str(), wasm_file_path];
    if Command::new("wasm-bindgen")
        .args(wasm_bindgen_args)
        .output()
        .is_err()
    {
        println!(
            "cargo::warning=wasm-bindgen unavailable, keeping the plain-HTML RSVP form only"
        );
    }
}

fn delete_entity(path: &str) {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => {
            fs::remove_dir_all(path).unwrap_or_else(|_| panic!("Couldn't delete {path}"))
        }
        Ok(_) => fs::remove_file(path).unwrap_or_else(|_| panic!("Couldn't delete {path}")),
        Err(_) => {}
    }
}
