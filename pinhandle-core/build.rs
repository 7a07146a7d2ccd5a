//! Build script for pinhandle-core
//!
//! - Reads the static pool size from `PINHANDLE_MAX_INSTANCES`
//! - Generates `config.rs` with the validated value

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Pool size used when the environment does not override it
const DEFAULT_MAX_INSTANCES: usize = 16;

/// Largest pool the slot index type can address
const LIMIT_MAX_INSTANCES: usize = u16::MAX as usize;

fn main() {
    println!("cargo:rerun-if-env-changed=PINHANDLE_MAX_INSTANCES");
    println!("cargo:rerun-if-changed=build.rs");

    let max_instances = read_max_instances();
    write_config(max_instances);
}

/// Read and validate the pool size
fn read_max_instances() -> usize {
    let raw = match env::var("PINHANDLE_MAX_INSTANCES") {
        Ok(value) => value,
        Err(env::VarError::NotPresent) => return DEFAULT_MAX_INSTANCES,
        Err(e) => fail(&format!("PINHANDLE_MAX_INSTANCES is not valid: {}", e)),
    };

    let value: usize = match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => fail(&format!(
            "PINHANDLE_MAX_INSTANCES must be an integer, got '{}'",
            raw.trim()
        )),
    };

    if value == 0 || value > LIMIT_MAX_INSTANCES {
        fail(&format!(
            "PINHANDLE_MAX_INSTANCES must be 1-{}, got {}",
            LIMIT_MAX_INSTANCES, value
        ));
    }

    value
}

/// Emit the generated constants into OUT_DIR
fn write_config(max_instances: usize) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let mut f = File::create(out_dir.join("config.rs")).expect("create config.rs");
    writeln!(
        f,
        "/// Number of slots in the static pin pool\n\
         pub const MAX_PIN_INSTANCES: usize = {};",
        max_instances
    )
    .expect("write config.rs");
}

/// Abort the build with a boxed error message
fn fail(msg: &str) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: Invalid pinhandle configuration                          ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        ║  {:<64} ║\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        msg
    );
}
