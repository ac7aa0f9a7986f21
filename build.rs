/// Build script: generates one `#[test]` function per case in spec/window.json so each
/// conformance case shows up separately in `cargo test` output.
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let spec_path = Path::new("spec/window.json");
    println!("cargo:rerun-if-changed={}", spec_path.display());

    let spec_str = fs::read_to_string(spec_path).expect("failed to read spec/window.json");
    let fixture: serde_json::Value = serde_json::from_str(&spec_str).expect("invalid JSON in fixture");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("conformance_tests.rs");
    let mut f = fs::File::create(&dest).unwrap();

    for (section, runner) in [
        ("increment", "run_increment"),
        ("move_to_nearest_date", "run_move_to_nearest_date"),
        ("options", "run_options"),
        ("options_errors", "run_options_error"),
    ] {
        for (i, case) in iter_tests(&fixture[section]).enumerate() {
            let name = test_name(case, i);
            emit(&mut f, &format!("{section}_{name}"), runner, i);
        }
    }
}

fn iter_tests(section: &serde_json::Value) -> impl Iterator<Item = &serde_json::Value> {
    section["tests"]
        .as_array()
        .expect("section missing 'tests' array")
        .iter()
}

fn test_name(case: &serde_json::Value, index: usize) -> String {
    let raw = case["name"]
        .as_str()
        .map(String::from)
        .unwrap_or_else(|| format!("case_{index}"));
    sanitize(&raw)
}

fn sanitize(name: &str) -> String {
    let mut result = String::new();
    let mut prev_underscore = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c.to_ascii_lowercase());
            prev_underscore = false;
        } else if !prev_underscore {
            result.push('_');
            prev_underscore = true;
        }
    }
    result.trim_matches('_').to_string()
}

fn emit(f: &mut fs::File, fn_name: &str, runner: &str, index: usize) {
    writeln!(f, "#[test]").unwrap();
    writeln!(f, "fn {fn_name}() {{ {runner}({index}); }}").unwrap();
}
