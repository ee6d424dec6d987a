use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let dest_path = Path::new(&out_dir).join("catalogs.rs");

    let mut code = String::new();
    code.push_str("/// Embedded catalog documents\n");
    code.push_str("pub static CATALOGS: &[(&str, &str)] = &[\n");

    let data_dir = manifest_dir.join("data");

    if data_dir.exists() {
        let mut files: Vec<PathBuf> = WalkDir::new(&data_dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .map(|e| e.into_path())
            .filter(|p| p.extension().map_or(false, |ext| ext == "json"))
            .collect();
        files.sort();

        for path in files {
            let relative_path = path.strip_prefix(&data_dir).unwrap();
            let name = relative_path.to_string_lossy().replace('\\', "/");

            // include_str! keeps the document out of the generated source
            code.push_str(&format!(
                "    ({:?}, include_str!({:?})),\n",
                name,
                path.to_string_lossy()
            ));
        }
    }

    code.push_str("];\n");

    fs::write(&dest_path, code).unwrap();

    println!("cargo:rerun-if-changed=data");
}
