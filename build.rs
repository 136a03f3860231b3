use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::{Path, PathBuf};

const CSS_DIR: &str = "assets/css";
const CSS_ENTRY: &str = "assets/css/main.css";
const BUNDLE_OUT: &str = "assets/dist/bundle.css";

/// Files pulled in by `@import "…";` lines of a stylesheet, relative to its directory
fn imported_files(entry: &Path) -> Vec<PathBuf> {
    let Ok(source) = fs::read_to_string(entry) else {
        return Vec::new();
    };
    let dir = entry.parent().unwrap_or_else(|| Path::new(CSS_DIR));

    source
        .lines()
        .filter_map(|line| line.trim().strip_prefix("@import"))
        .filter_map(|rest| {
            let rest = rest.trim().trim_start_matches("url(");
            let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
            let name = rest[1..].split(quote).next()?;
            (!name.is_empty()).then(|| dir.join(name))
        })
        .collect()
}

fn main() {
    println!("cargo:rerun-if-changed={CSS_DIR}/");
    println!("cargo:rerun-if-changed={CSS_ENTRY}");
    // Directory mtimes don't change when a file is edited in place
    for import in imported_files(Path::new(CSS_ENTRY)) {
        println!("cargo:rerun-if-changed={}", import.display());
    }

    fs::create_dir_all("assets/dist").expect("Failed to create assets/dist directory");

    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());

    let mut stylesheet = bundler
        .bundle(Path::new(CSS_ENTRY))
        .expect("Failed to bundle portfolio CSS");

    stylesheet
        .minify(MinifyOptions::default())
        .expect("Failed to minify CSS");

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .expect("Failed to generate CSS output");

    fs::write(BUNDLE_OUT, css.code).expect("Failed to write bundle.css");
}
