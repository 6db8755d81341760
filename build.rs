use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const CSS_ENTRY: &str = "assets/css/main.css";
const CSS_OUT_DIR: &str = "assets/dist";
const CSS_OUT: &str = "assets/dist/bundle.css";

fn bundle_css(entry: &Path) -> Result<String, String> {
    let provider = FileProvider::new();
    let mut bundler = Bundler::new(&provider, None, ParserOptions::default());

    let mut stylesheet = bundler
        .bundle(entry)
        .map_err(|e| format!("bundling {}: {}", entry.display(), e))?;
    stylesheet
        .minify(MinifyOptions::default())
        .map_err(|e| format!("minifying: {}", e))?;

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| format!("printing: {}", e))?;
    Ok(css.code)
}

fn main() {
    println!("cargo:rerun-if-changed=assets/css/");

    fs::create_dir_all(CSS_OUT_DIR).expect("Failed to create assets/dist directory");

    match bundle_css(Path::new(CSS_ENTRY)) {
        Ok(css) => fs::write(CSS_OUT, css).expect("Failed to write bundle.css"),
        Err(e) => panic!("CSS bundle failed: {}", e),
    }
}
