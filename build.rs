//! Build script to embed the sample dictionary
//!
//! Turns the files under `data/` into const slices so the binary works
//! without any word list on disk.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_line_list(
        "data/sample_words.txt",
        &Path::new(&out_dir).join("sample_words.rs"),
        "SAMPLE_WORDS",
        "Sample dictionary, one word per entry",
    );

    generate_line_list(
        "data/sample_frequencies.txt",
        &Path::new(&out_dir).join("sample_frequencies.rs"),
        "SAMPLE_FREQUENCIES",
        "Sample frequency table rows, header included",
    );

    println!("cargo:rerun-if-changed=data/sample_words.txt");
    println!("cargo:rerun-if-changed=data/sample_frequencies.txt");
}

fn generate_line_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();
    for line in &lines {
        writeln!(output, "    {line:?},").unwrap();
    }
    writeln!(output, "];").unwrap();
}
