#[path = "shared/constants.rs"]
mod constants;
use constants::{COMPRESSED_LEXICON_FILE_NAME, LEXICON_CSV_FILE_PATH};

use flate2::write::GzEncoder;
use flate2::Compression;
use std::env;
use std::fs::File;
use std::io::{self};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Ensure that Cargo re-runs the build script if the input file changes
    println!("cargo:rerun-if-changed={}", LEXICON_CSV_FILE_PATH.display());

    // Compressed output lands in OUT_DIR so the library can `include_bytes!` it
    let output_path = PathBuf::from(env::var("OUT_DIR")?).join(COMPRESSED_LEXICON_FILE_NAME);

    // Open the input CSV file
    let mut input_file = File::open(&*LEXICON_CSV_FILE_PATH)?;
    let output_file = File::create(&output_path)?;

    // Compress the data with GzEncoder
    let mut encoder = GzEncoder::new(output_file, Compression::default());
    io::copy(&mut input_file, &mut encoder)?;
    encoder.finish()?;

    Ok(())
}
