use dark_triad::{analyze, RawOptions};
use log::error;
use std::io::{self, Read};

fn main() {
    // Initialize the logger
    env_logger::init();

    // Options are an optional JSON object, e.g. '{"output": "full", "sortBy": "weight"}'
    let raw_options = match std::env::args().nth(1) {
        Some(json) => match RawOptions::from_json_str(&json) {
            Ok(raw_options) => raw_options,
            Err(e) => {
                error!("Failed to parse options JSON: {}", e);
                std::process::exit(1);
            }
        },
        None => RawOptions::default(),
    };

    // Invalid values are logged as warnings while parsing
    let options = raw_options.parse().options;

    // Read the input text from stdin
    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        error!("Failed to read from stdin: {}", e);
        std::process::exit(1);
    }

    match analyze(input.as_str(), &options) {
        Ok(Some(result)) => println!("{}", result.to_json()),
        Ok(None) => println!("null"),
        Err(e) => {
            error!("Error analyzing text: {}", e);
            std::process::exit(1);
        }
    }
}
