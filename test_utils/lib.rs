use std::{fs, path::Path};

pub mod constants;
pub use constants::{FLOAT_TOLERANCE, TEST_FILES_DIRECTORY, TOY_LEXICON_CSV};

// Helper function to get the expected matches (`EXPECTED: <term> <count>`) from the text file
pub fn get_expected_matches(file_path: &Path) -> Vec<(String, usize)> {
    // Read the content of the text file
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            let expectation = line.strip_prefix("EXPECTED:")?.trim();
            let (term, count) = expectation
                .rsplit_once(' ')
                .expect("EXPECTED lines take the form `EXPECTED: <term> <count>`");

            Some((
                term.trim().to_string(),
                count.parse().expect("EXPECTED count must be an integer"),
            ))
        })
        .collect()
}

// Helper function to read a test file with its directive lines filtered out
pub fn read_filtered_text(file_path: &Path) -> String {
    let raw_text = fs::read_to_string(file_path).expect("Failed to read test file");

    // Filter out lines starting with 'EXPECTED:' or 'COMMENT:'
    raw_text
        .lines()
        .filter(|line| {
            !line.trim_start().starts_with("EXPECTED:")
                && !line.trim_start().starts_with("COMMENT:")
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Asserts that two optional scores are both absent, or both present and within
/// `FLOAT_TOLERANCE` of one another.
pub fn assert_score_eq(actual: Option<f64>, expected: Option<f64>) {
    match (actual, expected) {
        (None, None) => {}
        (Some(actual), Some(expected)) => assert!(
            (actual - expected).abs() < FLOAT_TOLERANCE,
            "Expected score {}, but got {}",
            expected,
            actual
        ),
        _ => panic!("Expected score {:?}, but got {:?}", expected, actual),
    }
}
