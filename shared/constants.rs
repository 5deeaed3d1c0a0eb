use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

// Lazy-initialized static variables
pub static LEXICON_CSV_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("data", "lexicon.csv"));

pub static COMPRESSED_LEXICON_FILE_NAME: &str = "lexicon.csv.gz";
