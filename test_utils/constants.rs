/// A small lexicon with hand-checkable weights, shaped like `data/lexicon.csv`.
pub const TOY_LEXICON_CSV: &str = "category,term,weight
triad,_intercept,0.5
triad,note,-34.8
triad,america,-49.2
triad,capital,-133.9
narcissism,_intercept,0.25
narcissism,note,2.0
narcissism,big deal,1.5
narcissism,look at me,3.0
narcissism,favorite,0.8
machiavellianism,_intercept,-0.1
machiavellianism,capital,0.75
psychopathy,_intercept,0.0
psychopathy,america,-1.25
";

pub const TEST_FILES_DIRECTORY: &str = "tests/test_files";

pub const FLOAT_TOLERANCE: f64 = 1e-9;
