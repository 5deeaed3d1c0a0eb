pub mod calc_lexical_value;
pub use calc_lexical_value::calc_lexical_value;

pub mod count_token_frequencies;
pub use count_token_frequencies::count_token_frequencies;

pub mod format_matches;
pub use format_matches::format_matches;

pub mod generate_ngrams;
pub use generate_ngrams::generate_ngrams;

pub mod round_to_places;
pub use round_to_places::round_to_places;

pub mod sort_matches;
pub use sort_matches::sort_matches;
