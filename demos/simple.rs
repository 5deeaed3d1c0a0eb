use dark_triad::{analyze, AnalysisOptions, Output, SortBy};

fn main() {
    env_logger::init();

    let text = "I deserve to win. Whatever, I don't care about your feelings.";

    let options = AnalysisOptions {
        output: Output::Full,
        sort_by: SortBy::Weight,
        ..Default::default()
    };

    let result = analyze(text, &options).unwrap();

    println!("Dark triad analysis for the given text \"{}\"", text);
    match result {
        Some(result) => println!("{:#}", result.to_json()),
        None => println!("Nothing to score"),
    }
}
