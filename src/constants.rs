/// Reserved lexicon term which carries a trait's intercept instead of a word weight.
pub const INTERCEPT_TERM: &str = "_intercept";

/// Gzip-compressed copy of `data/lexicon.csv`, produced by the build script.
#[cfg(feature = "embed-bytes")]
pub const COMPRESSED_LEXICON_BYTES: &[u8] =
    include_bytes!(concat!(env!("OUT_DIR"), "/lexicon.csv.gz"));

/// British to American spellings applied when the `GB` locale is requested.
pub const GB_TO_US_SPELLINGS: &[(&str, &str)] = &[
    ("analyse", "analyze"),
    ("analysed", "analyzed"),
    ("apologise", "apologize"),
    ("apologised", "apologized"),
    ("behaviour", "behavior"),
    ("behaviours", "behaviors"),
    ("cancelled", "canceled"),
    ("centre", "center"),
    ("colour", "color"),
    ("colours", "colors"),
    ("criticise", "criticize"),
    ("defence", "defense"),
    ("favour", "favor"),
    ("favourite", "favorite"),
    ("grey", "gray"),
    ("honour", "honor"),
    ("humour", "humor"),
    ("jewellery", "jewelry"),
    ("labour", "labor"),
    ("licence", "license"),
    ("manoeuvre", "maneuver"),
    ("mum", "mom"),
    ("neighbour", "neighbor"),
    ("offence", "offense"),
    ("organise", "organize"),
    ("organised", "organized"),
    ("practise", "practice"),
    ("programme", "program"),
    ("realise", "realize"),
    ("realised", "realized"),
    ("recognise", "recognize"),
    ("rumour", "rumor"),
    ("sceptical", "skeptical"),
    ("theatre", "theater"),
    ("travelled", "traveled"),
    ("travelling", "traveling"),
];
