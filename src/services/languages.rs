//! Language name lookup table
//!
//! Incoming rows carry languages as English names ("Spanish"); the catalog
//! stores ISO 639-2 bibliographic codes ("spa").

use once_cell::sync::Lazy;
use std::collections::HashMap;

static ENGLISH_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("arabic", "ara"),
        ("chinese", "chi"),
        ("czech", "cze"),
        ("danish", "dan"),
        ("dutch", "dut"),
        ("english", "eng"),
        ("finnish", "fin"),
        ("french", "fre"),
        ("german", "ger"),
        ("greek", "gre"),
        ("hebrew", "heb"),
        ("hindi", "hin"),
        ("hungarian", "hun"),
        ("italian", "ita"),
        ("japanese", "jpn"),
        ("korean", "kor"),
        ("latin", "lat"),
        ("norwegian", "nor"),
        ("polish", "pol"),
        ("portuguese", "por"),
        ("russian", "rus"),
        ("spanish", "spa"),
        ("swedish", "swe"),
        ("turkish", "tur"),
        ("ukrainian", "ukr"),
        ("vietnamese", "vie"),
    ])
});

/// Convert an English language name to its ISO 639-2 code
pub fn iso639_2_for_name(name: &str) -> Option<&'static str> {
    ENGLISH_NAMES.get(name.trim().to_lowercase().as_str()).copied()
}
