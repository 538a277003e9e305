//! Sample word lists compiled into the binary

include!(concat!(env!("OUT_DIR"), "/sample_words.rs"));
include!(concat!(env!("OUT_DIR"), "/sample_frequencies.rs"));
