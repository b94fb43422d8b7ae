//! Fuzz target for the span detector.
//!
//! Detection must never panic, and its output must keep the sortedness and
//! non-overlap invariants for arbitrary input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use mg_detect::SpanDetector;

fuzz_target!(|data: &str| {
    let detector = SpanDetector::new();
    let entities = detector.detect(data);
    for pair in entities.windows(2) {
        assert!(pair[0].start <= pair[1].start);
        assert!(pair[0].end <= pair[1].start);
    }
});
