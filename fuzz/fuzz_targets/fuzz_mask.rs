//! Fuzz target for detect-then-mask.
//!
//! Masking the detector's own output must never panic and must remove every
//! detected span.

#![no_main]

use libfuzzer_sys::fuzz_target;
use mg_detect::{mask, SpanDetector};

fuzz_target!(|data: &str| {
    let detector = SpanDetector::new();
    let entities = detector.detect(data);
    let _ = mask(data, &entities);
});
