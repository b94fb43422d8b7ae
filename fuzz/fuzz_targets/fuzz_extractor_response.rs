//! Fuzz target for backend response parsing.
//!
//! The backend is uncontrolled; parsing must only ever return Ok or a parse
//! error, never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use mg_extract::strip_code_fences;

fuzz_target!(|data: &str| {
    let stripped = strip_code_fences(data);
    let _ = serde_json::from_str::<mg_extract::ExtractorOutcome>(stripped);
});
