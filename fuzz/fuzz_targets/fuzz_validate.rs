#![no_main]

use libfuzzer_sys::fuzz_target;
use national_id::norway::{CustomerIdRoutine, NorwegianCustomerId};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Rejections are fine; a panic is a bug.
        for &scheme in national_id::Scheme::ALL {
            let _ = scheme.validate(s);
        }
        let _ = NorwegianCustomerId::validate_with(s, CustomerIdRoutine::Modulus11);
    }
});
