#![no_main]

use libfuzzer_sys::fuzz_target;

use fibalgo_host::{unsigned_arg, HostValue};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let arg = HostValue::parse_literal(text);
    // Accepted values must be exactly the decimal integers in u32 range
    if let Ok(n) = unsigned_arg("fuzz", std::slice::from_ref(&arg)) {
        let parsed = text.trim().parse::<i128>().ok();
        assert_eq!(parsed, Some(i128::from(n)), "accepted {text:?} as {n}");
    }
});
