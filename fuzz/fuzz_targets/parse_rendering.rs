#![no_main]

use libfuzzer_sys::fuzz_target;

// the round-trip parser must never panic; whatever it accepts must agree
// with its own rendering
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(msg) = replay::parse_rendering(text) {
        let rendered = msg.render();
        if let Ok(back) = replay::parse_rendering(&rendered) {
            assert_eq!(back, msg, "rendering of {text:?} diverged");
        }
    }
});
