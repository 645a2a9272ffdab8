#![no_main]

use libfuzzer_sys::fuzz_target;

// dispatch must never panic on arbitrary input, and anything it does
// decode must re-encode and decode back to the same value
fuzz_target!(|data: &[u8]| {
    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };
    if let Some(msg) = message::dispatch(line) {
        let reencoded = msg.encode();
        let back = message::dispatch(&reencoded);
        assert_eq!(back.as_ref(), Some(&msg), "re-encode of {line:?} diverged");
    }
});
