#![no_main]

use chessvar::Uci;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(uci) = Uci::from_ascii(data) else {
        return;
    };
    if uci.from.in_bounds() && uci.to.in_bounds() {
        let roundtripped = Uci::from_ascii(uci.to_string().as_bytes()).expect("roundtrip");
        assert_eq!(uci, roundtripped);
    }
});
