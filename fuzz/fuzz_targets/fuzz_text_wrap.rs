#![no_main]

use boxgrid_text::grid::{is_rectangular, line_width, to_rectangle};
use boxgrid_text::wrap::wrap;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Cap length to keep fuzzing fast.
    if text.len() > 2048 {
        return;
    }

    for max_len in [-1, 0, 1, 10, 80] {
        let wrapped = wrap(text, max_len, 0);

        if max_len > 0 {
            for line in wrapped.split('\n') {
                assert!(
                    line_width(line) <= max_len as usize,
                    "Wrapped line exceeds max_len {}: '{}'",
                    max_len,
                    line
                );
            }
        }

        let rect = to_rectangle(&wrapped);
        assert!(is_rectangular(&rect));
        assert_eq!(to_rectangle(&rect), rect);
    }
});
