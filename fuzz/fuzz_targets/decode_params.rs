#![no_main]

use libfuzzer_sys::fuzz_target;
use psdesc::{Descriptor, ObjectArrayMode, Params};

fuzz_target!(|data: &[u8]| {
    // Default params are the same as defaulted explicit params.
    let plain = Descriptor::decode(data);
    let explicit = Params::default().decode(data);
    assert_eq!(plain.is_ok(), explicit.is_ok());
    if let (Ok(plain), Ok(explicit)) = (plain, explicit) {
        assert_eq!(plain, explicit);
    }

    // Tight limits and the other array mode must never panic.
    let _ = Params::default()
        .with_max_depth(4)
        .with_max_items(64)
        .decode(data);
    let _ = Params::default()
        .with_array_mode(ObjectArrayMode::Tagged)
        .decode(data);
});
