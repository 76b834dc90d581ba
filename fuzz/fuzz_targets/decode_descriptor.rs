#![no_main]

use libfuzzer_sys::fuzz_target;
use psdesc::Descriptor;

fuzz_target!(|data: &[u8]| {
    let first = Descriptor::decode(data);
    let second = Descriptor::decode(data);

    // Decoding is a pure function of the input.
    match (first, second) {
        (Ok(first), Ok(second)) => assert_eq!(first, second),
        (Err(_), Err(_)) => { }
        _ => panic!("nondeterministic decode"),
    }
});
