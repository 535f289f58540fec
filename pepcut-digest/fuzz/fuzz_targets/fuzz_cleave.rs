#![no_main]
use libfuzzer_sys::fuzz_target;
use pepcut_digest::{reconstruct_from_ordered, trypsin_cleave, Protease};

fuzz_target!(|data: &str| {
    let fragments = trypsin_cleave(data);
    assert_eq!(reconstruct_from_ordered(&fragments), data);
    let _ = Protease::chymotrypsin().validate(&fragments);
});
