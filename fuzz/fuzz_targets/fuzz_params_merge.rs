#![no_main]

use libfuzzer_sys::fuzz_target;
use solrq::{merge_all, Params};

fuzz_target!(|ops: Vec<(String, String, bool)>| {
    // The merge fold must be total and deterministic for any patch
    // sequence: same patches in, same mapping out
    let build = || {
        let mut patches = Vec::new();
        for (key, value, as_list) in &ops {
            let mut patch = Params::new();
            if *as_list {
                patch.push(key.clone(), value.clone());
            } else {
                patch.set(key.clone(), value.clone());
            }
            patches.push(patch);
        }
        merge_all(patches)
    };

    assert_eq!(build(), build());
});
