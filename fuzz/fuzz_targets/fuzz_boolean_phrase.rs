#![no_main]

use libfuzzer_sys::fuzz_target;
use solrq::{Field, FieldKind, Restriction};

fuzz_target!(|data: &str| {
    // Phrase rendering and value escaping over arbitrary strings
    // must not panic, whatever the input contains
    let field = Field::new("fuzz", "fuzz_s", FieldKind::String);
    let _ = Restriction::equal_to(field.clone(), data).boolean_phrase();
    let _ = Restriction::any_of(field.clone(), [data, "fixed"]).boolean_phrase();
    let _ = Restriction::between(field, data, data).negated().boolean_phrase();
});
