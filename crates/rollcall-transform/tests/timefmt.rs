//! Property tests for the time codec round-trip contract.

use proptest::prelude::*;

use rollcall_transform::{format_computational, format_display, parse_minutes};

proptest! {
    // parse -> format_computational must be a fixed point: parsing the
    // computational form again yields the same minutes and the same string.
    #[test]
    fn computational_form_is_idempotent(hours in 0u32..500, minutes in 0u32..60) {
        let raw = format!("{hours}:{minutes:02}");
        let total = parse_minutes(&raw).unwrap();
        prop_assert_eq!(total, hours * 60 + minutes);

        let computational = format_computational(total);
        let reparsed = parse_minutes(&computational).unwrap();
        prop_assert_eq!(reparsed, total);
        prop_assert_eq!(format_computational(reparsed), computational);
    }

    // The display pass re-parses the computational string; the result must
    // agree with the original minutes, with hours unpadded.
    #[test]
    fn display_pass_preserves_the_value(hours in 0u32..500, minutes in 0u32..60) {
        let computational = format_computational(hours * 60 + minutes);
        let display = format_display(&computational);
        prop_assert_eq!(display, format!("{hours}:{minutes:02}"));
    }

    // Seconds in HH:MM:SS input are truncated, never rounded up.
    #[test]
    fn seconds_are_dropped(hours in 0u32..100, minutes in 0u32..60, seconds in 0u32..60) {
        let raw = format!("{hours}:{minutes:02}:{seconds:02}");
        prop_assert_eq!(parse_minutes(&raw).unwrap(), hours * 60 + minutes);
    }
}

#[test]
fn zero_sentinels_agree() {
    assert_eq!(parse_minutes("---").unwrap(), parse_minutes("").unwrap());
    assert_eq!(parse_minutes("").unwrap(), parse_minutes("nan").unwrap());
    assert_eq!(parse_minutes("nan").unwrap(), 0);
}
