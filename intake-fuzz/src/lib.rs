//! Fuzzing entry points for intake-core
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_expand

pub fn fuzz_parse(data: &[u8]) {
    use intake_core::serial::ParsedSerial;

    let text = String::from_utf8_lossy(data);
    // Parse must never panic and must always rebuild the input
    if let Some(parsed) = ParsedSerial::parse(&text) {
        assert_eq!(
            format!("{}{}{}", parsed.prefix, parsed.digits, parsed.suffix),
            text
        );
        let _ = parsed.value();
    }
}

pub fn fuzz_expand(data: &[u8]) {
    use intake_core::range::expand;

    // First NUL byte splits the input into the two endpoints
    let text = String::from_utf8_lossy(data);
    let (start, end) = text.split_once('\0').unwrap_or((text.as_ref(), ""));

    if let Ok(serials) = expand(start, end) {
        assert!(!serials.is_empty());
        assert!(serials.len() <= intake_core::constants::MAX_BULK_ITEMS);
    }
}

pub fn fuzz_list(data: &[u8]) {
    use intake_core::list::parse_serial_list;

    // Try to parse - should never panic
    let _ = parse_serial_list(&String::from_utf8_lossy(data));
}
