#![no_main]
use libfuzzer_sys::fuzz_target;

use luckyint_core::{ParseMode, find_largest_lucky_integer, parse_line};

fuzz_target!(|data: &[u8]| {
    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };

    let lenient = parse_line(line, ParseMode::Lenient).expect("lenient parsing never fails");
    match parse_line(line, ParseMode::Strict) {
        Ok(strict) => {
            assert!(lenient.skipped.is_empty());
            assert_eq!(strict.values, lenient.values);
        }
        Err(err) => assert!(lenient.skipped.iter().any(|s| s.index == err.index())),
    }

    let result = find_largest_lucky_integer(&lenient.values);
    if result != -1 {
        assert!(result > 0);
        assert_eq!(
            lenient.values.iter().filter(|&&v| v == result).count() as i64,
            result
        );
    }
});
