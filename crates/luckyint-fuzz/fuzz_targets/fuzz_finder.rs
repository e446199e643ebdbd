#![no_main]
use libfuzzer_sys::fuzz_target;

use luckyint_core::{FrequencyTable, find_largest_lucky_integer};

fuzz_target!(|data: &[u8]| {
    // Small signed values keep lucky hits frequent.
    let values: Vec<i64> = data.iter().map(|&b| i64::from(b as i8) % 12).collect();

    let result = find_largest_lucky_integer(&values);
    let mut reversed = values.clone();
    reversed.reverse();
    assert_eq!(result, find_largest_lucky_integer(&reversed));

    let table = FrequencyTable::from_values(&values);
    assert_eq!(table.total(), values.len());
    assert_eq!(table.lucky_values().last().copied().unwrap_or(-1), result);
});
