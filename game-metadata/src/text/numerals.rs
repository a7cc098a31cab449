//! Arabic/Roman numeral conversion for search fallbacks.

const NUMERALS: [(u64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Convert a number to Roman numerals with the greedy subtractive table.
///
/// `0` has no Roman form and yields an empty string. There is no upper
/// bound: values past 3999 simply repeat `M`.
pub fn to_roman(mut n: u64) -> String {
    let mut roman = String::new();
    for &(value, symbol) in NUMERALS.iter() {
        while n >= value {
            roman.push_str(symbol);
            n -= value;
        }
    }
    roman
}

/// Read a Roman numeral back into a number.
///
/// Returns `None` for empty input or any character outside `IVXLCDM`.
/// Non-canonical forms such as `IIII` are accepted.
pub fn from_roman(roman: &str) -> Option<u64> {
    if roman.is_empty() {
        return None;
    }

    let values = roman
        .chars()
        .map(|c| match c.to_ascii_uppercase() {
            'I' => Some(1),
            'V' => Some(5),
            'X' => Some(10),
            'L' => Some(50),
            'C' => Some(100),
            'D' => Some(500),
            'M' => Some(1000),
            _ => None,
        })
        .collect::<Option<Vec<i64>>>()?;

    let mut total: i64 = 0;
    for (i, &value) in values.iter().enumerate() {
        match values.get(i + 1) {
            Some(&next) if next > value => total -= value,
            _ => total += value,
        }
    }
    u64::try_from(total).ok()
}

/// Rewrite a trailing run of digits as a Roman numeral.
///
/// `"Final Fantasy 7"` becomes `"Final Fantasy VII"`. Returns `None` when
/// the name does not end in digits, the number is above `max_value`, or the
/// number has no Roman form (zero).
pub fn romanize_trailing_number(name: &str, max_value: u64) -> Option<String> {
    let prefix = name.trim_end_matches(|c: char| c.is_ascii_digit());
    let digits = &name[prefix.len()..];
    if digits.is_empty() {
        return None;
    }

    let number: u64 = digits.parse().ok()?;
    if number > max_value {
        return None;
    }

    let roman = to_roman(number);
    if roman.is_empty() {
        return None;
    }

    Some(format!("{prefix}{roman}"))
}
