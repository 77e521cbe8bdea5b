/// Number of digits in a complete Spidr PIN.
pub const PIN_DIGITS: usize = 16;

const GROUP_SIZE: usize = 4;

/// Keep only the ASCII digits of `value`.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

pub fn digit_count(value: &str) -> usize {
    digits_only(value).len()
}

/// Canonical display form of a PIN as typed so far.
///
/// Non-digits are dropped, input past 16 digits is ignored, and the digits are
/// grouped in fours separated by dashes (`1234-5678-9`). The output never ends
/// with a dash, and formatting an already formatted value returns it unchanged.
pub fn format_spidr_pin(raw: &str) -> String {
    let digits: Vec<char> = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(PIN_DIGITS)
        .collect();

    digits
        .chunks(GROUP_SIZE)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<String>>()
        .join("-")
}
