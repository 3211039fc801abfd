/// Parse a salary expectation such as `"$120,000"` into whole currency units.
///
/// Every non-digit character is dropped before parsing. Strings with no
/// digits, or digit runs that overflow `u64`, parse as 0.
pub fn parse_salary(raw: &str) -> u64 {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}
