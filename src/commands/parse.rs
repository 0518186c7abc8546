//! Input tokenization

/// Lowercases a raw input line and splits it on whitespace.
pub fn clean_input(line: &str) -> Vec<String> {
    line.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_input() {
        let cases: [(&str, &[&str]); 5] = [
            ("hello  world", &["hello", "world"]),
            ("  ", &[]),
            ("  *", &["*"]),
            (" 213              213 213 ", &["213", "213", "213"]),
            ("Explore  Canalave-City-Area\t", &["explore", "canalave-city-area"]),
        ];

        for (input, expected) in cases {
            assert_eq!(clean_input(input), expected, "input: {:?}", input);
        }
    }
}
