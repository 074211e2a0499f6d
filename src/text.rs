/// Concatenate two string slices into an owned string
pub fn concat(a: &str, b: &str) -> String {
    format!("{}{}", a, b)
}

/// Uppercase a string slice
pub fn to_upper(s: &str) -> String {
    s.to_uppercase()
}
