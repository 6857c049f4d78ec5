use kbchat_core::normalize::{normalize_with, NormalizeOptions};

/// Departments whose name, or any name token longer than two characters,
/// occurs in `input`. Every department is checked.
pub fn mentioned_departments<'a>(input: &str, departments: &'a [String], options: NormalizeOptions) -> Vec<&'a str> {
    departments
        .iter()
        .filter(|dept| is_mentioned(input, &normalize_with(dept, options)))
        .map(String::as_str)
        .collect()
}

fn is_mentioned(input: &str, dept: &str) -> bool {
    if dept.is_empty() {
        return false;
    }
    input.contains(dept) || dept.split(' ').filter(|t| t.chars().count() > 2).any(|t| input.contains(t))
}
