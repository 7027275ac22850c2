/// One table name per line; surrounding whitespace and blank lines are ignored.
/// Order and duplicates are preserved.
pub fn parse_table_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
