/// Collapse empty optional text to absent so forms never persist `""` where
/// the column means "not set". Applied once, at the repository boundary.
pub fn empty_to_none(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
