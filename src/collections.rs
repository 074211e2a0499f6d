/// Append an element to a vector, returning the grown vector
pub fn append(mut items: Vec<i64>, item: i64) -> Vec<i64> {
    items.push(item);
    items
}
