pub use ecow::EcoString as ValStr;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valstr_as_hash_key() {
        use std::collections::HashMap;

        let mut map: HashMap<ValStr, ValStr> = HashMap::new();
        map.insert(ValStr::from("key"), ValStr::from("value"));

        assert_eq!(map.get(&ValStr::from("key")), Some(&ValStr::from("value")));
    }
}
