use crate::objects::Object;
use std::collections::HashMap;

/// A PDF dictionary with string keys (written without the leading `/`).
#[derive(Debug, Clone, PartialEq)]
pub struct Dictionary {
    entries: HashMap<String, Object>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Object>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Object> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Object)> {
        self.entries.iter()
    }

    /// Value of `key` if it is a `/Name`.
    pub fn get_name(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Object::as_name)
    }

    pub fn get_dict(&self, key: &str) -> Option<&Dictionary> {
        self.get(key).and_then(Object::as_dict)
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<(String, Object)> for Dictionary {
    fn from_iter<T: IntoIterator<Item = (String, Object)>>(iter: T) -> Self {
        let mut dict = Dictionary::new();
        for (key, value) in iter {
            dict.set(key, value);
        }
        dict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_dictionary() {
        let dict = Dictionary::new();
        assert!(dict.is_empty());
        assert_eq!(dict.len(), 0);
    }

    #[test]
    fn test_set_and_get_names() {
        let mut dict = Dictionary::new();
        dict.set("Type", Object::name("Font"));
        dict.set("Subtype", Object::name("Type1"));

        assert_eq!(dict.get("Type"), Some(&Object::Name("Font".to_string())));
        assert_eq!(dict.get_name("Subtype"), Some("Type1"));
        assert_eq!(dict.get("BaseFont"), None);
        assert_eq!(dict.get_name("BaseFont"), None);
    }

    #[test]
    fn test_get_name_rejects_other_types() {
        let mut dict = Dictionary::new();
        dict.set("FirstChar", 32);
        dict.set("Title", "Courier");

        assert_eq!(dict.get_name("FirstChar"), None);
        assert_eq!(dict.get_name("Title"), None);
    }

    #[test]
    fn test_set_overwrites() {
        let mut dict = Dictionary::new();
        dict.set("Encoding", Object::name("WinAnsiEncoding"));
        dict.set("Encoding", Object::name("MacRomanEncoding"));

        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get_name("Encoding"), Some("MacRomanEncoding"));
    }

    #[test]
    fn test_keys_and_iter() {
        let mut dict = Dictionary::new();
        dict.set("Type", Object::name("Font"));
        dict.set("BaseFont", Object::name("Courier"));

        let mut keys: Vec<_> = dict.keys().collect();
        keys.sort();
        assert_eq!(keys, vec!["BaseFont", "Type"]);
        assert_eq!(dict.iter().count(), 2);
        assert!(dict.contains_key("BaseFont"));
        assert!(!dict.contains_key("Encoding"));
    }

    #[test]
    fn test_nested_encoding_dictionary() {
        let mut encoding = Dictionary::new();
        encoding.set("BaseEncoding", Object::name("WinAnsiEncoding"));

        let mut font = Dictionary::new();
        font.set("Encoding", encoding);

        let base = font
            .get_dict("Encoding")
            .and_then(|enc| enc.get_name("BaseEncoding"));
        assert_eq!(base, Some("WinAnsiEncoding"));
        assert!(font.get_dict("Missing").is_none());
    }

    #[test]
    fn test_structural_equality_ignores_insertion_order() {
        let mut a = Dictionary::new();
        a.set("Type", Object::name("Font"));
        a.set("Subtype", Object::name("Type1"));

        let b: Dictionary = vec![
            ("Subtype".to_string(), Object::name("Type1")),
            ("Type".to_string(), Object::name("Font")),
        ]
        .into_iter()
        .collect();

        assert_eq!(a, b);
    }
}
