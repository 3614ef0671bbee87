use crate::objects::Dictionary;

/// A node of the PDF object graph.
///
/// `Indirect` wraps a node that the document writer must store as a
/// top-level object and reference by id instead of inlining it.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Null,
    Boolean(bool),
    Integer(i64),
    Real(f64),
    String(String),
    Name(String),
    Array(Vec<Object>),
    Dictionary(Dictionary),
    Indirect(Box<Object>),
}

impl Object {
    /// Build a `/Name` value.
    pub fn name(name: impl Into<String>) -> Self {
        Object::Name(name.into())
    }

    /// Mark `object` for indirect storage.
    pub fn indirect(object: impl Into<Object>) -> Self {
        Object::Indirect(Box::new(object.into()))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Object::Null)
    }

    pub fn is_indirect(&self) -> bool {
        matches!(self, Object::Indirect(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Object::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Object::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_real(&self) -> Option<f64> {
        match self {
            Object::Real(f) => Some(*f),
            Object::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            Object::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Object::Name(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Object>> {
        match self {
            Object::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&Dictionary> {
        match self {
            Object::Dictionary(dict) => Some(dict),
            _ => None,
        }
    }

    /// The wrapped node of an `Indirect` object.
    pub fn as_indirect(&self) -> Option<&Object> {
        match self {
            Object::Indirect(inner) => Some(inner),
            _ => None,
        }
    }

    /// Look through an `Indirect` wrapper, if any.
    pub fn resolve(&self) -> &Object {
        match self {
            Object::Indirect(inner) => inner.resolve(),
            other => other,
        }
    }
}

impl From<bool> for Object {
    fn from(b: bool) -> Self {
        Object::Boolean(b)
    }
}

impl From<i32> for Object {
    fn from(i: i32) -> Self {
        Object::Integer(i as i64)
    }
}

impl From<i64> for Object {
    fn from(i: i64) -> Self {
        Object::Integer(i)
    }
}

impl From<u8> for Object {
    fn from(i: u8) -> Self {
        Object::Integer(i as i64)
    }
}

impl From<f64> for Object {
    fn from(f: f64) -> Self {
        Object::Real(f)
    }
}

impl From<String> for Object {
    fn from(s: String) -> Self {
        Object::String(s)
    }
}

impl From<&str> for Object {
    fn from(s: &str) -> Self {
        Object::String(s.to_string())
    }
}

impl From<Vec<Object>> for Object {
    fn from(v: Vec<Object>) -> Self {
        Object::Array(v)
    }
}

impl From<Dictionary> for Object {
    fn from(d: Dictionary) -> Self {
        Object::Dictionary(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_constructor() {
        let name = Object::name("Font");
        assert_eq!(name, Object::Name("Font".to_string()));
        assert_eq!(name.as_name(), Some("Font"));
        assert_eq!(name.as_string(), None);
    }

    #[test]
    fn test_str_converts_to_string_not_name() {
        let obj: Object = "Font".into();
        assert_eq!(obj.as_string(), Some("Font"));
        assert_eq!(obj.as_name(), None);
    }

    #[test]
    fn test_indirect_wraps_and_resolves() {
        let mut dict = Dictionary::new();
        dict.set("Type", Object::name("Font"));
        let obj = Object::indirect(dict.clone());

        assert!(obj.is_indirect());
        assert_eq!(obj.as_indirect(), Some(&Object::Dictionary(dict.clone())));
        assert_eq!(obj.resolve().as_dict(), Some(&dict));
        assert!(obj.as_dict().is_none());
    }

    #[test]
    fn test_resolve_direct_object_is_identity() {
        let obj = Object::Integer(7);
        assert_eq!(obj.resolve(), &Object::Integer(7));
        assert!(!obj.is_indirect());
    }

    #[test]
    fn test_numeric_accessors() {
        assert_eq!(Object::from(42).as_integer(), Some(42));
        assert_eq!(Object::from(200u8).as_integer(), Some(200));
        assert_eq!(Object::from(42).as_real(), Some(42.0));
        assert_eq!(Object::from(0.5).as_real(), Some(0.5));
        assert_eq!(Object::from(0.5).as_integer(), None);
    }

    #[test]
    fn test_array_and_bool() {
        let arr = Object::from(vec![Object::from(true), Object::Null]);
        let items = arr.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].as_bool(), Some(true));
        assert!(items[1].is_null());
    }
}
