use super::supplier::Supplier;
use serde_json::Value;

/// A read-only view of one JSON object inside the rider.
///
/// Every accessor takes a list of key aliases and is total: a missing key, a
/// `null`, or a value of the wrong type reads as absent. A view over
/// something that is not an object behaves like an empty object.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fields<'a>(Option<&'a Value>);

impl<'a> Fields<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self(value.is_object().then_some(value))
    }

    /// Exact key match first, then case-insensitive.
    pub fn raw(&self, aliases: &[&str]) -> Option<&'a Value> {
        let map = self.0?.as_object()?;
        aliases
            .iter()
            .find_map(|key| map.get(*key))
            .or_else(|| {
                aliases.iter().find_map(|alias| {
                    map.iter()
                        .find(|(key, _)| key.eq_ignore_ascii_case(alias))
                        .map(|(_, v)| v)
                })
            })
            .filter(|v| !v.is_null())
    }

    pub fn get(&self, aliases: &[&str]) -> Fields<'a> {
        self.raw(aliases).map(Fields::new).unwrap_or_default()
    }

    /// Trimmed, non-empty text. Numbers are accepted and printed.
    pub fn text(&self, aliases: &[&str]) -> Option<String> {
        match self.raw(aliases)? {
            Value::String(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn flag(&self, aliases: &[&str]) -> bool {
        match self.raw(aliases) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => {
                matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "yes" | "sim")
            }
            _ => false,
        }
    }

    pub fn array(&self, aliases: &[&str]) -> &'a [Value] {
        match self.raw(aliases) {
            Some(Value::Array(items)) => items.as_slice(),
            _ => &[],
        }
    }

    /// A positive count; zero, negatives and non-numeric text are "not set".
    pub fn quantity(&self, aliases: &[&str]) -> Option<u32> {
        let n = match self.raw(aliases)? {
            Value::Number(n) => n.as_f64()?,
            Value::String(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        (n.is_finite() && n >= 1.0).then(|| n.min(u32::MAX as f64) as u32)
    }

    pub fn supplier(&self, aliases: &[&str]) -> Supplier {
        self.raw(aliases).map(Supplier::from_value).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn aliases_resolve_in_order_then_case_insensitively() {
        let value = json!({ "Artista": "Banda", "name": "" });
        let fields = Fields::new(&value);
        assert_eq!(fields.text(&["artistName", "artista"]).as_deref(), Some("Banda"));
        assert_eq!(fields.text(&["name"]), None);
    }

    #[test]
    fn wrong_types_read_as_absent() {
        let value = json!({ "inputs": "not an array", "qty": "abc", "flag": 1, "obj": [1] });
        let fields = Fields::new(&value);
        assert!(fields.array(&["inputs"]).is_empty());
        assert_eq!(fields.quantity(&["qty"]), None);
        assert!(!fields.flag(&["flag"]));
        assert_eq!(fields.get(&["obj"]).text(&["0"]), None);
    }

    #[test]
    fn quantities_accept_numeric_strings() {
        let value = json!({ "a": "4", "b": 0, "c": -2, "d": 3 });
        let fields = Fields::new(&value);
        assert_eq!(fields.quantity(&["a"]), Some(4));
        assert_eq!(fields.quantity(&["b"]), None);
        assert_eq!(fields.quantity(&["c"]), None);
        assert_eq!(fields.quantity(&["d"]), Some(3));
    }
}
