use json::{Map, Value};

/// Named fields of the album form at submit time, in form order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormInput {
    fields: Vec<(String, String)>,
}

impl FormInput {
    pub fn new() -> Self {
        FormInput::default()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn push<N: Into<String>, V: Into<String>>(&mut self, name: N, value: V) {
        self.fields.push((name.into(), value.into()));
    }

    /// Replaces the value of an existing field, or appends a new one.
    pub fn set<N: Into<String>, V: Into<String>>(&mut self, name: N, value: V) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(field) => field.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Parses `name=value` pairs; the value may be empty or contain '='.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut form = FormInput::new();
        for pair in pairs {
            match pair.split_once('=') {
                Some((name, value)) if !name.trim().is_empty() => {
                    form.push(name.trim(), value)
                }
                _ => return Err(format!("field '{}' is not in name=value form", pair)),
            }
        }
        Ok(form)
    }

    /// Request body of a create: a flat object of strings, later duplicates winning.
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        for (name, value) in &self.fields {
            object.insert(name.clone(), Value::String(value.clone()));
        }
        Value::Object(object)
    }
}
