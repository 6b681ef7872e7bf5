use serde::Serialize;

/// Ids of checked rows, in table order, without duplicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    ids: Vec<String>,
}

/// `{"ids": [...]}` as sent with DELETE /albums
#[derive(Debug, Serialize)]
pub struct DeleteBody<'a> {
    pub ids: &'a [String],
}

impl Selection {
    pub fn new() -> Self {
        Selection::default()
    }

    pub fn insert<S: Into<String>>(&mut self, id: S) -> bool {
        let id = id.into();
        if self.ids.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn delete_body(&self) -> DeleteBody<'_> {
        DeleteBody { ids: &self.ids }
    }
}

impl<S: Into<String>> std::iter::FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Selection::new();
        for id in iter {
            selection.insert(id);
        }
        selection
    }
}
