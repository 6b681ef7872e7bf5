use crate::model::form::FormInput;
use crate::model::selection::Selection;
use crate::render::{escape_html, Projection};

/// Read/write accessors the sync logic needs from whatever displays the albums.
pub trait AlbumView {
    fn form_fields(&self) -> FormInput;
    fn reset_form(&mut self);
    fn show_response(&mut self, text: &str);
    /// Replaces the table region wholesale and centers it.
    fn show_table(&mut self, projection: &Projection);
    fn selection(&self) -> Selection;
    fn alert(&mut self, message: &str);
}

/// In-memory document: the album form, the response line and the table region.
#[derive(Debug, Default)]
pub struct Page {
    form: FormInput,
    response: String,
    table: Option<Projection>,
    checked: Vec<bool>,
    centered: bool,
    alerts: Vec<String>,
}

impl Page {
    pub fn new() -> Self {
        Page::default()
    }

    pub fn set_field<N: Into<String>, V: Into<String>>(&mut self, name: N, value: V) {
        self.form.set(name, value);
    }

    pub fn fill_form(&mut self, form: FormInput) {
        self.form = form;
    }

    /// Checks the row carrying `id`; false when the current table has no such row.
    pub fn check(&mut self, id: &str) -> bool {
        self.set_checked(id, true)
    }

    pub fn uncheck(&mut self, id: &str) -> bool {
        self.set_checked(id, false)
    }

    fn set_checked(&mut self, id: &str, checked: bool) -> bool {
        let table = match &self.table {
            Some(table) => table,
            None => return false,
        };
        let mut found = false;
        for (i, row_id) in table.ids.iter().enumerate() {
            if row_id == id {
                self.checked[i] = checked;
                found = true;
            }
        }
        found
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn table(&self) -> Option<&Projection> {
        self.table.as_ref()
    }

    pub fn is_centered(&self) -> bool {
        self.centered
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    pub fn to_html(&self) -> String {
        let style = if self.centered {
            " style=\"text-align: center\""
        } else {
            ""
        };
        let table = self.table.as_ref().map(|t| t.html.as_str()).unwrap_or("");

        format!(
            "<p id=\"response\">{}</p>\n<div id=\"json-response\"{}>\n{}\n</div>\n",
            escape_html(&self.response),
            style,
            table
        )
    }
}

impl AlbumView for Page {
    fn form_fields(&self) -> FormInput {
        self.form.clone()
    }

    fn reset_form(&mut self) {
        self.form = FormInput::new();
    }

    fn show_response(&mut self, text: &str) {
        self.response = text.to_owned();
    }

    fn show_table(&mut self, projection: &Projection) {
        self.checked = vec![false; projection.ids.len()];
        self.table = Some(projection.clone());
        self.centered = true;
    }

    fn selection(&self) -> Selection {
        match &self.table {
            Some(table) => table
                .ids
                .iter()
                .zip(self.checked.iter())
                .filter(|(_, checked)| **checked)
                .map(|(id, _)| id.clone())
                .collect(),
            None => Selection::new(),
        }
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projection(ids: &[&str]) -> Projection {
        Projection {
            html: "<table></table>".to_owned(),
            ids: ids.iter().map(|id| id.to_string()).collect(),
        }
    }

    #[test]
    fn nothing_checkable_before_first_table() {
        let mut page = Page::new();

        assert!(!page.check("1"));
        assert!(page.selection().is_empty());
    }

    #[test]
    fn selection_follows_row_order_not_click_order() {
        let mut page = Page::new();
        page.show_table(&projection(&["1", "2", "3"]));

        assert!(page.check("3"));
        assert!(page.check("1"));
        assert!(!page.check("9"));

        assert_eq!(page.selection().ids(), &["1".to_owned(), "3".to_owned()][..]);
    }

    #[test]
    fn new_table_clears_checks_and_centers() {
        let mut page = Page::new();
        page.show_table(&projection(&["1", "2"]));
        page.check("2");
        page.show_table(&projection(&["1", "2"]));

        assert!(page.selection().is_empty());
        assert!(page.is_centered());
    }

    #[test]
    fn uncheck_removes_from_selection() {
        let mut page = Page::new();
        page.show_table(&projection(&["1", "2"]));
        page.check("1");
        page.check("2");
        page.uncheck("1");

        assert_eq!(page.selection().ids(), &["2".to_owned()][..]);
    }

    #[test]
    fn reset_form_clears_fields() {
        let mut page = Page::new();
        page.set_field("title", "Jeru");
        assert_eq!(page.form_fields().get("title"), Some("Jeru"));

        page.reset_form();
        assert!(page.form_fields().is_empty());
    }

    #[test]
    fn html_document_carries_regions() {
        let mut page = Page::new();
        page.show_response("New Album Created: {\"title\":\"<x>\"}");
        page.show_table(&projection(&[]));

        let html = page.to_html();
        assert!(html.contains("<p id=\"response\">New Album Created: {&quot;title&quot;:&quot;&lt;x&gt;&quot;}</p>"));
        assert!(html.contains("<div id=\"json-response\" style=\"text-align: center\">"));
        assert!(html.contains("<table></table>"));
    }
}
