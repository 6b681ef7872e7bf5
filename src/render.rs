use crate::currency::format_price;
use crate::model::album::Album;

const HEADERS: [&str; 5] = ["Check", "ID", "Title", "Artist", "Price"];

/// Rendered album table plus the ids that own a checkbox, in row order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Projection {
    pub html: String,
    pub ids: Vec<String>,
}

impl Projection {
    pub fn row_count(&self) -> usize {
        self.ids.len()
    }
}

struct AlbumRow {
    id: String,
    title: String,
    artist: String,
    price: String,
}

impl From<&Album> for AlbumRow {
    fn from(album: &Album) -> Self {
        AlbumRow {
            id: album.id.to_string(),
            title: album.title.clone(),
            artist: album.artist.clone(),
            price: format_price(album.price.value()),
        }
    }
}

pub fn render_table(albums: &[Album]) -> Projection {
    let rows: Vec<AlbumRow> = albums.iter().map(AlbumRow::from).collect();

    let mut html = String::from("<table>\n<tr>");
    for header in HEADERS.iter() {
        html.push_str(&format!("<th>{}</th>", header));
    }
    html.push_str("</tr>\n");

    for row in &rows {
        let id = escape_html(&row.id);
        html.push_str(&format!(
            "<tr><td><input type=\"checkbox\" data-id=\"{}\"></td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            id,
            id,
            escape_html(&row.title),
            escape_html(&row.artist),
            escape_html(&row.price),
        ));
    }
    html.push_str("</table>");

    Projection {
        html,
        ids: rows.into_iter().map(|r| r.id).collect(),
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
