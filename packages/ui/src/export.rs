//! CSV export of the "all submissions" and "authorized view" collections.
//!
//! Fields are quoted per RFC 4180 when they contain a comma, a double quote,
//! CR or LF; embedded quotes are doubled. Lines are joined with `\n`.

use std::borrow::Cow;

use store::models::format_timestamp;
use store::InformationRecord;

pub const HEADER: [&str; 7] = [
    "Date",
    "Utilisateur",
    "BU",
    "Type",
    "Laboratoire",
    "Produit concurrent",
    "Commentaire",
];

pub const EMPTY_EXPORT_MESSAGE: &str = "Aucune donnée à exporter";

/// Which listing is exported; decides the file name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportKind {
    AllSubmissions,
    AuthorizedView,
}

impl ExportKind {
    /// File name for an export made on `iso_date` (`YYYY-MM-DD`).
    pub fn file_name(self, iso_date: &str) -> String {
        match self {
            ExportKind::AllSubmissions => format!("informations_{iso_date}.csv"),
            ExportKind::AuthorizedView => format!("informations_autorisees_{iso_date}.csv"),
        }
    }
}

pub fn escape_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

fn push_line<'a>(out: &mut String, fields: impl IntoIterator<Item = &'a str>) {
    if !out.is_empty() {
        out.push('\n');
    }
    let line = fields
        .into_iter()
        .map(escape_field)
        .collect::<Vec<_>>()
        .join(",");
    out.push_str(&line);
}

/// CSV document for `records`, or `None` when there is nothing to export.
pub fn records_to_csv(records: &[&InformationRecord]) -> Option<String> {
    if records.is_empty() {
        return None;
    }
    let mut out = String::new();
    push_line(&mut out, HEADER);
    for record in records {
        let date = format_timestamp(&record.created_at);
        push_line(
            &mut out,
            [
                date.as_str(),
                record.submitter_email().unwrap_or("Inconnu"),
                record.business_unit.as_str(),
                record.information_type.as_str(),
                record.lab(),
                record.competing_product(),
                record.comment(),
            ],
        );
    }
    Some(out)
}

/// Hand the document to the browser as a file download.
#[cfg(target_arch = "wasm32")]
pub fn download_csv(file_name: &str, content: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(content));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8;");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| format!("{e:?}"))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("{e:?}"))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("{e:?}"))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "not an anchor element")?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(|e| format!("{e:?}"))?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn download_csv(file_name: &str, content: &str) -> Result<(), String> {
    let dir = dirs::download_dir()
        .or_else(dirs::home_dir)
        .ok_or("no download directory")?;
    std::fs::write(dir.join(file_name), content).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::Submitter;

    fn record(comment: Option<&str>, email: Option<&str>) -> InformationRecord {
        InformationRecord {
            id: 1,
            business_unit: "CVS".into(),
            information_type: "Produit concurrent".into(),
            lab: Some("SANOFI".into()),
            competing_product: None,
            comment: comment.map(Into::into),
            created_at: "2024-05-02T09:15:00Z".into(),
            info_date: None,
            submitted_by: email.map(|e| Submitter { email: e.into() }),
        }
    }

    #[test]
    fn test_escape_field() {
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_csv_document() {
        let a = record(Some("prix en baisse, stock faible"), Some("d@labo.fr"));
        let b = record(None, None);
        let csv = records_to_csv(&[&a, &b]).unwrap();
        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(
            lines[0],
            "Date,Utilisateur,BU,Type,Laboratoire,Produit concurrent,Commentaire"
        );
        assert_eq!(
            lines[1],
            "02/05/2024 09:15,d@labo.fr,CVS,Produit concurrent,SANOFI,,\"prix en baisse, stock faible\""
        );
        assert_eq!(lines[2], "02/05/2024 09:15,Inconnu,CVS,Produit concurrent,SANOFI,,");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_empty_export() {
        assert_eq!(records_to_csv(&[]), None);
    }

    #[test]
    fn test_file_names() {
        assert_eq!(
            ExportKind::AllSubmissions.file_name("2024-05-02"),
            "informations_2024-05-02.csv"
        );
        assert_eq!(
            ExportKind::AuthorizedView.file_name("2024-05-02"),
            "informations_autorisees_2024-05-02.csv"
        );
    }
}
