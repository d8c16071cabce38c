use gorod_core::{LabelSet, ReportRow};
use quick_xml::escape::escape;

/// Narrative fields of one report, already trimmed.
#[derive(Debug, Clone, Default)]
pub struct DescriptionFields {
    pub address: String,
    pub object_name: String,
    pub topic: String,
    pub text: String,
    pub photo_links: Vec<String>,
}

impl DescriptionFields {
    pub fn from_row(row: &ReportRow) -> Self {
        Self {
            address: row.address.trimmed(),
            object_name: row.object_name.trimmed(),
            topic: row.topic.trimmed(),
            text: row.message_text.trimmed(),
            photo_links: row.photo_links(),
        }
    }
}

/// HTML fragment for a placemark balloon. Empty fields are left out entirely.
/// The result is meant for a CDATA section, so it is escaped here once and
/// never again by the XML writer.
pub fn build_description(fields: &DescriptionFields, labels: LabelSet) -> String {
    let mut parts: Vec<String> = Vec::new();

    for (label, value) in [
        (labels.address(), &fields.address),
        (labels.object(), &fields.object_name),
        (labels.topic(), &fields.topic),
        (labels.text(), &fields.text),
    ] {
        let value = value.trim();
        if !value.is_empty() {
            parts.push(format!("<b>{label}:</b> {}", escape(value)));
        }
    }

    let links: Vec<String> = fields
        .photo_links
        .iter()
        .map(|u| u.trim())
        .filter(|u| !u.is_empty())
        .enumerate()
        .map(|(i, url)| {
            format!(
                r#"<a href="{}" target="_blank">{}</a>"#,
                escape(url),
                labels.photo(i + 1)
            )
        })
        .collect();
    if !links.is_empty() {
        parts.push(format!("<b>{}:</b> {}", labels.photos(), links.join(" | ")));
    }

    parts.join("<br/>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use gorod_core::CellValue;

    #[test]
    fn all_fields_in_order() {
        let fields = DescriptionFields {
            address: "ул. Пушкина, 1".into(),
            object_name: "Дом".into(),
            topic: "Мусор".into(),
            text: "Не вывозят".into(),
            photo_links: vec!["http://a/1.jpg".into()],
        };
        assert_eq!(
            build_description(&fields, LabelSet::Russian),
            "<b>Адрес:</b> ул. Пушкина, 1<br/><b>Объект:</b> Дом<br/><b>Проблема:</b> Мусор\
             <br/><b>Текст:</b> Не вывозят<br/><b>Фото:</b> \
             <a href=\"http://a/1.jpg\" target=\"_blank\">Фото 1</a>"
        );
    }

    #[test]
    fn empty_fields_leave_no_trace() {
        let fields = DescriptionFields {
            topic: "Яма".into(),
            text: "   ".into(),
            ..Default::default()
        };
        assert_eq!(build_description(&fields, LabelSet::English), "<b>Problem:</b> Яма");
        assert_eq!(build_description(&DescriptionFields::default(), LabelSet::English), "");
    }

    #[test]
    fn values_are_html_escaped() {
        let fields = DescriptionFields {
            text: "a < b & \"c\"".into(),
            photo_links: vec!["http://x/?a=1&b=2".into()],
            ..Default::default()
        };
        let html = build_description(&fields, LabelSet::English);
        assert!(html.contains("a &lt; b &amp; &quot;c&quot;"));
        assert!(html.contains(r#"href="http://x/?a=1&amp;b=2""#));
    }

    #[test]
    fn photo_cell_with_blank_segment() {
        let row = ReportRow {
            photo_links: CellValue::from("http://a/1.jpg ; ; http://a/2.jpg"),
            ..Default::default()
        };
        let html = build_description(&DescriptionFields::from_row(&row), LabelSet::English);
        assert_eq!(
            html,
            "<b>Photos:</b> <a href=\"http://a/1.jpg\" target=\"_blank\">Photo 1</a> | \
             <a href=\"http://a/2.jpg\" target=\"_blank\">Photo 2</a>"
        );
        assert_eq!(html.matches("<a ").count(), 2);
    }

    #[test]
    fn user_text_cannot_close_cdata() {
        let fields = DescriptionFields {
            text: "]]> oops".into(),
            ..Default::default()
        };
        assert!(!build_description(&fields, LabelSet::English).contains("]]>"));
    }
}
