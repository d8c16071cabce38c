use std::fmt::Display;
use std::io::Write;

use gorod_core::{GorodError, Result};
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::{KmlDocument, Placemark, ICON_HREF, ICON_SCALE, KML_NAMESPACE, LABEL_SCALE};
use crate::folders::OkrugFolder;
use crate::style::DistrictStyle;

const CDATA_OPEN: &str = "<![CDATA[";
const CDATA_CLOSE: &str = "]]>";

fn xml_err(e: impl Display) -> GorodError {
    GorodError::Xml(e.to_string())
}

/// Serialize the document and put every tag on its own line.
pub fn render(doc: &KmlDocument) -> Result<String> {
    let mut w = Writer::new(Vec::new());

    w.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(xml_err)?;
    w.write_event(Event::Start(
        BytesStart::new("kml").with_attributes([("xmlns", KML_NAMESPACE)]),
    ))
    .map_err(xml_err)?;
    start(&mut w, "Document")?;
    text_element(&mut w, "name", &doc.name)?;

    for style in &doc.styles {
        write_style(&mut w, style)?;
    }
    for okrug in doc.folders.okrugs() {
        write_okrug(&mut w, okrug)?;
    }

    end(&mut w, "Document")?;
    end(&mut w, "kml")?;

    let xml = String::from_utf8(w.into_inner()).map_err(xml_err)?;
    Ok(break_between_tags(&xml))
}

/// Insert a newline between every adjacent `>` and `<`, leaving CDATA
/// sections untouched.
pub fn break_between_tags(xml: &str) -> String {
    let mut out = String::with_capacity(xml.len() + xml.len() / 8);
    let mut rest = xml;
    while let Some(open) = rest.find(CDATA_OPEN) {
        let (markup, tail) = rest.split_at(open);
        out.push_str(&markup.replace("><", ">\n<"));
        let close = tail
            .find(CDATA_CLOSE)
            .map(|i| i + CDATA_CLOSE.len())
            .unwrap_or(tail.len());
        out.push_str(&tail[..close]);
        rest = &tail[close..];
    }
    out.push_str(&rest.replace("><", ">\n<"));
    out
}

fn start<W: Write>(w: &mut Writer<W>, name: &str) -> Result<()> {
    w.write_event(Event::Start(BytesStart::new(name)))
        .map_err(xml_err)
}

fn end<W: Write>(w: &mut Writer<W>, name: &str) -> Result<()> {
    w.write_event(Event::End(BytesEnd::new(name))).map_err(xml_err)
}

fn text_element<W: Write>(w: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    start(w, name)?;
    w.write_event(Event::Text(BytesText::new(text)))
        .map_err(xml_err)?;
    end(w, name)
}

fn write_style<W: Write>(w: &mut Writer<W>, style: &DistrictStyle) -> Result<()> {
    w.write_event(Event::Start(
        BytesStart::new("Style").with_attributes([("id", style.style_id.as_str())]),
    ))
    .map_err(xml_err)?;

    start(w, "IconStyle")?;
    text_element(w, "color", &style.color.to_string())?;
    text_element(w, "scale", ICON_SCALE)?;
    start(w, "Icon")?;
    text_element(w, "href", ICON_HREF)?;
    end(w, "Icon")?;
    end(w, "IconStyle")?;

    start(w, "LabelStyle")?;
    text_element(w, "scale", LABEL_SCALE)?;
    end(w, "LabelStyle")?;

    end(w, "Style")
}

fn write_okrug<W: Write>(w: &mut Writer<W>, okrug: &OkrugFolder) -> Result<()> {
    start(w, "Folder")?;
    text_element(w, "name", &okrug.name)?;
    for district in &okrug.districts {
        start(w, "Folder")?;
        text_element(w, "name", &district.name)?;
        for placemark in &district.placemarks {
            write_placemark(w, placemark)?;
        }
        end(w, "Folder")?;
    }
    end(w, "Folder")
}

fn write_placemark<W: Write>(w: &mut Writer<W>, pm: &Placemark) -> Result<()> {
    start(w, "Placemark")?;
    text_element(w, "name", &pm.name)?;
    if let Some(url) = &pm.style_url {
        text_element(w, "styleUrl", url)?;
    }

    start(w, "description")?;
    w.write_event(Event::CData(BytesCData::new(pm.description.as_str())))
        .map_err(xml_err)?;
    end(w, "description")?;

    start(w, "Point")?;
    text_element(w, "coordinates", &pm.coordinates())?;
    end(w, "Point")?;

    end(w, "Placemark")
}
