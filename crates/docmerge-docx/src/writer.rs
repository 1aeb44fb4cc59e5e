#![deny(unsafe_code)]

//! WordprocessingML package writer.
//!
//! A `.docx` file is a zip container holding a handful of XML parts. This
//! writer emits the minimal set a word processor needs: content types, the
//! package relationships, a styles part, and the document body itself. No
//! metadata parts are written, so output depends only on the input document.

use std::io::{Cursor, Seek, Write};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::FileOptions;

use crate::document::{DocxDocument, DocxParagraph};
use crate::error::Result;

/// Content-types namespace.
const CONTENT_TYPES_NS: &str = "http://schemas.openxmlformats.org/package/2006/content-types";

/// Package relationships namespace.
const RELATIONSHIPS_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

/// WordprocessingML main namespace.
const WORDPROCESSINGML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Relationship type of the main document part.
const OFFICE_DOCUMENT_REL: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";

/// Relationship type of the styles part.
const STYLES_REL: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";

/// Document package writer.
///
/// Writes a complete `.docx` package to any `Write + Seek` target.
pub struct DocxWriter<W: Write + Seek> {
    zip: ZipWriter<W>,
}

impl<W: Write + Seek> DocxWriter<W> {
    /// Create a new writer over the target.
    pub fn new(inner: W) -> Self {
        Self {
            zip: ZipWriter::new(inner),
        }
    }

    /// Write the complete package and finish the container.
    pub fn write_document(mut self, document: &DocxDocument) -> Result<()> {
        self.put_part("[Content_Types].xml", &content_types_xml()?)?;
        self.put_part("_rels/.rels", &root_relationships_xml()?)?;
        self.put_part(
            "word/_rels/document.xml.rels",
            &document_relationships_xml()?,
        )?;
        self.put_part("word/styles.xml", &styles_xml(document)?)?;
        self.put_part("word/document.xml", &document_xml(document)?)?;
        self.zip.finish()?;
        Ok(())
    }

    fn put_part(&mut self, name: &str, content: &[u8]) -> Result<()> {
        let options: FileOptions<'_, ()> =
            FileOptions::default().compression_method(CompressionMethod::Deflated);
        self.zip.start_file(name, options)?;
        self.zip.write_all(content)?;
        Ok(())
    }
}

/// Serialize a document into `.docx` bytes.
pub fn docx_bytes(document: &DocxDocument) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let writer = DocxWriter::new(Cursor::new(&mut buffer));
    writer.write_document(document)?;
    Ok(buffer)
}

fn xml_writer() -> Writer<Cursor<Vec<u8>>> {
    Writer::new(Cursor::new(Vec::new()))
}

fn finish(xml: Writer<Cursor<Vec<u8>>>) -> Vec<u8> {
    xml.into_inner().into_inner()
}

fn write_declaration<W: Write>(xml: &mut Writer<W>) -> Result<()> {
    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
    Ok(())
}

fn content_types_xml() -> Result<Vec<u8>> {
    let mut xml = xml_writer();
    write_declaration(&mut xml)?;

    let mut types = BytesStart::new("Types");
    types.push_attribute(("xmlns", CONTENT_TYPES_NS));
    xml.write_event(Event::Start(types))?;

    let mut rels = BytesStart::new("Default");
    rels.push_attribute(("Extension", "rels"));
    rels.push_attribute((
        "ContentType",
        "application/vnd.openxmlformats-package.relationships+xml",
    ));
    xml.write_event(Event::Empty(rels))?;

    let mut fallback = BytesStart::new("Default");
    fallback.push_attribute(("Extension", "xml"));
    fallback.push_attribute(("ContentType", "application/xml"));
    xml.write_event(Event::Empty(fallback))?;

    let mut main = BytesStart::new("Override");
    main.push_attribute(("PartName", "/word/document.xml"));
    main.push_attribute((
        "ContentType",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml",
    ));
    xml.write_event(Event::Empty(main))?;

    let mut styles = BytesStart::new("Override");
    styles.push_attribute(("PartName", "/word/styles.xml"));
    styles.push_attribute((
        "ContentType",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml",
    ));
    xml.write_event(Event::Empty(styles))?;

    xml.write_event(Event::End(BytesEnd::new("Types")))?;
    Ok(finish(xml))
}

fn relationships_xml(relationships: &[(&str, &str, &str)]) -> Result<Vec<u8>> {
    let mut xml = xml_writer();
    write_declaration(&mut xml)?;

    let mut root = BytesStart::new("Relationships");
    root.push_attribute(("xmlns", RELATIONSHIPS_NS));
    xml.write_event(Event::Start(root))?;

    for (id, rel_type, target) in relationships {
        let mut rel = BytesStart::new("Relationship");
        rel.push_attribute(("Id", *id));
        rel.push_attribute(("Type", *rel_type));
        rel.push_attribute(("Target", *target));
        xml.write_event(Event::Empty(rel))?;
    }

    xml.write_event(Event::End(BytesEnd::new("Relationships")))?;
    Ok(finish(xml))
}

fn root_relationships_xml() -> Result<Vec<u8>> {
    relationships_xml(&[("rId1", OFFICE_DOCUMENT_REL, "word/document.xml")])
}

fn document_relationships_xml() -> Result<Vec<u8>> {
    relationships_xml(&[("rId1", STYLES_REL, "styles.xml")])
}

fn styles_xml(document: &DocxDocument) -> Result<Vec<u8>> {
    let mut xml = xml_writer();
    write_declaration(&mut xml)?;

    let mut root = BytesStart::new("w:styles");
    root.push_attribute(("xmlns:w", WORDPROCESSINGML_NS));
    xml.write_event(Event::Start(root))?;

    let mut normal = BytesStart::new("w:style");
    normal.push_attribute(("w:type", "paragraph"));
    normal.push_attribute(("w:default", "1"));
    normal.push_attribute(("w:styleId", "Normal"));
    xml.write_event(Event::Start(normal))?;
    let mut name = BytesStart::new("w:name");
    name.push_attribute(("w:val", "Normal"));
    xml.write_event(Event::Empty(name))?;
    xml.write_event(Event::End(BytesEnd::new("w:style")))?;

    for level in document.heading_levels() {
        write_heading_style(&mut xml, level)?;
    }

    xml.write_event(Event::End(BytesEnd::new("w:styles")))?;
    Ok(finish(xml))
}

fn write_heading_style<W: Write>(xml: &mut Writer<W>, level: u8) -> Result<()> {
    let style_id = format!("Heading{level}");
    let display_name = format!("heading {level}");
    let outline_level = (level - 1).to_string();
    let half_points = heading_half_points(level).to_string();

    let mut style = BytesStart::new("w:style");
    style.push_attribute(("w:type", "paragraph"));
    style.push_attribute(("w:styleId", style_id.as_str()));
    xml.write_event(Event::Start(style))?;

    let mut name = BytesStart::new("w:name");
    name.push_attribute(("w:val", display_name.as_str()));
    xml.write_event(Event::Empty(name))?;

    let mut based_on = BytesStart::new("w:basedOn");
    based_on.push_attribute(("w:val", "Normal"));
    xml.write_event(Event::Empty(based_on))?;

    xml.write_event(Event::Start(BytesStart::new("w:pPr")))?;
    let mut outline = BytesStart::new("w:outlineLvl");
    outline.push_attribute(("w:val", outline_level.as_str()));
    xml.write_event(Event::Empty(outline))?;
    xml.write_event(Event::End(BytesEnd::new("w:pPr")))?;

    xml.write_event(Event::Start(BytesStart::new("w:rPr")))?;
    xml.write_event(Event::Empty(BytesStart::new("w:b")))?;
    let mut size = BytesStart::new("w:sz");
    size.push_attribute(("w:val", half_points.as_str()));
    xml.write_event(Event::Empty(size))?;
    xml.write_event(Event::End(BytesEnd::new("w:rPr")))?;

    xml.write_event(Event::End(BytesEnd::new("w:style")))?;
    Ok(())
}

fn heading_half_points(level: u8) -> u32 {
    match level {
        1 => 32,
        2 => 26,
        _ => 24,
    }
}

fn document_xml(document: &DocxDocument) -> Result<Vec<u8>> {
    let mut xml = xml_writer();
    write_declaration(&mut xml)?;

    let mut root = BytesStart::new("w:document");
    root.push_attribute(("xmlns:w", WORDPROCESSINGML_NS));
    xml.write_event(Event::Start(root))?;
    xml.write_event(Event::Start(BytesStart::new("w:body")))?;

    for paragraph in document.paragraphs() {
        write_paragraph(&mut xml, paragraph)?;
    }
    write_section_properties(&mut xml)?;

    xml.write_event(Event::End(BytesEnd::new("w:body")))?;
    xml.write_event(Event::End(BytesEnd::new("w:document")))?;
    Ok(finish(xml))
}

fn write_paragraph<W: Write>(xml: &mut Writer<W>, paragraph: &DocxParagraph) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new("w:p")))?;

    if let Some(style_id) = paragraph.style.style_id() {
        xml.write_event(Event::Start(BytesStart::new("w:pPr")))?;
        let mut style = BytesStart::new("w:pStyle");
        style.push_attribute(("w:val", style_id.as_str()));
        xml.write_event(Event::Empty(style))?;
        xml.write_event(Event::End(BytesEnd::new("w:pPr")))?;
    }

    xml.write_event(Event::Start(BytesStart::new("w:r")))?;
    let mut text = BytesStart::new("w:t");
    // Cell values may begin or end with spaces Word would otherwise drop.
    text.push_attribute(("xml:space", "preserve"));
    xml.write_event(Event::Start(text))?;
    xml.write_event(Event::Text(BytesText::new(&paragraph.text)))?;
    xml.write_event(Event::End(BytesEnd::new("w:t")))?;
    xml.write_event(Event::End(BytesEnd::new("w:r")))?;

    xml.write_event(Event::End(BytesEnd::new("w:p")))?;
    Ok(())
}

fn write_section_properties<W: Write>(xml: &mut Writer<W>) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new("w:sectPr")))?;

    let mut page_size = BytesStart::new("w:pgSz");
    page_size.push_attribute(("w:w", "12240"));
    page_size.push_attribute(("w:h", "15840"));
    xml.write_event(Event::Empty(page_size))?;

    let mut margins = BytesStart::new("w:pgMar");
    for (name, value) in [
        ("w:top", "1440"),
        ("w:right", "1440"),
        ("w:bottom", "1440"),
        ("w:left", "1440"),
        ("w:header", "720"),
        ("w:footer", "720"),
        ("w:gutter", "0"),
    ] {
        margins.push_attribute((name, value));
    }
    xml.write_event(Event::Empty(margins))?;

    xml.write_event(Event::End(BytesEnd::new("w:sectPr")))?;
    Ok(())
}
