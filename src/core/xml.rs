//! XML reading, indentation and writing
//!
//! Reading and writing go through quick-xml. Comments, processing
//! instructions and DOCTYPE declarations are not kept in the tree.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::encoding::Decoder;
use quick_xml::reader::Reader;
use quick_xml::writer::Writer;

use crate::core::error::XmlError;
use crate::core::model::{Document, Element};
use crate::core::wellformed::{
    check_attribute_layout, check_chars, check_name, normalize_newlines,
};

const BOM: char = '\u{feff}';

/// Parse a complete document from raw file contents.
///
/// The encoding comes from a byte-order mark or the XML declaration and
/// defaults to UTF-8.
pub fn parse_bytes(bytes: &[u8]) -> Result<Document, XmlError> {
    let mut reader = Reader::from_reader(bytes);
    // Reading the first event settles the encoding; syntax errors surface in `parse`
    let _declaration = reader.read_event();

    let decoder = reader.decoder();
    let source = decoder.decode(bytes).map_err(|err| XmlError::Encoding {
        encoding: decoder.encoding().name().to_string(),
        message: err.to_string(),
    })?;
    parse(&source)
}

/// Parse a complete document from a string
pub fn parse(source: &str) -> Result<Document, XmlError> {
    let source = source.strip_prefix(BOM).unwrap_or(source);
    let mut reader = Reader::from_str(source);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let position = reader.buffer_position() as u64;
        let event = reader.read_event().map_err(|err| XmlError::Syntax {
            position,
            message: err.to_string(),
        })?;

        match event {
            Event::Start(start) => stack.push(element_from_start(&start, position, reader.decoder())?),
            Event::Empty(start) => {
                let element = element_from_start(&start, position, reader.decoder())?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack.pop().ok_or_else(|| XmlError::Syntax {
                    position,
                    message: "unexpected end tag".to_string(),
                })?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(|err| XmlError::Syntax {
                    position,
                    message: err.to_string(),
                })?;
                push_text(&mut stack, &text, position)?;
            }
            Event::CData(data) => {
                let text = std::str::from_utf8(&data).map_err(|err| XmlError::Syntax {
                    position,
                    message: err.to_string(),
                })?;
                push_text(&mut stack, text, position)?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(XmlError::Unclosed {
            name: open.name.clone(),
        });
    }

    root.map(Document::new).ok_or(XmlError::MissingRoot)
}

fn element_from_start(
    start: &BytesStart<'_>,
    position: u64,
    decoder: Decoder,
) -> Result<Element, XmlError> {
    let syntax = |message: String| XmlError::Syntax { position, message };

    let name = std::str::from_utf8(start.name().as_ref())
        .map_err(|err| syntax(err.to_string()))?
        .to_string();
    check_name(&name).map_err(syntax)?;
    check_attribute_layout(start.attributes_raw()).map_err(syntax)?;
    let mut element = Element::new(name);

    for attr in start.attributes() {
        let attr = attr.map_err(|err| syntax(err.to_string()))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|err| syntax(err.to_string()))?
            .to_string();
        check_name(&key).map_err(syntax)?;
        let value = attr
            .decode_and_unescape_value(decoder)
            .map_err(|err| syntax(err.to_string()))?
            .into_owned();
        check_chars(&value).map_err(syntax)?;
        element.attributes.insert(key, value);
    }

    Ok(element)
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), XmlError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
    } else if root.is_some() {
        return Err(XmlError::MultipleRoots { name: element.name });
    } else {
        *root = Some(element);
    }
    Ok(())
}

fn push_text(stack: &mut [Element], text: &str, position: u64) -> Result<(), XmlError> {
    check_chars(text).map_err(|message| XmlError::Syntax { position, message })?;
    let text = normalize_newlines(text);
    match stack.last_mut() {
        Some(parent) => parent.push_character_data(&text),
        None if text.trim().is_empty() => {}
        None => return Err(XmlError::StrayText { position }),
    }
    Ok(())
}

/// Pretty-print a tree in place by rewriting whitespace-only text and tails.
///
/// Text that contains anything besides whitespace is left alone, as is the
/// text of elements without children.
pub fn indent(root: &mut Element, space: &str) {
    if !root.children.is_empty() {
        indent_children(root, 1, space);
    }
}

fn indent_children(element: &mut Element, level: usize, space: &str) {
    let child_indentation = format!("\n{}", space.repeat(level));

    if is_blank(element.text.as_deref()) {
        element.text = Some(child_indentation.clone());
    }

    for child in element.children.iter_mut() {
        if !child.children.is_empty() {
            indent_children(child, level + 1, space);
        }
        if is_blank(child.tail.as_deref()) {
            child.tail = Some(child_indentation.clone());
        }
    }

    // Dedent after the last child
    if let Some(last) = element.children.last_mut() {
        if is_blank(last.tail.as_deref()) {
            last.tail = Some(format!("\n{}", space.repeat(level - 1)));
        }
    }
}

fn is_blank(data: Option<&str>) -> bool {
    data.map_or(true, |s| s.trim().is_empty())
}

/// Serialize a document to UTF-8 bytes, starting with an XML declaration
pub fn to_bytes(document: &Document) -> Result<Vec<u8>, XmlError> {
    let mut writer = Writer::new(Vec::new());

    emit(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)),
    )?;
    emit(&mut writer, Event::Text(BytesText::new("\n")))?;
    write_element(&mut writer, &document.root)?;

    Ok(writer.into_inner())
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<(), XmlError> {
    let start = BytesStart::new(element.name.as_str()).with_attributes(
        element
            .attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str())),
    );

    let has_text = element.text.as_deref().is_some_and(|t| !t.is_empty());
    if element.children.is_empty() && !has_text {
        emit(writer, Event::Empty(start))?;
    } else {
        emit(writer, Event::Start(start))?;
        if let Some(text) = element.text.as_deref() {
            emit(writer, Event::Text(BytesText::new(text)))?;
        }
        for child in &element.children {
            write_element(writer, child)?;
        }
        emit(writer, Event::End(BytesEnd::new(element.name.as_str())))?;
    }

    if let Some(tail) = element.tail.as_deref() {
        emit(writer, Event::Text(BytesText::new(tail)))?;
    }

    Ok(())
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), XmlError> {
    writer.write_event(event).map_err(|err| XmlError::Write {
        message: err.to_string(),
    })
}
