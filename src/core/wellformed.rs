//! Well-formedness rules the XML reader does not enforce on its own
//!
//! Character and name classes follow the XML 1.0 (Fifth Edition)
//! `Char`, `NameStartChar` and `NameChar` productions.

use std::borrow::Cow;

/// Whether `c` may appear anywhere in a document
pub fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Whether `c` may start an element or attribute name
pub fn is_name_start_char(c: char) -> bool {
    matches!(
        c,
        ':' | 'A'..='Z'
            | '_'
            | 'a'..='z'
            | '\u{C0}'..='\u{D6}'
            | '\u{D8}'..='\u{F6}'
            | '\u{F8}'..='\u{2FF}'
            | '\u{370}'..='\u{37D}'
            | '\u{37F}'..='\u{1FFF}'
            | '\u{200C}'..='\u{200D}'
            | '\u{2070}'..='\u{218F}'
            | '\u{2C00}'..='\u{2FEF}'
            | '\u{3001}'..='\u{D7FF}'
            | '\u{F900}'..='\u{FDCF}'
            | '\u{FDF0}'..='\u{FFFD}'
            | '\u{10000}'..='\u{EFFFF}'
    )
}

/// Whether `c` may appear after the first character of a name
pub fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(
            c,
            '-' | '.' | '0'..='9' | '\u{B7}' | '\u{300}'..='\u{36F}' | '\u{203F}'..='\u{2040}'
        )
}

/// Check an element or attribute name
pub fn check_name(name: &str) -> Result<(), String> {
    let mut chars = name.chars();
    match chars.next() {
        None => return Err("empty name".to_string()),
        Some(first) if !is_name_start_char(first) => {
            return Err(format!("invalid name '{}': bad first character", name));
        }
        Some(_) => {}
    }
    if let Some(bad) = chars.find(|c| !is_name_char(*c)) {
        return Err(format!("invalid character {:?} in name '{}'", bad, name));
    }
    Ok(())
}

/// Check that decoded character data only contains XML characters
pub fn check_chars(text: &str) -> Result<(), String> {
    match text.chars().find(|c| !is_xml_char(*c)) {
        Some(bad) => Err(format!("invalid character U+{:04X}", u32::from(bad))),
        None => Ok(()),
    }
}

fn is_xml_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// Check the raw attribute section of a start tag.
///
/// Attributes must be separated by whitespace and a literal '<' may not
/// appear inside a quoted value.
pub fn check_attribute_layout(raw: &[u8]) -> Result<(), String> {
    let mut quote: Option<u8> = None;
    let mut after_value = false;

    for &b in raw {
        match quote {
            Some(q) if b == q => {
                quote = None;
                after_value = true;
            }
            Some(_) if b == b'<' => {
                return Err("'<' is not allowed in an attribute value".to_string());
            }
            Some(_) => {}
            None => {
                if after_value && !is_xml_space(b) && b != b'/' {
                    return Err("attributes must be separated by whitespace".to_string());
                }
                after_value = false;
                if b == b'"' || b == b'\'' {
                    quote = Some(b);
                }
            }
        }
    }

    Ok(())
}

/// Convert "\r\n" and lone "\r" to "\n"
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}
