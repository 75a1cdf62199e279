use std::path::Path;

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::{CatalogError, GameEntry};

/// Default catalog filename read by the Miyoo frontend.
pub const GAMELIST_FILENAME: &str = "miyoogamelist.xml";

const XML_DECLARATION: &str = "<?xml version='1.0' encoding='utf-8'?>\n";

/// Render the catalog document for `entries`.
///
/// The output starts with an XML declaration and nests one `<game>` per
/// entry under a single `<gameList>` root, indented by two spaces.
pub fn render(entries: &[GameEntry]) -> Result<String, CatalogError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    write(&mut writer, Event::Start(BytesStart::new("gameList")))?;
    for entry in entries {
        write(&mut writer, Event::Start(BytesStart::new("game")))?;
        write_tag(&mut writer, "path", &entry.path)?;
        write_tag(&mut writer, "name", &entry.name)?;
        write(&mut writer, Event::End(BytesEnd::new("game")))?;
    }
    write(&mut writer, Event::End(BytesEnd::new("gameList")))?;

    let body = String::from_utf8(writer.into_inner())
        .map_err(|e| CatalogError::xml(e.to_string()))?;

    let mut xml = String::with_capacity(XML_DECLARATION.len() + body.len() + 1);
    xml.push_str(XML_DECLARATION);
    xml.push_str(&body);
    xml.push('\n');
    Ok(xml)
}

/// Write the catalog for `entries` to `output_path`, replacing any existing file.
///
/// The document is rendered fully before the file is touched.
pub fn write_gamelist(entries: &[GameEntry], output_path: &Path) -> Result<(), CatalogError> {
    let xml = render(entries)?;
    std::fs::write(output_path, xml.as_bytes()).map_err(|source| CatalogError::Write {
        path: output_path.to_path_buf(),
        source,
    })?;
    log::debug!("Wrote {} bytes to {}", xml.len(), output_path.display());
    Ok(())
}

/// Load the entries of an existing catalog file.
pub fn load_gamelist(path: &Path) -> Result<Vec<GameEntry>, CatalogError> {
    let xml = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_gamelist(&xml)
}

/// Parse a catalog document into its entries, in document order.
pub fn parse_gamelist(xml: &str) -> Result<Vec<GameEntry>, CatalogError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();
    let mut seen_root = false;
    let mut current_tag = String::new();
    let mut current_game: Option<(Option<String>, Option<String>)> = None;

    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(ref e) => {
                let tag_name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                match tag_name.as_str() {
                    "gameList" => seen_root = true,
                    "game" => current_game = Some((None, None)),
                    _ => current_tag = tag_name,
                }
            }
            Event::Empty(ref e) => {
                if e.name().as_ref() == b"gameList" {
                    seen_root = true;
                }
            }
            Event::Text(ref e) => {
                if let Some((ref mut path, ref mut name)) = current_game {
                    let text = e.unescape().map_err(xml_error)?;
                    let field = match current_tag.as_str() {
                        "path" => path,
                        "name" => name,
                        _ => continue,
                    };
                    field.get_or_insert_with(String::new).push_str(&text);
                }
            }
            Event::End(ref e) => {
                let tag_name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                match tag_name.as_str() {
                    "game" => {
                        if let Some((path, name)) = current_game.take() {
                            entries.push(GameEntry {
                                path: path.ok_or_else(|| {
                                    CatalogError::xml("<game> record without <path>")
                                })?,
                                name: name.unwrap_or_default(),
                            });
                        }
                    }
                    _ => current_tag.clear(),
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_root {
        return Err(CatalogError::xml("missing <gameList> root element"));
    }

    Ok(entries)
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), CatalogError> {
    writer
        .write_event(event)
        .map_err(|e| CatalogError::xml(e.to_string()))
}

fn write_tag(writer: &mut Writer<Vec<u8>>, tag: &str, value: &str) -> Result<(), CatalogError> {
    write(writer, Event::Start(BytesStart::new(tag)))?;
    write(writer, Event::Text(BytesText::from_escaped(partial_escape(value))))?;
    write(writer, Event::End(BytesEnd::new(tag)))
}

fn xml_error(e: impl std::fmt::Display) -> CatalogError {
    CatalogError::xml(e.to_string())
}

#[cfg(test)]
#[path = "tests/gamelist_tests.rs"]
mod tests;
