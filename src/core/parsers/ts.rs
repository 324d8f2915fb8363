//! Reader for Qt Linguist `.ts` translation catalogs.
//!
//! The reader streams XML events with `quick-xml` and builds a [`Catalog`].
//! Location hints are kept exactly as written; resolving relative line numbers
//! is done by [`crate::core::locations`].

use std::{fs, io::BufRead, path::Path};

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
    name::QName,
};
use thiserror::Error;

use crate::core::data::{
    Catalog, Context, LineRef, LocationHint, LocationStyle, Message, SourcePosition, Translation,
    TranslationStatus,
};
use crate::utils::LineIndex;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: malformed XML: {message}")]
    Xml { line: usize, message: String },

    #[error("line {line}: expected root element <TS>, found <{found}>")]
    UnexpectedRoot { line: usize, found: String },

    #[error("missing <TS> root element")]
    MissingRoot,

    #[error("line {line}: unexpected end of file inside <{element}>")]
    UnexpectedEof { line: usize, element: String },

    #[error("line {line}: unknown translation type \"{value}\"")]
    InvalidStatus { line: usize, value: String },

    #[error("line {line}: invalid location line \"{value}\"")]
    InvalidLine { line: usize, value: String },

    #[error("line {line}: invalid byte value \"{value}\"")]
    InvalidByte { line: usize, value: String },
}

impl CatalogError {
    /// Line the error was detected on, if known.
    pub fn line(&self) -> Option<usize> {
        match self {
            CatalogError::Io(_) | CatalogError::MissingRoot => None,
            CatalogError::Xml { line, .. }
            | CatalogError::UnexpectedRoot { line, .. }
            | CatalogError::UnexpectedEof { line, .. }
            | CatalogError::InvalidStatus { line, .. }
            | CatalogError::InvalidLine { line, .. }
            | CatalogError::InvalidByte { line, .. } => Some(*line),
        }
    }
}

/// Read and parse a catalog file.
pub fn parse_catalog_file(path: &Path) -> Result<Catalog, CatalogError> {
    let content = fs::read_to_string(path)?;
    parse_catalog(&content, &path.to_string_lossy())
}

/// Parse catalog XML. `file_path` is recorded on the catalog for reporting.
pub fn parse_catalog(content: &str, file_path: &str) -> Result<Catalog, CatalogError> {
    CatalogReader::new(content).read(file_path)
}

/// Check whether a `.ts` file is an XML catalog rather than TypeScript.
pub fn looks_like_catalog(content: &str) -> bool {
    has_catalog_root(content.as_bytes())
}

/// Read up to the first element and check that it is `<TS>`.
///
/// The XML declaration, comments and the doctype may come first, however long.
/// Any other text before the first element means the file is not XML.
pub fn has_catalog_root(source: impl BufRead) -> bool {
    let mut reader = Reader::from_reader(source);
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e) | Event::Empty(e)) => return e.name().as_ref() == b"TS",
            Ok(Event::Text(t)) if !is_blank(&t) => return false,
            Ok(Event::Eof) | Err(_) => return false,
            Ok(_) => {}
        }
        buf.clear();
    }
}

fn is_blank(text: &[u8]) -> bool {
    text.strip_prefix(b"\xEF\xBB\xBF")
        .unwrap_or(text)
        .iter()
        .all(u8::is_ascii_whitespace)
}

struct CatalogReader<'a> {
    reader: Reader<&'a [u8]>,
    line_index: LineIndex,
    content: &'a str,
}

impl<'a> CatalogReader<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            reader: Reader::from_str(content),
            line_index: LineIndex::new(content),
            content,
        }
    }

    fn read(mut self, file_path: &str) -> Result<Catalog, CatalogError> {
        let mut catalog = Catalog::new(file_path);

        loop {
            let (offset, event) = self.next_event()?;
            match event {
                Event::Start(e) if e.name().as_ref() == b"TS" => {
                    self.read_root_attributes(&e, &mut catalog)?;
                    self.read_ts_body(&mut catalog)?;
                    break;
                }
                Event::Empty(e) if e.name().as_ref() == b"TS" => {
                    self.read_root_attributes(&e, &mut catalog)?;
                    break;
                }
                Event::Start(e) | Event::Empty(e) => {
                    return Err(CatalogError::UnexpectedRoot {
                        line: self.line_at(offset),
                        found: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
                    });
                }
                Event::Eof => return Err(CatalogError::MissingRoot),
                _ => {}
            }
        }

        catalog.location_style = location_style(&catalog);
        Ok(catalog)
    }

    fn read_root_attributes(
        &self,
        e: &BytesStart<'_>,
        catalog: &mut Catalog,
    ) -> Result<(), CatalogError> {
        catalog.version = self.attribute(e, b"version")?;
        catalog.language = self.attribute(e, b"language")?;
        catalog.source_language = self.attribute(e, b"sourcelanguage")?;
        Ok(())
    }

    fn read_ts_body(&mut self, catalog: &mut Catalog) -> Result<(), CatalogError> {
        loop {
            let (offset, event) = self.next_event()?;
            match event {
                Event::Start(e) if e.name().as_ref() == b"context" => {
                    let context = self.read_context()?;
                    catalog.contexts.push(context);
                }
                Event::Start(e) => {
                    let raw = self.read_raw(&e, offset)?;
                    catalog.extra_elements.push(raw);
                }
                Event::Empty(_) => catalog.extra_elements.push(self.raw_since(offset)),
                Event::End(_) => return Ok(()),
                Event::Eof => return Err(self.eof_inside(offset, "TS")),
                _ => {}
            }
        }
    }

    fn read_context(&mut self) -> Result<Context, CatalogError> {
        let mut context = Context::default();
        loop {
            let (offset, event) = self.next_event()?;
            match event {
                Event::Start(e) => match e.name().as_ref() {
                    b"name" => context.name = self.read_text(b"name")?,
                    b"comment" => context.comment = Some(self.read_text(b"comment")?),
                    b"message" => {
                        let message = self.read_message(&e, offset)?;
                        context.messages.push(message);
                    }
                    _ => {
                        let raw = self.read_raw(&e, offset)?;
                        context.extra_elements.push(raw);
                    }
                },
                Event::Empty(e) if e.name().as_ref() != b"name" => {
                    context.extra_elements.push(self.raw_since(offset))
                }
                Event::End(_) => return Ok(context),
                Event::Eof => return Err(self.eof_inside(offset, "context")),
                _ => {}
            }
        }
    }

    /// Position defaults to the `<message>` tag until a `<source>` is seen.
    fn read_message(
        &mut self,
        start: &BytesStart<'_>,
        offset: usize,
    ) -> Result<Message, CatalogError> {
        let mut message = Message {
            id: self.attribute(start, b"id")?,
            numerus: self.attribute(start, b"numerus")?.as_deref() == Some("yes"),
            attributes: self.other_attributes(start, &[b"id", b"numerus"])?,
            position: self.position_at(offset),
            ..Default::default()
        };

        loop {
            let (offset, event) = self.next_event()?;
            match event {
                Event::Empty(e) => match e.name().as_ref() {
                    b"location" => message.locations.push(self.read_location(&e, offset)?),
                    b"source" => message.position = self.position_at(offset),
                    b"translation" => message.status = self.read_status(&e, offset)?,
                    _ => message.extra_elements.push(self.raw_since(offset)),
                },
                Event::Start(e) => match e.name().as_ref() {
                    b"location" => {
                        message.locations.push(self.read_location(&e, offset)?);
                        self.skip_element(&e)?;
                    }
                    b"source" => {
                        message.position = self.position_at(offset);
                        message.source = self.read_text(b"source")?;
                    }
                    b"oldsource" => message.old_source = Some(self.read_text(b"oldsource")?),
                    b"comment" => message.comment = Some(self.read_text(b"comment")?),
                    b"oldcomment" => {
                        message.old_comment = Some(self.read_text(b"oldcomment")?)
                    }
                    b"extracomment" => {
                        message.extra_comment = Some(self.read_text(b"extracomment")?)
                    }
                    b"translatorcomment" => {
                        message.translator_comment = Some(self.read_text(b"translatorcomment")?)
                    }
                    b"translation" => {
                        message.status = self.read_status(&e, offset)?;
                        message.translation = if message.numerus {
                            Translation::Plural(self.read_numerus_forms()?)
                        } else {
                            Translation::Singular(self.read_text(b"translation")?)
                        };
                    }
                    _ => {
                        let raw = self.read_raw(&e, offset)?;
                        message.extra_elements.push(raw);
                    }
                },
                Event::End(_) => return Ok(message),
                Event::Eof => return Err(self.eof_inside(offset, "message")),
                _ => {}
            }
        }
    }

    fn read_location(
        &self,
        e: &BytesStart<'_>,
        offset: usize,
    ) -> Result<LocationHint, CatalogError> {
        let filename = self.attribute(e, b"filename")?.filter(|f| !f.is_empty());
        let line = match self.attribute(e, b"line")? {
            None => None,
            Some(value) if value.is_empty() => None,
            Some(value) => Some(parse_line_ref(&value).ok_or_else(|| {
                CatalogError::InvalidLine {
                    line: self.line_at(offset),
                    value,
                }
            })?),
        };
        Ok(LocationHint { filename, line })
    }

    fn read_status(
        &self,
        e: &BytesStart<'_>,
        offset: usize,
    ) -> Result<TranslationStatus, CatalogError> {
        let value = self.attribute(e, b"type")?;
        TranslationStatus::from_attr(value.as_deref()).ok_or_else(|| CatalogError::InvalidStatus {
            line: self.line_at(offset),
            value: value.unwrap_or_default(),
        })
    }

    fn read_numerus_forms(&mut self) -> Result<Vec<String>, CatalogError> {
        let mut forms = Vec::new();
        loop {
            let (offset, event) = self.next_event()?;
            match event {
                Event::Start(e) if e.name().as_ref() == b"numerusform" => {
                    forms.push(self.read_text(b"numerusform")?);
                }
                Event::Empty(e) if e.name().as_ref() == b"numerusform" => forms.push(String::new()),
                Event::Start(e) => self.skip_element(&e)?,
                Event::End(_) => return Ok(forms),
                Event::Eof => return Err(self.eof_inside(offset, "translation")),
                _ => {}
            }
        }
    }

    /// Collect the text content of the current element up to its end tag.
    fn read_text(&mut self, element: &[u8]) -> Result<String, CatalogError> {
        let mut text = String::new();
        loop {
            let (offset, event) = self.next_event()?;
            match event {
                Event::Text(t) => {
                    let unescaped = t.unescape().map_err(|err| self.xml_error(offset, err))?;
                    text.push_str(&unescaped);
                }
                Event::CData(c) => text.push_str(&String::from_utf8_lossy(&c)),
                Event::Empty(e) if e.name().as_ref() == b"byte" => {
                    text.push(self.read_byte(&e, offset)?);
                }
                Event::Start(e) if e.name().as_ref() == b"byte" => {
                    text.push(self.read_byte(&e, offset)?);
                    self.skip_element(&e)?;
                }
                Event::Start(e) => self.skip_element(&e)?,
                Event::End(_) => return Ok(text),
                Event::Eof => {
                    return Err(
                        self.eof_inside(offset, &String::from_utf8_lossy(element).into_owned())
                    );
                }
                _ => {}
            }
        }
    }

    fn read_byte(&self, e: &BytesStart<'_>, offset: usize) -> Result<char, CatalogError> {
        let value = self.attribute(e, b"value")?.unwrap_or_default();
        let code = match value.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => value.parse::<u32>().ok(),
        };
        code.and_then(char::from_u32)
            .ok_or_else(|| CatalogError::InvalidByte {
                line: self.line_at(offset),
                value,
            })
    }

    fn skip_element(&mut self, e: &BytesStart<'_>) -> Result<(), CatalogError> {
        let name = e.name().as_ref().to_vec();
        let offset = self.offset();
        self.reader
            .read_to_end(QName(&name))
            .map_err(|err| self.xml_error(offset, err))?;
        Ok(())
    }

    /// Skip an element and return its markup exactly as written.
    fn read_raw(&mut self, e: &BytesStart<'_>, offset: usize) -> Result<String, CatalogError> {
        self.skip_element(e)?;
        Ok(self.raw_since(offset))
    }

    fn raw_since(&self, offset: usize) -> String {
        self.content[offset..self.offset()].to_string()
    }

    fn other_attributes(
        &self,
        e: &BytesStart<'_>,
        known: &[&[u8]],
    ) -> Result<Vec<(String, String)>, CatalogError> {
        let offset = self.offset();
        let mut attributes = Vec::new();
        for attr in e.attributes() {
            let attr = attr.map_err(|err| self.xml_error(offset, err))?;
            if known.contains(&attr.key.as_ref()) {
                continue;
            }
            let value = attr
                .unescape_value()
                .map_err(|err| self.xml_error(offset, err))?;
            attributes.push((
                String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
                value.into_owned(),
            ));
        }
        Ok(attributes)
    }

    fn attribute(&self, e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>, CatalogError> {
        let offset = self.offset();
        for attr in e.attributes() {
            let attr = attr.map_err(|err| self.xml_error(offset, err))?;
            if attr.key.as_ref() == key {
                let value = attr
                    .unescape_value()
                    .map_err(|err| self.xml_error(offset, err))?;
                return Ok(Some(value.into_owned()));
            }
        }
        Ok(None)
    }

    /// Read the next event together with the byte offset where it starts.
    fn next_event(&mut self) -> Result<(usize, Event<'a>), CatalogError> {
        let offset = self.offset();
        match self.reader.read_event() {
            Ok(event) => Ok((offset, event)),
            Err(err) => {
                let at = self.offset();
                Err(self.xml_error(at, err))
            }
        }
    }

    fn offset(&self) -> usize {
        self.reader.buffer_position() as usize
    }

    fn line_at(&self, offset: usize) -> usize {
        self.line_index.line(offset)
    }

    fn position_at(&self, offset: usize) -> SourcePosition {
        let (line, col) = self.line_index.line_col(self.content, offset);
        SourcePosition { line, col }
    }

    fn xml_error(&self, offset: usize, err: impl std::fmt::Display) -> CatalogError {
        CatalogError::Xml {
            line: self.line_at(offset),
            message: err.to_string(),
        }
    }

    fn eof_inside(&self, offset: usize, element: &str) -> CatalogError {
        CatalogError::UnexpectedEof {
            line: self.line_at(offset),
            element: element.to_string(),
        }
    }
}

fn parse_line_ref(value: &str) -> Option<LineRef> {
    if value.starts_with('+') || value.starts_with('-') {
        value.parse::<i64>().ok().map(LineRef::Relative)
    } else {
        value.parse::<usize>().ok().map(LineRef::Absolute)
    }
}

fn location_style(catalog: &Catalog) -> LocationStyle {
    let mut style = LocationStyle::None;
    for (_, message) in catalog.messages() {
        for hint in &message.locations {
            match hint.line {
                Some(LineRef::Relative(_)) => return LocationStyle::Relative,
                Some(LineRef::Absolute(_)) => style = LocationStyle::Absolute,
                None => {}
            }
        }
    }
    style
}
