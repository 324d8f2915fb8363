//! Writer for Qt Linguist `.ts` translation catalogs.
//!
//! Output follows the layout produced by the translation tooling so that
//! rewritten files diff cleanly against the originals.

use std::fmt::Write;

use quick_xml::escape::escape;

use crate::core::{
    data::{Catalog, LineRef, LocationHint, Message, Translation},
    locations::{LocationEncoder, resolve_locations},
};

/// Render a catalog as `.ts` XML.
///
/// Locations are re-encoded in the catalog's [`LocationStyle`](crate::core::data::LocationStyle).
/// Pin them with [`pin_locations`](crate::core::locations::pin_locations)
/// before removing messages so relative offsets stay correct.
pub fn write_catalog(catalog: &Catalog) -> String {
    let resolved = resolve_locations(catalog);
    let mut encoder = LocationEncoder::new(catalog.location_style);
    let mut out = String::new();

    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str("<!DOCTYPE TS>\n");
    out.push_str("<TS");
    push_attr(&mut out, "version", catalog.version.as_deref());
    push_attr(&mut out, "language", catalog.language.as_deref());
    push_attr(&mut out, "sourcelanguage", catalog.source_language.as_deref());
    out.push_str(">\n");
    push_raw(&mut out, "", &catalog.extra_elements);

    for (ctx_idx, context) in catalog.contexts.iter().enumerate() {
        out.push_str("<context>\n");
        let _ = writeln!(out, "    <name>{}</name>", escape_text(&context.name));
        if let Some(comment) = &context.comment {
            let _ = writeln!(out, "    <comment>{}</comment>", escape_text(comment));
        }
        push_raw(&mut out, "    ", &context.extra_elements);
        for (msg_idx, message) in context.messages.iter().enumerate() {
            let hints: Vec<LocationHint> = resolved[ctx_idx][msg_idx]
                .iter()
                .map(|location| encoder.encode(location))
                .collect();
            write_message(&mut out, message, &hints);
        }
        out.push_str("</context>\n");
    }

    out.push_str("</TS>\n");
    out
}

fn write_message(out: &mut String, message: &Message, hints: &[LocationHint]) {
    out.push_str("    <message");
    push_attr(out, "id", message.id.as_deref());
    if message.numerus {
        out.push_str(" numerus=\"yes\"");
    }
    for (name, value) in &message.attributes {
        push_attr(out, name, Some(value));
    }
    out.push_str(">\n");

    for hint in hints {
        out.push_str("        <location");
        push_attr(out, "filename", hint.filename.as_deref());
        let line = hint.line.map(|line| match line {
            LineRef::Absolute(n) => n.to_string(),
            LineRef::Relative(delta) => format!("{:+}", delta),
        });
        push_attr(out, "line", line.as_deref());
        out.push_str("/>\n");
    }

    push_element(out, "source", Some(&message.source));
    push_element(out, "oldsource", message.old_source.as_deref());
    push_element(out, "comment", message.comment.as_deref());
    push_element(out, "oldcomment", message.old_comment.as_deref());
    push_element(out, "extracomment", message.extra_comment.as_deref());
    push_element(out, "translatorcomment", message.translator_comment.as_deref());

    out.push_str("        <translation");
    push_attr(out, "type", message.status.as_attr());
    match &message.translation {
        Translation::Singular(text) => {
            let _ = writeln!(out, ">{}</translation>", escape_text(text));
        }
        Translation::Plural(forms) => {
            out.push_str(">\n");
            for form in forms {
                let _ = writeln!(
                    out,
                    "            <numerusform>{}</numerusform>",
                    escape_text(form)
                );
            }
            out.push_str("        </translation>\n");
        }
    }
    push_raw(out, "        ", &message.extra_elements);

    out.push_str("    </message>\n");
}

fn push_attr(out: &mut String, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        let _ = write!(out, " {}=\"{}\"", name, escape(value));
    }
}

/// Unmodelled markup goes back out as it was read.
fn push_raw(out: &mut String, indent: &str, elements: &[String]) {
    for raw in elements {
        let _ = writeln!(out, "{indent}{raw}");
    }
}

fn push_element(out: &mut String, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        let _ = writeln!(out, "        <{name}>{}</{name}>", escape_text(value));
    }
}

/// Escape markup characters; control characters other than tab/newline
/// become `<byte value="xN"/>` elements.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut plain_start = 0;
    for (idx, c) in text.char_indices() {
        if c.is_control() && c != '\n' && c != '\t' {
            out.push_str(&escape(&text[plain_start..idx]));
            let _ = write!(out, "<byte value=\"x{:x}\"/>", c as u32);
            plain_start = idx + c.len_utf8();
        }
    }
    out.push_str(&escape(&text[plain_start..]));
    out
}
