//! Visible-text extraction from status page HTML.
//!
//! The page is parsed with html5ever so stray `<` characters and character
//! references behave as in a browser. Text nodes are joined with a space
//! (tags act as word breaks), the contents of `<script>`/`<style>`/`<template>`
//! and comments are dropped, and runs of whitespace collapse to one space.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Elements whose text content never renders.
const HIDDEN_ELEMENTS: [&str; 3] = ["script", "style", "template"];

/// Lower-cased visible text of an HTML document.
pub fn visible_text(html: &str) -> String {
    let dom = parse_document(RcDom::default(), Default::default()).one(html);

    let mut out = String::with_capacity(html.len());
    collect_text(&dom.document, &mut out);

    normalize_ws(&out).to_lowercase()
}

fn collect_text(handle: &Handle, out: &mut String) {
    match &handle.data {
        NodeData::Text { contents } => {
            out.push_str(&contents.borrow());
            out.push(' ');
            return;
        }
        NodeData::Element { name, .. } => {
            let tag: &str = name.local.as_ref();
            if HIDDEN_ELEMENTS.contains(&tag) {
                return;
            }
        }
        NodeData::Comment { .. } | NodeData::ProcessingInstruction { .. } => return,
        NodeData::Document | NodeData::Doctype { .. } => {}
    }

    for child in handle.children.borrow().iter() {
        collect_text(child, out);
    }
}

fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}
