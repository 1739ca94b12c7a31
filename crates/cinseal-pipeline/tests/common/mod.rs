//! Collaborators and fixtures shared by the pipeline tests

#![allow(dead_code)]

use cinseal_domain::traits::{DocumentProtector, RecordStore, TextExtractor};
use cinseal_domain::{Cin, FileRecord, ProtectedDocument, RecordId};
use cinseal_notifier::{FallbackNotifier, MockTransport};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use std::path::Path;

pub const RECIPIENT: &str = "recipient@example.com";

/// Treats file bytes as UTF-8 text
pub struct PlainText;

impl TextExtractor for PlainText {
    type Error = String;

    fn extract_text(&self, bytes: &[u8]) -> Result<String, String> {
        String::from_utf8(bytes.to_vec()).map_err(|_| "not a text document".to_string())
    }
}

/// Prefixes the bytes with a marker; refuses input starting with `LOCKED`
pub struct MarkerProtector;

pub const ENCRYPTED_MARKER: &[u8] = b"ENC:";

impl DocumentProtector for MarkerProtector {
    type Error = String;

    fn protect(&self, bytes: &[u8], password: &Cin) -> Result<ProtectedDocument, String> {
        if bytes.starts_with(b"LOCKED") {
            return Err("document is already encrypted".to_string());
        }
        let mut protected = ENCRYPTED_MARKER.to_vec();
        protected.extend_from_slice(bytes);
        Ok(ProtectedDocument::new(password.clone(), protected))
    }
}

/// Rejects every append after the first `capacity` ones
pub struct FullStore {
    capacity: usize,
    appended: usize,
}

impl FullStore {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            appended: 0,
        }
    }

    pub fn appended(&self) -> usize {
        self.appended
    }
}

impl RecordStore for FullStore {
    type Error = String;

    fn append(&mut self, _record: &FileRecord) -> Result<RecordId, String> {
        if self.appended >= self.capacity {
            return Err("disk full".to_string());
        }
        self.appended += 1;
        Ok(RecordId::from_value(self.appended as i64))
    }
}

pub type MockNotifier = FallbackNotifier<MockTransport, MockTransport>;

/// Primary single attempt, secondary three attempts two seconds apart
pub fn notifier(primary: &MockTransport, secondary: &MockTransport) -> MockNotifier {
    FallbackNotifier::with_stage_policies(primary.clone(), secondary.clone())
}

pub fn write(folder: &Path, name: &str, contents: impl AsRef<[u8]>) {
    std::fs::write(folder.join(name), contents).unwrap();
}

/// Build a single-page PDF showing each line of `lines`
pub fn pdf_with_lines(lines: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });

    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), 12.into()]),
        Operation::new("Td", vec![50.into(), 750.into()]),
        Operation::new("TL", vec![16.into()]),
    ];
    for line in lines {
        operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
        operations.push(Operation::new("T*", vec![]));
    }
    operations.push(Operation::new("ET", vec![]));

    let content_id = doc.add_object(Stream::new(
        dictionary! {},
        Content { operations }.encode().unwrap(),
    ));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => dictionary! { "Font" => dictionary! { "F1" => font_id } },
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}
