//! Liskov Substitution: a subtype must work wherever its supertype does.
//!
//! In the legacy design every document has `save`, and read-only documents
//! refuse it at run time; the project then has to inspect document kinds
//! before saving. The corrected design moves `save` into a separate
//! [`Writable`] capability that only writable documents expose.

use crate::core::effect::{Effect, EffectSink};

/// Capability of being saved.
pub trait Writable {
    fn save(&self, sink: &mut dyn EffectSink);
}

/// A document that can be opened.
pub trait Document {
    fn filename(&self) -> &str;

    fn open(&self, sink: &mut dyn EffectSink);

    /// The writable capability, if this document has one.
    fn as_writable(&self) -> Option<&dyn Writable> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOnlyDocument {
    filename: String,
}

impl ReadOnlyDocument {
    pub fn new(filename: impl Into<String>) -> Self {
        ReadOnlyDocument {
            filename: filename.into(),
        }
    }
}

impl Document for ReadOnlyDocument {
    fn filename(&self) -> &str {
        &self.filename
    }

    fn open(&self, sink: &mut dyn EffectSink) {
        sink.emit(Effect::new(
            "document",
            "open",
            format!("Open doc {}", self.filename),
        ));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WritableDocument {
    filename: String,
}

impl WritableDocument {
    pub fn new(filename: impl Into<String>) -> Self {
        WritableDocument {
            filename: filename.into(),
        }
    }
}

impl Document for WritableDocument {
    fn filename(&self) -> &str {
        &self.filename
    }

    fn open(&self, sink: &mut dyn EffectSink) {
        sink.emit(Effect::new(
            "document",
            "open",
            format!("Open doc {}", self.filename),
        ));
    }

    fn as_writable(&self) -> Option<&dyn Writable> {
        Some(self)
    }
}

impl Writable for WritableDocument {
    fn save(&self, sink: &mut dyn EffectSink) {
        sink.emit(Effect::new(
            "document",
            "save",
            format!("Save doc {}", self.filename),
        ));
    }
}

/// A set of documents, with the writable subset computed once.
pub struct Project {
    documents: Vec<Box<dyn Document>>,
    writable: Vec<usize>,
}

impl Project {
    pub fn new(documents: Vec<Box<dyn Document>>) -> Self {
        let writable = documents
            .iter()
            .enumerate()
            .filter(|(_, doc)| doc.as_writable().is_some())
            .map(|(i, _)| i)
            .collect();
        Project {
            documents,
            writable,
        }
    }

    pub fn documents(&self) -> impl Iterator<Item = &dyn Document> + '_ {
        self.documents.iter().map(|doc| doc.as_ref())
    }

    /// Filenames of the documents `save_all` will save.
    pub fn writable_filenames(&self) -> Vec<&str> {
        self.writable
            .iter()
            .map(|&i| self.documents[i].filename())
            .collect()
    }

    pub fn open_all(&self, sink: &mut dyn EffectSink) {
        for doc in &self.documents {
            doc.open(sink);
        }
    }

    pub fn save_all(&self, sink: &mut dyn EffectSink) {
        for &i in &self.writable {
            if let Some(writable) = self.documents[i].as_writable() {
                writable.save(sink);
            }
        }
    }
}

impl std::fmt::Debug for Project {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let filenames: Vec<&str> = self.documents().map(|doc| doc.filename()).collect();
        f.debug_struct("Project")
            .field("documents", &filenames)
            .field("writable", &self.writable_filenames())
            .finish()
    }
}

pub mod legacy {
    use crate::core::effect::{Effect, EffectSink};
    use crate::principles::errors::UnsupportedOperation;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum DocumentKind {
        Regular,
        ReadOnly,
    }

    /// Document whose `save` may refuse at run time.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Document {
        filename: String,
        kind: DocumentKind,
    }

    impl Document {
        pub fn regular(filename: impl Into<String>) -> Self {
            Document {
                filename: filename.into(),
                kind: DocumentKind::Regular,
            }
        }

        pub fn read_only(filename: impl Into<String>) -> Self {
            Document {
                filename: filename.into(),
                kind: DocumentKind::ReadOnly,
            }
        }

        pub fn filename(&self) -> &str {
            &self.filename
        }

        pub fn kind(&self) -> DocumentKind {
            self.kind
        }

        pub fn open(&self, sink: &mut dyn EffectSink) {
            sink.emit(Effect::new(
                "document",
                "open",
                format!("Open doc {}", self.filename),
            ));
        }

        pub fn save(&self, sink: &mut dyn EffectSink) -> Result<(), UnsupportedOperation> {
            match self.kind {
                DocumentKind::Regular => {
                    sink.emit(Effect::new(
                        "document",
                        "save",
                        format!("Save doc {}", self.filename),
                    ));
                    Ok(())
                }
                DocumentKind::ReadOnly => Err(UnsupportedOperation::new(
                    format!("read-only document {}", self.filename),
                    "save",
                )),
            }
        }
    }

    #[derive(Debug, Clone, Default)]
    pub struct Project {
        documents: Vec<Document>,
    }

    impl Project {
        pub fn new(documents: Vec<Document>) -> Self {
            Project { documents }
        }

        pub fn open_all(&self, sink: &mut dyn EffectSink) {
            for doc in &self.documents {
                doc.open(sink);
            }
        }

        /// Saves everything except read-only documents, found by inspecting
        /// each document's kind.
        pub fn save_all(&self, sink: &mut dyn EffectSink) -> Result<(), UnsupportedOperation> {
            for doc in &self.documents {
                if doc.kind() != DocumentKind::ReadOnly {
                    doc.save(sink)?;
                }
            }
            Ok(())
        }

        /// Treats every document as substitutable and fails on the first
        /// read-only one.
        pub fn try_save_all(&self, sink: &mut dyn EffectSink) -> Result<(), UnsupportedOperation> {
            for doc in &self.documents {
                doc.save(sink)?;
            }
            Ok(())
        }
    }
}
