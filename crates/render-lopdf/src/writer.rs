use lopdf::content::Content;
use lopdf::xref::{Xref, XrefEntry, XrefType};
use lopdf::{Dictionary, Object, ObjectId, Stream, dictionary};
use permit_render_core::RenderError;
use std::collections::BTreeMap;
use std::io::{self, Seek, Write};

/// Writes a PDF file from buffered indirect objects.
///
/// Object ids are handed out up front so pages and the page tree can refer to
/// each other before either is written. Everything is flushed, followed by a
/// classic cross-reference table and trailer, in [`finish`](Self::finish).
pub struct StreamingPdfWriter<W: Write + Seek> {
    writer: W,
    max_id: u32,
    pub catalog_id: ObjectId,
    pub pages_id: ObjectId,
    pub resources_id: ObjectId,
    font_dict: Dictionary,
    xobject_dict: Dictionary,
    info: Dictionary,
    page_ids: Vec<ObjectId>,
    buffered_objects: BTreeMap<ObjectId, Object>,
    xref: Xref,
}

impl<W: Write + Seek> StreamingPdfWriter<W> {
    pub fn new(mut writer: W, version: &str, font_dict: Dictionary) -> io::Result<Self> {
        writer.write_all(format!("%PDF-{}\n%âãÏÓ\n", version).as_bytes())?;

        Ok(Self {
            writer,
            max_id: 3,
            resources_id: (1, 0),
            pages_id: (2, 0),
            catalog_id: (3, 0),
            font_dict,
            xobject_dict: Dictionary::new(),
            info: Dictionary::new(),
            page_ids: Vec::new(),
            buffered_objects: BTreeMap::new(),
            xref: Xref::new(0, XrefType::CrossReferenceTable),
        })
    }

    pub fn new_object_id(&mut self) -> ObjectId {
        self.max_id += 1;
        (self.max_id, 0)
    }

    pub fn buffer_object(&mut self, object: Object) -> ObjectId {
        let id = self.new_object_id();
        self.buffered_objects.insert(id, object);
        id
    }

    pub fn buffer_object_at_id(&mut self, id: ObjectId, object: Object) {
        if id.0 > self.max_id {
            self.max_id = id.0;
        }
        self.buffered_objects.insert(id, object);
    }

    pub fn buffer_content_stream(&mut self, content: Content) -> Result<ObjectId, RenderError> {
        let stream = Stream::new(dictionary! {}, content.encode()?);
        Ok(self.buffer_object(Object::Stream(stream)))
    }

    /// Makes an image XObject available to every page under `name`.
    pub fn register_xobject(&mut self, name: &str, id: ObjectId) {
        self.xobject_dict.set(name.as_bytes(), Object::Reference(id));
    }

    /// Adds an entry to the document information dictionary.
    pub fn set_info(&mut self, key: &str, value: Object) {
        self.info.set(key.as_bytes(), value);
    }

    pub fn set_page_ids(&mut self, page_ids: Vec<ObjectId>) {
        self.page_ids = page_ids;
    }

    pub fn finish(mut self) -> io::Result<W> {
        let mut resources = dictionary! { "Font" => std::mem::replace(&mut self.font_dict, Dictionary::new()) };
        if !self.xobject_dict.is_empty() {
            resources.set("XObject", std::mem::replace(&mut self.xobject_dict, Dictionary::new()));
        }
        self.buffer_object_at_id(self.resources_id, resources.into());

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => self.page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
            "Count" => self.page_ids.len() as i64,
        };
        self.buffer_object_at_id(self.pages_id, pages_dict.into());

        let catalog_dict = dictionary! { "Type" => "Catalog", "Pages" => self.pages_id };
        self.buffer_object_at_id(self.catalog_id, catalog_dict.into());

        let info_id = if self.info.is_empty() {
            None
        } else {
            let info = std::mem::replace(&mut self.info, Dictionary::new());
            Some(self.buffer_object(info.into()))
        };

        for (id, object) in &self.buffered_objects {
            internal_writer::write_indirect_object(&mut self.writer, *id, object, &mut self.xref)?;
        }

        let xref_start = self.writer.stream_position()?;
        self.xref.size = self.max_id + 1;
        internal_writer::write_xref(&mut self.writer, &self.xref)?;

        let mut trailer = dictionary! { "Size" => self.xref.size as i64, "Root" => self.catalog_id };
        if let Some(info_id) = info_id {
            trailer.set("Info", info_id);
        }
        writeln!(self.writer, "trailer")?;
        internal_writer::write_dictionary(&mut self.writer, &trailer)?;
        writeln!(self.writer, "\nstartxref")?;
        writeln!(self.writer, "{}", xref_start)?;
        write!(self.writer, "%%EOF")?;

        self.writer.flush()?;
        Ok(self.writer)
    }
}

mod internal_writer {
    use super::*;
    use lopdf::StringFormat;

    pub fn write_indirect_object<W: Write + Seek>(
        writer: &mut W,
        id: ObjectId,
        object: &Object,
        xref: &mut Xref,
    ) -> io::Result<()> {
        let offset = u32::try_from(writer.stream_position()?)
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "PDF exceeds 4 GiB xref offsets"))?;
        xref.insert(id.0, XrefEntry::Normal { offset, generation: id.1 });
        writeln!(writer, "{} {} obj", id.0, id.1)?;
        write_object(writer, object)?;
        writeln!(writer, "\nendobj")?;
        Ok(())
    }

    pub fn write_object(writer: &mut dyn Write, object: &Object) -> io::Result<()> {
        match object {
            Object::Null => writer.write_all(b"null"),
            Object::Boolean(b) => writer.write_all(if *b { b"true" } else { b"false" }),
            Object::Integer(i) => write!(writer, "{}", i),
            Object::Real(r) => write!(writer, "{:.3}", r),
            Object::Name(n) => {
                writer.write_all(b"/")?;
                writer.write_all(n)
            }
            Object::String(s, format) => match format {
                StringFormat::Literal => {
                    writer.write_all(b"(")?;
                    for &byte in s {
                        if byte == b'(' || byte == b')' || byte == b'\\' {
                            writer.write_all(b"\\")?;
                        }
                        writer.write_all(&[byte])?;
                    }
                    writer.write_all(b")")
                }
                StringFormat::Hexadecimal => {
                    write!(writer, "<{}>", s.iter().map(|b| format!("{:02X}", b)).collect::<String>())
                }
            },
            Object::Array(arr) => {
                writer.write_all(b"[")?;
                for (i, obj) in arr.iter().enumerate() {
                    if i > 0 {
                        writer.write_all(b" ")?;
                    }
                    write_object(writer, obj)?;
                }
                writer.write_all(b"]")
            }
            Object::Dictionary(dict) => write_dictionary(writer, dict),
            Object::Stream(stream) => {
                let mut dict = stream.dict.clone();
                dict.set("Length", stream.content.len() as i64);
                write_dictionary(writer, &dict)?;
                writer.write_all(b"\nstream\n")?;
                writer.write_all(&stream.content)?;
                writer.write_all(b"\nendstream")
            }
            Object::Reference(id) => write!(writer, "{} {} R", id.0, id.1),
        }
    }

    pub fn write_dictionary(writer: &mut dyn Write, dict: &Dictionary) -> io::Result<()> {
        writer.write_all(b"<<")?;
        let sorted_keys: BTreeMap<_, _> = dict.iter().collect();
        for (key, value) in sorted_keys {
            writer.write_all(b"/")?;
            writer.write_all(key)?;
            writer.write_all(b" ")?;
            write_object(writer, value)?;
            writer.write_all(b" ")?;
        }
        writer.write_all(b">>")
    }

    /// Writes a single-section xref table covering ids `0..xref.size`.
    ///
    /// Ids that were allocated but never written are listed as free.
    pub fn write_xref<W: Write>(writer: &mut W, xref: &Xref) -> io::Result<()> {
        writeln!(writer, "xref")?;
        writeln!(writer, "0 {}", xref.size.max(1))?;
        writeln!(writer, "0000000000 65535 f ")?;
        for id in 1..xref.size {
            match xref.get(id) {
                Some(XrefEntry::Normal { offset, generation }) => {
                    writeln!(writer, "{:010} {:05} n ", offset, generation)?
                }
                _ => writeln!(writer, "0000000000 00000 f ")?,
            }
        }
        Ok(())
    }
}
