use lopdf::content::Content;
use lopdf::{Dictionary, Object, ObjectId, Stream, StringFormat, dictionary};
use std::collections::BTreeMap;
use std::io::{self, Seek, Write};

const RESOURCES_ID: ObjectId = (1, 0);
const PAGES_ID: ObjectId = (2, 0);
const CATALOG_ID: ObjectId = (3, 0);

/// Buffers numbered objects and writes the whole file in one pass on
/// [`PdfWriter::finish`]: header, objects in id order, a single-section
/// xref table and the trailer.
///
/// Ids 1 to 3 are reserved for the shared resources, the page tree and the
/// catalog, so pages can reference them before they exist.
pub struct PdfWriter<W: Write + Seek> {
    writer: W,
    next_id: u32,
    page_ids: Vec<ObjectId>,
    info: Option<Dictionary>,
    objects: BTreeMap<ObjectId, Object>,
}

impl<W: Write + Seek> PdfWriter<W> {
    pub fn new(mut writer: W, version: &str) -> io::Result<Self> {
        writer.write_all(format!("%PDF-{}\n%âãÏÓ\n", version).as_bytes())?;
        Ok(Self {
            writer,
            next_id: CATALOG_ID.0 + 1,
            page_ids: Vec::new(),
            info: None,
            objects: BTreeMap::new(),
        })
    }

    pub fn pages_id(&self) -> ObjectId {
        PAGES_ID
    }

    pub fn resources_id(&self) -> ObjectId {
        RESOURCES_ID
    }

    pub fn add_object(&mut self, object: Object) -> ObjectId {
        let id = (self.next_id, 0);
        self.next_id += 1;
        self.objects.insert(id, object);
        id
    }

    pub fn add_content_stream(&mut self, content: Content) -> Result<ObjectId, lopdf::Error> {
        let stream = Stream::new(dictionary! {}, content.encode()?);
        Ok(self.add_object(Object::Stream(stream)))
    }

    /// Shared resources dictionary referenced by every page.
    pub fn set_resources(&mut self, fonts: Dictionary, xobjects: Dictionary) {
        let mut resources = dictionary! { "Font" => fonts };
        if !xobjects.is_empty() {
            resources.set("XObject", xobjects);
        }
        self.objects.insert(RESOURCES_ID, resources.into());
    }

    /// Appends a page to the page tree, in reading order.
    pub fn push_page(&mut self, page_id: ObjectId) {
        self.page_ids.push(page_id);
    }

    pub fn set_info(&mut self, info: Dictionary) {
        self.info = Some(info);
    }

    pub fn finish(mut self) -> io::Result<W> {
        let kids: Vec<Object> = self.page_ids.iter().copied().map(Object::Reference).collect();
        let page_count = kids.len() as i64;
        self.objects.insert(
            PAGES_ID,
            dictionary! { "Type" => "Pages", "Kids" => kids, "Count" => page_count }.into(),
        );
        self.objects
            .insert(CATALOG_ID, dictionary! { "Type" => "Catalog", "Pages" => PAGES_ID }.into());
        self.objects.entry(RESOURCES_ID).or_insert_with(|| Dictionary::new().into());
        let info_id = self.info.take().map(|info| self.add_object(info.into()));

        // offsets[n] is the byte offset of object n; object 0 heads the free list.
        let size = self.next_id as usize;
        let mut offsets: Vec<Option<u64>> = vec![None; size];
        for (id, object) in &self.objects {
            offsets[id.0 as usize] = Some(self.writer.stream_position()?);
            writeln!(self.writer, "{} {} obj", id.0, id.1)?;
            write_object(&mut self.writer, object)?;
            writeln!(self.writer, "\nendobj")?;
        }

        let xref_start = self.writer.stream_position()?;
        writeln!(self.writer, "xref\n0 {}", size)?;
        for offset in &offsets {
            match offset {
                Some(offset) => writeln!(self.writer, "{:010} 00000 n ", offset)?,
                None => writeln!(self.writer, "0000000000 65535 f ")?,
            }
        }

        let mut trailer = dictionary! { "Size" => size as i64, "Root" => CATALOG_ID };
        if let Some(info_id) = info_id {
            trailer.set("Info", info_id);
        }
        writeln!(self.writer, "trailer")?;
        write_dictionary(&mut self.writer, &trailer)?;
        write!(self.writer, "\nstartxref\n{}\n%%EOF", xref_start)?;
        self.writer.flush()?;
        Ok(self.writer)
    }
}

fn write_object(w: &mut dyn Write, object: &Object) -> io::Result<()> {
    match object {
        Object::Null => w.write_all(b"null"),
        Object::Boolean(b) => write!(w, "{}", b),
        Object::Integer(i) => write!(w, "{}", i),
        Object::Real(r) => write!(w, "{:.3}", r),
        Object::Name(name) => {
            w.write_all(b"/")?;
            w.write_all(name)
        }
        Object::String(bytes, StringFormat::Literal) => {
            let mut escaped = Vec::with_capacity(bytes.len() + 2);
            escaped.push(b'(');
            for &byte in bytes {
                if matches!(byte, b'(' | b')' | b'\\') {
                    escaped.push(b'\\');
                }
                escaped.push(byte);
            }
            escaped.push(b')');
            w.write_all(&escaped)
        }
        Object::String(bytes, StringFormat::Hexadecimal) => {
            w.write_all(b"<")?;
            for byte in bytes {
                write!(w, "{:02X}", byte)?;
            }
            w.write_all(b">")
        }
        Object::Array(items) => {
            w.write_all(b"[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    w.write_all(b" ")?;
                }
                write_object(w, item)?;
            }
            w.write_all(b"]")
        }
        Object::Dictionary(dict) => write_dictionary(w, dict),
        Object::Stream(stream) => {
            let mut dict = stream.dict.clone();
            dict.set("Length", stream.content.len() as i64);
            write_dictionary(w, &dict)?;
            w.write_all(b"\nstream\n")?;
            w.write_all(&stream.content)?;
            w.write_all(b"\nendstream")
        }
        Object::Reference((number, generation)) => write!(w, "{} {} R", number, generation),
    }
}

/// Keys are written sorted so identical documents serialize identically.
fn write_dictionary(w: &mut dyn Write, dict: &Dictionary) -> io::Result<()> {
    let sorted: BTreeMap<&Vec<u8>, &Object> = dict.iter().collect();
    w.write_all(b"<<")?;
    for (key, value) in sorted {
        w.write_all(b"/")?;
        w.write_all(key)?;
        w.write_all(b" ")?;
        write_object(w, value)?;
        w.write_all(b" ")?;
    }
    w.write_all(b">>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn one_page_document() -> Vec<u8> {
        let mut writer = PdfWriter::new(Cursor::new(Vec::new()), "1.7").unwrap();
        writer.set_resources(Dictionary::new(), Dictionary::new());
        let content = writer.add_content_stream(Content { operations: vec![] }).unwrap();
        let page = dictionary! {
            "Type" => "Page",
            "Parent" => writer.pages_id(),
            "MediaBox" => vec![0.into(), 0.into(), 100.into(), 100.into()],
            "Contents" => content,
            "Resources" => writer.resources_id(),
        };
        let page_id = writer.add_object(page.into());
        writer.push_page(page_id);
        writer.set_info(dictionary! { "Producer" => Object::string_literal("test (draft)") });
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn single_page_document_loads_in_lopdf() {
        let bytes = one_page_document();
        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
        assert!(doc.trailer.get(b"Info").is_ok());
    }

    #[test]
    fn xref_entries_are_twenty_bytes() {
        let bytes = one_page_document();
        let text = String::from_utf8_lossy(&bytes);
        let xref = &text[text.find("xref\n").unwrap()..text.find("trailer").unwrap()];
        let entries: Vec<&str> = xref.split_inclusive('\n').skip(2).collect();
        assert_eq!(entries.len(), 7);
        assert!(entries.iter().all(|e| e.len() == 20));
        assert!(text.contains("(test \\(draft\\))"));
    }

    #[test]
    fn output_is_deterministic() {
        assert_eq!(one_page_document(), one_page_document());
    }
}
