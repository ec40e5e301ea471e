//! Indented MJCF emission over `quick_xml::Writer`.

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, Event};

use crate::{SceneError, SceneResult};

/// Builds one MJCF document in memory.
///
/// Attribute values are passed pre-formatted; callers decide precision
/// (e.g. `{:.3}` for spawn heights, `{:.2}` for leg lengths).
pub struct MjcfWriter {
    inner: Writer<Vec<u8>>,
}

impl MjcfWriter {
    pub fn new() -> Self {
        Self { inner: Writer::new_with_indent(Vec::new(), b' ', 4) }
    }

    /// Open `<name attrs…>`.
    pub fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> SceneResult<()> {
        self.emit(Event::Start(element(name, attrs)))
    }

    /// Write a self-closing `<name attrs…/>`.
    pub fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> SceneResult<()> {
        self.emit(Event::Empty(element(name, attrs)))
    }

    /// Close `</name>`.
    pub fn end(&mut self, name: &str) -> SceneResult<()> {
        self.emit(Event::End(BytesEnd::new(name)))
    }

    /// Consume the writer and return the document text with a trailing
    /// newline.
    pub fn finish(self) -> SceneResult<String> {
        let mut out = String::from_utf8(self.inner.into_inner())
            .map_err(|e| SceneError::Xml(format!("UTF-8 error: {e}")))?;
        out.push('\n');
        Ok(out)
    }

    fn emit(&mut self, event: Event<'_>) -> SceneResult<()> {
        self.inner
            .write_event(event)
            .map_err(|e| SceneError::Xml(format!("write error: {e}")))
    }
}

impl Default for MjcfWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn element<'a>(name: &'a str, attrs: &[(&str, &str)]) -> BytesStart<'a> {
    let mut e = BytesStart::new(name);
    for &(key, value) in attrs {
        e.push_attribute((key, value));
    }
    e
}
