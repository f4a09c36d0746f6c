/// Minimal view of the decoder's codec context.
///
/// The broker does not manage decoding; it only needs the context's identity
/// for log messages and its open/closed state to check the probe
/// precondition. Real pipelines wrap their codec handle in one of these for
/// the duration of the stream.
#[derive(Debug)]
pub struct DecodeContext {
    codec: String,
    coded_width: u32,
    coded_height: u32,
    open: bool,
}

impl DecodeContext {
    pub fn open(codec: impl Into<String>, coded_width: u32, coded_height: u32) -> Self {
        Self {
            codec: codec.into(),
            coded_width,
            coded_height,
            open: true,
        }
    }

    pub fn codec(&self) -> &str {
        &self.codec
    }

    pub fn coded_width(&self) -> u32 {
        self.coded_width
    }

    pub fn coded_height(&self) -> u32 {
        self.coded_height
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Marks the context closed. Any session created against it must have
    /// been closed first; see [`crate::AccelSession`].
    pub fn close(&mut self) {
        self.open = false;
    }
}
