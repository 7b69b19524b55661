pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use serde_json::Value;
use stagerider::{PipelineBuilder, PipelineError, RenderRequest, RiderPipeline};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>, filename: String) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, filename, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Text of a single page (1-based)
    pub fn page_text(&self, page: u32) -> String {
        self.doc.extract_text(&[page]).unwrap_or_default()
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

pub fn pipeline() -> Result<RiderPipeline, PipelineError> {
    PipelineBuilder::new().build()
}

/// Render a rider in English with default options
pub fn generate_pdf(rider: Value) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    generate_pdf_with(RenderRequest::new(rider).with_locale("en"))
}

/// Render an arbitrary request through the async entry point
pub fn generate_pdf_with(request: RenderRequest) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let pipeline = pipeline()?;
    let exported = tokio::runtime::Runtime::new()?.block_on(pipeline.generate(request))?;
    GeneratedPdf::from_bytes(exported.bytes, exported.filename)
}
