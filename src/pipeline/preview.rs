//! Live previews for an editing session.
//!
//! Each request bumps a generation counter. A result whose generation is no
//! longer current is dropped instead of displayed, and replacing the current
//! preview releases the previous document from the store.

use super::export::ExportedPdf;
use super::orchestrator::{RenderRequest, RiderPipeline};
use crate::error::PipelineError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use log::debug;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Weak};

type Entries = Mutex<HashMap<u64, Arc<ExportedPdf>>>;

fn lock(entries: &Entries) -> MutexGuard<'_, HashMap<u64, Arc<ExportedPdf>>> {
    entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Rendered previews that are still displayed somewhere.
#[derive(Clone, Default)]
pub struct PreviewStore {
    entries: Arc<Entries>,
    next_id: Arc<AtomicU64>,
}

impl PreviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps `pdf` alive until the returned handle is dropped.
    pub fn register(&self, pdf: ExportedPdf) -> PreviewHandle {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let pdf = Arc::new(pdf);
        lock(&self.entries).insert(id, Arc::clone(&pdf));
        PreviewHandle {
            id,
            pdf,
            store: Arc::downgrade(&self.entries),
        }
    }

    pub fn active_count(&self) -> usize {
        lock(&self.entries).len()
    }

    pub fn contains(&self, id: u64) -> bool {
        lock(&self.entries).contains_key(&id)
    }
}

/// A registered preview. Dropping it releases the document.
pub struct PreviewHandle {
    id: u64,
    pdf: Arc<ExportedPdf>,
    store: Weak<Entries>,
}

impl PreviewHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn bytes(&self) -> &[u8] {
        &self.pdf.bytes
    }

    pub fn filename(&self) -> &str {
        &self.pdf.filename
    }

    pub fn data_uri(&self) -> String {
        format!("data:application/pdf;base64,{}", STANDARD.encode(&self.pdf.bytes))
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        if let Some(entries) = self.store.upgrade() {
            lock(&entries).remove(&self.id);
            debug!("[PREVIEW] Released preview {}.", self.id);
        }
    }
}

/// One editor's preview pane. Only the latest request is ever displayed.
pub struct PreviewSession {
    pipeline: RiderPipeline,
    store: PreviewStore,
    generation: AtomicU64,
    current: tokio::sync::Mutex<Option<PreviewHandle>>,
    closed: AtomicBool,
}

impl PreviewSession {
    pub fn new(pipeline: RiderPipeline, store: PreviewStore) -> Self {
        Self {
            pipeline,
            store,
            generation: AtomicU64::new(0),
            current: tokio::sync::Mutex::new(None),
            closed: AtomicBool::new(false),
        }
    }

    pub fn store(&self) -> &PreviewStore {
        &self.store
    }

    fn check_current(&self, generation: u64) -> Result<(), PipelineError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(PipelineError::Closed);
        }
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!("[PREVIEW] Discarding stale preview (generation {}).", generation);
            return Err(PipelineError::Superseded);
        }
        Ok(())
    }

    /// Renders `request` and makes it the displayed preview, returning its
    /// data URI. Fails with `Superseded` if a newer request arrived meanwhile.
    pub async fn request(&self, request: RenderRequest) -> Result<String, PipelineError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.check_current(generation)?;

        let pdf = self.pipeline.generate(request).await?;
        self.check_current(generation)?;

        let mut current = self.current.lock().await;
        self.check_current(generation)?;
        let handle = self.store.register(pdf);
        let uri = handle.data_uri();
        *current = Some(handle);
        Ok(uri)
    }

    pub async fn current_uri(&self) -> Option<String> {
        self.current.lock().await.as_ref().map(PreviewHandle::data_uri)
    }

    /// Releases the displayed preview. Requests still in flight are discarded.
    pub async fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.current.lock().await.take();
    }
}
