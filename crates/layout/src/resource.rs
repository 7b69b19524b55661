use serde::{Serialize, Serializer, ser::SerializeStruct};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A reference-counted container for shared, immutable data like images.
pub type SharedData = Arc<Vec<u8>>;

/// Encoded image bytes (PNG, JPEG, GIF) plus a stable content key used to
/// deduplicate XObjects when the same image appears more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    key: String,
    bytes: SharedData,
}

impl ImageData {
    pub fn new(bytes: Vec<u8>) -> Self {
        let mut hasher = DefaultHasher::new();
        bytes.hash(&mut hasher);
        Self {
            key: format!("img-{:016x}", hasher.finish()),
            bytes: Arc::new(bytes),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn shared(&self) -> SharedData {
        Arc::clone(&self.bytes)
    }
}

impl Serialize for ImageData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ImageData", 2)?;
        state.serialize_field("key", &self.key)?;
        state.serialize_field("byteLength", &self.bytes.len())?;
        state.end()
    }
}
