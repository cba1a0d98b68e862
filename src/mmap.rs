use std::{fs::File, path::Path, sync::Arc};

use memmap2::Mmap;

/// Read-only, memory-mapped view of the entire input file.
///
/// The whole pipeline parses in place through `&[u8]` views of this buffer;
/// the file content is never copied into user-space buffers. Cloning shares
/// the same mapping, which is how worker threads get read-only access to it.
#[derive(Clone)]
pub struct MmapSource {
    // A zero-length file cannot be memory-mapped, so the empty input is an
    // unmapped source that still exposes empty bytes.
    map: Option<Arc<Mmap>>,
}

impl MmapSource {
    /// Opens `path` and maps its content.
    ///
    /// The file descriptor and the mapping are released by `Drop` on every
    /// exit path, including a construction failure after open.
    pub fn new<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let file = File::open(path)?;
        let len = file.metadata()?.len();

        let map = if len == 0 {
            None
        } else {
            // Read-only mapping; the input file is assumed unmodified for
            // the lifetime of the run.
            Some(Arc::new(unsafe { Mmap::map(&file)? }))
        };
        Ok(Self { map })
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.map.as_deref().map_or(&[], |map| &map[..])
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
