//! Exclusive ownership of one engine face
//!
//! A [`FaceHandle`] is created by exactly one of three paths and releases the
//! face when it is dropped. Moving the handle moves ownership of the face.

use std::path::Path;
use std::sync::Arc;

use crate::engine::{FontEngine, FontFace};
use crate::{FontError, FontOrigin, FontResult};

/// Owner of a single font face
pub struct FaceHandle<F: FontFace> {
    face: F,
    origin: FontOrigin,
}

impl<F: FontFace> FaceHandle<F> {
    /// Open a face from a file through `engine`
    pub fn open_path<E>(engine: &E, path: &Path, face_index: u32) -> FontResult<Self>
    where
        E: FontEngine<Face = F>,
    {
        let face = engine.open_path(path, face_index).map_err(|err| {
            log::error!(
                "Engine returned error {} when opening font {}: {}",
                err.code,
                path.display(),
                err.message
            );
            FontError::load_failed(&err, path.display().to_string())
        })?;

        Ok(Self {
            face,
            origin: FontOrigin::Path,
        })
    }

    /// Open a face from bytes owned by the caller of this function
    pub fn open_buffer<E>(engine: &E, data: Arc<[u8]>, face_index: u32) -> FontResult<Self>
    where
        E: FontEngine<Face = F>,
    {
        let len = data.len();
        let face = engine.open_memory(data, face_index).map_err(|err| {
            log::error!(
                "Engine returned error {} when opening a buffered font ({} bytes): {}",
                err.code,
                len,
                err.message
            );
            FontError::load_failed(&err, format!("<memory font, {} bytes>", len))
        })?;

        Ok(Self {
            face,
            origin: FontOrigin::Buffer,
        })
    }

    /// Take ownership of a face the caller already opened
    pub fn adopt(face: F) -> Self {
        Self {
            face,
            origin: FontOrigin::Adopted,
        }
    }

    pub fn origin(&self) -> FontOrigin {
        self.origin
    }

    /// A face is usable once it reports a non-zero design grid
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.face.units_per_em() > 0
    }

    /// The face, if it is usable for `operation`
    #[inline]
    pub fn face(&self, operation: &str) -> FontResult<&F> {
        if self.is_valid() {
            Ok(&self.face)
        } else {
            Err(FontError::invalid_handle(operation))
        }
    }

    /// Mutable access to the face, if it is usable for `operation`
    #[inline]
    pub fn face_mut(&mut self, operation: &str) -> FontResult<&mut F> {
        if self.is_valid() {
            Ok(&mut self.face)
        } else {
            Err(FontError::invalid_handle(operation))
        }
    }

    /// The face without the usability check, for best-effort queries
    #[inline]
    pub(crate) fn raw(&self) -> &F {
        &self.face
    }

    #[inline]
    pub(crate) fn raw_mut(&mut self) -> &mut F {
        &mut self.face
    }
}

impl<F: FontFace> Drop for FaceHandle<F> {
    fn drop(&mut self) {
        log::trace!("Releasing font face acquired from {}", self.origin);
    }
}

impl<F: FontFace + std::fmt::Debug> std::fmt::Debug for FaceHandle<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FaceHandle")
            .field("origin", &self.origin)
            .field("face", &self.face)
            .finish()
    }
}
