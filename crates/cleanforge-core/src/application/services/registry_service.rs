//! Registry Service - idempotent singleton registry patching.
//!
//! The one structural edit in the generator: ensuring the generated
//! `src/application/singleton.ts` registers a database configuration
//! singleton. Everything else the tool writes is whole-file output.

use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::registry::{RegistryDocument, SingletonRegistration},
    error::ForgeResult,
};

/// Patches singleton registry files.
///
/// Every call reads, parses, mutates, and writes in isolation; no document
/// state survives between calls, so concurrent tool runs never see each
/// other's in-memory edits.
pub struct RegistryService {
    filesystem: Arc<dyn Filesystem>,
}

impl RegistryService {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Ensure `registration` is wired into the registry file at `path`.
    ///
    /// Missing file bootstraps a fresh document. The mutated document is
    /// serialized to a buffer first and written in a single call, so a
    /// failed write never leaves a partially patched registry. Returns
    /// whether the file changed; re-running with the same registration is
    /// a no-op.
    #[instrument(skip(self, registration), fields(path = %path.display()))]
    pub fn ensure_singleton_registered(
        &self,
        path: &Path,
        registration: &SingletonRegistration,
    ) -> ForgeResult<bool> {
        let existed = self.filesystem.exists(path);
        let mut document = if existed {
            let text = self.filesystem.read_file(path)?;
            RegistryDocument::parse(&text)?
        } else {
            debug!("Registry file absent, bootstrapping");
            RegistryDocument::empty()
        };

        let changed = document.ensure_registered(registration);
        if !changed && existed {
            debug!("Registration already present, nothing to write");
            return Ok(false);
        }

        let serialized = document.print();
        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(path, &serialized)?;

        info!(
            entries = document.entry_count(),
            "Singleton registry updated"
        );
        Ok(true)
    }
}
