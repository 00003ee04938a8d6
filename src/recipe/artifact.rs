use super::store::RecipeStore;
use crate::error::ArtifactError;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

/// Persistence of a built store, so collaborators can cache the validated
/// table instead of re-parsing and re-validating the raw source on every
/// start. The encoding is bincode; the artifact preserves recipe content and
/// insertion order exactly.
impl RecipeStore {
    /// Serializes the store to a byte vector.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ArtifactError> {
        encode_to_vec(self, standard())
            .map_err(|e| ArtifactError::Encode(format!("Serialization failed: {}", e)))
    }

    /// Deserializes a store from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        decode_from_slice(bytes, standard())
            .map(|(store, _)| store) // bincode 2 returns a tuple (data, bytes_read)
            .map_err(|e| ArtifactError::Decode(format!("Deserialization failed: {}", e)))
    }

    /// Saves the store artifact to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ArtifactError> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path).map_err(|e| ArtifactError::Io {
            path: path.display().to_string(),
            message: format!("Could not create file: {}", e),
        })?;
        file.write_all(&bytes).map_err(|e| ArtifactError::Io {
            path: path.display().to_string(),
            message: format!("Could not write to file: {}", e),
        })?;
        Ok(())
    }

    /// Loads a store artifact from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let mut file = fs::File::open(path).map_err(|e| ArtifactError::Io {
            path: path.display().to_string(),
            message: format!("Could not open file: {}", e),
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| ArtifactError::Io {
            path: path.display().to_string(),
            message: format!("Could not read from file: {}", e),
        })?;
        Self::from_bytes(&bytes)
    }
}
