//! Checksummed binary save file.
//!
//! File format:
//! - magic (8 bytes, carries the format version)
//! - data length (4 bytes)
//! - bincode-serialized [`SaveData`]
//! - SHA-256 checksum over the preceding bytes (32 bytes)
//!
//! A load that fails any check returns an error without touching the
//! caller's in-memory state; corrupt saves fail closed.

use crate::core::constants::SAVE_MAGIC;
use crate::save::SaveData;
use directories::ProjectDirs;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Uses the platform config directory for the save file.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "aldenhaven").ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })?;
        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;
        Ok(Self {
            save_path: config_dir.join("save.dat"),
        })
    }

    /// A manager writing to an explicit path (used by tests and tools).
    pub fn with_path(save_path: PathBuf) -> Self {
        Self { save_path }
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    pub fn path(&self) -> &PathBuf {
        &self.save_path
    }

    /// Writes the save document with its checksum trailer.
    pub fn save(&self, data: &SaveData) -> io::Result<()> {
        let payload =
            bincode::serialize(data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let payload_len = payload.len() as u32;

        let mut hasher = Sha256::new();
        hasher.update(SAVE_MAGIC.to_le_bytes());
        hasher.update(payload_len.to_le_bytes());
        hasher.update(&payload);
        let checksum = hasher.finalize();

        let mut file = fs::File::create(&self.save_path)?;
        file.write_all(&SAVE_MAGIC.to_le_bytes())?;
        file.write_all(&payload_len.to_le_bytes())?;
        file.write_all(&payload)?;
        file.write_all(&checksum)?;

        log::debug!("saved game to {}", self.save_path.display());
        Ok(())
    }

    /// Reads and verifies the save document. Errors on missing file, bad
    /// magic, bad checksum or undecodable payload.
    pub fn load(&self) -> io::Result<SaveData> {
        let mut file = fs::File::open(&self.save_path)?;

        let mut magic_bytes = [0u8; 8];
        file.read_exact(&mut magic_bytes)?;
        let magic = u64::from_le_bytes(magic_bytes);
        if magic != SAVE_MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Invalid save magic: expected 0x{:016X}, got 0x{:016X}",
                    SAVE_MAGIC, magic
                ),
            ));
        }

        let mut length_bytes = [0u8; 4];
        file.read_exact(&mut length_bytes)?;
        let payload_len = u32::from_le_bytes(length_bytes);

        let mut payload = vec![0u8; payload_len as usize];
        file.read_exact(&mut payload)?;

        let mut stored_checksum = [0u8; 32];
        file.read_exact(&mut stored_checksum)?;

        let mut hasher = Sha256::new();
        hasher.update(magic_bytes);
        hasher.update(length_bytes);
        hasher.update(&payload);
        let computed = hasher.finalize();
        if stored_checksum != computed.as_slice() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Checksum verification failed",
            ));
        }

        bincode::deserialize::<SaveData>(&payload)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
