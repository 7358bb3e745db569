//! Loads known-answer vectors from TOML files

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

/// Failures while reading a vector file
#[derive(Debug, Error)]
pub enum VectorError {
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parsing {path}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("hex decode error in {field}: {source}")]
    Hex {
        field: &'static str,
        source: hex::FromHexError,
    },
}

pub type Result<T> = std::result::Result<T, VectorError>;

/// One X9.63 SHA-256 KDF case
#[derive(Debug, Clone, Deserialize)]
pub struct KdfVector {
    pub name: String,
    pub z: String,
    #[serde(default)]
    pub shared_info: String,
    pub output_len: usize,
    pub output: String,
}

/// One P-256 ECDH case followed by X9.63 SHA-256 derivation
#[derive(Debug, Clone, Deserialize)]
pub struct EcdhVector {
    pub name: String,
    pub private_a: String,
    pub public_a: String,
    pub private_b: String,
    pub public_b: String,
    pub shared_x: String,
    pub derived_32: String,
}

/// A peer public key that must be refused
#[derive(Debug, Clone, Deserialize)]
pub struct InvalidPeerVector {
    pub name: String,
    pub public: String,
}

#[derive(Debug, Deserialize)]
struct KdfFile {
    vector: Vec<KdfVector>,
}

#[derive(Debug, Deserialize)]
struct EcdhFile {
    vector: Vec<EcdhVector>,
    #[serde(default)]
    invalid_peer: Vec<InvalidPeerVector>,
}

fn vector_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("vectors")
}

fn load<T: DeserializeOwned>(file: &str) -> Result<T> {
    let path = vector_dir().join(file);
    let text = fs::read_to_string(&path).map_err(|source| VectorError::Io {
        path: path.clone(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| VectorError::Toml { path, source })
}

/// Decode a hex field, naming it in the error
pub fn decode(field: &'static str, value: &str) -> Result<Vec<u8>> {
    hex::decode(value).map_err(|source| VectorError::Hex { field, source })
}

/// X9.63 KDF vectors
pub fn x963_kdf_vectors() -> Result<Vec<KdfVector>> {
    load::<KdfFile>("x963_kdf_sha256.toml").map(|f| f.vector)
}

/// ECDH vectors
pub fn ecdh_vectors() -> Result<Vec<EcdhVector>> {
    load::<EcdhFile>("ecdh_p256.toml").map(|f| f.vector)
}

/// Peer keys every implementation must reject
pub fn invalid_peer_vectors() -> Result<Vec<InvalidPeerVector>> {
    load::<EcdhFile>("ecdh_p256.toml").map(|f| f.invalid_peer)
}
