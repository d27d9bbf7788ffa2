use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_LIVE_DIR: &str = "/etc/letsencrypt/live";
pub const CERT_FILE_NAME: &str = "cert.pem";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateEntry {
    pub hostname: String,
    pub cert_path: PathBuf,
}

// certbot appends -0001, -0002, ... when a lineage is recreated
pub fn canonical_hostname(dir_name: &str) -> &str {
    match dir_name.rsplit_once('-') {
        Some((base, suffix))
            if !base.is_empty()
                && !suffix.is_empty()
                && suffix.bytes().all(|b| b.is_ascii_digit()) =>
        {
            base
        }
        _ => dir_name,
    }
}

pub fn discover_certificates(root: impl AsRef<Path>) -> Result<Vec<CertificateEntry>> {
    let root = root.as_ref();
    if !root.exists() {
        return Err(Error::NotFound(format!(
            "Path '{}' does not exist",
            root.display()
        )));
    }

    let mut dirs = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        // Path::is_dir follows symlinks; DirEntry::file_type does not
        if entry.path().is_dir() {
            dirs.push(entry);
        }
    }
    dirs.sort_by_key(|entry| entry.file_name());

    let mut by_hostname = BTreeMap::new();
    for entry in dirs {
        let cert_path = entry.path().join(CERT_FILE_NAME);
        if !cert_path.exists() {
            log::debug!("Skipping {}: no {}", entry.path().display(), CERT_FILE_NAME);
            continue;
        }

        let dir_name = entry.file_name().to_string_lossy().into_owned();
        let hostname = canonical_hostname(&dir_name).to_string();
        if let Some(previous) = by_hostname.insert(hostname.clone(), cert_path) {
            log::debug!(
                "{} superseded by a newer lineage (was {})",
                hostname,
                previous.display()
            );
        }
    }

    log::info!(
        "Found {} certificate(s) under {}",
        by_hostname.len(),
        root.display()
    );

    Ok(by_hostname
        .into_iter()
        .map(|(hostname, cert_path)| CertificateEntry {
            hostname,
            cert_path,
        })
        .collect())
}
