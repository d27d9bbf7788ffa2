use crate::error::{Error, Result};
use crate::types::TlsaInfo;
use sha2::{Digest, Sha256};
use std::path::Path;
use x509_parser::pem::{parse_x509_pem, Pem};
use x509_parser::prelude::*;

const CERTIFICATE_LABEL: &str = "CERTIFICATE";

// Only the first PEM block is read; in fullchain.pem that is the leaf.
pub fn extract_tlsa_info(cert_pem: &[u8]) -> Result<TlsaInfo> {
    let spki = subject_public_key_info_der(cert_pem)?;
    let digest_hex = hex::encode(Sha256::digest(&spki));

    log::debug!(
        "SubjectPublicKeyInfo is {} bytes, sha256 {}",
        spki.len(),
        digest_hex
    );

    Ok(TlsaInfo::new(digest_hex))
}

pub fn extract_tlsa_info_from_file(path: impl AsRef<Path>) -> Result<TlsaInfo> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::NotFound(format!(
            "Certificate file '{}' not found",
            path.display()
        )));
    }

    let cert_pem = std::fs::read(path)?;
    extract_tlsa_info(&cert_pem)
}

pub fn subject_public_key_info_der(cert_pem: &[u8]) -> Result<Vec<u8>> {
    let pem = decode_certificate_pem(cert_pem)?;
    let x509 = parse_certificate_der(&pem.contents)?;

    log::debug!(
        "Parsed certificate for {} (key algorithm {})",
        x509.subject(),
        x509.public_key().algorithm.algorithm
    );

    Ok(x509.public_key().raw.to_vec())
}

pub fn validate_certificate(cert_pem: &[u8]) -> Result<()> {
    let pem = decode_certificate_pem(cert_pem)?;
    parse_certificate_der(&pem.contents)?;
    Ok(())
}

fn decode_certificate_pem(data: &[u8]) -> Result<Pem> {
    let (_, pem) = parse_x509_pem(data)?;

    if pem.label != CERTIFICATE_LABEL {
        return Err(Error::CertParse(format!(
            "Expected a {} PEM block, found {}",
            CERTIFICATE_LABEL, pem.label
        )));
    }

    Ok(pem)
}

fn parse_certificate_der(der: &[u8]) -> Result<X509Certificate<'_>> {
    let (rem, x509) = X509Certificate::from_der(der)?;

    if !rem.is_empty() {
        return Err(Error::CertParse(format!(
            "{} trailing bytes after certificate",
            rem.len()
        )));
    }

    Ok(x509)
}
