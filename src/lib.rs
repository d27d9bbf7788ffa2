//! dane-tlsa - DANE TLSA record generation for ACME-issued certificates
//!
//! This library derives `3 1 1` TLSA records (domain-issued certificate,
//! SubjectPublicKeyInfo, SHA-256) from a PEM certificate:
//!
//! - Extracting and hashing a certificate's SubjectPublicKeyInfo
//! - Formatting one record per well-known port of an SMTP or HTTP service
//! - Checking hostnames against per-service conventions
//! - Discovering certificates in a certbot `live` directory
//!
//! Because the record pins the public key rather than the certificate, it
//! stays valid across renewals as long as the key is reused (certbot
//! `--reuse-key`).
//!
//! # Examples
//!
//! ## Records for a mail server
//!
//! ```no_run
//! use dane_tlsa::{generate_tlsa_records, Service};
//!
//! let cert_pem = std::fs::read("/etc/letsencrypt/live/mail.example.com/cert.pem").unwrap();
//! let records = generate_tlsa_records(&cert_pem, "mail.example.com", Service::Smtp).unwrap();
//!
//! for record in &records {
//!     println!("{}", record);
//! }
//! ```
//!
//! ## Formatting a known digest
//!
//! ```
//! use dane_tlsa::format_tlsa_records;
//!
//! let digest = "ab".repeat(32);
//! let records = format_tlsa_records(&digest, "example.com", &[443]);
//! assert_eq!(records[0], format!("_443._tcp.example.com IN TLSA 3 1 1 {}", digest));
//! ```

pub mod discover;
pub mod error;
pub mod extract;
pub mod hostname;
pub mod output;
pub mod record;
pub mod types;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod prompt;

pub use error::{Error, Result};

pub use discover::{canonical_hostname, discover_certificates, CertificateEntry};
pub use extract::{
    extract_tlsa_info, extract_tlsa_info_from_file, subject_public_key_info_der,
    validate_certificate,
};
pub use hostname::{check_hostname, HostnameCheck};
pub use output::{display_tlsa_records, OutputFormat};
pub use record::{
    build_tlsa_records, format_tlsa_records, generate_tlsa_records, ports_for, ports_for_code,
    TlsaRecord,
};
pub use types::{Service, TlsaInfo, TlsaMatchingType, TlsaProfile, TlsaSelector, TlsaUsage};
