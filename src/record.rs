use crate::error::Result;
use crate::extract::extract_tlsa_info;
use crate::types::{Service, TlsaInfo};
use std::fmt;

const SMTP_PORTS: [u16; 3] = [25, 465, 587];
const HTTP_PORTS: [u16; 2] = [80, 443];

pub fn ports_for(service: Service) -> &'static [u16] {
    match service {
        Service::Smtp => &SMTP_PORTS,
        Service::Http => &HTTP_PORTS,
    }
}

pub fn ports_for_code(code: u8) -> Result<&'static [u16]> {
    Service::try_from(code).map(ports_for)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsaRecord {
    pub port: u16,
    pub hostname: String,
    pub info: TlsaInfo,
}

impl TlsaRecord {
    pub fn owner(&self) -> String {
        format!("_{}._tcp.{}", self.port, self.hostname)
    }
}

impl fmt::Display for TlsaRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "_{}._tcp.{} IN TLSA {} {} {} {}",
            self.port,
            self.hostname,
            self.info.usage(),
            self.info.selector(),
            self.info.matching_type(),
            self.info.digest_hex
        )
    }
}

pub fn build_tlsa_records(info: &TlsaInfo, hostname: &str, ports: &[u16]) -> Vec<TlsaRecord> {
    ports
        .iter()
        .map(|&port| TlsaRecord {
            port,
            hostname: hostname.to_string(),
            info: info.clone(),
        })
        .collect()
}

pub fn format_tlsa_records(digest_hex: &str, hostname: &str, ports: &[u16]) -> Vec<String> {
    build_tlsa_records(&TlsaInfo::new(digest_hex), hostname, ports)
        .iter()
        .map(ToString::to_string)
        .collect()
}

pub fn generate_tlsa_records(
    cert_pem: &[u8],
    hostname: &str,
    service: Service,
) -> Result<Vec<TlsaRecord>> {
    let info = extract_tlsa_info(cert_pem)?;
    let records = build_tlsa_records(&info, hostname, ports_for(service));

    log::info!(
        "Generated {} TLSA record(s) for {} ({})",
        records.len(),
        hostname,
        service
    );

    Ok(records)
}
