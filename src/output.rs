use crate::error::{Error, Result};
use crate::record::TlsaRecord;
use crate::types::Service;
use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Plain,
    #[cfg(feature = "json")]
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(OutputFormat::Pretty),
            "plain" | "zone" => Ok(OutputFormat::Plain),
            #[cfg(feature = "json")]
            "json" => Ok(OutputFormat::Json),
            _ => Err(Error::InvalidInput(format!("Invalid format: {}", s))),
        }
    }
}

pub fn display_tlsa_records(
    records: &[TlsaRecord],
    service: Service,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(display_pretty(records, service)),
        OutputFormat::Plain => Ok(display_plain(records)),
        #[cfg(feature = "json")]
        OutputFormat::Json => display_json(records, service),
    }
}

fn display_pretty(records: &[TlsaRecord], service: Service) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", "TLSA Records:".green().bold()));

    let names = service.port_names();
    for (idx, record) in records.iter().enumerate() {
        let name = names.get(idx).copied().unwrap_or("tcp");
        output.push_str(&format!(
            "{}  {}\n",
            record.to_string().magenta(),
            format!("; {}", name).dimmed()
        ));
    }

    output
}

fn display_plain(records: &[TlsaRecord]) -> String {
    records.iter().map(|record| format!("{}\n", record)).collect()
}

#[cfg(feature = "json")]
fn display_json(records: &[TlsaRecord], service: Service) -> Result<String> {
    use serde::Serialize;

    #[derive(Serialize)]
    struct JsonRecord {
        owner: String,
        port: u16,
        usage: u8,
        selector: u8,
        matching_type: u8,
        digest: String,
        record: String,
    }

    #[derive(Serialize)]
    struct JsonRecordSet {
        hostname: Option<String>,
        service: &'static str,
        records: Vec<JsonRecord>,
    }

    let json_records = records
        .iter()
        .map(|record| JsonRecord {
            owner: record.owner(),
            port: record.port,
            usage: record.info.usage(),
            selector: record.info.selector(),
            matching_type: record.info.matching_type(),
            digest: record.info.digest_hex.clone(),
            record: record.to_string(),
        })
        .collect();

    let set = JsonRecordSet {
        hostname: records.first().map(|record| record.hostname.clone()),
        service: service.name(),
        records: json_records,
    };

    Ok(serde_json::to_string_pretty(&set)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{build_tlsa_records, ports_for};
    use crate::types::TlsaInfo;

    fn sample() -> Vec<TlsaRecord> {
        build_tlsa_records(
            &TlsaInfo::new("0f".repeat(32)),
            "example.com",
            ports_for(Service::Http),
        )
    }

    #[test]
    fn test_format_parsing() {
        assert!(matches!("pretty".parse::<OutputFormat>(), Ok(OutputFormat::Pretty)));
        assert!(matches!("Zone".parse::<OutputFormat>(), Ok(OutputFormat::Plain)));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_plain_output() {
        let out = display_tlsa_records(&sample(), Service::Http, OutputFormat::Plain).unwrap();
        let digest = "0f".repeat(32);
        assert_eq!(
            out,
            format!(
                "_80._tcp.example.com IN TLSA 3 1 1 {d}\n_443._tcp.example.com IN TLSA 3 1 1 {d}\n",
                d = digest
            )
        );
    }

    #[test]
    fn test_pretty_output_contains_records() {
        colored::control::set_override(false);
        let out = display_tlsa_records(&sample(), Service::Http, OutputFormat::Pretty).unwrap();
        assert!(out.starts_with("TLSA Records:"));
        assert!(out.contains("_443._tcp.example.com IN TLSA 3 1 1"));
        assert!(out.contains("; https"));
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_json_output() {
        let out = display_tlsa_records(&sample(), Service::Http, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["hostname"], "example.com");
        assert_eq!(value["service"], "http");
        assert_eq!(value["records"][1]["port"], 443);
        assert_eq!(value["records"][0]["owner"], "_80._tcp.example.com");
    }
}
