use crate::error::{Error, Result};
use crate::types::Service;
use regex::Regex;
use std::sync::LazyLock;

static MX_STYLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w*\.\w+\.\w+$").expect("static regex"));

static DOMAIN_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9.-]+$").expect("static regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostnameCheck {
    Valid,
    Advisory(String),
}

impl HostnameCheck {
    pub fn is_valid(&self) -> bool {
        matches!(self, HostnameCheck::Valid)
    }
}

// SMTP mismatches are only advice; many valid MX names fail the pattern.
pub fn check_hostname(hostname: &str, service: Service) -> Result<HostnameCheck> {
    match service {
        Service::Smtp => {
            if MX_STYLE.is_match(hostname) {
                Ok(HostnameCheck::Valid)
            } else {
                log::warn!("{} does not look like an MX hostname", hostname);
                Ok(HostnameCheck::Advisory(format!(
                    "'{}' does not follow MX hostname style (e.g., mx1.example.com) for SMTP service",
                    hostname
                )))
            }
        }
        Service::Http => {
            if DOMAIN_CHARS.is_match(hostname) {
                Ok(HostnameCheck::Valid)
            } else {
                Err(Error::InvalidHostname(format!(
                    "'{}' should be a valid domain name for HTTP service",
                    hostname
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smtp_mx_style() {
        for host in ["mx1.example.com", "mail.example.org", ".example.com"] {
            assert_eq!(
                check_hostname(host, Service::Smtp).unwrap(),
                HostnameCheck::Valid,
                "{host}"
            );
        }
    }

    #[test]
    fn test_smtp_mismatch_is_advisory() {
        for host in ["example.com", "mx-1.example.com", "a.b.example.com"] {
            let check = check_hostname(host, Service::Smtp).unwrap();
            assert!(matches!(check, HostnameCheck::Advisory(_)), "{host}");
        }
    }

    #[test]
    fn test_http_domain_chars() {
        for host in ["example.com", "www.my-site.example.com", "localhost"] {
            assert!(check_hostname(host, Service::Http).unwrap().is_valid());
        }
    }

    #[test]
    fn test_http_invalid_chars_fail() {
        for host in ["exa mple.com", "example.com/path", "ex_ample.com", "*.example.com"] {
            assert!(matches!(
                check_hostname(host, Service::Http),
                Err(Error::InvalidHostname(_))
            ));
        }
    }

    #[test]
    fn test_empty_hostname() {
        assert!(matches!(
            check_hostname("", Service::Smtp),
            Ok(HostnameCheck::Advisory(_))
        ));
        assert!(matches!(
            check_hostname("", Service::Http),
            Err(Error::InvalidHostname(_))
        ));
    }
}
