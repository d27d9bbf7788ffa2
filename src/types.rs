use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    Smtp,
    Http,
}

impl Service {
    pub const ALL: [Service; 2] = [Service::Smtp, Service::Http];

    pub fn code(&self) -> u8 {
        match self {
            Service::Smtp => 1,
            Service::Http => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Service::Smtp => "smtp",
            Service::Http => "http",
        }
    }

    pub fn port_names(&self) -> &'static [&'static str] {
        match self {
            Service::Smtp => &["smtp", "smtps", "submission"],
            Service::Http => &["http", "https"],
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Service {
    type Error = crate::Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Service::Smtp),
            2 => Ok(Service::Http),
            other => Err(crate::Error::InvalidService(other.to_string())),
        }
    }
}

impl std::str::FromStr for Service {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "smtp" | "mail" => Ok(Service::Smtp),
            "2" | "http" | "https" | "web" => Ok(Service::Http),
            _ => Err(crate::Error::InvalidService(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TlsaUsage {
    PkixTa = 0,
    PkixEe = 1,
    DaneTa = 2,
    DomainIssuedCertificate = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TlsaSelector {
    FullCertificate = 0,
    SubjectPublicKeyInfo = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TlsaMatchingType {
    Exact = 0,
    Sha256 = 1,
    Sha512 = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TlsaProfile {
    pub usage: TlsaUsage,
    pub selector: TlsaSelector,
    pub matching_type: TlsaMatchingType,
}

impl TlsaProfile {
    pub const DANE_EE_SPKI_SHA256: TlsaProfile = TlsaProfile {
        usage: TlsaUsage::DomainIssuedCertificate,
        selector: TlsaSelector::SubjectPublicKeyInfo,
        matching_type: TlsaMatchingType::Sha256,
    };
}

impl fmt::Display for TlsaProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.usage as u8, self.selector as u8, self.matching_type as u8
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsaInfo {
    pub profile: TlsaProfile,
    pub digest_hex: String,
}

impl TlsaInfo {
    pub fn new(digest_hex: impl Into<String>) -> Self {
        Self {
            profile: TlsaProfile::DANE_EE_SPKI_SHA256,
            digest_hex: digest_hex.into(),
        }
    }

    pub fn usage(&self) -> u8 {
        self.profile.usage as u8
    }

    pub fn selector(&self) -> u8 {
        self.profile.selector as u8
    }

    pub fn matching_type(&self) -> u8 {
        self.profile.matching_type as u8
    }

    pub fn as_tuple(&self) -> (u8, u8, u8, &str) {
        (
            self.usage(),
            self.selector(),
            self.matching_type(),
            &self.digest_hex,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_codes() {
        assert_eq!(Service::try_from(1).unwrap(), Service::Smtp);
        assert_eq!(Service::try_from(2).unwrap(), Service::Http);
        for service in Service::ALL {
            assert_eq!(Service::try_from(service.code()).unwrap(), service);
        }
    }

    #[test]
    fn test_invalid_service_code() {
        for code in [0u8, 3, 255] {
            assert!(matches!(
                Service::try_from(code),
                Err(crate::Error::InvalidService(_))
            ));
        }
    }

    #[test]
    fn test_service_parsing() {
        assert!(matches!("smtp".parse::<Service>(), Ok(Service::Smtp)));
        assert!(matches!("HTTP".parse::<Service>(), Ok(Service::Http)));
        assert!(matches!(" 2 ".parse::<Service>(), Ok(Service::Http)));
        assert!(matches!(
            "ftp".parse::<Service>(),
            Err(crate::Error::InvalidService(_))
        ));
    }

    #[test]
    fn test_profile_is_3_1_1() {
        let profile = TlsaProfile::DANE_EE_SPKI_SHA256;
        assert_eq!(profile.to_string(), "3 1 1");

        let info = TlsaInfo::new("ab".repeat(32));
        assert_eq!(info.usage(), 3);
        assert_eq!(info.selector(), 1);
        assert_eq!(info.matching_type(), 1);
    }
}
