use chrono::{DateTime, Utc};
use std::net::{IpAddr, Ipv4Addr};

/// Host and request details the seeders read.
///
/// Passed explicitly into each step instead of being pulled from a
/// global application container.
#[derive(Debug, Clone, PartialEq)]
pub struct InstallEnvironment {
    /// Active locale, used as the default board and admin language
    pub locale: String,
    /// Time of the setup request
    pub request_time: DateTime<Utc>,
    /// Address the setup request came from
    pub client_ip: IpAddr,
    /// Raw file upload setting of the host, if any
    pub file_uploads: Option<String>,
}

impl InstallEnvironment {
    pub fn uploads_enabled(&self) -> bool {
        uploads_enabled(self.file_uploads.as_deref())
    }

    pub fn request_timestamp(&self) -> i64 {
        self.request_time.timestamp()
    }
}

impl Default for InstallEnvironment {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            request_time: Utc::now(),
            client_ip: IpAddr::V4(Ipv4Addr::LOCALHOST),
            file_uploads: None,
        }
    }
}

/// Whether a host upload flag means "enabled": `on`, `true` or `1`, any case
pub fn uploads_enabled(flag: Option<&str>) -> bool {
    match flag {
        Some(value) => matches!(value.to_lowercase().as_str(), "on" | "true" | "1"),
        None => false,
    }
}
