pub const UDP_DNS_RESPONSE_SIZE: usize = 1024;
pub const DNS_HEADER_SIZE: usize = 12;
pub const DNS_QUESTION_SIZE: usize = 4;
pub const DNS_PORT: u16 = 53;
pub const MAX_LABEL_LENGTH: usize = 255;
pub const IPV4_RDATA_LENGTH: usize = 4;
pub const DEFAULT_RESOLV_CONF: &str = "/etc/resolv.conf";
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_MAX_STRAY_RESPONSES: usize = 8;
pub const MAX_RESOLV_CONF_TIMEOUT_SECS: u64 = 30;
