use serde::Serialize;
use whois_dns_domain::CorrelationRecord;

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_remote_addr: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_remote_addr: Option<String>,

    #[serde(
        rename = "edns-client-subnet",
        skip_serializing_if = "Option::is_none"
    )]
    pub edns_client_subnet: Option<String>,
}

impl From<CorrelationRecord> for FeedbackResponse {
    fn from(record: CorrelationRecord) -> Self {
        Self {
            http_remote_addr: non_empty(record.http_remote_addr),
            dns_remote_addr: non_empty(record.dns_remote_addr),
            edns_client_subnet: non_empty(record.edns_client_subnet),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
