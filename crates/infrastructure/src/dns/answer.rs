use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{Name, RData, Record};
use std::net::Ipv4Addr;
use whois_dns_domain::config::dns::ANSWER_TTL;

/// The single A record returned for every question, whatever its type.
pub fn synthesize_answer(name: &Name, address: Ipv4Addr) -> Record {
    Record::from_rdata(name.clone(), ANSWER_TTL, RData::A(A(address)))
}
