use hickory_proto::op::Edns;
use hickory_proto::rr::rdata::opt::{EdnsCode, EdnsOption};

/// Formats the EDNS0 client-subnet option as `addr/source-prefix`.
pub fn client_subnet(edns: Option<&Edns>) -> Option<String> {
    match edns?.options().get(EdnsCode::Subnet)? {
        EdnsOption::Subnet(subnet) => Some(format!("{}/{}", subnet.addr(), subnet.source_prefix())),
        _ => None,
    }
}
