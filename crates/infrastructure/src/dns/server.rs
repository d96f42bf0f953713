use hickory_proto::op::{Header, ResponseCode};
use hickory_proto::rr::{Name, Record};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use tracing::{debug, error};
use whois_dns_application::use_cases::ObserveDnsQueryUseCase;
use whois_dns_domain::DnsObservation;

use super::answer::synthesize_answer;
use super::client_subnet::client_subnet;

/// Answers every question with the configured A record and feeds the
/// resolver address into the correlation store on the way through.
#[derive(Clone)]
pub struct CorrelationDnsHandler {
    observe: Arc<ObserveDnsQueryUseCase>,
    answer_address: Ipv4Addr,
}

impl CorrelationDnsHandler {
    pub fn new(observe: Arc<ObserveDnsQueryUseCase>, answer_address: Ipv4Addr) -> Self {
        Self {
            observe,
            answer_address,
        }
    }

    pub fn answer_address(&self) -> Ipv4Addr {
        self.answer_address
    }

    /// The store lookup never influences the answer, so tracked and
    /// untracked names are indistinguishable on the wire.
    pub fn observe_and_answer(
        &self,
        name: &Name,
        peer: IpAddr,
        client_subnet: Option<String>,
    ) -> Record {
        let observation = DnsObservation::new(&name.to_string(), peer, client_subnet);
        let tracked = self.observe.execute(&observation);

        debug!(
            name = %observation.name,
            peer = %peer,
            tracked,
            "DNS query answered"
        );

        synthesize_answer(name, self.answer_address)
    }
}

#[async_trait::async_trait]
impl RequestHandler for CorrelationDnsHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        // Only the first question is looked at; the rest are ignored.
        let Some(query) = request.queries().first() else {
            debug!(src = %request.src(), "DNS request without a question");
            return send_error_response(request, &mut response_handle, ResponseCode::FormErr)
                .await;
        };

        let answer = self.observe_and_answer(
            query.original().name(),
            request.src().ip(),
            client_subnet(request.edns()),
        );

        let builder = MessageResponseBuilder::from_message_request(request);
        let mut header = Header::response_from_request(request.header());
        header.set_authoritative(true);
        let answers = [answer];
        let response = builder.build(header, answers.iter(), &[], &[], &[]);

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to send DNS response");
                ResponseInfo::from(*request.header())
            }
        }
    }
}

async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
) -> ResponseInfo {
    let builder = MessageResponseBuilder::from_message_request(request);
    let mut header = Header::response_from_request(request.header());
    header.set_response_code(code);
    let response = builder.build_no_records(header);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send DNS error response");
            ResponseInfo::from(*request.header())
        }
    }
}
