// Standard library
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;

// 3rd party crates
use async_trait::async_trait;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RData, Record, RecordType};
use hickory_proto::serialize::binary::{BinDecodable, BinEncodable};
use rand::random;
use tokio::net::UdpSocket;
use tracing::{debug, trace};

// Current module imports
use super::constants::{DNS_PORT, MAX_UDP_PAYLOAD};
use super::errors::FetchError;
use super::traits::Transport;
use super::types::{DnsAnswer, NetTransport};

impl NetTransport {
    pub fn new(http_timeout: Duration, dns_timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(http_timeout).build()?;

        Ok(Self {
            client,
            dns_timeout,
        })
    }
}

impl From<&Record> for DnsAnswer {
    fn from(record: &Record) -> Self {
        match record.data() {
            RData::A(a) => DnsAnswer::Address(IpAddr::V4(a.0)),
            RData::AAAA(aaaa) => DnsAnswer::Address(IpAddr::V6(aaaa.0)),
            RData::TXT(txt) => DnsAnswer::Text(
                txt.txt_data()
                    .iter()
                    .map(|segment| String::from_utf8_lossy(segment).into_owned())
                    .collect(),
            ),
            _ => DnsAnswer::Other(record.record_type().to_string()),
        }
    }
}

/// Builds an ANY query for `target` with a random id.
fn build_query(target: &str) -> Result<Message, FetchError> {
    let mut name = Name::from_ascii(target).map_err(|e| FetchError::InvalidName {
        name: target.to_string(),
        message: e.to_string(),
    })?;
    name.set_fqdn(true);

    let mut message = Message::new();
    message.set_id(random());
    message.set_message_type(MessageType::Query);
    message.set_op_code(OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(Query::query(name, RecordType::ANY));
    Ok(message)
}

/// Reads datagrams until one decodes to a response carrying `id`. Stray or
/// malformed datagrams are dropped.
async fn receive(socket: &UdpSocket, id: u16) -> Result<Message, FetchError> {
    let mut buf = vec![0u8; MAX_UDP_PAYLOAD];
    loop {
        let len = socket.recv(&mut buf).await?;
        match Message::from_bytes(&buf[..len]) {
            Ok(response) if response.id() == id => return Ok(response),
            Ok(response) => {
                debug!(expected = id, got = response.id(), "Ignoring response with wrong id")
            }
            Err(e) => debug!("Ignoring undecodable datagram: {}", e),
        }
    }
}

#[async_trait]
impl Transport for NetTransport {
    async fn http_get(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    async fn lookup_host(&self, host: &str) -> Result<Vec<IpAddr>, FetchError> {
        let addrs = tokio::net::lookup_host((host, DNS_PORT))
            .await
            .map_err(|error| FetchError::HostLookup {
                host: host.to_string(),
                error,
            })?;

        let ips: Vec<IpAddr> = addrs.map(|addr| addr.ip()).collect();
        trace!(host = %host, "Resolved to {:?}", ips);
        Ok(ips)
    }

    async fn dns_query(
        &self,
        target: &str,
        server: SocketAddr,
    ) -> Result<Vec<DnsAnswer>, FetchError> {
        let query = build_query(target)?;
        let bytes = query.to_bytes()?;

        let local: SocketAddr = match server {
            SocketAddr::V4(_) => (Ipv4Addr::UNSPECIFIED, 0).into(),
            SocketAddr::V6(_) => (Ipv6Addr::UNSPECIFIED, 0).into(),
        };
        let socket = UdpSocket::bind(local).await?;
        socket.connect(server).await?;
        socket.send(&bytes).await?;

        let response = tokio::time::timeout(self.dns_timeout, receive(&socket, query.id()))
            .await
            .map_err(|_| FetchError::Timeout(server.to_string()))??;

        debug!(
            server = %server,
            target = %target,
            "Received {} answer records",
            response.answers().len()
        );
        Ok(response.answers().iter().map(DnsAnswer::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_proto::rr::rdata::{A, AAAA, CNAME, TXT};

    fn name(value: &str) -> Name {
        Name::from_ascii(value).unwrap()
    }

    #[test]
    fn test_query_is_fqdn_any() {
        let message = build_query("myip.opendns.com").unwrap();
        let query = &message.queries()[0];

        assert_eq!(message.message_type(), MessageType::Query);
        assert!(message.recursion_desired());
        assert_eq!(query.query_type(), RecordType::ANY);
        assert!(query.name().is_fqdn());
        assert_eq!(query.name(), &name("myip.opendns.com."));
    }

    #[test]
    fn test_query_rejects_bad_name() {
        let oversized_label = format!("{}.example.com", "a".repeat(64));
        assert!(matches!(
            build_query(&oversized_label),
            Err(FetchError::InvalidName { .. })
        ));
    }

    #[test]
    fn test_answer_from_address_records() {
        let a = Record::from_rdata(
            name("myip.opendns.com."),
            0,
            RData::A(A(Ipv4Addr::new(192, 0, 2, 1))),
        );
        assert_eq!(
            DnsAnswer::from(&a),
            DnsAnswer::Address(IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1)))
        );

        let aaaa = Record::from_rdata(
            name("myip.opendns.com."),
            0,
            RData::AAAA(AAAA(Ipv6Addr::LOCALHOST)),
        );
        assert_eq!(
            DnsAnswer::from(&aaaa),
            DnsAnswer::Address(IpAddr::V6(Ipv6Addr::LOCALHOST))
        );
    }

    #[test]
    fn test_answer_from_txt_record_keeps_segments() {
        let txt = Record::from_rdata(
            name("o-o.myaddr.l.google.com."),
            60,
            RData::TXT(TXT::new(vec!["2001:db8::".to_string(), "1".to_string()])),
        );
        assert_eq!(
            DnsAnswer::from(&txt),
            DnsAnswer::Text(vec!["2001:db8::".to_string(), "1".to_string()])
        );
    }

    #[test]
    fn test_answer_from_other_record() {
        let cname = Record::from_rdata(
            name("myip.opendns.com."),
            0,
            RData::CNAME(CNAME(name("example.com."))),
        );
        assert_eq!(DnsAnswer::from(&cname), DnsAnswer::Other("CNAME".to_string()));
    }

    #[tokio::test]
    async fn test_receive_skips_stray_datagrams() {
        let server = UdpSocket::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
        let client = UdpSocket::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
        client.connect(server.local_addr().unwrap()).await.unwrap();
        let client_addr = client.local_addr().unwrap();

        let query = build_query("myip.opendns.com").unwrap();
        let mut stray = Message::new();
        stray.set_id(query.id().wrapping_add(1));
        stray.set_message_type(MessageType::Response);
        let mut reply = Message::new();
        reply.set_id(query.id());
        reply.set_message_type(MessageType::Response);
        reply.add_answer(Record::from_rdata(
            name("myip.opendns.com."),
            0,
            RData::A(A(Ipv4Addr::new(192, 0, 2, 1))),
        ));

        server.send_to(b"garbage", client_addr).await.unwrap();
        server
            .send_to(&stray.to_bytes().unwrap(), client_addr)
            .await
            .unwrap();
        server
            .send_to(&reply.to_bytes().unwrap(), client_addr)
            .await
            .unwrap();

        let response = tokio::time::timeout(Duration::from_secs(2), receive(&client, query.id()))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(response.id(), query.id());
        assert_eq!(response.answers().len(), 1);
    }

    #[test]
    fn test_transport_builds() {
        let transport = NetTransport::new(Duration::from_secs(3), Duration::from_secs(2)).unwrap();
        assert_eq!(transport.dns_timeout, Duration::from_secs(2));
    }
}
