// Standard library
use std::net::{IpAddr, SocketAddr};

// 3rd party crates
use tracing::{debug, info, warn};

// Project imports
use crate::settings::types::Settings;
use crate::sources::{narrow, Catalog, SourceDescriptor, SourceFilter};

// Current module imports
use super::constants::{DNS_PORT, WEB_PROTOCOLS};
use super::errors::FetchError;
use super::functions::parse_ip;
use super::traits::Transport;
use super::types::{DnsAnswer, Fetcher, NetTransport};

impl<T: Transport> Fetcher<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Narrows `catalog` with `filter` and resolves the public address from
    /// whatever is left.
    pub async fn lookup(
        &self,
        catalog: &Catalog,
        filter: Option<&SourceFilter>,
    ) -> Option<IpAddr> {
        let candidates = narrow(catalog, filter);
        self.resolve(&candidates).await
    }

    /// Tries every candidate in catalog order and returns the first address
    /// obtained. `None` once all candidates are exhausted.
    pub async fn resolve(&self, candidates: &Catalog) -> Option<IpAddr> {
        if candidates.is_empty() {
            warn!("No sources left to query");
            return None;
        }

        for source in candidates.iter() {
            if let Some(ip) = self.fetch(source).await {
                info!(source = ?source.id, "Public IP detected: {}", ip);
                return Some(ip);
            }
            debug!(source = ?source.id, "Source exhausted, moving on");
        }

        warn!("All {} sources failed", candidates.len());
        None
    }

    /// Asks a single source, HTTPS first, then HTTP, then DNS.
    pub async fn fetch(&self, source: &SourceDescriptor) -> Option<IpAddr> {
        for (protocol, scheme) in WEB_PROTOCOLS {
            if !source.protocols.contains(protocol) {
                continue;
            }
            match self.fetch_web(source, scheme).await {
                Ok(ip) => return Some(ip),
                Err(e) => warn!(source = ?source.id, ?protocol, "Query failed: {}", e),
            }
        }

        if source.uses_dns() {
            match self.fetch_dns(source).await {
                Ok(ip) => return Some(ip),
                Err(e) => {
                    warn!(source = ?source.id, protocols = ?source.protocols, "Query failed: {}", e)
                }
            }
        }

        None
    }

    async fn fetch_web(
        &self,
        source: &SourceDescriptor,
        scheme: &str,
    ) -> Result<IpAddr, FetchError> {
        let url = format!("{}://{}", scheme, source.address);
        debug!(source = ?source.id, "Fetching from {}", url);

        let body = self.transport.http_get(&url).await?;
        parse_ip(source.id, body.trim())
    }

    async fn fetch_dns(&self, source: &SourceDescriptor) -> Result<IpAddr, FetchError> {
        let server = source
            .server
            .as_deref()
            .ok_or(FetchError::MissingServer(source.id))?;
        let server = self.server_address(server).await?;
        debug!(source = ?source.id, "Querying {} for {}", server, source.address);

        let answers = self.transport.dns_query(&source.address, server).await?;
        match answers.into_iter().next() {
            None => Err(FetchError::EmptyAnswer(source.address.clone())),
            Some(DnsAnswer::Address(ip)) => Ok(ip),
            Some(DnsAnswer::Text(segments)) => parse_ip(source.id, &segments.concat()),
            Some(DnsAnswer::Other(kind)) => Err(FetchError::UnexpectedRecord {
                target: source.address.clone(),
                kind,
            }),
        }
    }

    /// Socket address of a DNS server given by literal or host name. Only the
    /// first resolved address is used.
    async fn server_address(&self, server: &str) -> Result<SocketAddr, FetchError> {
        if let Ok(ip) = server.parse::<IpAddr>() {
            return Ok(SocketAddr::new(ip, DNS_PORT));
        }

        let ip = self
            .transport
            .lookup_host(server)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::NoAddress(server.to_string()))?;
        Ok(SocketAddr::new(ip, DNS_PORT))
    }
}

impl Fetcher<NetTransport> {
    /// Builds a fetcher on the real network using configured timeouts.
    pub fn from_settings(settings: &Settings) -> Result<Self, FetchError> {
        let transport = NetTransport::new(settings.http_timeout(), settings.dns_timeout())?;
        Ok(Self::new(transport))
    }
}
