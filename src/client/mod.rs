//! Client layer: orchestrates transport calls and maps transport ↔ domain.

mod config;

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use chrono::Local;

use crate::domain::{
    AccountInfo, Airwaybill, DeliveryStatus, Msisdn, StatusMapping, ValidationError,
};
use crate::transport::{Endpoint, RequestKind};

pub use config::{
    BASE_URL_ENV, BaseUrlResolver, Config, Credentials, DEFAULT_BASE_URL, base_url,
    normalize_base_url,
};

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The response body is returned regardless of HTTP status: the gateway reports
/// errors in the body text.
trait HttpTransport: Send + Sync {
    fn get<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<String, BoxError>>;

    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<String, BoxError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<String, BoxError>> {
        Box::pin(async move {
            let response = self.client.get(url).query(&params).send().await?;
            Ok(response.text().await?)
        })
    }

    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<String, BoxError>> {
        Box::pin(async move {
            let response = self.client.post(url).form(&params).send().await?;
            Ok(response.text().await?)
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`MaskingClient`].
pub enum MaskingError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, body read, etc).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] BoxError),

    /// The destination number was rejected before any request was made.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`MaskingClient`].
///
/// Use this when you need a timeout, a custom user agent, or the detailed
/// status mapping.
pub struct MaskingClientBuilder {
    config: Config,
    status_mapping: StatusMapping,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl MaskingClientBuilder {
    /// Create a builder with the collapsed status mapping and reqwest defaults.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            status_mapping: StatusMapping::default(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Choose how report codes are classified. Defaults to
    /// [`StatusMapping::Collapsed`].
    pub fn status_mapping(mut self, mapping: StatusMapping) -> Self {
        self.status_mapping = mapping;
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`MaskingClient`]. Fails if reqwest rejects the HTTP settings.
    pub fn build(self) -> Result<MaskingClient, MaskingError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| MaskingError::Transport(Box::new(err)))?;

        Ok(MaskingClient {
            config: self.config,
            status_mapping: self.status_mapping,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level MySMSMasking client.
///
/// Every call sends the configured credentials and reads the whole plaintext
/// body. HTTP status codes are ignored.
pub struct MaskingClient {
    config: Config,
    status_mapping: StatusMapping,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for MaskingClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaskingClient")
            .field("config", &self.config)
            .field("status_mapping", &self.status_mapping)
            .finish_non_exhaustive()
    }
}

impl MaskingClient {
    /// Create a client with a default HTTP client and the collapsed status mapping.
    ///
    /// For more customization, use [`MaskingClient::builder`].
    pub fn new(config: Config) -> Self {
        Self {
            config,
            status_mapping: StatusMapping::default(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom HTTP settings or status mapping.
    pub fn builder(config: Config) -> MaskingClientBuilder {
        MaskingClientBuilder::new(config)
    }

    /// Configuration the client was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Mapping used to classify report codes.
    pub fn status_mapping(&self) -> StatusMapping {
        self.status_mapping
    }

    /// Submit `message` for delivery to `msisdn`.
    ///
    /// The number is validated locally first; an invalid number returns
    /// [`MaskingError::Validation`] without touching the network. The returned
    /// [`Airwaybill`] holds the response body verbatim, stamped with the local
    /// time at which the body was received.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "MaskingClient::send", skip_all, fields(msisdn = %msisdn))
    )]
    pub async fn send(&self, msisdn: &str, message: &str) -> Result<Airwaybill, MaskingError> {
        let msisdn = Msisdn::new(msisdn)?;

        let body = self
            .call(
                Endpoint::Send,
                crate::transport::encode_send_form(&msisdn, message),
            )
            .await?;
        let received_at = Local::now();

        Ok(crate::transport::decode_send_response(body, received_at))
    }

    /// Query the delivery status of a previously sent message.
    ///
    /// Unknown ids are reported as [`DeliveryStatus::InvalidId`], not as an
    /// error. Only transport failures produce `Err`; callers that need a status
    /// value on that path should treat it as [`DeliveryStatus::Failed`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "MaskingClient::get_status",
            skip_all,
            fields(airwaybill_id = %airwaybill_id)
        )
    )]
    pub async fn get_status(&self, airwaybill_id: &str) -> Result<DeliveryStatus, MaskingError> {
        let body = self
            .call(
                Endpoint::Report,
                crate::transport::encode_report_params(airwaybill_id),
            )
            .await?;

        let status = crate::transport::decode_report_response(&body, self.status_mapping);

        #[cfg(feature = "tracing")]
        tracing::debug!(?status, "classified delivery report");

        Ok(status)
    }

    /// Fetch the account balance and expiry.
    ///
    /// Errors:
    /// - [`MaskingError::Transport`] when the request fails,
    /// - [`MaskingError::Parse`] when either field of the body is malformed.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "MaskingClient::get_account_info", skip_all)
    )]
    pub async fn get_account_info(&self) -> Result<AccountInfo, MaskingError> {
        let body = self
            .call(Endpoint::Balance, crate::transport::encode_balance_params())
            .await?;

        crate::transport::decode_balance_response(&body)
            .map_err(|err| MaskingError::Parse(Box::new(err)))
    }

    async fn call(
        &self,
        endpoint: Endpoint,
        mut params: Vec<(String, String)>,
    ) -> Result<String, MaskingError> {
        self.config.credentials().push_params(&mut params);
        let url = endpoint.url(self.config.base_url());

        let body = match endpoint.kind() {
            RequestKind::Get => self.http.get(&url, params).await,
            RequestKind::Post => self.http.post_form(&url, params).await,
        }
        .map_err(MaskingError::Transport)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(endpoint = endpoint.name(), %url, body = %body, "gateway responded");

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Mutex;

    use chrono::Utc;

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Recorded {
        Get,
        Post,
    }

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        calls: usize,
        last_kind: Option<Recorded>,
        last_url: Option<String>,
        last_params: Vec<(String, String)>,
        response: Result<String, String>,
    }

    impl FakeTransport {
        fn new(response_body: impl Into<String>) -> Self {
            Self::with_response(Ok(response_body.into()))
        }

        fn failing(message: impl Into<String>) -> Self {
            Self::with_response(Err(message.into()))
        }

        fn with_response(response: Result<String, String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    calls: 0,
                    last_kind: None,
                    last_url: None,
                    last_params: Vec::new(),
                    response,
                })),
            }
        }

        fn calls(&self) -> usize {
            self.state.lock().unwrap().calls
        }

        fn last_request(&self) -> (Option<Recorded>, Option<String>, Vec<(String, String)>) {
            let state = self.state.lock().unwrap();
            (
                state.last_kind,
                state.last_url.clone(),
                state.last_params.clone(),
            )
        }

        fn record(
            &self,
            kind: Recorded,
            url: &str,
            params: Vec<(String, String)>,
        ) -> Result<String, BoxError> {
            let mut state = self.state.lock().unwrap();
            state.calls += 1;
            state.last_kind = Some(kind);
            state.last_url = Some(url.to_owned());
            state.last_params = params;
            state
                .response
                .clone()
                .map_err(|message| Box::new(io::Error::other(message)) as BoxError)
        }
    }

    impl HttpTransport for FakeTransport {
        fn get<'a>(
            &'a self,
            url: &'a str,
            params: Vec<(String, String)>,
        ) -> BoxFuture<'a, Result<String, BoxError>> {
            Box::pin(async move { self.record(Recorded::Get, url, params) })
        }

        fn post_form<'a>(
            &'a self,
            url: &'a str,
            params: Vec<(String, String)>,
        ) -> BoxFuture<'a, Result<String, BoxError>> {
            Box::pin(async move { self.record(Recorded::Post, url, params) })
        }
    }

    fn assert_param(params: &[(String, String)], key: &str, value: &str) {
        assert!(
            params.iter().any(|(k, v)| k == key && v == value),
            "missing param {key}={value}; got: {params:?}"
        );
    }

    fn make_client(transport: FakeTransport, mapping: StatusMapping) -> MaskingClient {
        MaskingClient {
            config: Config::new("https://gw.example.invalid", "user", "secret"),
            status_mapping: mapping,
            http: Arc::new(transport),
        }
    }

    #[tokio::test]
    async fn send_posts_form_and_returns_body_as_airwaybill() {
        let transport = FakeTransport::new("1234567890");
        let client = make_client(transport.clone(), StatusMapping::Collapsed);

        let before = Local::now();
        let awb = client.send("0811234567", "hello").await.unwrap();
        let after = Local::now();

        assert_eq!(awb.id, "1234567890");
        assert!(awb.timestamp >= before && awb.timestamp <= after);

        let (kind, url, params) = transport.last_request();
        assert_eq!(kind, Some(Recorded::Post));
        assert_eq!(
            url.as_deref(),
            Some("https://gw.example.invalid/masking/send.php")
        );
        assert_param(&params, "hp", "0811234567");
        assert_param(&params, "message", "hello");
        assert_param(&params, "username", "user");
        assert_param(&params, "password", "secret");
    }

    #[tokio::test]
    async fn send_keeps_gateway_error_text_as_id() {
        let transport = FakeTransport::new("Error: insufficient balance");
        let client = make_client(transport, StatusMapping::Collapsed);

        let awb = client.send("6281234567", "hello").await.unwrap();
        assert_eq!(awb.id, "Error: insufficient balance");
    }

    #[tokio::test]
    async fn send_rejects_invalid_msisdn_without_request() {
        let transport = FakeTransport::new("unused");
        let client = make_client(transport.clone(), StatusMapping::Collapsed);

        let err = client.send("123456", "hello").await.unwrap_err();
        match err {
            MaskingError::Validation(ValidationError::InvalidMsisdn { input }) => {
                assert_eq!(input, "123456");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn send_maps_transport_failure() {
        let transport = FakeTransport::failing("connection refused");
        let client = make_client(transport, StatusMapping::Collapsed);

        let err = client.send("0811234567", "hello").await.unwrap_err();
        assert!(matches!(err, MaskingError::Transport(_)));
        assert_eq!(err.to_string(), "transport error: connection refused");
    }

    #[tokio::test]
    async fn get_status_queries_report_endpoint() {
        let transport = FakeTransport::new("22,2024/01/01-10:00:00");
        let client = make_client(transport.clone(), StatusMapping::Collapsed);

        let status = client.get_status("abc-1").await.unwrap();
        assert_eq!(status, DeliveryStatus::Delivered);

        let (kind, url, params) = transport.last_request();
        assert_eq!(kind, Some(Recorded::Get));
        assert_eq!(
            url.as_deref(),
            Some("https://gw.example.invalid/masking/report.php")
        );
        assert_eq!(
            params,
            vec![
                ("rpt".to_owned(), "abc-1".to_owned()),
                ("username".to_owned(), "user".to_owned()),
                ("password".to_owned(), "secret".to_owned()),
            ]
        );
    }

    #[tokio::test]
    async fn get_status_collapses_failure_codes_by_default() {
        for body in ["50", "51,x", "52, x"] {
            let client = make_client(FakeTransport::new(body), StatusMapping::Collapsed);
            assert_eq!(
                client.get_status("id").await.unwrap(),
                DeliveryStatus::Failed,
                "body {body:?}"
            );
        }
    }

    #[tokio::test]
    async fn get_status_uses_detailed_mapping_when_configured() {
        let client = make_client(FakeTransport::new("51,x"), StatusMapping::Detailed);
        assert_eq!(
            client.get_status("id").await.unwrap(),
            DeliveryStatus::BalanceExpired
        );
    }

    #[tokio::test]
    async fn get_status_treats_non_numeric_body_as_invalid_id() {
        let client = make_client(FakeTransport::new("abc"), StatusMapping::Collapsed);
        assert_eq!(
            client.get_status("id").await.unwrap(),
            DeliveryStatus::InvalidId
        );
    }

    #[tokio::test]
    async fn get_status_maps_transport_failure() {
        let client = make_client(FakeTransport::failing("timeout"), StatusMapping::Collapsed);
        let err = client.get_status("id").await.unwrap_err();
        assert!(matches!(err, MaskingError::Transport(_)));
    }

    #[tokio::test]
    async fn get_account_info_parses_balance_and_expiry() {
        let transport = FakeTransport::new("1000.75,2024/01/01-10:00:00");
        let client = make_client(transport.clone(), StatusMapping::Collapsed);

        let info = client.get_account_info().await.unwrap();
        assert_eq!(info.balance, 1000);
        assert_eq!(
            info.expiry.with_timezone(&Utc).to_rfc3339(),
            "2024-01-01T03:00:00+00:00"
        );

        let (kind, url, params) = transport.last_request();
        assert_eq!(kind, Some(Recorded::Get));
        assert_eq!(
            url.as_deref(),
            Some("https://gw.example.invalid/masking/balance.php")
        );
        assert_eq!(
            params,
            vec![
                ("username".to_owned(), "user".to_owned()),
                ("password".to_owned(), "secret".to_owned()),
            ]
        );
    }

    #[tokio::test]
    async fn get_account_info_maps_bad_balance_to_parse_error() {
        let client = make_client(
            FakeTransport::new("notanumber,2024/01/01-10:00:00"),
            StatusMapping::Collapsed,
        );
        let err = client.get_account_info().await.unwrap_err();
        assert!(matches!(err, MaskingError::Parse(_)));
    }

    #[tokio::test]
    async fn get_account_info_maps_bad_expiry_to_parse_error() {
        let client = make_client(FakeTransport::new("1000,tomorrow"), StatusMapping::Collapsed);
        let err = client.get_account_info().await.unwrap_err();
        assert!(matches!(err, MaskingError::Parse(_)));
    }

    #[tokio::test]
    async fn get_account_info_maps_transport_failure() {
        let client = make_client(FakeTransport::failing("dns"), StatusMapping::Collapsed);
        let err = client.get_account_info().await.unwrap_err();
        assert!(matches!(err, MaskingError::Transport(_)));
    }

    #[test]
    fn builder_applies_status_mapping() {
        let config = Config::new("https://gw.example.invalid", "user", "secret");
        let client = MaskingClient::builder(config.clone())
            .status_mapping(StatusMapping::Detailed)
            .timeout(Duration::from_secs(5))
            .user_agent("mysmsmasking-tests")
            .build()
            .unwrap();
        assert_eq!(client.status_mapping(), StatusMapping::Detailed);
        assert_eq!(client.config().base_url(), config.base_url());
        assert_eq!(client.config().credentials().username(), "user");

        let client = MaskingClient::new(config);
        assert_eq!(client.status_mapping(), StatusMapping::Collapsed);
    }

    #[test]
    fn debug_output_hides_password() {
        let config = Config::new("https://gw.example.invalid", "user", "secret");
        let client = MaskingClient::new(config);
        let debug = format!("{client:?}");
        assert!(debug.contains("gw.example.invalid"));
        assert!(!debug.contains("secret"));
    }
}
