use std::time::Duration;

use secrecy::{ExposeSecret, Secret};
use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::metadata::errors::InvalidMetadataValue;
use tonic::metadata::{Ascii, MetadataValue};
use tonic::transport::{Channel, Endpoint};
use tonic::{GrpcMethod, Request, Status};

pub const SERVICE_NAME: &str = "org.interledger.spsp.server.grpc.IlpService";

/// Added to the `grpc-timeout` we send so tonic's own timer never beats ours.
const GRPC_TIMEOUT_SLACK: Duration = Duration::from_millis(500);

/// Unary methods exposed by the ILP service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    GetBalance,
    GetAccount,
    CreateAccount,
}

impl Method {
    pub fn name(self) -> &'static str {
        match self {
            Method::GetBalance => "getBalance",
            Method::GetAccount => "getAccount",
            Method::CreateAccount => "createAccount",
        }
    }

    fn path(self) -> PathAndQuery {
        PathAndQuery::from_static(match self {
            Method::GetBalance => "/org.interledger.spsp.server.grpc.IlpService/getBalance",
            Method::GetAccount => "/org.interledger.spsp.server.grpc.IlpService/getAccount",
            Method::CreateAccount => "/org.interledger.spsp.server.grpc.IlpService/createAccount",
        })
    }
}

/// Client that makes authed unary calls to the ILP service.
///
/// The channel connects lazily, so an unreachable endpoint only shows up as
/// an error on the first call.
#[derive(Debug)]
pub struct IlpClient {
    grpc: tonic::client::Grpc<Channel>,
    auth_token: Option<Secret<String>>,
    request_timeout: Duration,
}

impl IlpClient {
    pub fn new(
        base_url: String,
        auth_token: Option<Secret<String>>,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, ClientError> {
        let channel = Endpoint::from_shared(base_url)?
            .connect_timeout(connect_timeout)
            .connect_lazy();
        Ok(Self {
            grpc: tonic::client::Grpc::new(channel),
            auth_token,
            request_timeout,
        })
    }

    /// Attach the bearer token, if any, as `authorization` metadata.
    fn authenticate_request<T>(
        auth_token: Option<&Secret<String>>,
        mut request: Request<T>,
    ) -> Result<Request<T>, ClientError> {
        if let Some(token) = auth_token {
            let value: MetadataValue<Ascii> =
                format!("Bearer {}", token.expose_secret()).parse()?;
            request.metadata_mut().insert("authorization", value);
        }
        Ok(request)
    }

    /// Authorize and execute a unary call, bounded by the request timeout.
    pub async fn execute_request<Req, Resp>(
        &self,
        method: Method,
        message: Req,
    ) -> Result<Resp, ClientError>
    where
        Req: prost::Message + Send + Sync + 'static,
        Resp: prost::Message + Default + Send + Sync + 'static,
    {
        let mut request =
            IlpClient::authenticate_request(self.auth_token.as_ref(), Request::new(message))?;
        request
            .extensions_mut()
            .insert(GrpcMethod::new(SERVICE_NAME, method.name()));
        request.set_timeout(self.request_timeout + GRPC_TIMEOUT_SLACK);

        let mut grpc = self.grpc.clone();
        let call = async move {
            if let Err(e) = grpc.ready().await {
                return Err(Status::unavailable(format!("Service was not ready: {e}")));
            }
            grpc.unary(request, method.path(), ProstCodec::<Req, Resp>::default())
                .await
        };

        let response = tokio::time::timeout(self.request_timeout, call)
            .await
            .map_err(|_| ClientError::DeadlineExceeded(self.request_timeout))??;
        Ok(response.into_inner())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("Invalid service endpoint: {0}")]
    InvalidEndpoint(#[from] tonic::transport::Error),
    #[error("Invalid authorization token")]
    InvalidToken(#[from] InvalidMetadataValue),
    #[error("The remote call failed: {0}")]
    Status(#[from] Status),
    #[error("No response within {0:?}")]
    DeadlineExceeded(Duration),
}

#[cfg(test)]
pub(super) mod tests {
    use claims::{assert_err, assert_matches};

    use super::*;

    // the lazy channel spawns its worker task, so callers need a tokio runtime
    pub(in crate::ilp) fn create_client(
        base_url: String,
        auth_token: Option<&str>,
        request_timeout: Duration,
    ) -> IlpClient {
        IlpClient::new(
            base_url,
            auth_token.map(|token| Secret::new(token.to_string())),
            Duration::from_secs(1),
            request_timeout,
        )
        .unwrap()
    }

    #[test]
    fn request_is_populated_with_bearer_token() {
        let token = Secret::new("verysupersecretkey".to_string());

        let request = IlpClient::authenticate_request(Some(&token), Request::new(())).unwrap();

        let authorization = request.metadata().get("authorization").unwrap();
        assert_eq!(authorization.to_str().unwrap(), "Bearer verysupersecretkey");
    }

    #[test]
    fn request_without_token_has_no_authorization() {
        let request = IlpClient::authenticate_request(None, Request::new(())).unwrap();

        assert!(request.metadata().get("authorization").is_none());
    }

    #[test]
    fn token_with_control_characters_is_rejected() {
        let token = Secret::new("bad\ntoken".to_string());

        let result = IlpClient::authenticate_request(Some(&token), Request::new(()));

        assert_matches!(result, Err(ClientError::InvalidToken(_)));
    }

    #[test]
    fn malformed_endpoint_is_rejected() {
        let result = IlpClient::new(
            "not a uri".into(),
            None,
            Duration::from_secs(1),
            Duration::from_secs(1),
        );

        assert_err!(result);
    }

    #[test]
    fn method_paths_target_the_ilp_service() {
        assert_eq!(
            Method::CreateAccount.path().as_str(),
            format!("/{}/{}", SERVICE_NAME, Method::CreateAccount.name())
        );
        assert_eq!(Method::GetBalance.name(), "getBalance");
    }
}
