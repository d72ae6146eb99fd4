mod client;
mod models;

pub use models::*;

use tonic::{Code, Status};

use self::client::{ClientError, IlpClient, Method};
use crate::configuration::ServiceSettings;

pub struct IlpProvider {
    client: IlpClient,
}

impl IlpProvider {
    pub fn new(settings: &ServiceSettings) -> Result<Self, ProviderError> {
        let client = IlpClient::new(
            settings.base_url(),
            settings.auth_token.clone(),
            settings.connect_timeout(),
            settings.request_timeout(),
        )?;
        Ok(Self { client })
    }
}

impl IlpProvider {
    pub async fn get_balance(
        &self,
        request: GetBalanceRequest,
    ) -> Result<GetBalanceResponse, ProviderError> {
        tracing::info!(account_id = %request.account_id, "requesting balance");
        let response: GetBalanceResponse = self
            .client
            .execute_request(Method::GetBalance, request)
            .await?;
        tracing::info!(account_id = %response.account_id, "Balance retrieved successfully.");
        Ok(response)
    }

    pub async fn get_account(
        &self,
        request: GetAccountRequest,
    ) -> Result<GetAccountResponse, ProviderError> {
        tracing::info!(account_id = %request.account_id, "requesting account");
        let response: GetAccountResponse = self
            .client
            .execute_request(Method::GetAccount, request)
            .await?;
        tracing::info!(account_id = %response.account_id, "Account retrieved successfully.");
        Ok(response)
    }

    pub async fn create_account(
        &self,
        request: CreateAccountRequest,
    ) -> Result<CreateAccountResponse, ProviderError> {
        tracing::info!(
            account_id = %request.account_id,
            asset_code = %request.asset_code,
            asset_scale = request.asset_scale,
            "creating account"
        );
        let response: CreateAccountResponse = self
            .client
            .execute_request(Method::CreateAccount, request)
            .await?;
        tracing::info!(account_id = %response.account_id, "Account created successfully.");
        Ok(response)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ProviderError {
    #[error("Account not found: {0}")]
    NotFound(String),
    #[error("Account already exists: {0}")]
    AlreadyExists(String),
    #[error("The service denied access: {0}")]
    PermissionDenied(String),
    #[error("The service rejected the request: {0}")]
    InvalidArgument(String),
    #[error("The service is unavailable: {0}")]
    Unavailable(String),
    #[error("The call exceeded its deadline: {0}")]
    DeadlineExceeded(String),
    #[error("The service returned an error: {0}")]
    Remote(Status),
    #[error("The response could not be serialized")]
    ResponseSerialize(#[from] serde_json::Error),
    #[error(transparent)]
    Client(ClientError),
}

impl ProviderError {
    fn from_status(status: Status) -> Self {
        let message = status.message().to_string();
        match status.code() {
            Code::NotFound => ProviderError::NotFound(message),
            Code::AlreadyExists => ProviderError::AlreadyExists(message),
            Code::PermissionDenied | Code::Unauthenticated => {
                ProviderError::PermissionDenied(message)
            }
            Code::InvalidArgument => ProviderError::InvalidArgument(message),
            Code::Unavailable => ProviderError::Unavailable(message),
            Code::DeadlineExceeded => ProviderError::DeadlineExceeded(message),
            _ => ProviderError::Remote(status),
        }
    }
}

impl From<ClientError> for ProviderError {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::Status(status) => ProviderError::from_status(status),
            ClientError::DeadlineExceeded(timeout) => {
                ProviderError::DeadlineExceeded(format!("no response within {timeout:?}"))
            }
            other => ProviderError::Client(other),
        }
    }
}
