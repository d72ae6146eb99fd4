use std::io::Write;

use secrecy::{ExposeSecret, Secret};
use serde::Serialize;

pub use crate::configuration::Operation;
use crate::configuration::SmokeSettings;
use crate::ilp::{
    CreateAccountRequest, CreateAccountResponse, GetAccountRequest, GetAccountResponse,
    GetBalanceRequest, GetBalanceResponse, IlpProvider, ProviderError,
};

/// Printed on its own line before the error detail of a failed call.
pub const FAILURE_MARKER: &str = "ERRORED :(";

/// The one request a smoke run sends.
#[derive(Debug, Clone, PartialEq)]
pub enum SmokeCall {
    Balance(GetBalanceRequest),
    CreateAccount(CreateAccountRequest),
    GetAccount(GetAccountRequest),
}

impl SmokeCall {
    pub fn new(operation: Operation, settings: &SmokeSettings, jwt: Option<&Secret<String>>) -> Self {
        let jwt = jwt
            .map(|token| token.expose_secret().clone())
            .unwrap_or_default();
        let account_id = settings.account_id.clone();
        match operation {
            Operation::Balance => SmokeCall::Balance(GetBalanceRequest { account_id, jwt }),
            Operation::CreateAccount => SmokeCall::CreateAccount(CreateAccountRequest {
                account_id,
                asset_code: settings.asset_code.clone(),
                asset_scale: settings.asset_scale,
                description: settings.description.clone(),
                jwt,
            }),
            Operation::GetAccount => SmokeCall::GetAccount(GetAccountRequest { account_id }),
        }
    }
}

/// Remote operations the runner can drive.
pub trait IlpApi {
    async fn get_balance(
        &self,
        request: GetBalanceRequest,
    ) -> Result<GetBalanceResponse, ProviderError>;

    async fn get_account(
        &self,
        request: GetAccountRequest,
    ) -> Result<GetAccountResponse, ProviderError>;

    async fn create_account(
        &self,
        request: CreateAccountRequest,
    ) -> Result<CreateAccountResponse, ProviderError>;
}

impl IlpApi for IlpProvider {
    async fn get_balance(
        &self,
        request: GetBalanceRequest,
    ) -> Result<GetBalanceResponse, ProviderError> {
        IlpProvider::get_balance(self, request).await
    }

    async fn get_account(
        &self,
        request: GetAccountRequest,
    ) -> Result<GetAccountResponse, ProviderError> {
        IlpProvider::get_account(self, request).await
    }

    async fn create_account(
        &self,
        request: CreateAccountRequest,
    ) -> Result<CreateAccountResponse, ProviderError> {
        IlpProvider::create_account(self, request).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Errored,
}

impl Outcome {
    /// Whether the process should exit non-zero. Errors only count when
    /// `fail_on_error` is set.
    pub fn fails_process(self, fail_on_error: bool) -> bool {
        fail_on_error && self == Outcome::Errored
    }
}

/// Send `call` once and write the outcome to `out`.
///
/// On success `out` receives the JSON response and nothing else. Every
/// failure, whatever its cause, prints [`FAILURE_MARKER`] followed by the error.
pub async fn run<A, W>(api: &A, call: SmokeCall, out: &mut W) -> std::io::Result<Outcome>
where
    A: IlpApi,
    W: Write,
{
    let rendered = match call {
        SmokeCall::Balance(request) => render(api.get_balance(request).await),
        SmokeCall::CreateAccount(request) => render(api.create_account(request).await),
        SmokeCall::GetAccount(request) => render(api.get_account(request).await),
    };

    match rendered {
        Ok(json) => {
            writeln!(out, "{json}")?;
            Ok(Outcome::Succeeded)
        }
        Err(error) => {
            tracing::error!(%error, "smoke call errored");
            writeln!(out, "{FAILURE_MARKER}")?;
            writeln!(out, "{error}")?;
            Ok(Outcome::Errored)
        }
    }
}

fn render<T: Serialize>(response: Result<T, ProviderError>) -> Result<String, ProviderError> {
    Ok(serde_json::to_string(&response?)?)
}
