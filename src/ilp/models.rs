// Message types for the `org.interledger.spsp.server.grpc` package.
// Generated from proto/ilp_service.proto and checked in.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetBalanceRequest {
    #[prost(string, tag = "1")]
    pub account_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub jwt: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
#[derive(::serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBalanceResponse {
    #[prost(string, tag = "1")]
    pub account_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub asset_code: ::prost::alloc::string::String,
    #[prost(uint32, tag = "3")]
    pub asset_scale: u32,
    #[prost(int64, tag = "4")]
    pub net_balance: i64,
    #[prost(int64, tag = "5")]
    pub prepaid_amount: i64,
    #[prost(int64, tag = "6")]
    pub clearing_balance: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetAccountRequest {
    #[prost(string, tag = "1")]
    pub account_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateAccountRequest {
    #[prost(string, tag = "1")]
    pub account_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub asset_code: ::prost::alloc::string::String,
    #[prost(uint32, tag = "3")]
    pub asset_scale: u32,
    #[prost(string, tag = "4")]
    pub description: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub jwt: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
#[derive(::serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSettings {
    #[prost(int64, tag = "1")]
    pub min_balance: i64,
    #[prost(int64, tag = "2")]
    pub settle_threshold: i64,
    #[prost(int64, tag = "3")]
    pub settle_to: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
#[derive(::serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementEngineDetails {
    #[prost(string, tag = "1")]
    pub settlement_engine_account_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub base_url: ::prost::alloc::string::String,
    #[prost(map = "string, string", tag = "3")]
    pub custom_settings: ::std::collections::HashMap<::prost::alloc::string::String, ::prost::alloc::string::String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
#[derive(::serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAccountResponse {
    #[prost(string, tag = "1")]
    pub account_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub created_at: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub modified_at: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub description: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub account_relationship: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub asset_code: ::prost::alloc::string::String,
    #[prost(uint32, tag = "7")]
    pub asset_scale: u32,
    #[prost(int64, tag = "8")]
    pub maximum_packet_amount: i64,
    #[prost(map = "string, string", tag = "9")]
    pub custom_settings: ::std::collections::HashMap<::prost::alloc::string::String, ::prost::alloc::string::String>,
    #[prost(string, tag = "10")]
    pub ilp_address_segment: ::prost::alloc::string::String,
    #[prost(string, tag = "11")]
    pub link_type: ::prost::alloc::string::String,
    #[prost(bool, tag = "12")]
    pub is_internal: bool,
    #[prost(bool, tag = "13")]
    pub is_connection_initiator: bool,
    #[prost(bool, tag = "14")]
    pub is_send_routes: bool,
    #[prost(bool, tag = "15")]
    pub is_receive_routes: bool,
    #[prost(message, optional, tag = "16")]
    pub balance_settings: ::core::option::Option<BalanceSettings>,
    #[prost(message, optional, tag = "17")]
    pub settlement_engine_details: ::core::option::Option<SettlementEngineDetails>,
    #[prost(bool, tag = "18")]
    pub is_parent_account: bool,
    #[prost(bool, tag = "19")]
    pub is_child_account: bool,
    #[prost(bool, tag = "20")]
    pub is_peer_account: bool,
    #[prost(bool, tag = "21")]
    pub is_peer_or_parent_account: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
#[derive(::serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountResponse {
    #[prost(string, tag = "1")]
    pub account_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub created_at: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub modified_at: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub description: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub account_relationship: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub asset_code: ::prost::alloc::string::String,
    #[prost(uint32, tag = "7")]
    pub asset_scale: u32,
    #[prost(int64, tag = "8")]
    pub maximum_packet_amount: i64,
    #[prost(map = "string, string", tag = "9")]
    pub custom_settings: ::std::collections::HashMap<::prost::alloc::string::String, ::prost::alloc::string::String>,
    #[prost(string, tag = "10")]
    pub ilp_address_segment: ::prost::alloc::string::String,
    #[prost(string, tag = "11")]
    pub link_type: ::prost::alloc::string::String,
    #[prost(bool, tag = "12")]
    pub is_internal: bool,
    #[prost(bool, tag = "13")]
    pub is_connection_initiator: bool,
    #[prost(bool, tag = "14")]
    pub is_send_routes: bool,
    #[prost(bool, tag = "15")]
    pub is_receive_routes: bool,
    #[prost(message, optional, tag = "16")]
    pub balance_settings: ::core::option::Option<BalanceSettings>,
    #[prost(message, optional, tag = "17")]
    pub settlement_engine_details: ::core::option::Option<SettlementEngineDetails>,
    #[prost(bool, tag = "18")]
    pub is_parent_account: bool,
    #[prost(bool, tag = "19")]
    pub is_child_account: bool,
    #[prost(bool, tag = "20")]
    pub is_peer_account: bool,
    #[prost(bool, tag = "21")]
    pub is_peer_or_parent_account: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn create_account_request_keeps_asset_fields_on_the_wire() {
        let request = CreateAccountRequest {
            account_id: "a".to_string(),
            asset_code: "XRP".to_string(),
            asset_scale: 9,
            ..Default::default()
        };

        // empty strings are omitted by proto3, scale 9 is a single varint byte
        assert_eq!(
            request.encode_to_vec(),
            vec![0x0a, 0x01, b'a', 0x12, 0x03, b'X', b'R', b'P', 0x18, 0x09]
        );
    }

    #[test]
    fn unsigned_scale_decodes_what_the_service_sends_as_int32() {
        // the service declares asset_scale as int32; non-negative values share the encoding
        let bytes = [0x12, 0x03, b'X', b'R', b'P', 0x18, 0x09];
        let response = GetBalanceResponse::decode(&bytes[..]).unwrap();

        assert_eq!(response.asset_code, "XRP");
        assert_eq!(response.asset_scale, 9);
    }

    #[test]
    fn balance_response_serializes_with_camel_case_keys() {
        let response = GetBalanceResponse {
            account_id: "demo_user".to_string(),
            asset_code: "XRP".to_string(),
            asset_scale: 9,
            net_balance: -150,
            prepaid_amount: 20,
            clearing_balance: -170,
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "accountId": "demo_user",
                "assetCode": "XRP",
                "assetScale": 9,
                "netBalance": -150,
                "prepaidAmount": 20,
                "clearingBalance": -170,
            })
        );
    }

    #[test]
    fn missing_nested_settings_serialize_as_null() {
        let response = CreateAccountResponse {
            account_id: "demo_user".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["accountId"], "demo_user");
        assert!(json["balanceSettings"].is_null());
        assert!(json["settlementEngineDetails"].is_null());
    }
}
