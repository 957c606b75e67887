use tonic::transport::Channel;
use tracing::debug;

use crate::connection::Connection;
use crate::error::AdminResult;
use crate::proto::gate_service_client::GateServiceClient;
use crate::proto::{ListServersRequest, ListServersResponse};

/// Generated `GateService` client bound to a [`Connection`].
pub struct ClientBinding<'c> {
    connection: &'c Connection,
    client: GateServiceClient<Channel>,
}

pub fn bind(connection: &Connection) -> ClientBinding<'_> {
    ClientBinding {
        connection,
        client: GateServiceClient::new(connection.channel()),
    }
}

/// Issue `ListServers` and block until the proxy answers or the call fails.
///
/// A single attempt is made; every non-OK status is an `AdminError::Rpc`.
pub fn invoke(
    binding: &mut ClientBinding<'_>,
    request: ListServersRequest,
) -> AdminResult<ListServersResponse> {
    debug!("Calling ListServers on {}", binding.connection.target());
    let call = binding.client.list_servers(tonic::Request::new(request));
    let response = binding.connection.block_on(call)??.into_inner();
    debug!("ListServers returned {} servers", response.servers.len());
    Ok(response)
}
