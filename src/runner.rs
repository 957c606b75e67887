use std::io::{self, Write};

use tracing::{debug, warn};

use crate::client::{bind, invoke};
use crate::config::ClientConfig;
use crate::connection::{connect, Connection};
use crate::error::{AdminError, AdminResult};
use crate::proto::ListServersRequest;
use crate::render::render;

/// Query the proxy at `config.address` and print its servers to stdout.
///
/// A failed call prints a diagnostic and still returns `Ok`; only transport,
/// rendering and output errors are returned.
pub fn run(config: &ClientConfig) -> AdminResult<()> {
    let connection = connect(config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(connection, &mut out)
}

/// List servers over an open connection and write the result to `out`.
///
/// The connection is consumed and released on every return path.
pub fn execute<W: Write>(connection: Connection, out: &mut W) -> AdminResult<()> {
    let result = list_and_print(&connection, out);
    connection.release();
    result
}

fn list_and_print<W: Write>(connection: &Connection, out: &mut W) -> AdminResult<()> {
    let mut binding = bind(connection);

    match invoke(&mut binding, ListServersRequest {}) {
        Ok(response) => {
            let text = render(&response)?;
            writeln!(out, "{}", text)?;
        }
        Err(err @ AdminError::Rpc { .. }) => {
            warn!(
                "ListServers on {} failed, make sure Gate is running with the API enabled",
                connection.target()
            );
            writeln!(out, "{}", err.diagnostic())?;
        }
        Err(err) => return Err(err),
    }

    out.flush()?;
    debug!("Finished listing servers");
    Ok(())
}
