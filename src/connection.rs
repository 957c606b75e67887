use std::fmt;
use std::future::Future;

use tokio::runtime::{Builder, Runtime};
use tonic::transport::{Channel, Endpoint, Uri};
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{AdminError, AdminResult};

type ReleaseHook = Box<dyn FnOnce() + Send>;

/// Plaintext channel to the proxy control API.
///
/// The connection owns the runtime its calls are driven on, so callers stay
/// fully synchronous. Released exactly once, either through [`release`] or
/// when dropped.
///
/// [`release`]: Connection::release
pub struct Connection {
    channel: Channel,
    target: Uri,
    runtime: Option<Runtime>,
    release_hook: Option<ReleaseHook>,
}

/// Open a channel to the configured address.
///
/// No I/O happens here: an unreachable proxy is only noticed by the first call.
pub fn connect(config: &ClientConfig) -> AdminResult<Connection> {
    let target = config.target()?;
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(runtime_error)?;

    let endpoint = Endpoint::from(target.clone())
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout);

    // The channel spawns its worker on the current runtime.
    let channel = {
        let _guard = runtime.enter();
        endpoint.connect_lazy()
    };

    debug!("Opened channel to {}", target);

    Ok(Connection {
        channel,
        target,
        runtime: Some(runtime),
        release_hook: None,
    })
}

fn runtime_error(err: std::io::Error) -> AdminError {
    AdminError::transport(format!("failed to start channel runtime: {}", err))
}

impl Connection {
    pub fn target(&self) -> &Uri {
        &self.target
    }

    pub fn is_released(&self) -> bool {
        self.runtime.is_none()
    }

    /// Register a callback that runs when the connection is released.
    pub fn on_release(&mut self, hook: impl FnOnce() + Send + 'static) {
        self.release_hook = Some(Box::new(hook));
    }

    pub(crate) fn channel(&self) -> Channel {
        self.channel.clone()
    }

    /// Drive `future` to completion on this connection's runtime.
    pub(crate) fn block_on<F: Future>(&self, future: F) -> AdminResult<F::Output> {
        let runtime = self
            .runtime
            .as_ref()
            .ok_or_else(|| AdminError::transport("connection already released"))?;
        Ok(runtime.block_on(future))
    }

    /// Close the channel and stop its runtime.
    pub fn release(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        let Some(runtime) = self.runtime.take() else {
            return;
        };
        runtime.shutdown_background();
        debug!("Released channel to {}", self.target);

        if let Some(hook) = self.release_hook.take() {
            hook();
        }
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("target", &self.target)
            .field("released", &self.is_released())
            .finish()
    }
}
