use thiserror::Error;

pub type AdminResult<T> = Result<T, AdminError>;

#[derive(Error, Debug)]
pub enum AdminError {
    /// The target could not be turned into a plaintext gRPC channel.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The call did not complete with an OK status.
    #[error("status: {code:?}, message: {message:?}")]
    Rpc { code: tonic::Code, message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AdminError {
    pub fn transport(msg: impl Into<String>) -> Self {
        AdminError::Transport(msg.into())
    }

    pub fn rpc(code: tonic::Code, msg: impl Into<String>) -> Self {
        AdminError::Rpc {
            code,
            message: msg.into(),
        }
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        AdminError::Serialization(msg.into())
    }

    pub fn is_rpc(&self) -> bool {
        matches!(self, AdminError::Rpc { .. })
    }

    /// One-line report printed when the remote call fails.
    pub fn diagnostic(&self) -> String {
        let details = self.to_string().replace(['\r', '\n'], " ");
        format!("RPC failed: {}", details)
    }
}

impl From<tonic::Status> for AdminError {
    fn from(status: tonic::Status) -> Self {
        AdminError::rpc(status.code(), status.message())
    }
}

impl From<tonic::transport::Error> for AdminError {
    fn from(err: tonic::transport::Error) -> Self {
        AdminError::transport(err.to_string())
    }
}

impl From<serde_json::Error> for AdminError {
    fn from(err: serde_json::Error) -> Self {
        AdminError::serialization(err.to_string())
    }
}
