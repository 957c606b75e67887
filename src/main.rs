use gate_admin::{run, AdminResult, ClientConfig};

fn main() -> AdminResult<()> {
    // stdout is reserved for the rendered servers
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    run(&ClientConfig::default())
}
