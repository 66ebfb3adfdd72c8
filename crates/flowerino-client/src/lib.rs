pub mod service;

pub use service::{AgentInfo, GeneratedArtifact, HttpServiceClient, RemoteService};
