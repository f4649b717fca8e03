// getresponse-api: Async Rust client for the GetResponse v3 REST API (Retail + Enterprise)

pub mod client;
pub mod environment;
pub mod error;
pub mod multipart;
pub mod query;
pub mod resources;
pub mod response;
pub mod transport;

pub use client::{Client, ClientConfig};
pub use environment::{AccountType, Endpoints, Environment, EnvironmentDescriptor, Region, Resolution};
pub use error::Error;
pub use multipart::Blob;
pub use query::{DateField, DateRange, ParamValue, Query, QueryParams, Scalar, SortOrder};
pub use resources::workflows::WorkflowStatus;
pub use response::{ApiResponse, ErrorDescriptor, RawResponse};
pub use transport::{Transport, TransportConfig};
