//! Header parameter parsing and MIME tree interop with the parsing collaborator.

pub mod mime;
pub mod params;
