//! Hardware-acceleration broker for video decode pipelines.
//!
//! Two exports carry the whole surface: [`map_chroma`] translates a hardware
//! surface format (plus the software chroma layout where that matters) into
//! the abstract [`ChromaTag`] the pipeline expects, and [`AccelSession`]
//! probes an explicit [`BackendRegistry`] of platform backends until one
//! accepts, then exposes a uniform start/stop lifecycle over whichever
//! backend won. Hardware acceleration is an optional fast path: a session
//! that cannot be created is a normal outcome, and callers fall back to
//! software decoding.
#![forbid(unsafe_code)]

pub mod backend;
pub mod chroma;
pub mod context;
pub mod error;
pub mod format;
pub mod session;

pub use backend::{AccelBackend, BackendFactory, BackendRegistry, ProbeFailure};
pub use chroma::map_chroma;
pub use context::DecodeContext;
pub use error::{BrokerError, BrokerResult};
pub use format::{ChromaTag, FrameDescriptor, HardwareFormat, SoftwareFormat};
pub use session::{AccelSession, SessionConfig};
