use thiserror::Error;

/// Errors surfaced by the platform-free core.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CercaError {
    /// Width or height is zero, negative or not finite (e.g. during teardown).
    #[error("degenerate viewport {width}x{height}")]
    DegenerateViewport { width: f32, height: f32 },
    #[error("unknown section index {0}")]
    UnknownSection(usize),
}
