//! Error types for the pointer pipeline
//!
//! Nothing in the per-entity loop can fail. These errors describe unusable
//! camera views (which degrade a frame) and configuration loading.

/// Errors raised outside the per-entity resolution loop
#[derive(Debug, thiserror::Error)]
pub enum InteractionError {
    /// Viewport dimensions cannot map window pixels into world space
    #[error(
        "Invalid viewport: game {game_width}x{game_height}, window {window_width}x{window_height}"
    )]
    InvalidViewport {
        game_width: f32,
        game_height: f32,
        window_width: f32,
        window_height: f32,
    },

    /// Camera zoom must be finite and positive
    #[error("Invalid camera zoom: {zoom}")]
    InvalidZoom { zoom: f32 },

    /// Configuration could not be loaded or deserialized
    #[error(transparent)]
    Config(#[from] config::ConfigError),
}

/// Result type alias for pointer pipeline operations
pub type InteractionResult<T> = Result<T, InteractionError>;
