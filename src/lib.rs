//! # imgfx
//!
//! Unofficial async client for the Google Labs ImageFX image-generation
//! service. Callers supply a raw browser session cookie; the library
//! exchanges it for a short-lived bearer token, keeps that token fresh
//! across calls, and turns validated prompts into ordered batches of
//! base64-encoded image results.
//!
//! ```rust,no_run
//! use imgfx::{AspectRatio, ImageFx, Model, Prompt};
//!
//! # async fn run() -> Result<(), imgfx::ImageFxError> {
//! let fx = ImageFx::new(std::env::var("IMGFX_COOKIE").unwrap())?;
//!
//! let prompt = Prompt::builder("a red fox in the snow")
//!     .model(Model::Imagen3_5)
//!     .aspect_ratio(AspectRatio::Landscape)
//!     .image_count(2)
//!     .build()?;
//!
//! for image in fx.generate_image(&prompt).await? {
//!     std::fs::write(format!("fox_{}.png", image.request_index()), image.decoded()?).unwrap();
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Nothing in the library retries: a failed call reports a typed error and
//! leaves retry/backoff policy to the caller.

pub mod account;
pub mod client;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod prompt;

#[cfg(test)]
mod testserver;

pub use account::Account;
pub use client::ImageFx;
pub use config::ImageFxConfig;
pub use error::{AccountError, ImageError, ImageFxError, PromptError, Result};
pub use models::common::{AspectRatio, ImageType, Model};
pub use models::image::Image;
pub use prompt::{Prompt, PromptBuilder};
