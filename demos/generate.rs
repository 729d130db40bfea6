use std::env;
use std::fs;

use imgfx::{AspectRatio, ImageFx, ImageFxConfig, Model, Prompt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    imgfx::logger::init_with_level(log::LevelFilter::Debug)?;

    log::info!("🔍 Checking ImageFX environment...");

    let cookie = match env::var("IMGFX_COOKIE") {
        Ok(cookie) => {
            log::info!("✅ Session cookie found in environment");
            log::debug!("Cookie length: {}", cookie.len());
            cookie
        }
        Err(_) => {
            log::error!("❌ IMGFX_COOKIE is not set");
            log::warn!("💡 Copy the __Secure-next-auth.session-token cookie from a logged-in labs.google session");
            return Err("IMGFX_COOKIE is required".into());
        }
    };

    log::info!("🔄 Creating ImageFX client...");
    let fx = ImageFx::with_config(cookie, ImageFxConfig::from_env())?;

    let prompt = Prompt::builder(
        "A serene landscape with mountains and a lake at sunset, digital art style",
    )
    .model(Model::Imagen3_5)
    .aspect_ratio(AspectRatio::Landscape)
    .image_count(2)
    .build()?;

    log::info!("🎨 Generating {} image(s)...", prompt.image_count());

    match fx.generate_image(&prompt).await {
        Ok(images) => {
            log::info!("✅ Generation successful, {} image(s) returned", images.len());

            for image in &images {
                let filename = format!(
                    "imgfx_{}_{}.png",
                    chrono::Utc::now().timestamp(),
                    image.request_index()
                );

                match image.decoded() {
                    Ok(bytes) => match fs::write(&filename, bytes) {
                        Ok(_) => log::info!("💾 Image saved to: {}", filename),
                        Err(e) => log::error!("❌ Failed to save image: {}", e),
                    },
                    Err(e) => log::error!("❌ Failed to decode base64 image: {}", e),
                }

                if let Some(seed) = image.seed() {
                    log::debug!("🌱 Seed for index {}: {}", image.request_index(), seed);
                }
            }
        }
        Err(e) if e.is_rate_limited() => {
            log::error!("❌ Rate limited by upstream: {}", e);
            log::warn!("💡 Wait a while before retrying, quota is enforced server-side");
        }
        Err(e) if e.is_authentication_failure() => {
            log::error!("❌ Authentication failed: {}", e);
            log::warn!("💡 The session cookie has likely expired, grab a fresh one");
        }
        Err(e) => {
            log::error!("❌ Generation failed: {}", e);
        }
    }

    log::info!("🎉 Done");
    Ok(())
}
