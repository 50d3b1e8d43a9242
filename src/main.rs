use base64::{engine::general_purpose::STANDARD, Engine as _};
use inkgen::{
    logger, GenerationController, GeneratorConfig, RequestOutcome, TattooClient, TattooForm,
    DATA_URI_PREFIX,
};
use std::env;
use std::fs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded"),
        Err(_) => log::warn!("No .env file found, using system environment variables"),
    }

    logger::init_with_config(logger::LoggerConfig::development())?;

    let config = GeneratorConfig::from_env();
    if config.base_url.is_none() {
        log::error!("❌ INKGEN_BASE_URL is not set; point it at the generation service");
        return Ok(());
    }

    let client = match TattooClient::new(&config) {
        Ok(client) => {
            log::info!("✅ Generator client ready ({})", client.image().endpoint());
            client
        }
        Err(e) => {
            log::error!("❌ Failed to build generator client: {}", e);
            return Err(e.into());
        }
    };

    let mut args = env::args().skip(1);
    let form = TattooForm::new()
        .with_prompt(
            args.next()
                .unwrap_or_else(|| "A roaring dragon wrapped around a sword".to_string()),
        )
        .with_style(args.next().unwrap_or_else(|| "Blackwork".to_string()))
        .with_body_part(args.next().unwrap_or_default())
        .with_image_count(args.next().unwrap_or_default());

    let request = match form.validate() {
        Ok(request) => request,
        Err(errors) => {
            for error in errors.iter() {
                log::error!("❌ {}: {}", error.field, error.message);
            }
            return Ok(());
        }
    };

    log::info!("🎨 Generating tattoo images for prompt: {}", request.prompt);

    let controller: GenerationController = client.controller();
    let handle = controller.trigger(request);
    handle.await?;

    match controller.outcome() {
        RequestOutcome::Succeeded(result) => {
            log::info!("✅ Received {} image(s)", result.len());
            for (index, image) in result.images.iter().enumerate() {
                let encoded = image.strip_prefix(DATA_URI_PREFIX).unwrap_or(image);
                match STANDARD.decode(encoded) {
                    Ok(bytes) => {
                        let filename = format!("tattoo_{}.png", index + 1);
                        match fs::write(&filename, bytes) {
                            Ok(_) => log::info!("💾 Saved {}", filename),
                            Err(e) => log::error!("❌ Failed to save {}: {}", filename, e),
                        }
                    }
                    Err(e) => log::error!("❌ Failed to decode image {}: {}", index + 1, e),
                }
            }
        }
        RequestOutcome::Failed(info) => {
            log::error!("❌ Generation failed ({:?}): {}", info.kind, info.message);
        }
        outcome => {
            log::warn!("Unexpected outcome after completion: {:?}", outcome);
        }
    }

    Ok(())
}
