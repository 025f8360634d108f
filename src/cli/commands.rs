//! Command handlers.
//!
//! Each handler writes its result to `out` so tests can capture it. Domain
//! failures are converted to [`ImageMapError`] before being wrapped in the
//! eyre report, which lets `main` print the categorized message.

use std::io::Write;
use std::path::Path;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;

use crate::auth::{HmacAlgorithm, Totp};
use crate::base32;
use crate::button::PointerEvent;
use crate::color::{DeltaAlgorithm, Rgb};
use crate::config::MapConfig;
use crate::error::ImageMapError;

use super::replay::{load_script, replay};

/// Print the area hovering control position `(x, y)` makes current, or
/// `none`. Disabled areas never become current.
pub fn run_resolve(map: &Path, x: i32, y: i32, out: &mut dyn Write) -> Result<()> {
    let config = MapConfig::load(map).map_err(ImageMapError::from)?;
    let (mut button, _events) = config.build_button().map_err(ImageMapError::from)?;

    button.mouse_move(PointerEvent::at(x, y));
    let hovered = button
        .current_key()
        .and_then(|key| button.registry().lookup(key).ok())
        .map(|area| area.to_string());
    writeln!(out, "{}", hovered.as_deref().unwrap_or("none"))?;
    Ok(())
}

/// Replay a pointer script and print one JSON line per event.
pub fn run_replay(map: &Path, script: &Path, out: &mut dyn Write) -> Result<()> {
    let config = MapConfig::load(map).map_err(ImageMapError::from)?;
    let steps = load_script(script).map_err(ImageMapError::from)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .wrap_err("failed to start the replay runtime")?;

    let outcomes = runtime.block_on(async {
        let (mut button, mut events) = config.build_button()?;
        Ok::<_, ImageMapError>(replay(&mut button, &mut events, &steps).await)
    })?;

    for outcome in outcomes {
        for event in outcome.events {
            writeln!(out, "{} {}", outcome.step, serde_json::to_string(&event)?)?;
        }
    }
    Ok(())
}

/// Print the distance between two colors with four decimals.
pub fn run_delta(a: Rgb, b: Rgb, algorithm: DeltaAlgorithm, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{:.4}", algorithm.distance(a, b))?;
    Ok(())
}

pub fn run_base32_encode(text: &str, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", base32::encode(text.as_bytes()))?;
    Ok(())
}

/// Print decoded bytes as text when they are UTF-8, hex otherwise.
pub fn run_base32_decode(text: &str, out: &mut dyn Write) -> Result<()> {
    let bytes = base32::decode(text).map_err(ImageMapError::from)?;
    match String::from_utf8(bytes) {
        Ok(text) => writeln!(out, "{}", text)?,
        Err(err) => writeln!(out, "{}", hex::encode(err.into_bytes()))?,
    }
    Ok(())
}

pub fn run_totp(
    secret: &str,
    time: Option<u64>,
    period: u64,
    digits: u32,
    algorithm: HmacAlgorithm,
    out: &mut dyn Write,
) -> Result<()> {
    let build = || -> std::result::Result<String, ImageMapError> {
        let totp = Totp::new(secret)?
            .with_period(period)?
            .with_digits(digits)?
            .with_algorithm(algorithm);
        Ok(match time {
            Some(time) => totp.at(time)?,
            None => totp.now()?,
        })
    };
    writeln!(out, "{}", build()?)?;
    Ok(())
}
