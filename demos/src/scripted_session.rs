// Copyright 2025 the Overtrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted tracing session.
//!
//! Drive a headless session through permission, image selection, slider
//! input and a few gestures, printing each resulting frame.
//!
//! Run:
//! - `cargo run -p overtrace_demos --bin scripted_session`
//! - `cargo run -p overtrace_demos --bin scripted_session -- --config preset.toml -v`

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use kurbo::{Size, Vec2};
use overtrace_session::{
    AccessStatus, CameraAccess, DisplayServices, Frame, GestureEvent, GesturePhase, ImageSource,
    Layer, PlatformError, Session, SessionConfig,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scripted_session", about = "Run a scripted overlay tracing session")]
struct Args {
    /// TOML preset with initial control values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 390.0)]
    width: f64,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 844.0)]
    height: f64,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Denies the first prompt, allows the second.
struct ReluctantCamera {
    asked: u32,
}

impl CameraAccess for ReluctantCamera {
    fn request_access(&mut self) -> AccessStatus {
        self.asked += 1;
        if self.asked == 1 {
            AccessStatus::Denied
        } else {
            AccessStatus::Granted
        }
    }
}

struct Library(Vec<Option<&'static str>>);

impl ImageSource for Library {
    fn pick_image(&mut self) -> Option<String> {
        self.0.pop().flatten().map(str::to_owned)
    }
}

struct Headless;

impl DisplayServices for Headless {
    fn keep_awake(&mut self) -> Result<(), PlatformError> {
        Ok(())
    }

    fn set_brightness(&mut self, _level: f64) -> Result<(), PlatformError> {
        Err(PlatformError::new("brightness", "no backlight on a headless host"))
    }

    fn lock_portrait(&mut self) -> Result<(), PlatformError> {
        Ok(())
    }
}

fn load_config(path: Option<&Path>) -> Result<SessionConfig> {
    let Some(path) = path else {
        return Ok(SessionConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading preset {}", path.display()))?;
    parse_preset(&text).with_context(|| format!("parsing preset {}", path.display()))
}

fn parse_preset(text: &str) -> Result<SessionConfig> {
    let config: SessionConfig = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
}

fn describe(step: &str, frame: &Frame) {
    match frame {
        Frame::RequestingPermission { request_label } => {
            println!("{step}: waiting for camera permission [{request_label}]");
        }
        Frame::PermissionDenied { retry_label } => {
            println!("{step}: no camera access [{retry_label}]");
        }
        Frame::Scene(scene) => {
            println!("{step}:");
            for layer in &scene.layers {
                match layer {
                    Layer::Camera => println!("  camera"),
                    Layer::Overlay(o) => println!(
                        "  overlay {} opacity={} transform={:?}",
                        o.image_uri,
                        o.opacity,
                        o.transform.as_coeffs()
                    ),
                    Layer::Grid(lines) => println!("  grid ({} lines)", lines.len()),
                    Layer::Controls(panel) => {
                        let labels: Vec<_> = panel.buttons.iter().map(|b| b.label).collect();
                        println!(
                            "  controls opacity={} spacing={} {labels:?}",
                            panel.opacity, panel.grid_spacing
                        );
                    }
                    Layer::ShowControls(button) => println!("  [{}]", button.label),
                }
            }
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = load_config(args.config.as_deref())?;
    let mut session = Session::new(Size::new(args.width, args.height), config)?;
    session.start(&mut Headless);
    describe("startup", &session.frame());

    let mut camera = ReluctantCamera { asked: 0 };
    session.request_camera(&mut camera);
    describe("first prompt", &session.frame());
    session.request_camera(&mut camera);

    // Popped from the back: one cancelled pick, then a real one.
    let mut library = Library(vec![Some("file:///reference.png"), None]);
    session.pick_image(&mut library)?;
    session.pick_image(&mut library)?;

    session.set_opacity(0.35)?;
    session.set_grid_spacing(60.0)?;
    if session.controls().zoom_lock {
        session.toggle_zoom_lock()?;
    }

    for event in [
        GestureEvent::pinch(GesturePhase::Start, 1.0),
        GestureEvent::pinch(GesturePhase::Active, 1.4),
        GestureEvent::pinch(GesturePhase::End, 1.4),
        GestureEvent::pan(GesturePhase::Start, Vec2::ZERO),
        GestureEvent::pan(GesturePhase::Active, (24.0, -12.0)),
        GestureEvent::pan(GesturePhase::End, (24.0, -12.0)),
    ] {
        session.handle_gesture(event);
    }
    info!(state = ?session.transform().debug_info(), "overlay transform");
    describe("after gestures", &session.frame());

    session.set_controls_visible(false)?;
    describe("controls hidden", &session.frame());
    Ok(())
}
