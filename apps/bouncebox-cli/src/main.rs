use anyhow::{Context, bail};
use bouncebox_app::{DemoApp, DemoConfig, FrameReport};
use bouncebox_motion::Direction;
use bouncebox_render::{DrawingSurface, SurfaceSize, TextRenderer, VirtualSurface};
use clap::{Parser, Subcommand};
use glam::EulerRot;
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bouncebox-cli", about = "Headless bouncebox runner")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate versions and the default scene
    Info,
    /// Drive the frame callback against a virtual surface
    Simulate {
        /// Number of frames to run
        #[arg(short, long, default_value = "120")]
        frames: u64,
        /// Simulated frames per second, used to derive timestamps
        #[arg(long, default_value = "60")]
        fps: f64,
        /// Print every K-th frame
        #[arg(short, long, default_value = "1")]
        every: u64,
        /// YAML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Frame at which the display size changes
        #[arg(long, requires = "to")]
        resize_at: Option<u64>,
        /// New display size, as WxH
        #[arg(long, value_parser = parse_size, requires = "resize_at")]
        to: Option<SurfaceSize>,
        /// Emit one JSON object per printed frame
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration as YAML
    Config {
        /// YAML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// One line of `simulate --json` output.
#[derive(Serialize)]
struct FrameLine {
    frame: u64,
    timestamp_ms: f64,
    resized: bool,
    surface: String,
    aspect: f32,
    x: f32,
    rotation: [f32; 3],
    direction: Option<Direction>,
    flipped: bool,
}

fn parse_size(s: &str) -> Result<SurfaceSize, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got {s:?}"))?;
    let width: u32 = w.trim().parse().map_err(|e| format!("bad width: {e}"))?;
    let height: u32 = h.trim().parse().map_err(|e| format!("bad height: {e}"))?;
    if width == 0 || height == 0 {
        return Err(format!("size must be non-zero, got {width}x{height}"));
    }
    Ok(SurfaceSize::new(width, height))
}

fn load_config(path: Option<&Path>) -> anyhow::Result<DemoConfig> {
    match path {
        Some(path) => DemoConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(DemoConfig::default()),
    }
}

fn frame_line(
    demo: &DemoApp,
    surface: &VirtualSurface,
    report: &FrameReport,
    timestamp_ms: f64,
) -> FrameLine {
    let (x, rotation) = demo
        .cube_transform()
        .map(|t| {
            let (rx, ry, rz) = t.rotation.to_euler(EulerRot::XYZ);
            (t.position.x, [rx, ry, rz])
        })
        .unwrap_or_default();
    FrameLine {
        frame: report.frame,
        timestamp_ms,
        resized: report.resized,
        surface: surface.backing_size().to_string(),
        aspect: demo.camera().aspect,
        x,
        rotation,
        direction: report.step.map(|s| s.direction),
        flipped: report.step.is_some_and(|s| s.flipped),
    }
}

/// Knobs for a headless run.
#[derive(Debug, Clone, Copy)]
struct SimulateOptions {
    frames: u64,
    fps: f64,
    every: u64,
    resize: Option<(u64, SurfaceSize)>,
    json: bool,
}

/// Run the frame callback `opts.frames` times against a virtual surface and
/// write the selected frames to `out`. Returns how often the surface resized.
fn simulate(
    config: &DemoConfig,
    opts: SimulateOptions,
    out: &mut impl Write,
) -> anyhow::Result<u32> {
    if !(opts.fps.is_finite() && opts.fps > 0.0) {
        bail!("--fps must be a positive number, got {}", opts.fps);
    }
    let every = opts.every.max(1);

    let mut demo = DemoApp::new(config);
    let mut surface =
        VirtualSurface::new(SurfaceSize::new(config.window.width, config.window.height));
    let mut renderer = TextRenderer::new(config.renderer);

    for i in 0..opts.frames {
        let frame = i + 1;
        if let Some((_, size)) = opts.resize.filter(|(at, _)| *at == frame) {
            surface.set_display_size(size);
        }

        let timestamp_ms = i as f64 * 1000.0 / opts.fps;
        let (report, text) = demo.frame(timestamp_ms, &mut surface, &mut renderer);

        // Resized frames are always shown.
        if frame % every != 0 && !report.resized {
            continue;
        }
        if opts.json {
            let line = frame_line(&demo, &surface, &report, timestamp_ms);
            serde_json::to_writer(&mut *out, &line)?;
            writeln!(out)?;
        } else {
            write!(out, "{text}")?;
            if report.resized {
                writeln!(out, "(resized)")?;
            }
        }
    }
    out.flush()?;
    Ok(surface.resize_count())
}

fn write_config(config: &DemoConfig, out: &mut impl Write) -> anyhow::Result<()> {
    write!(out, "{}", config.to_yaml()?)?;
    out.flush()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Info => {
            println!("bouncebox-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("render: {}", bouncebox_render::crate_info());
            let demo = DemoApp::new(&DemoConfig::default());
            println!("{}", demo.scene().summary());
        }
        Commands::Simulate {
            frames,
            fps,
            every,
            config,
            resize_at,
            to,
            json,
        } => {
            let config = load_config(config.as_deref())?;
            let opts = SimulateOptions {
                frames,
                fps,
                every,
                resize: resize_at.zip(to),
                json,
            };
            tracing::info!(frames, fps, "simulating");
            let resizes = simulate(&config, opts, &mut io::stdout().lock())?;
            tracing::info!(resizes, "simulation finished");
        }
        Commands::Config { config } => {
            let config = load_config(config.as_deref())?;
            write_config(&config, &mut io::stdout().lock())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_size_accepts_wxh() {
        assert_eq!(parse_size("640x480"), Ok(SurfaceSize::new(640, 480)));
        assert_eq!(parse_size("800X600"), Ok(SurfaceSize::new(800, 600)));
    }

    #[test]
    fn parse_size_rejects_garbage() {
        assert!(parse_size("640").is_err());
        assert!(parse_size("ax480").is_err());
        assert!(parse_size("0x480").is_err());
    }

    fn json_opts(frames: u64) -> SimulateOptions {
        SimulateOptions {
            frames,
            fps: 60.0,
            every: 1,
            resize: None,
            json: true,
        }
    }

    #[test]
    fn json_output_is_one_object_per_line() {
        let mut out = Vec::new();
        simulate(&DemoConfig::default(), json_opts(5), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        for (i, line) in lines.iter().enumerate() {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(value["frame"], (i + 1) as u64);
            assert_eq!(value["direction"], "right");
        }
    }

    #[test]
    fn json_output_keeps_resized_frames_between_samples() {
        let opts = SimulateOptions {
            every: 4,
            resize: Some((3, SurfaceSize::new(800, 400))),
            ..json_opts(8)
        };
        let mut out = Vec::new();
        let resizes = simulate(&DemoConfig::default(), opts, &mut out).unwrap();
        assert_eq!(resizes, 1);

        let frames: Vec<serde_json::Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        let numbers: Vec<u64> = frames.iter().map(|f| f["frame"].as_u64().unwrap()).collect();
        assert_eq!(numbers, [3, 4, 8]);
        assert_eq!(frames[0]["resized"], true);
        assert_eq!(frames[0]["surface"], "800x400");
        assert_eq!(frames[1]["resized"], false);
    }

    #[test]
    fn text_output_has_a_header_per_frame() {
        let opts = SimulateOptions {
            json: false,
            ..json_opts(3)
        };
        let mut out = Vec::new();
        simulate(&DemoConfig::default(), opts, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("=== Frame").count(), 3);
    }

    #[test]
    fn bad_fps_is_rejected() {
        let opts = SimulateOptions {
            fps: 0.0,
            ..json_opts(1)
        };
        assert!(simulate(&DemoConfig::default(), opts, &mut Vec::<u8>::new()).is_err());
    }

    #[test]
    fn config_output_parses_back() {
        let mut config = DemoConfig::default();
        config.window.title = "round trip".into();
        let mut out = Vec::new();
        write_config(&config, &mut out).unwrap();

        let back = DemoConfig::from_yaml(&String::from_utf8(out).unwrap()).unwrap();
        assert_eq!(back.window.title, "round trip");
        assert_eq!(back.motion, config.motion);
    }

    #[test]
    fn cli_requires_resize_pair() {
        assert!(Cli::try_parse_from(["bouncebox-cli", "simulate", "--resize-at", "3"]).is_err());
        assert!(
            Cli::try_parse_from(["bouncebox-cli", "simulate", "--resize-at", "3", "--to", "10x20"])
                .is_ok()
        );
    }
}
