use std::path::PathBuf;
use std::process::Command;
use std::time::Duration;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use scenelink::{
    CallOpts, FrameFormat, Point2, ProcessLink, Scene, SceneConfig,
};

#[derive(Parser, Debug)]
#[command(name = "scenelink", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Spawn an engine process and verify the readiness handshake.
    Probe(ProbeArgs),
    /// Spawn an engine, render a short demo scene, and record its frames.
    Record(RecordArgs),
}

#[derive(Parser, Debug)]
struct ProbeArgs {
    /// Engine command line (split on whitespace), e.g. "node engine.js".
    #[arg(long)]
    engine: String,

    /// Seconds to wait for the ready event.
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

#[derive(Parser, Debug)]
struct RecordArgs {
    /// Engine command line (split on whitespace).
    #[arg(long)]
    engine: String,

    /// Directory receiving the numbered frame files.
    #[arg(long)]
    out: PathBuf,

    /// Number of frames to render.
    #[arg(long, default_value_t = 30)]
    frames: u32,

    /// Record SVG markup instead of PNG rasters.
    #[arg(long, default_value_t = false)]
    svg: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Probe(args) => probe(args),
        Cmd::Record(args) => record(args),
    }
}

fn spawn_engine(cmdline: &str) -> anyhow::Result<ProcessLink> {
    let mut parts = cmdline.split_whitespace();
    let program = parts.next().context("engine command line is empty")?;
    let mut cmd = Command::new(program);
    cmd.args(parts);
    ProcessLink::spawn(&mut cmd).context("failed to start engine process")
}

fn probe(args: ProbeArgs) -> anyhow::Result<()> {
    let link = spawn_engine(&args.engine)?;
    let scene = Scene::connect(link, SceneConfig::default())?;
    let bound = Duration::from_secs(args.timeout);

    scene.connection().gate().request();
    scene
        .invoke("emitReady", Vec::new(), CallOpts {
            timeout: Some(bound),
            await_ready: false,
        })
        .context("engine did not answer the handshake call")?;
    anyhow::ensure!(
        scene.connection().gate().wait_ready_timeout(bound),
        "engine answered but never emitted the ready event"
    );

    println!("engine ready");
    Ok(())
}

fn record(args: RecordArgs) -> anyhow::Result<()> {
    let config = SceneConfig {
        format: if args.svg {
            FrameFormat::Svg
        } else {
            FrameFormat::Png
        },
        ..SceneConfig::default()
    };
    let center = Point2(
        f64::from(config.width) / 2.0,
        f64::from(config.height) / 2.0,
    );

    let link = spawn_engine(&args.engine)?;
    let scene = Scene::connect(link, config)?;
    scene.wait_until_ready()?;

    let circle = scene.new_circle(center, 240.0, 16)?;
    let circle = circle
        .with_stroke_width(8.0, false)
        .with_stroke_opacity(1.0, false);
    scene.add(&circle)?;

    scene.begin_recording(&args.out)?;
    for frame in 0..args.frames {
        let t = f64::from(frame) / f64::from(args.frames.max(1));
        let staged = scene.create_node(&circle, t)?;
        scene.clear()?;
        scene.add(&staged)?;
        scene.render_frame()?;
    }
    let written = scene.stop_recording()?;

    println!("wrote {written} frames to {}", args.out.display());
    Ok(())
}
