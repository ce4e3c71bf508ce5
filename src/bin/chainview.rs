use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

use chainview::{
    AssetMap, AssetResolver, ChainSpec, ChainViewer, ElementKind, HeaderState, Rasterizer,
    SyncPolicy, ViewerOptions, VisibilityOverrides,
};

#[derive(Parser, Debug)]
#[command(name = "chainview", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a chain as PNG or SVG (chosen by the output extension).
    Render(RenderArgs),
    /// Print scale, content bounds, state and composed elements as JSON.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct ViewArgs {
    /// Input chain specification JSON.
    #[arg(long)]
    spec: PathBuf,

    /// Directory holding exported images. Without it, images render empty.
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Target viewport width.
    #[arg(long, requires = "height")]
    width: Option<f64>,

    /// Target viewport height.
    #[arg(long, requires = "width")]
    height: Option<f64>,

    /// Activate an offer (repeatable, applied in order).
    #[arg(long = "activate", value_name = "OFFER_KEY")]
    activate: Vec<String>,

    /// Force the header state.
    #[arg(long)]
    header: Option<String>,

    /// Click a button (repeatable). The click feedback is shown, not reverted.
    #[arg(long = "click", value_name = "OFFER_KEY")]
    click: Vec<String>,

    /// Hover a button.
    #[arg(long, value_name = "OFFER_KEY")]
    hover: Option<String>,

    /// Let offer activation drive the matching button state.
    #[arg(long)]
    sync: bool,

    /// Hide a component kind (repeatable).
    #[arg(long, value_enum)]
    hide: Vec<HideChoice>,

    /// Advance the viewer clock before rendering, in milliseconds.
    #[arg(long, default_value_t = 0)]
    at_ms: u64,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    view: ViewArgs,

    /// Output path (`.png` or `.svg`).
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    #[command(flatten)]
    view: ViewArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum HideChoice {
    Background,
    Header,
    Offers,
    Timer,
    Buttons,
    Rewards,
}

impl From<HideChoice> for ElementKind {
    fn from(v: HideChoice) -> Self {
        match v {
            HideChoice::Background => ElementKind::Background,
            HideChoice::Header => ElementKind::Header,
            HideChoice::Offers => ElementKind::Offers,
            HideChoice::Timer => ElementKind::Timer,
            HideChoice::Buttons => ElementKind::Buttons,
            HideChoice::Rewards => ElementKind::Rewards,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn build_viewer(args: &ViewArgs) -> anyhow::Result<ChainViewer> {
    let spec = ChainSpec::from_path(&args.spec)
        .with_context(|| format!("load chain spec '{}'", args.spec.display()))?;

    let assets = match &args.assets {
        Some(dir) => AssetResolver::new(dir)
            .resolve(&spec)
            .with_context(|| format!("resolve assets in '{}'", dir.display()))?,
        None => AssetMap::new(),
    };

    let mut options = ViewerOptions::default();
    if let (Some(w), Some(h)) = (args.width, args.height) {
        options = options.with_target(w, h);
    }
    if args.sync {
        options = options.with_sync(SyncPolicy::ButtonFollowsOffer);
    }
    let visibility = args
        .hide
        .iter()
        .fold(VisibilityOverrides::default(), |o, k| o.hide((*k).into()));
    options = options.with_visibility(visibility);

    let mut viewer = ChainViewer::new(spec, assets, options)?;

    for key in &args.activate {
        viewer
            .activate_offer(key)
            .with_context(|| format!("activate offer '{key}'"))?;
    }
    if let Some(h) = &args.header {
        let state: HeaderState = h.parse()?;
        viewer.set_header_state(state);
    }
    if let Some(key) = &args.hover {
        viewer
            .button_mouse_enter(key)
            .with_context(|| format!("hover button '{key}'"))?;
    }
    if args.at_ms > 0 {
        viewer.advance(std::time::Duration::from_millis(args.at_ms))?;
    }
    for key in &args.click {
        let fired = viewer
            .button_click(key)
            .with_context(|| format!("click button '{key}'"))?;
        if !fired {
            eprintln!("button '{key}' ignored the click");
        }
    }
    Ok(viewer)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut viewer = build_viewer(&args.view)?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    match output_kind(&args.out)? {
        OutputKind::Svg => {
            let svg = viewer.render_svg();
            std::fs::write(&args.out, svg)
                .with_context(|| format!("write svg '{}'", args.out.display()))?;
        }
        OutputKind::Png => {
            let rasterizer = Rasterizer::new(args.view.assets.clone());
            let frame = viewer.rasterize(&rasterizer)?;
            frame.save_png(&args.out)?;
        }
    }

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let mut viewer = build_viewer(&args.view)?;
    let elements: Vec<_> = viewer.compose().iter().map(|n| n.id.clone()).collect();
    let report = serde_json::json!({
        "chainId": viewer.spec().chain_id(),
        "frameSize": viewer.frame_size(),
        "scale": viewer.scale_fit(),
        "contentBounds": viewer.content_bounds(),
        "state": viewer.snapshot(),
        "elements": elements,
        "fingerprint": format!("{:?}", viewer.tree_fingerprint()),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

enum OutputKind {
    Png,
    Svg,
}

fn output_kind(path: &Path) -> anyhow::Result<OutputKind> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => Ok(OutputKind::Png),
        Some("svg") => Ok(OutputKind::Svg),
        _ => anyhow::bail!(
            "unsupported output extension for '{}' (expected .png or .svg)",
            path.display()
        ),
    }
}
