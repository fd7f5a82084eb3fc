use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "glassmock", version, about = "Render mobile screen mockups as PNG files")]
struct Cli {
    /// Output directory.
    #[arg(long, default_value = "mockups")]
    out: PathBuf,

    /// Theme preset (glass, light, dark) or a theme JSON file. Repeat to render several themes.
    #[arg(long = "theme", default_value = "glass")]
    themes: Vec<String>,

    /// Font manifest JSON (role -> {path, size_px, index}). Defaults to the built-in face.
    #[arg(long)]
    fonts: Option<PathBuf>,

    /// Use the platform font manifest instead of the built-in face.
    #[arg(long, conflicts_with = "fonts")]
    system_fonts: bool,

    /// Screen to render. Repeatable; defaults to every screen.
    #[arg(long = "screen")]
    screens: Vec<glassmock::Screen>,

    /// Backdrop seed for photographic screens. Defaults to each screen's own seed.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = glassmock::FrameSize::PHONE.width)]
    width: u32,

    #[arg(long, default_value_t = glassmock::FrameSize::PHONE.height)]
    height: u32,

    /// Render screens concurrently.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for --parallel.
    #[arg(long, requires = "parallel")]
    threads: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let size = glassmock::FrameSize::new(cli.width, cli.height)?;
    let fonts = load_fonts(&cli)?;

    let screens = if cli.screens.is_empty() {
        glassmock::Screen::ALL.to_vec()
    } else {
        cli.screens.clone()
    };
    let jobs: Vec<glassmock::BatchJob> = screens
        .iter()
        .map(|&screen| {
            let job = glassmock::BatchJob::new(screen, size);
            match cli.seed {
                Some(seed) => job.with_seed(seed),
                None => job,
            }
        })
        .collect();
    let opts = glassmock::BatchOpts {
        parallel: cli.parallel,
        threads: cli.threads,
    };

    for spec in &cli.themes {
        let (name, theme) = resolve_theme(spec)?;
        let rendered = glassmock::render_batch(&jobs, &theme, &fonts, opts)
            .with_context(|| format!("render theme '{name}'"))?;
        for r in rendered {
            let path = cli
                .out
                .join(glassmock::output::file_name(&name, r.job.screen.name()));
            glassmock::save_png(&r.image, &path)
                .with_context(|| format!("write png '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
    }
    Ok(())
}

fn load_fonts(cli: &Cli) -> anyhow::Result<glassmock::FontSet> {
    if let Some(path) = &cli.fonts {
        let f = File::open(path)
            .with_context(|| format!("open font manifest '{}'", path.display()))?;
        let manifest = glassmock::FontManifest::from_json_reader(BufReader::new(f))
            .with_context(|| format!("parse font manifest '{}'", path.display()))?;
        return Ok(glassmock::FontSet::load(&manifest));
    }
    if cli.system_fonts {
        return Ok(glassmock::FontSet::load(&glassmock::FontManifest::system_default()));
    }
    Ok(glassmock::FontSet::builtin())
}

/// Preset name, or a JSON file whose theme `name` is used for output file names.
fn resolve_theme(spec: &str) -> anyhow::Result<(String, glassmock::Theme)> {
    if let Some(theme) = glassmock::Theme::preset(spec) {
        return Ok((spec.to_owned(), theme));
    }
    let path = Path::new(spec);
    let f = File::open(path).with_context(|| {
        format!("'{spec}' is neither a theme preset (glass, light, dark) nor a readable file")
    })?;
    let theme = glassmock::Theme::from_json_reader(BufReader::new(f))
        .with_context(|| format!("parse theme '{}'", path.display()))?;
    Ok((theme.name.clone(), theme))
}
