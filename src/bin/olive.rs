use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "olive", version)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a scene JSON file to a PNG.
    Draw(DrawArgs),
    /// Render the showcase images.
    Gallery(GalleryArgs),
    /// Write baseline images for the regression cases.
    Record(HarnessArgs),
    /// Re-render the regression cases and compare against their baselines.
    Replay(HarnessArgs),
}

#[derive(Parser, Debug)]
struct DrawArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct GalleryArgs {
    /// Directory receiving one PNG per image.
    #[arg(long, default_value = "imgs")]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct HarnessArgs {
    /// Directory holding `<case>_expected.png` baselines.
    #[arg(long, default_value = "test")]
    dir: PathBuf,

    /// Only run the named case.
    #[arg(long)]
    case: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Draw(args) => cmd_draw(args),
        Command::Gallery(args) => cmd_gallery(args),
        Command::Record(args) => cmd_record(args),
        Command::Replay(args) => cmd_replay(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_draw(args: DrawArgs) -> anyhow::Result<()> {
    let scene = olive::Scene::from_path(&args.in_path)
        .with_context(|| format!("load scene '{}'", args.in_path.display()))?;
    let frame = scene.render()?;
    frame
        .save_png(&args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_gallery(args: GalleryArgs) -> anyhow::Result<()> {
    let written = olive::gallery::render_gallery(&args.out_dir)
        .with_context(|| format!("render gallery into '{}'", args.out_dir.display()))?;
    for path in written {
        eprintln!("generated {}", path.display());
    }
    Ok(())
}

fn selected_cases(
    name: Option<&str>,
) -> anyhow::Result<Vec<&'static olive::regression::RegressionCase>> {
    match name {
        None => Ok(olive::regression::regression_cases().iter().collect()),
        Some(name) => {
            let case = olive::regression::find_case(name).with_context(|| {
                let known: Vec<&str> = olive::regression::regression_cases()
                    .iter()
                    .map(|c| c.name)
                    .collect();
                format!("unknown case '{name}' (known: {})", known.join(", "))
            })?;
            Ok(vec![case])
        }
    }
}

fn cmd_record(args: HarnessArgs) -> anyhow::Result<()> {
    for case in selected_cases(args.case.as_deref())? {
        let path = olive::regression::record(case, &args.dir)?;
        eprintln!("generated {}", path.display());
    }
    Ok(())
}

fn cmd_replay(args: HarnessArgs) -> anyhow::Result<()> {
    let mut failed = 0usize;
    for case in selected_cases(args.case.as_deref())? {
        let expected = case.expected_path(&args.dir);
        match olive::regression::replay(case, &args.dir)? {
            olive::regression::ReplayOutcome::Passed => {
                eprintln!("{} OK", expected.display());
            }
            olive::regression::ReplayOutcome::Failed(failure) => {
                failed += 1;
                report_failure(case, &args.dir, &expected, &failure);
            }
        }
    }
    if failed > 0 {
        anyhow::bail!("{failed} regression case(s) failed");
    }
    Ok(())
}

fn report_failure(
    case: &olive::regression::RegressionCase,
    dir: &Path,
    expected: &Path,
    failure: &olive::regression::ReplayFailure,
) {
    let expected = expected.display();
    match failure {
        olive::regression::ReplayFailure::SizeMismatch {
            expected: (ew, eh),
            actual: (aw, ah),
        } => {
            eprintln!(
                "{expected}: TEST FAILURE: unexpected image size. Expected {ew}x{eh}, but got {aw}x{ah}"
            );
        }
        olive::regression::ReplayFailure::PixelMismatch { count } => {
            eprintln!("{expected}: TEST FAILURE: {count} unexpected pixel(s) in generated image");
            eprintln!(
                "{expected}: HINT: See actual image {}",
                case.actual_path(dir).display()
            );
            eprintln!(
                "{expected}: HINT: See diff image {}",
                case.diff_path(dir).display()
            );
        }
    }
    eprintln!(
        "{expected}: HINT: If this behaviour is intentional confirm that by updating the image with `olive record --case {}`",
        case.name
    );
}
