use argh::FromArgs;
use std::path::PathBuf;

use tinct::imgproc::{
    color::{HsiConfig, HsiConverter, HSI_EPSILON},
    flip,
    parallel::ExecutionStrategy,
};
use tinct::io::functional as F;

#[derive(FromArgs)]
/// Convert an image to HSI and back, writing both results
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// directory to write hsi.png and roundtrip.png into
    #[argh(option, short = 'o', default = "PathBuf::from(\".\")")]
    output_dir: PathBuf,

    /// flip the image vertically after loading, as for a texture upload
    #[argh(switch)]
    flip: bool,

    /// process rows on the current thread only
    #[argh(switch)]
    serial: bool,

    /// intensity / saturation threshold for the inverse transform
    #[argh(option, default = "HSI_EPSILON")]
    epsilon: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    // read the image
    let mut rgba = F::read_image_rgbaf32(&args.image_path)?;
    log::info!(
        "loaded {} ({}x{})",
        args.image_path.display(),
        rgba.width(),
        rgba.height()
    );

    if args.flip {
        rgba = flip::vertical_flip(&rgba)?;
    }

    let strategy = if args.serial {
        ExecutionStrategy::Serial
    } else {
        ExecutionStrategy::ParallelRows
    };
    let converter = HsiConverter::new(
        HsiConfig::default()
            .with_epsilon(args.epsilon)
            .with_strategy(strategy),
    );

    let hsi = converter.to_hsi(&rgba)?;
    let roundtrip = converter.to_rgb(&hsi)?;

    std::fs::create_dir_all(&args.output_dir)?;
    F::write_image_rgba8(args.output_dir.join("hsi.png"), &converter.preview(&hsi)?)?;
    F::write_image_rgba8(args.output_dir.join("roundtrip.png"), &roundtrip)?;

    // max absolute error per color channel
    let mut max_err = [0f32; 3];
    for (src, dst) in rgba
        .as_slice()
        .chunks_exact(4)
        .zip(roundtrip.as_slice().chunks_exact(4))
    {
        for c in 0..3 {
            max_err[c] = max_err[c].max((src[c] - dst[c]).abs());
        }
    }

    log::info!(
        "round trip max error: r {:.6} g {:.6} b {:.6}",
        max_err[0],
        max_err[1],
        max_err[2]
    );
    log::info!("wrote results to {}", args.output_dir.display());

    Ok(())
}
