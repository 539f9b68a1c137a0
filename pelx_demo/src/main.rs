mod palettes;
mod texture;

use std::path::PathBuf;
use std::{env, fs, io};

use lib_pelx::{
    decode, encode, export_png, ContainerError, ExpandOptions, ExportError, PngWriter,
};
use log::info;
use thiserror::Error;

use palettes::MUSHROOM_PALETTES;

#[derive(Error, Debug)]
enum DemoError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Container error: {0}")]
    Container(#[from] ContainerError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

fn main() -> Result<(), DemoError> {
    lib_pelx::init_logging();

    let out_dir = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("mushrooms"));
    fs::create_dir_all(&out_dir)?;

    let data_path = out_dir.join(format!("data.{}", lib_pelx::constants::FILE_EXT));
    encode(&data_path, &texture::mushroom())?;
    let container = decode(&data_path)?;

    let options = ExpandOptions::new(4).map_err(ExportError::from)?.strict();
    for palette in &MUSHROOM_PALETTES {
        let png_path = out_dir.join(format!("{}_mushroom.png", palette.name));
        export_png(&png_path, &container, &palette.entries, &options, &PngWriter)?;
        println!("Wrote {}", png_path.display());
    }

    info!("Rendered {} palette variants", MUSHROOM_PALETTES.len());
    Ok(())
}
