/// Basic example: render a synthetic image with both pipelines
///
/// This draws a bright disc with a dark ring on a gray background and prints
/// the Braille and shade renderings to stdout.
use img2ascii::{Raster, braille_pipeline, shade_pipeline};

fn main() -> img2ascii::Result<()> {
    println!("img2ascii - Basic Example");
    println!("=========================\n");

    let width = 48;
    let height = 30;
    let mut img = Raster::filled(width, height, 100)?;

    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 10.0;

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - center_x;
            let dy = y as f32 - center_y;
            let dist = (dx * dx + dy * dy).sqrt();

            if dist < radius {
                img.set(x, y, 240)?;
            } else if (dist - radius).abs() < 2.0 {
                img.set(x, y, 10)?;
            }
        }
    }

    println!("Created test raster: {}x{}\n", width, height);

    println!("Braille (Otsu):");
    print!("{}", braille_pipeline(&img)?);

    println!("\nShade (Sobel, threshold 120):");
    print!("{}", shade_pipeline(&img, 120.0)?);

    Ok(())
}
