use eye_icons::{
  error::{Error, Result},
  icon
};

fn run() -> Result<()> {
  for size in icon::SIZES {
    let path = icon::file_name(size);
    icon::render(size).save(&path)?;
    println!("Created {}", path);
  }

  println!("\nIcons generated successfully!");
  println!("You can now load the extension in Chrome.");
  Ok(())
}

fn main() -> anyhow::Result<()> {
  match run() {
    // recovered here only; everything else propagates with its source chain
    Err(Error::MissingEncoder(_)) => {
      println!("Error: this build of the image crate cannot encode PNG.");
      println!("Rebuild with its `png` feature enabled.");
      println!("\nAlternatively, create the PNG icons manually using any image editor.");
      Ok(())
    }
    other => Ok(other?)
  }
}
