use anyhow::Context;

fn main() -> anyhow::Result<()> {
    previewbar::run().context("previewbar exited with an error")?;
    Ok(())
}
