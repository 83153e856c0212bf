use anyhow::Context;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let app = gridwalk::default().context("failed to initialize application")?;
    app.run()
}
