//! Fetch content and generate static files

use anyhow::Result;

use crate::generator::Generator;
use crate::Spacetraveling;

/// Generate the static site
pub async fn run(app: &Spacetraveling) -> Result<()> {
    let start = std::time::Instant::now();

    if app.config.cms.api_url.is_empty() {
        anyhow::bail!("cms.api_url is not configured; set it in _config.yml");
    }

    let client = app.client()?;
    let generator = Generator::new(app)?;
    generator.generate(&client).await?;

    let duration = start.elapsed();
    tracing::info!("Completed in {:.2}s", duration.as_secs_f64());

    Ok(())
}
