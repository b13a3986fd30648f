//! Manual cover images.
//!
//! Two concerns live here: the deterministic cover-URL derivation used when a
//! manual is created without an explicit cover, and the first-page PDF
//! rasterizer used when a manual file is uploaded. The rasterizer is a seam:
//! production shells out to poppler's `pdftoppm`, tests substitute a stub.

use async_trait::async_trait;

/// Derives a manual's cover-image URL from its file URL: the file's basename
/// minus its extension, as a PNG under `/media/`.
pub fn derive_cover_url(file_url: &str) -> String {
    let base = file_url.rsplit('/').next().unwrap_or(file_url);
    let stem = base.rsplit_once('.').map(|(s, _)| s).unwrap_or(base);
    format!("/media/{}.png", stem)
}

/// Renders the first page of a PDF byte stream as a PNG image.
#[async_trait]
pub trait Rasterizer: Send + Sync {
    async fn first_page_png(&self, pdf: &[u8]) -> anyhow::Result<Vec<u8>>;
}

/// Rasterizer backed by poppler's `pdftoppm` binary.
///
/// The conversion goes through a transient file in the system temp directory;
/// both the input PDF and the rendered PNG are removed afterwards.
pub struct PdftoppmRasterizer;

#[async_trait]
impl Rasterizer for PdftoppmRasterizer {
    async fn first_page_png(&self, pdf: &[u8]) -> anyhow::Result<Vec<u8>> {
        let work_id = uuid::Uuid::new_v4();
        let tmp = std::env::temp_dir();
        let input = tmp.join(format!("aedb-{}.pdf", work_id));
        let prefix = tmp.join(format!("aedb-{}", work_id));
        let output = tmp.join(format!("aedb-{}.png", work_id));

        tokio::fs::write(&input, pdf).await?;

        let result = tokio::process::Command::new("pdftoppm")
            .arg("-png")
            .args(["-f", "1", "-l", "1"])
            .arg("-singlefile")
            .arg(&input)
            .arg(&prefix)
            .output()
            .await;

        let _ = tokio::fs::remove_file(&input).await;

        let out = result.map_err(|e| anyhow::anyhow!("failed to run pdftoppm: {}", e))?;
        if !out.status.success() {
            let _ = tokio::fs::remove_file(&output).await;
            return Err(anyhow::anyhow!(
                "pdftoppm exited with {}: {}",
                out.status,
                String::from_utf8_lossy(&out.stderr)
            ));
        }

        let png = tokio::fs::read(&output).await?;
        let _ = tokio::fs::remove_file(&output).await;
        Ok(png)
    }
}
