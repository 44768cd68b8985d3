//! Charts module - static chart rendering

pub mod bar;
pub mod density;

use std::path::Path;

use thiserror::Error;

use crate::stats::KdeError;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Failed to render chart: {0}")]
    Render(String),
    #[error("Nothing to plot: the report has no rows")]
    EmptyReport,
    #[error(transparent)]
    Kde(#[from] KdeError),
}

impl ChartError {
    pub(crate) fn render<E: std::fmt::Display>(err: E) -> Self {
        ChartError::Render(err.to_string())
    }
}

/// Output backend, chosen from the output path's extension the way
/// `savefig` would: `.svg` is vector, everything else goes through the
/// bitmap encoder (which resolves PNG/JPEG/BMP from the extension itself).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BackendKind {
    Svg,
    Bitmap,
}

pub(crate) fn backend_for(path: &Path) -> BackendKind {
    let is_svg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    if is_svg {
        BackendKind::Svg
    } else {
        BackendKind::Bitmap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_follows_extension() {
        assert_eq!(backend_for(Path::new("out/chart.svg")), BackendKind::Svg);
        assert_eq!(backend_for(Path::new("out/chart.SVG")), BackendKind::Svg);
        assert_eq!(backend_for(Path::new("out/chart.png")), BackendKind::Bitmap);
        assert_eq!(backend_for(Path::new("chart")), BackendKind::Bitmap);
    }
}
