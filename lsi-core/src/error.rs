use thiserror::Error;

/// User-facing failure categories for the dashboard.
///
/// Each variant has a different blast radius:
/// - `DataUnavailable`: a source file could not be read or parsed. Fatal at
///   load time; shown once, never retried.
/// - `InsufficientData`: the current selection matched no observations.
///   Rendered as an inline empty state while the controls stay live.
/// - `Geometry`: the AOI boundary could not be used. Disables the map panel
///   only; statistics and charts still render.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("data unavailable: {0}")]
    DataUnavailable(String),
    #[error("insufficient data: {0}")]
    InsufficientData(String),
    #[error("geometry error: {0}")]
    Geometry(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_category() {
        let e = DashboardError::DataUnavailable("missing csv".to_string());
        assert_eq!(e.to_string(), "data unavailable: missing csv");

        let e = DashboardError::InsufficientData("no rows for 2025".to_string());
        assert_eq!(e.to_string(), "insufficient data: no rows for 2025");

        let e = DashboardError::Geometry("unsupported crs".to_string());
        assert_eq!(e.to_string(), "geometry error: unsupported crs");
    }
}
