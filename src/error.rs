use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrajectoryError {
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl TrajectoryError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("failed to render chart: {0}")]
    Render(String),
}
