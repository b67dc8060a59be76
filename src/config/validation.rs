//! Config validation: range checks emitted as startup warnings.
//!
//! Warnings never break a deployment; a config that parses always runs.

use super::ServiceConfig;

/// A non-fatal config warning (suspicious or out-of-range value).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a parsed config, returning any warnings to log.
pub fn validate(config: &ServiceConfig) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if config.projection.utm_zone == 0 || config.projection.utm_zone > 60 {
        warnings.push(ValidationWarning {
            field: "projection.utm_zone".to_string(),
            message: format!("zone {} outside 1..=60", config.projection.utm_zone),
        });
    }

    if !config.projection.utm_band.is_ascii_uppercase() {
        warnings.push(ValidationWarning {
            field: "projection.utm_band".to_string(),
            message: format!("band '{}' should be an uppercase letter", config.projection.utm_band),
        });
    }

    if config.projection.adjacency_buffer_m <= 0.0 {
        warnings.push(ValidationWarning {
            field: "projection.adjacency_buffer_m".to_string(),
            message: "buffer must be positive, adjacency detection disabled".to_string(),
        });
    }

    if config.display.highlight_line_width <= config.display.base_line_width {
        warnings.push(ValidationWarning {
            field: "display.highlight_line_width".to_string(),
            message: "highlight width not wider than base width, highlights will be invisible"
                .to_string(),
        });
    }

    if config.server.addr.parse::<std::net::SocketAddr>().is_err() {
        warnings.push(ValidationWarning {
            field: "server.addr".to_string(),
            message: format!("'{}' is not a valid socket address", config.server.addr),
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_clean() {
        assert!(validate(&ServiceConfig::default()).is_empty());
    }

    #[test]
    fn bad_zone_and_widths_warn() {
        let mut config = ServiceConfig::default();
        config.projection.utm_zone = 0;
        config.display.highlight_line_width = 0.2;
        let warnings = validate(&config);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].field.contains("utm_zone"));
    }
}
