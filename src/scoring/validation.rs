use super::config::ScoringConfig;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(multiplier) = config.multiplier {
        if !multiplier.is_finite() || multiplier <= 0.0 {
            errors.push(format!(
                "scoring.multiplier: must be a positive number, got {}",
                multiplier
            ));
        }
    }

    // Trimming drops two scores, so a smaller panel can never be scored
    if let Some(panel_size) = config.panel_size {
        if panel_size < 2 {
            errors.push(format!(
                "scoring.panel_size: must be at least 2, got {}",
                panel_size
            ));
        }
    }

    if let Some(top) = config.top {
        if top == 0 {
            errors.push("scoring.top: must be at least 1".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
