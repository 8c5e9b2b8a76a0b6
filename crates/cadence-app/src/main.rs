use cadence_app::form::RecurrenceForm;
use cadence_core::config::load_config;
use cadence_rule::rule::core::RecurrenceRule;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_writer(std::io::stderr),
        )
        .init();

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let rule = RecurrenceRule::try_from(&config.rule)?;
    tracing::info!(rrule = %rule.to_rrule(), "Generating preview");
    if !rule.frequency.is_expandable() {
        tracing::warn!(
            frequency = %rule.frequency,
            "Expansion is not implemented for this frequency; the preview will be empty"
        );
    }

    let mut form = RecurrenceForm::new(rule);
    match form.generate() {
        Ok(preview) if preview.is_empty() => {
            tracing::info!("Rule produces no dates");
        }
        Ok(preview) => {
            print!("{preview}");
        }
        Err(errors) => {
            for (field, error) in errors {
                tracing::warn!(%field, "{error}");
            }
            anyhow::bail!("Recurrence rule is invalid");
        }
    }

    Ok(())
}
