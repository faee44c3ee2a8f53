//! Pushes one lead through the submission pipeline to the configured relay.
//!
//! Usage: `send_lead <quote|consultation|callback> <phone> [name] [comment]`.
//! The quote form uses the calculator inputs from `LEAD_LENGTH`,
//! `LEAD_TYPE` and `LEAD_CORNERS` when set.

use std::env;
use std::process::ExitCode;

use dotenvy::dotenv;
use validator::Validate;

use domzzzon_leads::domain::calculator::{CalculationParams, WindowType};
use domzzzon_leads::domain::lead::FormId;
use domzzzon_leads::forms::FormError;
use domzzzon_leads::forms::calculator::CalculatorQuery;
use domzzzon_leads::forms::lead::LeadInput;
use domzzzon_leads::gateway::relay::HttpRelayGateway;
use domzzzon_leads::models::config::{ClientConfig, load_config};
use domzzzon_leads::services::submission::{LeadForm, SubmitOutcome, submit_lead};

fn calculator_from_env() -> Result<CalculationParams, FormError> {
    let window_type = match env::var("LEAD_TYPE").ok().as_deref() {
        Some("Angled") => WindowType::Angled,
        Some("Bay") => WindowType::Bay,
        Some("Arc") => WindowType::Arc,
        _ => WindowType::Straight,
    };
    let corners = env::var("LEAD_CORNERS")
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(0);

    CalculationParams::try_from(CalculatorQuery {
        length: env::var("LEAD_LENGTH").ok(),
        window_type,
        corners,
    })
}

fn parse_args(args: &[String]) -> Result<(FormId, LeadInput), FormError> {
    let form_id = args
        .first()
        .and_then(|raw| raw.parse::<FormId>().ok())
        .ok_or(FormError::InvalidFormId)?;

    let input = LeadInput {
        phone: args.get(1).cloned().unwrap_or_default(),
        name: args.get(2).cloned().unwrap_or_default(),
        comment: args.get(3).cloned().unwrap_or_default(),
        consent: true,
    };
    input.validate()?;

    Ok((form_id, input))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let args: Vec<String> = env::args().skip(1).collect();
    let (form_id, input) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(err) => {
            log::error!("Invalid arguments: {err}");
            eprintln!("usage: send_lead <quote|consultation|callback> <phone> [name] [comment]");
            return ExitCode::from(2);
        }
    };

    let params = match calculator_from_env() {
        Ok(params) => params,
        Err(err) => {
            log::error!("Invalid calculator inputs: {err}");
            return ExitCode::from(2);
        }
    };

    let client_config = match load_config::<ClientConfig>() {
        Ok(client_config) => client_config,
        Err(err) => {
            log::error!("Error loading client config: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let gateway = HttpRelayGateway::new(reqwest::Client::new(), client_config.relay_url);
    let form = LeadForm::new(form_id);
    form.fill(input.into());

    log::info!("Sending {form_id} lead to {}", gateway.endpoint());
    match submit_lead(&gateway, &form, &params).await {
        Ok(SubmitOutcome::Sent) => {
            log::info!("Lead delivered");
            ExitCode::SUCCESS
        }
        Ok(SubmitOutcome::Ignored) => {
            log::warn!("Lead was not dispatched");
            ExitCode::FAILURE
        }
        Err(err) => {
            log::error!("Submission failed: {err}");
            eprintln!("{}", err.user_notice());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn parses_form_and_optional_fields() {
        let (form_id, input) =
            parse_args(&args(&["quote", "89937725252", "Анна", "Звонить днём"])).unwrap();

        assert_eq!(form_id, FormId::Quote);
        assert_eq!(input.name, "Анна");
        assert_eq!(input.comment, "Звонить днём");
        assert!(input.consent);
    }

    #[test]
    fn rejects_unknown_form() {
        let result = parse_args(&args(&["calcForm", "89937725252"]));
        assert!(matches!(result, Err(FormError::InvalidFormId)));
    }

    #[test]
    fn rejects_short_phone() {
        let result = parse_args(&args(&["callback", "12345"]));
        assert!(matches!(result, Err(FormError::Validation(_))));
    }
}
