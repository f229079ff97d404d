//! Interactive mode for the `outbreak_risk` CLI.
//!
//! Presents a menu of actions using `dialoguer` and prompts for any inputs
//! the chosen action needs.

use dialoguer::{Confirm, Input, Select};
use outbreak_risk_models::PredictionInput;

use crate::{format_districts, format_report};

/// Top-level actions in the interactive menu.
enum Action {
    Predict,
    Districts,
    Serve,
}

impl Action {
    const ALL: &[Self] = &[Self::Predict, Self::Districts, Self::Serve];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Predict => "Predict outbreak risk",
            Self::Districts => "List districts",
            Self::Serve => "Start API server",
        }
    }
}

/// Runs the interactive menu.
///
/// # Errors
///
/// Returns an error if a prompt fails, the entered conditions are invalid,
/// or the server fails to start.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("Outbreak Risk");
    println!();

    let labels: Vec<&str> = Action::ALL.iter().map(Action::label).collect();

    let idx = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    match Action::ALL[idx] {
        Action::Predict => handle_predict()?,
        Action::Districts => print!("{}", format_districts(outbreak_risk_district::all())),
        Action::Serve => {
            actix_web::rt::System::new().block_on(outbreak_risk_server::interactive::run())?;
        }
    }

    Ok(())
}

fn prompt_number(prompt: &str, default: f64) -> Result<f64, dialoguer::Error> {
    Input::new()
        .with_prompt(prompt)
        .default(default)
        .validate_with(|value: &f64| -> Result<(), &str> {
            if value.is_finite() {
                Ok(())
            } else {
                Err("Enter a finite number")
            }
        })
        .interact_text()
}

/// Prompts for a district and conditions, then prints the prediction.
fn handle_predict() -> Result<(), Box<dyn std::error::Error>> {
    let names = outbreak_risk_district::names();

    let idx = Select::new()
        .with_prompt("District")
        .items(&names)
        .default(0)
        .interact()?;

    let input = PredictionInput {
        district: names[idx].to_string(),
        rainfall_dev: prompt_number("Rainfall deviation (mm)", 0.0)?,
        temperature: prompt_number("Temperature (°C)", 28.0)?,
        case_growth: prompt_number("Case growth (%)", 10.0)?,
        baseline: prompt_number("Baseline cases", 40.0)?,
    };
    input.validate()?;

    let result = outbreak_risk::predict_outbreak(&input);

    let as_json = Confirm::new()
        .with_prompt("Print as JSON?")
        .default(false)
        .interact()?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!();
        print!("{}", format_report(&result));
    }

    Ok(())
}
