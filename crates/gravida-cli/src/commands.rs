use eyre::Result;
use gravida_core::models::ScreeningReport;
use gravida_screening::standards::ClinicalStandards;

use crate::cli::ScreenArgs;
use crate::{input, render};

pub fn run_screen(args: ScreenArgs) -> Result<()> {
    let observation = input::observation_from_args(&args);
    let prediction = gravida_screening::screen(&observation);

    if args.json {
        let report = ScreeningReport {
            generated_at: jiff::Timestamp::now(),
            observation,
            prediction,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render::prediction(&observation, &prediction));
        print!(
            "{}",
            render::reference_table(Some(observation.gestational_age_weeks))
        );
    }

    Ok(())
}

pub fn run_reference(weeks: Option<u8>) {
    print!("{}", render::reference_table(weeks));
}

pub fn run_standards(weeks: u8) -> Result<()> {
    let standards = ClinicalStandards::for_gestational_age(weeks);
    print!("{}", render::standards(&standards));
    Ok(())
}
