use clap::{Args, Parser, Subcommand};

/// Antenatal screening calculator (WHO/ACOG thresholds).
///
/// Estimates fetal weight from symphysis-fundal height, bands it against
/// fixed growth curves, and reports rule-based risks and recommendations.
#[derive(Parser, Debug)]
#[command(name = "gravida", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one screening calculation and print the result
    Screen(ScreenArgs),
    /// Print the growth reference table
    Reference {
        /// Highlight the row for this gestational age
        #[arg(long)]
        weeks: Option<u8>,
    },
    /// Print the clinical standards card
    Standards {
        /// Gestational age used for the FGR line
        #[arg(long, default_value_t = 28)]
        weeks: u8,
    },
}

/// Raw measurement flags. Absent values default to zero (or the negative
/// dipstick code); nothing here rejects input.
#[derive(Args, Debug)]
pub struct ScreenArgs {
    /// Symphysis-fundal height in cm
    #[arg(long, default_value_t = 0.0)]
    pub sfh: f64,

    /// Gestational age in completed weeks (entry range 24-42)
    #[arg(long, default_value_t = 28)]
    pub weeks: u8,

    /// Proteinuria dipstick code: -, +, ++, +++ or ++++
    #[arg(long, default_value = "-", allow_hyphen_values = true)]
    pub proteinuria: String,

    /// Fasting blood sugar in mmol/L
    #[arg(long, default_value_t = 0.0)]
    pub fbs: f64,

    /// Blood pressure as systolic/diastolic in mmHg, e.g. 120/80
    #[arg(long, default_value = "0/0")]
    pub bp: String,

    /// Emit a JSON screening report instead of text
    #[arg(long)]
    pub json: bool,
}
