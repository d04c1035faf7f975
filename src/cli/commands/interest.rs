//! The `interest` subcommand.

use crate::{
    cli::{InterestArgs, RuntimeConfig},
    error::Result,
    interest::{
        Calculation, STATUTORY_RATE, compound_interest, format_currency, format_number,
        simple_interest,
    },
};

const DATE_FORMAT: &str = "%d.%m.%Y";

/// Computes and prints default interest.
///
/// Calculation errors (non-positive amount, end not after start) propagate
/// and end the process with exit code 1.
pub fn execute_interest(args: &InterestArgs, config: &RuntimeConfig) -> Result<i32> {
    let rate = args.rate.unwrap_or(STATUTORY_RATE);
    let calculation = if args.compound {
        compound_interest(args.principal, args.from, args.to, rate)?
    } else {
        simple_interest(args.principal, args.from, args.to, rate)?
    };

    if args.json {
        config
            .output()
            .println(&serde_json::to_string_pretty(&calculation)?)?;
    } else {
        for line in render_text(&calculation) {
            config.output().println(&line)?;
        }
    }
    Ok(0)
}

fn render_text(calc: &Calculation) -> Vec<String> {
    let mut lines = vec![
        format!("Method:     {}", calc.method),
        format!(
            "Period:     {} to {} ({} days)",
            calc.start.format(DATE_FORMAT),
            calc.end.format(DATE_FORMAT),
            calc.days
        ),
    ];
    if let Some(years) = calc.years {
        lines.push(format!("Years:      {}", format_number(years, 2)));
    }
    lines.extend([
        format!("Principal:  {}", format_currency(calc.principal)),
        format!("Rate:       {} %", calc.rate.normalize()),
        format!("Interest:   {}", format_currency(calc.interest)),
        format!("Total:      {}", format_currency(calc.total)),
    ]);
    lines
}
