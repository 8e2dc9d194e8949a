//! Greeks command implementation

use std::fmt;

use clap::Args;
use serde::Serialize;
use tracing::info;

use pricer_core::types::OptionType;
use pricer_models::analytical::{BlackScholes, Greeks};

use super::{print_json, MarketArgs, OutputFormat};
use crate::Result;

/// Arguments of `mcprice greeks`
#[derive(Args, Debug, Clone)]
pub struct GreeksArgs {
    #[command(flatten)]
    pub market: MarketArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Closed-form price and Greeks of one option side.
#[derive(Debug, Clone, Serialize)]
pub struct SideGreeks {
    pub price: f64,
    #[serde(flatten)]
    pub greeks: Greeks,
}

/// Call and put Greeks for one contract.
#[derive(Debug, Clone, Serialize)]
pub struct GreeksReport {
    pub call: SideGreeks,
    pub put: SideGreeks,
}

/// Run the greeks command
pub fn run(args: &GreeksArgs) -> Result<()> {
    let report = build_report(&args.market)?;

    match args.format {
        OutputFormat::Table => print!("{}", report),
        OutputFormat::Json => print_json(&report)?,
    }

    info!("Greeks complete");
    Ok(())
}

/// Computes price and Greeks for both sides.
pub fn build_report(market: &MarketArgs) -> Result<GreeksReport> {
    let model = BlackScholes::new(market.spot, market.rate, market.sigma)?;

    let side = |option_type: OptionType| -> Result<SideGreeks> {
        Ok(SideGreeks {
            price: model.price(market.strike, market.maturity, option_type)?,
            greeks: model.greeks(market.strike, market.maturity, option_type)?,
        })
    };

    Ok(GreeksReport {
        call: side(OptionType::Call)?,
        put: side(OptionType::Put)?,
    })
}

impl fmt::Display for GreeksReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<8}{:>14}{:>14}", "", "Call", "Put")?;
        let rows: [(&str, fn(&SideGreeks) -> f64); 6] = [
            ("Price", |s| s.price),
            ("Delta", |s| s.greeks.delta),
            ("Gamma", |s| s.greeks.gamma),
            ("Vega", |s| s.greeks.vega),
            ("Theta", |s| s.greeks.theta),
            ("Rho", |s| s.greeks.rho),
        ];
        for (label, value) in rows {
            writeln!(f, "{:<8}{:>14.6}{:>14.6}", label, value(&self.call), value(&self.put))?;
        }
        Ok(())
    }
}
