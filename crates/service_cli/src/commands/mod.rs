//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. [`ContractArgs`] is the
//! contract description shared by `price` and `sweep`.

use clap::Args;
use pricer_core::types::OptionType;
use pricer_models::instruments::{
    ContractParams, ExerciseStyle, OptionContract, DEFAULT_EXPIRY, DEFAULT_RATE, DEFAULT_STRIKE,
    DEFAULT_VOLATILITY,
};

pub mod check;
pub mod demo;
pub mod price;
pub mod sweep;

/// Contract flags shared by the pricing commands
#[derive(Args, Debug, Clone)]
pub struct ContractArgs {
    /// Exercise style (european, perpetual)
    #[arg(short, long, default_value = "european")]
    pub style: ExerciseStyle,

    /// Option type (call, put)
    #[arg(short = 't', long = "type", default_value = "call")]
    pub option_type: OptionType,

    /// Strike price (K)
    #[arg(short = 'k', long, default_value_t = DEFAULT_STRIKE)]
    pub strike: f64,

    /// Time to maturity in years (T), ignored for perpetual options
    #[arg(long, default_value_t = DEFAULT_EXPIRY)]
    pub expiry: f64,

    /// Volatility (sigma)
    #[arg(long = "vol", default_value_t = DEFAULT_VOLATILITY)]
    pub volatility: f64,

    /// Risk-free rate (r)
    #[arg(short, long, default_value_t = DEFAULT_RATE)]
    pub rate: f64,

    /// Cost of carry (b), defaults to the rate
    #[arg(short = 'b', long)]
    pub carry: Option<f64>,
}

impl ContractArgs {
    /// Contract parameters described by the flags
    pub fn params(&self) -> ContractParams {
        ContractParams::default()
            .with_strike(self.strike)
            .with_expiry(self.expiry)
            .with_volatility(self.volatility)
            .with_rate_and_carry(self.rate)
            .with_carry(self.carry.unwrap_or(self.rate))
    }

    /// Contract described by the flags
    pub fn contract(&self) -> OptionContract {
        OptionContract::with_style(self.style, self.params(), self.option_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        contract: ContractArgs,
    }

    #[test]
    fn test_defaults() {
        let args = Harness::parse_from(["bsgreeks"]).contract;
        let contract = args.contract();
        assert_eq!(contract.style(), ExerciseStyle::European);
        assert_eq!(contract.option_type(), OptionType::Call);
        assert_eq!(*contract.params(), ContractParams::default());
    }

    #[test]
    fn test_carry_defaults_to_rate() {
        let args = Harness::parse_from(["bsgreeks", "--rate", "0.08"]).contract;
        assert_eq!(args.params().carry, 0.08);

        let args = Harness::parse_from(["bsgreeks", "-r", "0.1", "-b", "0.02"]).contract;
        assert_eq!(args.params().rate, 0.1);
        assert_eq!(args.params().carry, 0.02);
    }

    #[test]
    fn test_style_and_type() {
        let args =
            Harness::parse_from(["bsgreeks", "--style", "perpetual", "--type", "put"]).contract;
        let contract = args.contract();
        assert_eq!(contract.style(), ExerciseStyle::PerpetualAmerican);
        assert_eq!(contract.option_type(), OptionType::Put);
    }

    #[test]
    fn test_rejects_unknown_style() {
        assert!(Harness::try_parse_from(["bsgreeks", "--style", "bermudan"]).is_err());
    }
}
