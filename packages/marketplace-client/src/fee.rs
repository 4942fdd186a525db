//! Fee specification and per-call execution options.

use marketplace_types::Coin;
use std::fmt;

/// Fully specified fee.
#[derive(Debug, Clone, PartialEq)]
pub struct StdFee {
    pub amount: Vec<Coin>,
    pub gas: u64,
    pub granter: Option<String>,
    pub payer: Option<String>,
}

impl StdFee {
    pub fn new(amount: Vec<Coin>, gas: u64) -> Self {
        Self {
            amount,
            gas,
            granter: None,
            payer: None,
        }
    }
}

/// How the connection determines transaction cost.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Fee {
    /// Simulate and use the connection's default gas adjustment.
    #[default]
    Auto,
    /// Simulate and scale the estimate by this factor.
    Multiplier(f64),
    Fixed(StdFee),
}

impl fmt::Display for Fee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fee::Auto => write!(f, "auto"),
            Fee::Multiplier(m) => write!(f, "x{m}"),
            Fee::Fixed(fee) => {
                let amount: Vec<String> = fee.amount.iter().map(Coin::to_string).collect();
                write!(f, "{} gas / {}", fee.gas, amount.join(","))
            }
        }
    }
}

impl From<StdFee> for Fee {
    fn from(fee: StdFee) -> Self {
        Fee::Fixed(fee)
    }
}

/// Fee, memo and attached funds for one execute call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecOptions {
    pub fee: Fee,
    pub memo: Option<String>,
    pub funds: Vec<Coin>,
}

impl ExecOptions {
    pub fn with_fee(mut self, fee: impl Into<Fee>) -> Self {
        self.fee = fee.into();
        self
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    pub fn with_funds(mut self, funds: Vec<Coin>) -> Self {
        self.funds = funds;
        self
    }
}
