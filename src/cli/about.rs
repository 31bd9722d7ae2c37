//! Arbitrage logic description

/// Text printed by the `about` command
pub const ABOUT: &str = "\
Precious-metal ETF arbitrage

The intrinsic value of the metal behind these ETFs is set by the OSE
(Osaka Exchange) futures price and the metal's forward rate up to that
contract month. Discounting the futures price by the forward rate and
scaling by the grams of metal per ETF unit gives a theoretical ETF value;
comparing it with the current market price gives the divergence.

  theoretical underlying = futures price / (1 + forward rate / 100)
  theoretical ETF value  = theoretical underlying * grams per unit
  divergence (%)         = (ETF price - theoretical value) / theoretical value * 100

No days-to-expiry input is needed: the futures price of the most actively
traded contract month is used. The grams per unit differ from fund to fund
and must be entered.
";
