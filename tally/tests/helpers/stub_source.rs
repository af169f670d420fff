use tally::LedgerSource;

/// A source that advertises no capabilities at all.
pub struct BareSource;

impl LedgerSource for BareSource {
    fn name(&self) -> &'static str {
        "bare"
    }
}
