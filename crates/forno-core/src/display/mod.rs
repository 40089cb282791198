//! Display formatting for terminal output.
//!
//! Domain data formats as markdown through wrapper types, keeping
//! presentation out of the models: [`Receipt`] for the final order,
//! [`CategoryListing`] for option lists, [`StepProgress`] for the
//! wizard header. The CLI renders the markdown with its terminal
//! renderer; the webhook receives the receipt text verbatim.

pub mod listing;
pub mod progress;
pub mod receipt;

pub use listing::CategoryListing;
pub use progress::StepProgress;
pub use receipt::Receipt;
