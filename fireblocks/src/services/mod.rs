//! Per-resource method sets.
//!
//! Each service is a thin wrapper over the dispatcher: it fills in the path
//! template and forwards caller-supplied filters and bodies verbatim. All
//! normalization, signing, and error handling happens in
//! [`ApiClient`](fireblocks_core::ApiClient).

mod addresses;
mod assets;
mod transactions;
mod vaults;
mod webhooks;

pub use addresses::AddressesService;
pub use assets::AssetsService;
pub use transactions::TransactionsService;
pub use vaults::VaultsService;
pub use webhooks::WebhooksService;
