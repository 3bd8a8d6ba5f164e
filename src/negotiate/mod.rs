//! Hardware parameter negotiation.

mod layout;
pub use layout::NegotiatedLayout;

mod negotiate;
pub(crate) use negotiate::negotiate;
