//! Listing module - token descriptors and the ordered listing.

mod listing_model;


// Re-export the public interface
pub use listing_model::{Listing, ListingStatus, TokenDescriptor, TokenId};
