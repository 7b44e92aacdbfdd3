//! Typed records for every Thyne Jewels collection
//!
//! Each module holds the document shape stored in one MongoDB collection,
//! serialized with the camelCase field names the rest of the platform
//! expects. Entities whose collections carry `$jsonSchema` validators
//! (users, products) also implement an explicit constraint pass so that
//! invalid fixtures are rejected before any insert is attempted.

use serde::Serialize;
use thyne_core::ConstraintViolation;

pub mod badge;
pub mod cart;
pub mod coupon;
pub mod guest_session;
pub mod loyalty;
pub mod order;
pub mod product;
pub mod referral;
pub mod review;
pub mod user;
pub mod voucher;
pub mod wishlist;

pub use badge::{Badge, BadgeRarity};
pub use cart::{Cart, CartItem};
pub use coupon::{Coupon, DiscountType};
pub use guest_session::GuestSession;
pub use loyalty::{LoyaltyProgram, LoyaltyTier, LoyaltyTransaction, TransactionKind};
pub use order::{Order, OrderItem, OrderStatus, PaymentMethod, PaymentStatus, ShippingAddress};
pub use product::Product;
pub use referral::ReferralProgram;
pub use review::Review;
pub use user::{Address, User};
pub use voucher::{Voucher, VoucherKind};
pub use wishlist::Wishlist;

/// A record that can be seeded into its collection.
pub trait SeedDocument: Serialize {
    /// Name of the collection this record is stored in.
    const COLLECTION: &'static str;

    /// Constraint pass mirroring the collection's storage-layer rules.
    ///
    /// Collections without a `$jsonSchema` validator accept any
    /// well-formed record, so the default is a no-op.
    fn validate(&self) -> Result<(), ConstraintViolation> {
        Ok(())
    }
}
