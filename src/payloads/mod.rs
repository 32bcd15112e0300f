//! Request bodies for the create and update endpoints.
//!
//! Payloads are immutable once built; each one serializes to the JSON body
//! of a single request. String choices are closed enums whose `FromStr`
//! rejects anything outside the accepted set.

mod coupon;
mod gift_card;
mod payment;

pub use coupon::{
    random_coupon_code, BasketType, CouponPayload, CouponPayloadBuilder,
    DiscountApplicationMethod, DiscountType, EffectiveOn, GENERATED_CODE_LENGTH,
};
pub use gift_card::{GiftCardPayload, GiftCardPayloadBuilder};
pub use payment::{PaymentPayload, PaymentPayloadBuilder, PaymentStatus};

use chrono::NaiveDate;

/// Default expiry for gift cards and coupons.
pub(crate) fn far_future() -> NaiveDate {
    NaiveDate::from_ymd_opt(2050, 12, 31).unwrap_or(NaiveDate::MAX)
}
