//! Coupon creation payload and its enumerations.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Serialize, Serializer};

use super::far_future;
use crate::error::ValidationError;

/// Length of generated coupon codes.
pub const GENERATED_CODE_LENGTH: usize = 10;

/// Generates a random coupon code from `[a-zA-Z0-9]`.
///
/// # Example
///
/// ```rust
/// let code = tebex_api::payloads::random_coupon_code();
/// assert_eq!(code.len(), 10);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
#[must_use]
pub fn random_coupon_code() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_CODE_LENGTH)
        .map(char::from)
        .collect()
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $argument:literal {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Returns the wire value.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($wire => Ok(Self::$variant),)+
                    other => Err(ValidationError::unrecognized(
                        $argument,
                        other,
                        &[$($wire),+],
                    )),
                }
            }
        }
    };
}

wire_enum! {
    /// What a coupon applies to.
    EffectiveOn, "effective_on" {
        /// Specific packages, listed in `packages`.
        Package => "package",
        /// Whole categories, listed in `categories`.
        Category => "category",
        /// The whole basket.
        Cart => "cart",
    }
}

wire_enum! {
    /// How the discount is expressed.
    DiscountType, "discount_type" {
        /// A fixed amount, taken from `discount_amount`.
        Value => "value",
        /// A percentage, taken from `discount_percentage`.
        Percentage => "percentage",
    }
}

wire_enum! {
    /// Which kind of basket a coupon can be used with.
    BasketType, "basket_type" {
        /// One-off purchases.
        Single => "single",
        /// Recurring subscriptions.
        Subscription => "subscription",
        /// Both kinds.
        Both => "both",
    }
}

/// How a discount is applied to a basket. Sent as `0`, `1` or `2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiscountApplicationMethod {
    /// Apply to each package in the basket.
    EachPackage,
    /// Apply to the basket total.
    BasketTotal,
    /// Apply to the most expensive package only.
    MostExpensivePackage,
}

impl DiscountApplicationMethod {
    /// Returns the numeric wire value.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::EachPackage => 0,
            Self::BasketTotal => 1,
            Self::MostExpensivePackage => 2,
        }
    }
}

impl TryFrom<u8> for DiscountApplicationMethod {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::EachPackage),
            1 => Ok(Self::BasketTotal),
            2 => Ok(Self::MostExpensivePackage),
            other => Err(ValidationError::unrecognized(
                "discount_application_method",
                &other.to_string(),
                &["0", "1", "2"],
            )),
        }
    }
}

impl Serialize for DiscountApplicationMethod {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.as_u8())
    }
}

/// Body of `POST /coupons`.
///
/// # Example
///
/// ```rust
/// use tebex_api::{CouponPayload, DiscountType, EffectiveOn};
///
/// let coupon = CouponPayload::builder(EffectiveOn::Cart, DiscountType::Percentage)
///     .discount_percentage(15)
///     .note("Summer sale")
///     .build()
///     .unwrap();
///
/// // An empty code is replaced with a random one.
/// assert_eq!(coupon.code().len(), 10);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CouponPayload {
    code: String,
    effective_on: EffectiveOn,
    packages: Vec<u64>,
    categories: Vec<u64>,
    discount_type: DiscountType,
    discount_amount: f64,
    discount_percentage: u32,
    redeem_unlimited: bool,
    expire_never: bool,
    expire_limit: u32,
    expire_date: NaiveDate,
    start_date: NaiveDate,
    basket_type: BasketType,
    minimum: f64,
    discount_application_method: DiscountApplicationMethod,
    username: String,
    note: String,
}

impl CouponPayload {
    /// Creates a new builder with the two choices every coupon needs.
    #[must_use]
    pub fn builder(effective_on: EffectiveOn, discount_type: DiscountType) -> CouponPayloadBuilder {
        CouponPayloadBuilder::new(effective_on, discount_type)
    }

    /// Returns the coupon code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns what the coupon applies to.
    #[must_use]
    pub const fn effective_on(&self) -> EffectiveOn {
        self.effective_on
    }

    /// Returns the discount type.
    #[must_use]
    pub const fn discount_type(&self) -> DiscountType {
        self.discount_type
    }

    /// Returns the basket type.
    #[must_use]
    pub const fn basket_type(&self) -> BasketType {
        self.basket_type
    }

    /// Returns how the discount is applied.
    #[must_use]
    pub const fn discount_application_method(&self) -> DiscountApplicationMethod {
        self.discount_application_method
    }
}

/// Builder for [`CouponPayload`].
///
/// # Defaults
///
/// - `code`: random 10-character code
/// - `redeem_unlimited`, `expire_never`: `true`
/// - `expire_limit`: `0`
/// - `expire_date`: `2050-12-31`, `start_date`: `2021-01-01`
/// - `basket_type`: [`BasketType::Single`]
/// - `minimum`: `0`
/// - `discount_application_method`: [`DiscountApplicationMethod::MostExpensivePackage`]
#[derive(Debug)]
pub struct CouponPayloadBuilder {
    code: String,
    effective_on: EffectiveOn,
    packages: Vec<u64>,
    categories: Vec<u64>,
    discount_type: DiscountType,
    discount_amount: f64,
    discount_percentage: u32,
    redeem_unlimited: bool,
    expire_never: bool,
    expire_limit: u32,
    expire_date: Option<NaiveDate>,
    start_date: Option<NaiveDate>,
    basket_type: BasketType,
    minimum: f64,
    discount_application_method: DiscountApplicationMethod,
    username: String,
    note: String,
}

impl CouponPayloadBuilder {
    fn new(effective_on: EffectiveOn, discount_type: DiscountType) -> Self {
        Self {
            code: String::new(),
            effective_on,
            packages: Vec::new(),
            categories: Vec::new(),
            discount_type,
            discount_amount: 0.0,
            discount_percentage: 0,
            redeem_unlimited: true,
            expire_never: true,
            expire_limit: 0,
            expire_date: None,
            start_date: None,
            basket_type: BasketType::Single,
            minimum: 0.0,
            discount_application_method: DiscountApplicationMethod::MostExpensivePackage,
            username: String::new(),
            note: String::new(),
        }
    }

    /// Sets the coupon code. An empty code is replaced with a random one.
    #[must_use]
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the packages the coupon applies to.
    #[must_use]
    pub fn packages(mut self, packages: Vec<u64>) -> Self {
        self.packages = packages;
        self
    }

    /// Sets the categories the coupon applies to.
    #[must_use]
    pub fn categories(mut self, categories: Vec<u64>) -> Self {
        self.categories = categories;
        self
    }

    /// Sets the fixed discount amount, used with [`DiscountType::Value`].
    #[must_use]
    pub fn discount_amount(mut self, amount: f64) -> Self {
        self.discount_amount = amount;
        self
    }

    /// Sets the discount percentage, used with [`DiscountType::Percentage`].
    #[must_use]
    pub const fn discount_percentage(mut self, percentage: u32) -> Self {
        self.discount_percentage = percentage;
        self
    }

    /// Sets whether the coupon can be redeemed an unlimited number of times.
    #[must_use]
    pub const fn redeem_unlimited(mut self, unlimited: bool) -> Self {
        self.redeem_unlimited = unlimited;
        self
    }

    /// Sets whether the coupon never expires.
    #[must_use]
    pub const fn expire_never(mut self, never: bool) -> Self {
        self.expire_never = never;
        self
    }

    /// Sets the redemption limit, used when `redeem_unlimited` is `false`.
    #[must_use]
    pub const fn expire_limit(mut self, limit: u32) -> Self {
        self.expire_limit = limit;
        self
    }

    /// Sets the expiry date, used when `expire_never` is `false`.
    #[must_use]
    pub const fn expire_date(mut self, date: NaiveDate) -> Self {
        self.expire_date = Some(date);
        self
    }

    /// Sets the first date the coupon can be used.
    #[must_use]
    pub const fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Sets the basket type.
    #[must_use]
    pub const fn basket_type(mut self, basket_type: BasketType) -> Self {
        self.basket_type = basket_type;
        self
    }

    /// Sets the minimum basket value.
    #[must_use]
    pub fn minimum(mut self, minimum: f64) -> Self {
        self.minimum = minimum;
        self
    }

    /// Sets how the discount is applied.
    #[must_use]
    pub const fn discount_application_method(mut self, method: DiscountApplicationMethod) -> Self {
        self.discount_application_method = method;
        self
    }

    /// Restricts the coupon to a single username.
    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the note.
    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Builds the payload, generating a code if none was given.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if a package coupon has no packages, a
    /// category coupon has no categories, a percentage coupon exceeds 100%,
    /// or an amount is not finite.
    pub fn build(self) -> Result<CouponPayload, ValidationError> {
        if self.effective_on == EffectiveOn::Package && self.packages.is_empty() {
            return Err(ValidationError::missing(
                "packages",
                "No packages for a package coupon",
            ));
        }
        if self.effective_on == EffectiveOn::Category && self.categories.is_empty() {
            return Err(ValidationError::missing(
                "categories",
                "No categories for a category coupon",
            ));
        }
        if self.discount_type == DiscountType::Percentage && self.discount_percentage > 100 {
            return Err(ValidationError::unrecognized(
                "discount_percentage",
                &self.discount_percentage.to_string(),
                &["0..=100"],
            ));
        }

        if !self.discount_amount.is_finite() {
            return Err(ValidationError::missing(
                "discount_amount",
                "The discount amount must be a finite number",
            ));
        }
        if !self.minimum.is_finite() {
            return Err(ValidationError::missing(
                "minimum",
                "The minimum basket value must be a finite number",
            ));
        }

        let code = if self.code.trim().is_empty() {
            random_coupon_code()
        } else {
            self.code
        };

        Ok(CouponPayload {
            code,
            effective_on: self.effective_on,
            packages: self.packages,
            categories: self.categories,
            discount_type: self.discount_type,
            discount_amount: self.discount_amount,
            discount_percentage: self.discount_percentage,
            redeem_unlimited: self.redeem_unlimited,
            expire_never: self.expire_never,
            expire_limit: self.expire_limit,
            expire_date: self.expire_date.unwrap_or_else(far_future),
            start_date: self.start_date.unwrap_or_else(default_start_date),
            basket_type: self.basket_type,
            minimum: self.minimum,
            discount_application_method: self.discount_application_method,
            username: self.username,
            note: self.note,
        })
    }
}

fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 1, 1).unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_generated_code_is_alphanumeric() {
        let coupon = CouponPayload::builder(EffectiveOn::Cart, DiscountType::Value)
            .build()
            .unwrap();

        assert_eq!(coupon.code().len(), GENERATED_CODE_LENGTH);
        assert!(coupon.code().chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generated_codes_differ() {
        let first = random_coupon_code();
        let second = random_coupon_code();
        assert_ne!(first, second);
    }

    #[test]
    fn test_explicit_code_is_kept() {
        let coupon = CouponPayload::builder(EffectiveOn::Cart, DiscountType::Value)
            .code("SUMMER24")
            .build()
            .unwrap();
        assert_eq!(coupon.code(), "SUMMER24");
    }

    #[test]
    fn test_serializes_defaults_with_wire_values() {
        let coupon = CouponPayload::builder(EffectiveOn::Package, DiscountType::Percentage)
            .code("ABC")
            .packages(vec![10, 11])
            .discount_percentage(20)
            .build()
            .unwrap();

        assert_eq!(
            serde_json::to_value(&coupon).unwrap(),
            json!({
                "code": "ABC",
                "effective_on": "package",
                "packages": [10, 11],
                "categories": [],
                "discount_type": "percentage",
                "discount_amount": 0.0,
                "discount_percentage": 20,
                "redeem_unlimited": true,
                "expire_never": true,
                "expire_limit": 0,
                "expire_date": "2050-12-31",
                "start_date": "2021-01-01",
                "basket_type": "single",
                "minimum": 0.0,
                "discount_application_method": 2,
                "username": "",
                "note": ""
            })
        );
    }

    #[test]
    fn test_package_coupon_requires_packages() {
        let result = CouponPayload::builder(EffectiveOn::Package, DiscountType::Value).build();
        assert_eq!(result.unwrap_err().argument, "packages");
    }

    #[test]
    fn test_category_coupon_requires_categories() {
        let result = CouponPayload::builder(EffectiveOn::Category, DiscountType::Value).build();
        assert_eq!(result.unwrap_err().argument, "categories");
    }

    #[test]
    fn test_percentage_above_hundred_is_rejected() {
        let result = CouponPayload::builder(EffectiveOn::Cart, DiscountType::Percentage)
            .discount_percentage(150)
            .build();
        assert_eq!(result.unwrap_err().argument, "discount_percentage");
    }

    #[test]
    fn test_percentage_is_ignored_for_value_coupons() {
        let coupon = CouponPayload::builder(EffectiveOn::Cart, DiscountType::Value)
            .discount_amount(5.0)
            .discount_percentage(150)
            .build();
        assert!(coupon.is_ok());
    }

    #[test]
    fn test_non_finite_amounts_are_rejected() {
        let amount = CouponPayload::builder(EffectiveOn::Cart, DiscountType::Value)
            .discount_amount(f64::NAN)
            .build();
        assert_eq!(amount.unwrap_err().argument, "discount_amount");

        let minimum = CouponPayload::builder(EffectiveOn::Cart, DiscountType::Value)
            .minimum(f64::INFINITY)
            .build();
        assert_eq!(minimum.unwrap_err().argument, "minimum");
    }

    #[test]
    fn test_enums_parse_and_reject() {
        assert_eq!("cart".parse::<EffectiveOn>(), Ok(EffectiveOn::Cart));
        assert_eq!("value".parse::<DiscountType>(), Ok(DiscountType::Value));
        assert_eq!("both".parse::<BasketType>(), Ok(BasketType::Both));
        assert_eq!(
            "subscription".parse::<BasketType>().map(BasketType::as_str),
            Ok("subscription")
        );

        let error = "store".parse::<EffectiveOn>().unwrap_err();
        assert_eq!(error.argument, "effective_on");
        assert!("".parse::<DiscountType>().is_err());
    }

    #[test]
    fn test_discount_application_method_from_number() {
        assert_eq!(
            DiscountApplicationMethod::try_from(0),
            Ok(DiscountApplicationMethod::EachPackage)
        );
        assert_eq!(DiscountApplicationMethod::BasketTotal.as_u8(), 1);
        assert!(DiscountApplicationMethod::try_from(3).is_err());
    }
}
